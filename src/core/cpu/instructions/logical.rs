// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 ember-core contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::super::instruction::Instruction;
use super::super::{Cpu, ExecResult};

impl Cpu {
    // === Logical Instructions ===

    /// AND: Bitwise And
    ///
    /// Format: and rd, rs, rt
    /// Operation: rd = rs & rt
    pub(in crate::core::cpu) fn op_and(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg(rs) & self.reg(rt);
        self.set_reg(rd, result);
        Ok(())
    }

    /// OR: Bitwise Or
    ///
    /// Format: or rd, rs, rt
    /// Operation: rd = rs | rt
    pub(in crate::core::cpu) fn op_or(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg(rs) | self.reg(rt);
        self.set_reg(rd, result);
        Ok(())
    }

    /// XOR: Bitwise Exclusive Or
    ///
    /// Format: xor rd, rs, rt
    /// Operation: rd = rs ^ rt
    pub(in crate::core::cpu) fn op_xor(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg(rs) ^ self.reg(rt);
        self.set_reg(rd, result);
        Ok(())
    }

    /// NOR: Bitwise Not-Or
    ///
    /// Format: nor rd, rs, rt
    /// Operation: rd = ~(rs | rt)
    pub(in crate::core::cpu) fn op_nor(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = !(self.reg(rs) | self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// ANDI: And Immediate (zero-extended)
    ///
    /// Format: andi rt, rs, imm
    /// Operation: rt = rs & zero_extend(imm)
    pub(in crate::core::cpu) fn op_andi(&mut self, instruction: Instruction) -> ExecResult {
        let result = self.reg(instruction.rs()) & instruction.imm() as u32;
        self.set_reg(instruction.rt(), result);
        Ok(())
    }

    /// ORI: Or Immediate (zero-extended)
    ///
    /// Format: ori rt, rs, imm
    /// Operation: rt = rs | zero_extend(imm)
    pub(in crate::core::cpu) fn op_ori(&mut self, instruction: Instruction) -> ExecResult {
        let result = self.reg(instruction.rs()) | instruction.imm() as u32;
        self.set_reg(instruction.rt(), result);
        Ok(())
    }

    /// XORI: Exclusive Or Immediate (zero-extended)
    ///
    /// Format: xori rt, rs, imm
    /// Operation: rt = rs ^ zero_extend(imm)
    pub(in crate::core::cpu) fn op_xori(&mut self, instruction: Instruction) -> ExecResult {
        let result = self.reg(instruction.rs()) ^ instruction.imm() as u32;
        self.set_reg(instruction.rt(), result);
        Ok(())
    }
}
