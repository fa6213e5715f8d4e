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
    // === Arithmetic Instructions ===

    /// ADD: Add
    ///
    /// Format: add rd, rs, rt
    /// Operation: rd = rs + rt (wrapping)
    pub(in crate::core::cpu) fn op_add(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg_signed(rs).wrapping_add(self.reg_signed(rt));
        self.set_reg_signed(rd, result);
        Ok(())
    }

    /// ADDU: Add Unsigned
    ///
    /// Format: addu rd, rs, rt
    /// Operation: rd = rs + rt (wrapping, modulo 2^32)
    pub(in crate::core::cpu) fn op_addu(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg(rs).wrapping_add(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// SUB: Subtract
    ///
    /// Format: sub rd, rs, rt
    /// Operation: rd = rs - rt (wrapping)
    pub(in crate::core::cpu) fn op_sub(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg_signed(rs).wrapping_sub(self.reg_signed(rt));
        self.set_reg_signed(rd, result);
        Ok(())
    }

    /// SUBU: Subtract Unsigned
    ///
    /// Format: subu rd, rs, rt
    /// Operation: rd = rs - rt (wrapping, modulo 2^32)
    pub(in crate::core::cpu) fn op_subu(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = self.reg(rs).wrapping_sub(self.reg(rt));
        self.set_reg(rd, result);
        Ok(())
    }

    /// SLT: Set on Less Than (signed)
    ///
    /// Format: slt rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(in crate::core::cpu) fn op_slt(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = (self.reg_signed(rs) < self.reg_signed(rt)) as u32;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SLTU: Set on Less Than Unsigned
    ///
    /// Format: sltu rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(in crate::core::cpu) fn op_sltu(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = (self.reg(rs) < self.reg(rt)) as u32;
        self.set_reg(rd, result);
        Ok(())
    }

    /// ADDIU: Add Immediate Unsigned
    ///
    /// Despite the name, the immediate is sign-extended; "unsigned" only
    /// means no overflow trap.
    ///
    /// Format: addiu rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    pub(in crate::core::cpu) fn op_addiu(&mut self, instruction: Instruction) -> ExecResult {
        let result = self.reg(instruction.rs()).wrapping_add(instruction.imm_se());
        self.set_reg(instruction.rt(), result);
        Ok(())
    }

    /// AUI: Add Upper Immediate
    ///
    /// The Release 6 generalization of LUI (`lui rt, imm` encodes as
    /// `aui rt, zero, imm`).
    ///
    /// Format: aui rt, rs, imm
    /// Operation: rt = rs + (imm << 16)
    pub(in crate::core::cpu) fn op_aui(&mut self, instruction: Instruction) -> ExecResult {
        let upper = (instruction.imm() as u32) << 16;
        let result = self.reg(instruction.rs()).wrapping_add(upper);
        self.set_reg(instruction.rt(), result);
        Ok(())
    }

    /// SLTI: Set on Less Than Immediate (signed)
    ///
    /// Format: slti rt, rs, imm
    /// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
    pub(in crate::core::cpu) fn op_slti(&mut self, instruction: Instruction) -> ExecResult {
        let result = (self.reg_signed(instruction.rs()) < instruction.imm_se() as i32) as u32;
        self.set_reg(instruction.rt(), result);
        Ok(())
    }

    /// SLTIU: Set on Less Than Immediate Unsigned
    ///
    /// The immediate is sign-extended, then both operands compare as
    /// unsigned.
    ///
    /// Format: sltiu rt, rs, imm
    /// Operation: rt = (rs < sign_extend(imm)) ? 1 : 0
    pub(in crate::core::cpu) fn op_sltiu(&mut self, instruction: Instruction) -> ExecResult {
        let result = (self.reg(instruction.rs()) < instruction.imm_se()) as u32;
        self.set_reg(instruction.rt(), result);
        Ok(())
    }

    /// SELEQZ: Select on Equal to Zero
    ///
    /// Format: seleqz rd, rs, rt
    /// Operation: rd = (rt == 0) ? rs : 0
    pub(in crate::core::cpu) fn op_seleqz(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = if self.reg(rt) == 0 { self.reg(rs) } else { 0 };
        self.set_reg(rd, result);
        Ok(())
    }

    /// SELNEZ: Select on Not Equal to Zero
    ///
    /// Format: selnez rd, rs, rt
    /// Operation: rd = (rt != 0) ? rs : 0
    pub(in crate::core::cpu) fn op_selnez(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let result = if self.reg(rt) != 0 { self.reg(rs) } else { 0 };
        self.set_reg(rd, result);
        Ok(())
    }

    /// CLZ: Count Leading Zeros
    ///
    /// Format: clz rd, rs
    /// Operation: rd = leading_zeros(rs), so clz(0) == 32
    pub(in crate::core::cpu) fn op_clz(&mut self, rs: u8, rd: u8) -> ExecResult {
        self.set_reg(rd, self.reg(rs).leading_zeros());
        Ok(())
    }

    /// CLO: Count Leading Ones
    ///
    /// Format: clo rd, rs
    /// Operation: rd = leading_ones(rs), so clo(0xFFFFFFFF) == 32
    pub(in crate::core::cpu) fn op_clo(&mut self, rs: u8, rd: u8) -> ExecResult {
        self.set_reg(rd, self.reg(rs).leading_ones());
        Ok(())
    }
}
