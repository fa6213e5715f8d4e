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

use super::super::instruction::{Instruction, Opcode, RegisterName};
use super::super::{Cpu, ExceptionCause, ExecResult};

impl Cpu {
    // === Jump Instructions ===

    /// Handle J-type instructions (J, JAL, BC, BALC)
    ///
    /// J/JAL form the jump-target address by concatenating the upper
    /// four PC bits with the shifted 26-bit field and take the delay
    /// slot. BC/BALC are PC-relative compact branches: the same field is
    /// sign-extended and control transfers immediately.
    pub(in crate::core::cpu) fn execute_jtype(&mut self, instruction: Instruction) -> ExecResult {
        let op =
            Opcode::from_bits(instruction.op()).ok_or(ExceptionCause::ReservedInstruction)?;

        let jta = (instruction.jump_address() << 2) | (self.pc() & 0xF000_0000);

        match op {
            Opcode::J => {
                self.delayed_branch(jta);
                Ok(())
            }
            Opcode::Jal => {
                self.set_reg(RegisterName::Ra.index(), self.pc());
                self.delayed_branch(jta);
                Ok(())
            }
            Opcode::Bc => {
                let target = self
                    .pc()
                    .wrapping_add(instruction.jump_imm_se().wrapping_mul(4));
                self.set_pc(target);
                Ok(())
            }
            Opcode::Balc => {
                self.set_reg(RegisterName::Ra.index(), self.pc());
                let target = self
                    .pc()
                    .wrapping_add(instruction.jump_imm_se().wrapping_mul(4));
                self.set_pc(target);
                Ok(())
            }
            _ => Err(ExceptionCause::ReservedInstruction),
        }
    }

    /// JR: Jump Register
    ///
    /// Format: jr rs
    /// Operation: delayed branch to rs
    pub(in crate::core::cpu) fn op_jr(&mut self, rs: u8) -> ExecResult {
        self.delayed_branch(self.reg(rs));
        Ok(())
    }

    /// JALR: Jump and Link Register
    ///
    /// The return address is the PC following the branch (the delay-slot
    /// address), which the step driver has already committed.
    ///
    /// Format: jalr rs
    /// Operation: ra = PC; delayed branch to rs
    pub(in crate::core::cpu) fn op_jalr(&mut self, rs: u8) -> ExecResult {
        let target = self.reg(rs);
        self.set_reg(RegisterName::Ra.index(), self.pc());
        self.delayed_branch(target);
        Ok(())
    }

    /// JIC: Jump Indexed Compact
    ///
    /// Format: jic rt, offset
    /// Operation: PC = rt + sign_extend(offset)
    pub(in crate::core::cpu) fn op_jic(&mut self, instruction: Instruction) -> ExecResult {
        let target = self
            .reg(instruction.rt())
            .wrapping_add(instruction.imm_se());
        self.set_pc(target);
        Ok(())
    }

    /// JIALC: Jump Indexed and Link Compact
    ///
    /// Format: jialc rt, offset
    /// Operation: ra = PC; PC = rt + sign_extend(offset)
    pub(in crate::core::cpu) fn op_jialc(&mut self, instruction: Instruction) -> ExecResult {
        let target = self
            .reg(instruction.rt())
            .wrapping_add(instruction.imm_se());
        self.set_reg(RegisterName::Ra.index(), self.pc());
        self.set_pc(target);
        Ok(())
    }
}
