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

//! Branch instructions
//!
//! Two branching disciplines coexist in Release 6. The classic forms
//! (BEQ, BNE, BLEZ, BGTZ, REGIMM) schedule a delayed branch: the
//! following instruction executes before control transfers. The compact
//! forms decoded out of the POP opcode groups write the PC directly with
//! no delay slot.
//!
//! The branch target is always relative to the PC of the instruction
//! after the branch, which the step driver has already committed when a
//! handler runs.

use super::super::instruction::{Instruction, PopOp, RegimmOp};
use super::super::{Cpu, ExceptionCause, ExecResult};

impl Cpu {
    /// Target of a 16-bit-offset branch relative to the committed PC
    #[inline(always)]
    fn branch_target(&self, instruction: Instruction) -> u32 {
        self.pc().wrapping_add(instruction.imm_se().wrapping_mul(4))
    }

    /// Take a compact branch when `condition` holds
    fn compact_branch(&mut self, condition: bool, target: u32) -> ExecResult {
        if condition {
            self.set_pc(target);
        }
        Ok(())
    }

    /// Take a compact branch and link when `condition` holds
    ///
    /// The return address (the PC after the branch word) goes to ra.
    fn compact_branch_link(&mut self, condition: bool, target: u32) -> ExecResult {
        if condition {
            self.set_reg(31, self.pc());
            self.set_pc(target);
        }
        Ok(())
    }

    /// Take a delayed branch when `condition` holds
    fn conditional_branch(&mut self, condition: bool, target: u32) -> ExecResult {
        if condition {
            self.delayed_branch(target);
        }
        Ok(())
    }

    // === Classic delayed branches ===

    /// BEQ: Branch on Equal
    ///
    /// Format: beq rs, rt, offset
    /// Operation: if (rs == rt) delayed branch to PC + offset*4
    pub(in crate::core::cpu) fn op_beq(&mut self, instruction: Instruction) -> ExecResult {
        let taken = self.reg(instruction.rs()) == self.reg(instruction.rt());
        let target = self.branch_target(instruction);
        self.conditional_branch(taken, target)
    }

    /// BNE: Branch on Not Equal
    ///
    /// Format: bne rs, rt, offset
    /// Operation: if (rs != rt) delayed branch to PC + offset*4
    pub(in crate::core::cpu) fn op_bne(&mut self, instruction: Instruction) -> ExecResult {
        let taken = self.reg(instruction.rs()) != self.reg(instruction.rt());
        let target = self.branch_target(instruction);
        self.conditional_branch(taken, target)
    }

    /// Handle REGIMM instructions (opcode 0x01)
    ///
    /// The rt field selects the predicate on rs.
    pub(in crate::core::cpu) fn execute_regimm(&mut self, instruction: Instruction) -> ExecResult {
        let op = RegimmOp::from_bits(instruction.rt())
            .ok_or(ExceptionCause::ReservedInstruction)?;

        let value = self.reg_signed(instruction.rs());
        let target = self.branch_target(instruction);

        match op {
            RegimmOp::Bgez => self.conditional_branch(value >= 0, target),
            RegimmOp::Bltz => self.conditional_branch(value < 0, target),
        }
    }

    // === POP opcode groups ===

    /// Handle the POP opcode groups (compact branches and the residual
    /// delayed forms)
    ///
    /// The decoder resolves the register-field overloading to a single
    /// [`PopOp`]; this dispatch has one arm per Release 6 mnemonic.
    pub(in crate::core::cpu) fn execute_pop(&mut self, instruction: Instruction) -> ExecResult {
        let op = instruction
            .pop_op()
            .ok_or(ExceptionCause::ReservedInstruction)?;

        let rs = self.reg(instruction.rs());
        let rt = self.reg(instruction.rt());
        let target = self.branch_target(instruction);

        match op {
            // POP06: the rt = 0 form keeps its delay slot
            PopOp::Blez => self.conditional_branch((rs as i32) <= 0, target),
            PopOp::Blezalc => self.compact_branch_link((rt as i32) <= 0, target),
            PopOp::Bgezalc => self.compact_branch_link((rt as i32) >= 0, target),
            PopOp::Bgeuc => self.compact_branch(rs >= rt, target),

            // POP07
            PopOp::Bgtz => self.conditional_branch((rs as i32) > 0, target),
            PopOp::Bgtzalc => self.compact_branch_link((rt as i32) > 0, target),
            PopOp::Bltzalc => self.compact_branch_link((rt as i32) < 0, target),
            PopOp::Bltuc => self.compact_branch(rs < rt, target),

            // POP10 / POP30
            PopOp::Beqzalc => self.compact_branch_link(rt == 0, target),
            PopOp::Beqc => self.compact_branch(rs == rt, target),
            PopOp::Bovc => self.compact_branch(add_overflows(rs, rt), target),
            PopOp::Bnezalc => self.compact_branch_link(rt != 0, target),
            PopOp::Bnec => self.compact_branch(rs != rt, target),
            PopOp::Bnvc => self.compact_branch(!add_overflows(rs, rt), target),

            // POP26 / POP27
            PopOp::Blezc => self.compact_branch((rt as i32) <= 0, target),
            PopOp::Bgezc => self.compact_branch((rt as i32) >= 0, target),
            PopOp::Bgec => self.compact_branch((rs as i32) >= (rt as i32), target),
            PopOp::Bgtzc => self.compact_branch((rt as i32) > 0, target),
            PopOp::Bltzc => self.compact_branch((rt as i32) < 0, target),
            PopOp::Bltc => self.compact_branch((rs as i32) < (rt as i32), target),

            // POP66 / POP76: the rs = 0 forms are indexed jumps, the
            // rest compare rs against zero with a 21-bit offset
            PopOp::Jic => self.op_jic(instruction),
            PopOp::Jialc => self.op_jialc(instruction),
            PopOp::Beqzc => {
                let target = self
                    .pc()
                    .wrapping_add(instruction.long_imm_se().wrapping_mul(4));
                self.compact_branch(rs == 0, target)
            }
            PopOp::Bnezc => {
                let target = self
                    .pc()
                    .wrapping_add(instruction.long_imm_se().wrapping_mul(4));
                self.compact_branch(rs != 0, target)
            }
        }
    }
}

/// Signed 32-bit overflow of `a + b` (the BOVC/BNVC predicate)
#[inline(always)]
fn add_overflows(a: u32, b: u32) -> bool {
    (a as i32).checked_add(b as i32).is_none()
}
