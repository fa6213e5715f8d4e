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
use crate::core::memory::Memory;

impl Cpu {
    // === Load Instructions ===

    /// Effective address of a load/store: rs + sign_extend(offset)
    #[inline(always)]
    fn effective_address(&self, instruction: Instruction) -> u32 {
        self.reg(instruction.rs()).wrapping_add(instruction.imm_se())
    }

    /// LB: Load Byte (sign-extended)
    ///
    /// Format: lb rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    pub(in crate::core::cpu) fn op_lb<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let value = memory.read::<i8>(self.effective_address(instruction))?;
        self.set_reg_signed(instruction.rt(), value as i32);
        Ok(())
    }

    /// LH: Load Halfword (sign-extended)
    ///
    /// Alignment is the memory's responsibility; a misaligned address
    /// comes back as an error and faults the step.
    ///
    /// Format: lh rt, offset(rs)
    /// Operation: rt = sign_extend(memory[rs + sign_extend(offset)])
    pub(in crate::core::cpu) fn op_lh<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let value = memory.read::<i16>(self.effective_address(instruction))?;
        self.set_reg_signed(instruction.rt(), value as i32);
        Ok(())
    }

    /// LW: Load Word
    ///
    /// Format: lw rt, offset(rs)
    /// Operation: rt = memory[rs + sign_extend(offset)]
    pub(in crate::core::cpu) fn op_lw<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let value = memory.read::<i32>(self.effective_address(instruction))?;
        self.set_reg_signed(instruction.rt(), value);
        Ok(())
    }

    /// LBU: Load Byte Unsigned (zero-extended)
    ///
    /// Format: lbu rt, offset(rs)
    /// Operation: rt = zero_extend(memory[rs + sign_extend(offset)])
    pub(in crate::core::cpu) fn op_lbu<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let value = memory.read::<u8>(self.effective_address(instruction))?;
        self.set_reg(instruction.rt(), value as u32);
        Ok(())
    }

    /// LHU: Load Halfword Unsigned (zero-extended)
    ///
    /// Format: lhu rt, offset(rs)
    /// Operation: rt = zero_extend(memory[rs + sign_extend(offset)])
    pub(in crate::core::cpu) fn op_lhu<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let value = memory.read::<u16>(self.effective_address(instruction))?;
        self.set_reg(instruction.rt(), value as u32);
        Ok(())
    }
}
