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
    // === Store Instructions ===

    /// SB: Store Byte
    ///
    /// Format: sb rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[7:0]
    pub(in crate::core::cpu) fn op_sb<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let address = self.reg(instruction.rs()).wrapping_add(instruction.imm_se());
        memory.store::<u8>(address, self.reg(instruction.rt()) as u8)?;
        Ok(())
    }

    /// SH: Store Halfword
    ///
    /// Format: sh rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt[15:0]
    pub(in crate::core::cpu) fn op_sh<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let address = self.reg(instruction.rs()).wrapping_add(instruction.imm_se());
        memory.store::<u16>(address, self.reg(instruction.rt()) as u16)?;
        Ok(())
    }

    /// SW: Store Word
    ///
    /// Format: sw rt, offset(rs)
    /// Operation: memory[rs + sign_extend(offset)] = rt
    pub(in crate::core::cpu) fn op_sw<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let address = self.reg(instruction.rs()).wrapping_add(instruction.imm_se());
        memory.store::<u32>(address, self.reg(instruction.rt()))?;
        Ok(())
    }
}
