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

//! PC-relative address calculation instructions
//!
//! Like branches, these compute against the committed PC, i.e. the
//! address of the instruction after the PC-relative word.

use super::super::instruction::Instruction;
use super::super::{Cpu, ExceptionCause, ExecResult};
use crate::core::memory::Memory;

impl Cpu {
    /// Handle the 19-bit-offset PC-relative group (ADDIUPC, LWPC)
    pub(in crate::core::cpu) fn execute_pcrel1<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        // Both forms share the address calculation: the 19-bit immediate
        // is shifted up two bits, sign-extended, and added to the PC.
        let address = self
            .pc()
            .wrapping_add(instruction.pcrel1_imm_se().wrapping_mul(4));

        match instruction.pcrel1_func() {
            // ADDIUPC: the computed address itself lands in rs
            0x0 => {
                self.set_reg(instruction.rs(), address);
                Ok(())
            }
            // LWPC: the word at the computed address lands in rs
            0x1 => {
                let value = memory.read::<u32>(address)?;
                self.set_reg(instruction.rs(), value);
                Ok(())
            }
            _ => Err(ExceptionCause::ReservedInstruction),
        }
    }

    /// Handle the 16-bit-offset PC-relative group (AUIPC, ALUIPC)
    pub(in crate::core::cpu) fn execute_pcrel2(&mut self, instruction: Instruction) -> ExecResult {
        let address = self
            .pc()
            .wrapping_add((instruction.imm() as u32) << 16);

        match instruction.pcrel2_func() {
            // AUIPC
            0b110 => {
                self.set_reg(instruction.rs(), address);
                Ok(())
            }
            // ALUIPC: additionally aligned down to a 64K boundary
            0b111 => {
                self.set_reg(instruction.rs(), address & 0xFFFF_0000);
                Ok(())
            }
            _ => Err(ExceptionCause::ReservedInstruction),
        }
    }
}
