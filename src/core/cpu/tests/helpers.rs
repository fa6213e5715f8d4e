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

//! Shared CPU test helpers

use crate::core::cpu::{Cpu, Instruction};
use crate::core::memory::{LinearMemory, Memory};

/// A fresh CPU with a 64KB memory
pub fn machine() -> (Cpu, LinearMemory) {
    (Cpu::new(), LinearMemory::with_size(64 * 1024))
}

/// Write `instruction` at the current PC and execute one step
pub fn step_one(cpu: &mut Cpu, memory: &mut LinearMemory, instruction: Instruction) -> bool {
    memory
        .store::<u32>(cpu.pc(), instruction.raw)
        .expect("instruction address must be mapped");
    cpu.step(memory)
}

/// Write a program at `base` (one word per address)
pub fn write_program(memory: &mut LinearMemory, base: u32, program: &[Instruction]) {
    for (i, instruction) in program.iter().enumerate() {
        memory
            .store::<u32>(base + (i as u32) * 4, instruction.raw)
            .expect("program must fit in memory");
    }
}
