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

//! CPU (MIPS32 Release 6) emulation implementation
//!
//! The [`Cpu`] holds the architectural state — 32 general-purpose
//! registers, the program counter, the pending delayed-branch slot, and
//! an exception record — and drives one instruction per [`Cpu::step`]
//! against a borrowed [`Memory`].

use crate::core::memory::{Memory, MemoryError};

pub mod disassembler;
pub mod instruction;
mod instructions;
mod tests;

pub use disassembler::Disassembler;
pub use instruction::{Instruction, RegisterName, Type};

/// Why a step faulted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionCause {
    /// A conditional trap instruction fired
    Trap,
    /// The word could not be classified, or a handler hit a reserved
    /// encoding
    ReservedInstruction,
    /// Misaligned or protected access reported by the memory
    AddressError,
    /// `div`/`mod` (or their unsigned forms) with a zero divisor
    DivisionByZero,
    /// Unmapped access reported by the memory, including a failed fetch
    MemoryError,
}

impl From<MemoryError> for ExceptionCause {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::Unmapped { .. } => ExceptionCause::MemoryError,
            MemoryError::Misaligned { .. } | MemoryError::ReadOnly { .. } => {
                ExceptionCause::AddressError
            }
        }
    }
}

/// Fault record left on the register file by a failed step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exception {
    /// The fault taxonomy entry
    pub cause: ExceptionCause,
    /// Raw encoding of the offending instruction (zero when the fetch
    /// itself failed)
    pub instruction: u32,
}

/// Result type for instruction handlers
///
/// Handlers never panic; a fault is an `Err` that the step driver
/// records on the register file before reporting `false`.
pub(crate) type ExecResult = Result<(), ExceptionCause>;

/// MIPS32r6 processor state
pub struct Cpu {
    /// General purpose registers (r0-r31)
    ///
    /// r0 is hardwired to always return 0
    regs: [u32; 32],

    /// Program counter of the committed instruction
    pc: u32,

    /// Delayed-branch target, committed by the next `update_pc`
    pending_pc: Option<u32>,

    /// Fault left behind by the last failed step
    exception: Option<Exception>,

    /// Current instruction (for diagnostics)
    current_instruction: u32,
}

impl Cpu {
    /// Create a zero-initialized CPU
    ///
    /// All registers and the PC start at zero; the host positions the PC
    /// before running.
    pub fn new() -> Self {
        Self {
            regs: [0u32; 32],
            pc: 0,
            pending_pc: None,
            exception: None,
            current_instruction: 0,
        }
    }

    /// Reset to the zero-initialized state
    pub fn reset(&mut self) {
        self.regs = [0u32; 32];
        self.pc = 0;
        self.pending_pc = None;
        self.exception = None;
        self.current_instruction = 0;
    }

    /// Read a general purpose register
    ///
    /// r0 always reads as 0.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> u32 {
        if index == 0 {
            0
        } else {
            self.regs[index as usize]
        }
    }

    /// Read a general purpose register as a signed value
    #[inline(always)]
    pub fn reg_signed(&self, index: u8) -> i32 {
        self.reg(index) as i32
    }

    /// Write a general purpose register
    ///
    /// Writes to r0 are dropped.
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: u32) {
        if index != 0 {
            self.regs[index as usize] = value;
        }
    }

    /// Write a general purpose register with a signed value
    #[inline(always)]
    pub fn set_reg_signed(&mut self, index: u8, value: i32) {
        self.set_reg(index, value as u32);
    }

    /// Current PC value
    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Reposition the PC
    ///
    /// Compact branches use this during execution; hosts use it to place
    /// the entry point. The pending delayed branch, if any, is untouched.
    #[inline(always)]
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Advance the PC by one instruction
    ///
    /// Commits the pending delayed-branch target if one was scheduled,
    /// otherwise steps to the next sequential word.
    pub fn update_pc(&mut self) {
        self.pc = self
            .pending_pc
            .take()
            .unwrap_or_else(|| self.pc.wrapping_add(4));
    }

    /// Schedule a branch to take effect at the next `update_pc`
    ///
    /// The instruction in the delay slot executes at the sequential PC
    /// before control transfers.
    pub fn delayed_branch(&mut self, target: u32) {
        self.pending_pc = Some(target);
    }

    /// Pending delayed-branch target, if a branch is in flight
    pub fn pending_branch(&self) -> Option<u32> {
        self.pending_pc
    }

    /// Restore the pending delayed-branch slot (save-state support)
    pub fn set_pending_branch(&mut self, target: Option<u32>) {
        self.pending_pc = target;
    }

    /// Record a fault on the register file
    pub fn signal_exception(&mut self, cause: ExceptionCause, instruction: u32) {
        self.exception = Some(Exception { cause, instruction });
    }

    /// Fault left by the last failed step, if any
    pub fn exception(&self) -> Option<Exception> {
        self.exception
    }

    /// Clear and return the recorded fault
    pub fn take_exception(&mut self) -> Option<Exception> {
        self.exception.take()
    }

    /// Snapshot of the register contents (save-state support)
    pub fn registers(&self) -> &[u32; 32] {
        &self.regs
    }

    /// Restore the register contents (save-state support)
    ///
    /// r0 stays hardwired to zero regardless of the snapshot.
    pub fn restore_registers(&mut self, regs: [u32; 32]) {
        self.regs = regs;
        self.regs[0] = 0;
    }

    /// Execute one instruction
    ///
    /// Fetches the word at PC, advances the PC (committing any pending
    /// delayed branch), classifies, and dispatches. Returns `false` on a
    /// fault, in which case [`Cpu::exception`] holds the cause and the
    /// offending encoding.
    ///
    /// # Example
    ///
    /// ```
    /// use ember_core::core::cpu::Cpu;
    /// use ember_core::core::memory::LinearMemory;
    ///
    /// let mut cpu = Cpu::new();
    /// let mut memory = LinearMemory::new();
    ///
    /// assert!(cpu.step(&mut memory));
    /// assert_eq!(cpu.pc(), 4);
    /// ```
    pub fn step<M: Memory>(&mut self, memory: &mut M) -> bool {
        // Instruction fetch
        let fetch_pc = self.pc;
        let word = match memory.read::<u32>(fetch_pc) {
            Ok(word) => word,
            Err(err) => {
                log::warn!("Instruction fetch failed at PC=0x{:08X}: {}", fetch_pc, err);
                self.signal_exception(err.into(), 0);
                return false;
            }
        };
        self.current_instruction = word;

        // Update PC (delay slot handling)
        self.update_pc();

        let instruction = Instruction::new(self.current_instruction);
        let result = match instruction.get_type() {
            Some(ty) => self.execute_instruction(instruction, ty, memory),
            None => {
                log::warn!(
                    "Reserved encoding 0x{:08X} at PC=0x{:08X}",
                    word,
                    fetch_pc
                );
                Err(ExceptionCause::ReservedInstruction)
            }
        };

        match result {
            Ok(()) => true,
            Err(cause) => {
                self.signal_exception(cause, word);
                false
            }
        }
    }

    /// Log the full register file at info level
    ///
    /// Used by the CLI when a step faults.
    pub fn dump_registers(&self) {
        for chunk in 0..8 {
            let base = chunk * 4;
            log::info!(
                "{:>4}: 0x{:08X}  {:>4}: 0x{:08X}  {:>4}: 0x{:08X}  {:>4}: 0x{:08X}",
                RegisterName::ABI_NAMES[base],
                self.regs[base],
                RegisterName::ABI_NAMES[base + 1],
                self.regs[base + 1],
                RegisterName::ABI_NAMES[base + 2],
                self.regs[base + 2],
                RegisterName::ABI_NAMES[base + 3],
                self.regs[base + 3],
            );
        }
        log::info!("  pc: 0x{:08X}", self.pc);
        if let Some(exception) = self.exception {
            log::info!(
                "  exception: {:?} (instruction 0x{:08X})",
                exception.cause,
                exception.instruction
            );
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
