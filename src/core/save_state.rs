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

//! Save state serialization
//!
//! Snapshots the full machine state — register file, PC, the in-flight
//! delayed branch, and the memory image — into a bincode-encoded file so
//! a run can be suspended and resumed. A version field guards against
//! loading snapshots from an incompatible build. The exception record is
//! transient step output and is not captured.

use bincode::{config, Decode, Encode};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::cpu::Cpu;
use crate::core::error::{EmulatorError, Result};
use crate::core::memory::LinearMemory;

/// Save state version for compatibility checking
///
/// Incremented whenever the snapshot layout changes incompatibly.
pub const SAVE_STATE_VERSION: u32 = 1;

/// Complete machine snapshot
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct SaveState {
    /// Version number for compatibility checking
    pub version: u32,

    /// Snapshot metadata
    pub metadata: SaveStateMetadata,

    /// CPU state
    pub cpu: CpuState,

    /// Memory image
    pub memory: MemoryState,
}

/// Snapshot metadata
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct SaveStateMetadata {
    /// Creation time as a unix timestamp (UTC seconds)
    pub created_at: i64,
}

/// Architectural CPU state
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct CpuState {
    /// General purpose registers
    pub regs: [u32; 32],
    /// Program counter
    pub pc: u32,
    /// In-flight delayed-branch target
    pub pending_pc: Option<u32>,
}

/// Memory image
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct MemoryState {
    /// Raw little-endian contents
    pub bytes: Vec<u8>,
}

impl SaveState {
    /// Capture a snapshot of the CPU and memory
    pub fn from_parts(cpu: &Cpu, memory: &LinearMemory) -> Self {
        Self {
            version: SAVE_STATE_VERSION,
            metadata: SaveStateMetadata {
                created_at: Utc::now().timestamp(),
            },
            cpu: CpuState {
                regs: *cpu.registers(),
                pc: cpu.pc(),
                pending_pc: cpu.pending_branch(),
            },
            memory: MemoryState {
                bytes: memory.bytes().to_vec(),
            },
        }
    }

    /// Restore the snapshot into the CPU and memory
    ///
    /// The memory must have the capacity the snapshot was taken with.
    pub fn apply(&self, cpu: &mut Cpu, memory: &mut LinearMemory) -> Result<()> {
        if self.version != SAVE_STATE_VERSION {
            return Err(EmulatorError::SaveStateVersion {
                expected: SAVE_STATE_VERSION,
                got: self.version,
            });
        }

        cpu.restore_registers(self.cpu.regs);
        cpu.set_pc(self.cpu.pc);
        cpu.set_pending_branch(self.cpu.pending_pc);
        memory.restore(&self.memory.bytes)?;

        Ok(())
    }

    /// Serialize to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let encoded = bincode::encode_to_vec(self, config::standard()).map_err(|err| {
            EmulatorError::SaveStateFormat {
                message: err.to_string(),
            }
        })?;

        let mut file = File::create(path)?;
        file.write_all(&encoded)?;
        Ok(())
    }

    /// Deserialize from a file
    ///
    /// The version check happens in [`SaveState::apply`], so an
    /// incompatible snapshot can still be inspected.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut encoded = Vec::new();
        file.read_to_end(&mut encoded)?;

        let (state, _) = bincode::decode_from_slice(&encoded, config::standard()).map_err(
            |err| EmulatorError::SaveStateFormat {
                message: err.to_string(),
            },
        )?;
        Ok(state)
    }
}
