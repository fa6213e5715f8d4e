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

/// Emulator error types
use std::fmt;

use crate::core::memory::MemoryError;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Emulator error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmulatorError {
    /// Memory access failed (unmapped, misaligned, or read-only)
    Memory(MemoryError),

    /// I/O error (file operations)
    IoError {
        /// Error message
        message: String,
    },

    /// Program image does not fit in the target memory
    ImageTooLarge {
        /// Load base address
        base: u32,
        /// Image size in bytes
        size: usize,
        /// Memory capacity in bytes
        capacity: usize,
    },

    /// Save state was produced by an incompatible version
    SaveStateVersion {
        /// Version this build understands
        expected: u32,
        /// Version found in the file
        got: u32,
    },

    /// Save state payload could not be encoded or decoded
    SaveStateFormat {
        /// Error message
        message: String,
    },
}

impl fmt::Display for EmulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmulatorError::Memory(err) => write!(f, "Memory error: {}", err),
            EmulatorError::IoError { message } => {
                write!(f, "I/O error: {}", message)
            }
            EmulatorError::ImageTooLarge {
                base,
                size,
                capacity,
            } => {
                write!(
                    f,
                    "Image of {} bytes at base 0x{:08X} exceeds memory capacity of {} bytes",
                    size, base, capacity
                )
            }
            EmulatorError::SaveStateVersion { expected, got } => {
                write!(
                    f,
                    "Incompatible save state version: expected {}, got {}",
                    expected, got
                )
            }
            EmulatorError::SaveStateFormat { message } => {
                write!(f, "Save state format error: {}", message)
            }
        }
    }
}

impl std::error::Error for EmulatorError {}

impl From<std::io::Error> for EmulatorError {
    fn from(err: std::io::Error) -> Self {
        EmulatorError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<MemoryError> for EmulatorError {
    fn from(err: MemoryError) -> Self {
        EmulatorError::Memory(err)
    }
}
