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

//! Core emulation components
//!
//! This module contains the emulator building blocks:
//! - CPU (MIPS32 Release 6 instruction execution core)
//! - Memory contract and reference linear memory
//! - Flat-image loader
//! - Save states

pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod save_state;

// Re-export commonly used types
pub use cpu::{Cpu, Exception, ExceptionCause};
pub use error::{EmulatorError, Result};
pub use memory::{LinearMemory, Memory, MemoryError};
pub use save_state::SaveState;
