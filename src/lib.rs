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

//! MIPS32 Release 6 emulator core library
//!
//! This library provides the instruction-execution core of a MIPS32r6
//! emulator: instruction decoding, an architectural register file with
//! branch-delay-slot handling, and per-instruction execution semantics.
//!
//! # Example
//!
//! ```
//! use ember_core::core::cpu::Cpu;
//! use ember_core::core::memory::LinearMemory;
//!
//! let mut cpu = Cpu::new();
//! let mut memory = LinearMemory::new();
//!
//! // Execute one instruction (a NOP at address 0)
//! assert!(cpu.step(&mut memory));
//! assert_eq!(cpu.pc(), 4);
//! ```

pub mod core;
