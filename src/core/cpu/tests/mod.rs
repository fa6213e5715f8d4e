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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: register file, PC handling, delayed-branch commit
//! - `decode`: classification and golden encodings
//! - `arithmetic`: add/sub/slt families, select, count-leading
//! - `logical`: bitwise register and immediate forms
//! - `shift`: shifts and rotates
//! - `multiply`: SOP30-SOP33 multiply/divide
//! - `branch`: delayed and compact branches, POP groups
//! - `jump`: J/JAL/JR/JALR/BC/BALC
//! - `bitfield`: SPECIAL3 BSHFL/EXT/INS
//! - `memory_ops`: loads and stores
//! - `pcrel`: PC-relative address calculation
//! - `exceptions`: traps, reserved encodings, memory faults
//! - `disassembler`: mnemonic rendering

#[cfg(test)]
mod helpers;



#[cfg(test)]
mod arithmetic;


#[cfg(test)]
mod shift;



#[cfg(test)]
mod jump;
