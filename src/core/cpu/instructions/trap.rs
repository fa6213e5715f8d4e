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

//! Conditional trap instructions
//!
//! Each form evaluates a comparison and faults with a trap cause when it
//! holds; an untaken trap is an ordinary successful step.

use super::super::{Cpu, ExceptionCause, ExecResult};

/// Fault with a trap cause when `condition` holds
fn trap_on(condition: bool) -> ExecResult {
    if condition {
        Err(ExceptionCause::Trap)
    } else {
        Ok(())
    }
}

impl Cpu {
    /// TEQ: Trap if Equal
    pub(in crate::core::cpu) fn op_teq(&mut self, rs: u8, rt: u8) -> ExecResult {
        trap_on(self.reg(rs) == self.reg(rt))
    }

    /// TNE: Trap if Not Equal
    pub(in crate::core::cpu) fn op_tne(&mut self, rs: u8, rt: u8) -> ExecResult {
        trap_on(self.reg(rs) != self.reg(rt))
    }

    /// TGE: Trap if Greater or Equal (signed)
    pub(in crate::core::cpu) fn op_tge(&mut self, rs: u8, rt: u8) -> ExecResult {
        trap_on(self.reg_signed(rs) >= self.reg_signed(rt))
    }

    /// TGEU: Trap if Greater or Equal Unsigned
    pub(in crate::core::cpu) fn op_tgeu(&mut self, rs: u8, rt: u8) -> ExecResult {
        trap_on(self.reg(rs) >= self.reg(rt))
    }

    /// TLT: Trap if Less Than (signed)
    pub(in crate::core::cpu) fn op_tlt(&mut self, rs: u8, rt: u8) -> ExecResult {
        trap_on(self.reg_signed(rs) < self.reg_signed(rt))
    }

    /// TLTU: Trap if Less Than Unsigned
    pub(in crate::core::cpu) fn op_tltu(&mut self, rs: u8, rt: u8) -> ExecResult {
        trap_on(self.reg(rs) < self.reg(rt))
    }
}
