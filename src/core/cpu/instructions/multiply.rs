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

//! Release 6 multiply/divide family
//!
//! R6 retired the HI/LO registers; SOP30-SOP33 deliver either half of a
//! multiplication or either part of a division straight into rd, with
//! the shamt field selecting the half (2 = low/quotient, 3 =
//! high/remainder). Any other shamt value is a reserved encoding.

use super::super::{Cpu, ExceptionCause, ExecResult};

/// Selects between the two operations packed into one SOP encoding
fn sop_select(shamt: u8, low: u32, high: u32) -> Result<u32, ExceptionCause> {
    match shamt {
        2 => Ok(low),
        3 => Ok(high),
        _ => Err(ExceptionCause::ReservedInstruction),
    }
}

impl Cpu {
    /// SOP30: MUL / MUH (signed multiply, low or high word)
    ///
    /// The product is formed at 64 bits so the high word is exact; a
    /// 32-bit multiply would corrupt MUH.
    ///
    /// Format: mul rd, rs, rt / muh rd, rs, rt
    /// Operation: rd = (rs * rt)[31:0] or (rs * rt)[63:32]
    pub(in crate::core::cpu) fn op_sop30(
        &mut self,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    ) -> ExecResult {
        let a = self.reg_signed(rs);
        let b = self.reg_signed(rt);
        let wide = a as i64 * b as i64;

        let result = sop_select(shamt, a.wrapping_mul(b) as u32, (wide >> 32) as u32)?;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SOP31: MULU / MUHU (unsigned multiply, low or high word)
    ///
    /// Format: mulu rd, rs, rt / muhu rd, rs, rt
    /// Operation: rd = (rs * rt)[31:0] or (rs * rt)[63:32]
    pub(in crate::core::cpu) fn op_sop31(
        &mut self,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    ) -> ExecResult {
        let a = self.reg(rs);
        let b = self.reg(rt);
        let wide = a as u64 * b as u64;

        let result = sop_select(shamt, a.wrapping_mul(b), (wide >> 32) as u32)?;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SOP32: DIV / MOD (signed divide, quotient or remainder)
    ///
    /// A zero divisor faults and leaves rd untouched. `i32::MIN / -1`
    /// wraps rather than trapping; the architecture leaves that quotient
    /// unpredictable.
    ///
    /// Format: div rd, rs, rt / mod rd, rs, rt
    /// Operation: rd = rs / rt or rs % rt
    pub(in crate::core::cpu) fn op_sop32(
        &mut self,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    ) -> ExecResult {
        let a = self.reg_signed(rs);
        let b = self.reg_signed(rt);

        if b == 0 {
            return Err(ExceptionCause::DivisionByZero);
        }

        let result = sop_select(shamt, a.wrapping_div(b) as u32, a.wrapping_rem(b) as u32)?;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SOP33: DIVU / MODU (unsigned divide, quotient or remainder)
    ///
    /// Format: divu rd, rs, rt / modu rd, rs, rt
    /// Operation: rd = rs / rt or rs % rt
    pub(in crate::core::cpu) fn op_sop33(
        &mut self,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    ) -> ExecResult {
        let a = self.reg(rs);
        let b = self.reg(rt);

        if b == 0 {
            return Err(ExceptionCause::DivisionByZero);
        }

        let result = sop_select(shamt, a / b, a % b)?;
        self.set_reg(rd, result);
        Ok(())
    }
}
