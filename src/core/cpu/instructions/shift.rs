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

use super::super::{Cpu, ExecResult};

impl Cpu {
    // === Shift and Rotate Instructions ===

    /// SLL: Shift Left Logical
    ///
    /// Note: SLL with all fields = 0 is NOP.
    ///
    /// Format: sll rd, rt, shamt
    /// Operation: rd = rt << shamt
    pub(in crate::core::cpu) fn op_sll(&mut self, rt: u8, rd: u8, shamt: u8) -> ExecResult {
        let result = self.reg(rt) << shamt;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SRL/ROTR: Shift Right Logical or Rotate Right
    ///
    /// Release 6 overlays ROTR on the SRL encoding: bit 0 of the rs
    /// field selects rotation. `rotate_right` is total for every shift
    /// amount including zero.
    ///
    /// Format: srl rd, rt, shamt / rotr rd, rt, shamt
    /// Operation: rd = rt >> shamt (zero-fill), or rt rotated by shamt
    pub(in crate::core::cpu) fn op_srl(&mut self, rs: u8, rt: u8, rd: u8, shamt: u8) -> ExecResult {
        let value = self.reg(rt);
        let result = if rs & 1 != 0 {
            value.rotate_right(shamt as u32)
        } else {
            value >> shamt
        };
        self.set_reg(rd, result);
        Ok(())
    }

    /// SRA: Shift Right Arithmetic (sign-extend)
    ///
    /// Format: sra rd, rt, shamt
    /// Operation: rd = rt >> shamt (sign-extend)
    pub(in crate::core::cpu) fn op_sra(&mut self, rt: u8, rd: u8, shamt: u8) -> ExecResult {
        let result = (self.reg_signed(rt) >> shamt) as u32;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SLLV: Shift Left Logical Variable
    ///
    /// Format: sllv rd, rt, rs
    /// Operation: rd = rt << (rs & 0x1F)
    pub(in crate::core::cpu) fn op_sllv(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let shamt = self.reg(rs) & 0x1F;
        let result = self.reg(rt) << shamt;
        self.set_reg(rd, result);
        Ok(())
    }

    /// SRLV/ROTRV: Shift Right Logical Variable or Rotate Right Variable
    ///
    /// ROTRV is overlaid on the SRLV encoding with bit 0 of the shamt
    /// field set.
    ///
    /// Format: srlv rd, rt, rs / rotrv rd, rt, rs
    /// Operation: rd = rt >> (rs & 0x1F), or rt rotated by (rs & 0x1F)
    pub(in crate::core::cpu) fn op_srlv(
        &mut self,
        rs: u8,
        rt: u8,
        rd: u8,
        shamt: u8,
    ) -> ExecResult {
        let shift = self.reg(rs) & 0x1F;
        let value = self.reg(rt);
        let result = if shamt & 1 != 0 {
            value.rotate_right(shift)
        } else {
            value >> shift
        };
        self.set_reg(rd, result);
        Ok(())
    }

    /// SRAV: Shift Right Arithmetic Variable
    ///
    /// Format: srav rd, rt, rs
    /// Operation: rd = rt >> (rs & 0x1F) (sign-extend)
    pub(in crate::core::cpu) fn op_srav(&mut self, rs: u8, rt: u8, rd: u8) -> ExecResult {
        let shamt = self.reg(rs) & 0x1F;
        let result = (self.reg_signed(rt) >> shamt) as u32;
        self.set_reg(rd, result);
        Ok(())
    }
}
