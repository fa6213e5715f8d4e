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

//! SPECIAL3 bit manipulation instructions (BSHFL, EXT, INS)

use super::super::instruction::{BshflFunc, Instruction};
use super::super::{Cpu, ExceptionCause, ExecResult};

impl Cpu {
    /// Handle the BSHFL group (byte/bit shuffles and sign extensions)
    pub(in crate::core::cpu) fn execute_bshfl(&mut self, instruction: Instruction) -> ExecResult {
        let func = BshflFunc::from_bits(instruction.bshfl_func())
            .ok_or(ExceptionCause::ReservedInstruction)?;

        let rt = self.reg(instruction.rt());
        let rd = instruction.rd();

        match func {
            // BITSWAP: reverse the bit order within each byte of rt
            BshflFunc::Bitswap => {
                let mut bytes = rt.to_le_bytes();
                for byte in &mut bytes {
                    *byte = byte.reverse_bits();
                }
                self.set_reg(rd, u32::from_le_bytes(bytes));
            }

            // WSBH: swap the two bytes within each halfword of rt
            BshflFunc::Wsbh => {
                let result = ((rt & 0x00FF_00FF) << 8) | ((rt & 0xFF00_FF00) >> 8);
                self.set_reg(rd, result);
            }

            // ALIGN: concatenate rs:rt and extract four contiguous bytes
            // at byte position bp (the low two bits of the sub-function)
            BshflFunc::Align0 | BshflFunc::Align1 | BshflFunc::Align2 | BshflFunc::Align3 => {
                let bp = (instruction.bshfl_func() & 0x3) as u32;
                let rs = self.reg(instruction.rs());

                // bp = 0 is a plain register move; rs >> 32 must not run
                let result = if bp == 0 {
                    rt
                } else {
                    (rt << (8 * bp)) | (rs >> (8 * (4 - bp)))
                };
                self.set_reg(rd, result);
            }

            // SEB: sign-extend from bit 7
            BshflFunc::Seb => {
                self.set_reg_signed(rd, rt as u8 as i8 as i32);
            }

            // SEH: sign-extend from bit 15
            BshflFunc::Seh => {
                self.set_reg_signed(rd, rt as u16 as i16 as i32);
            }
        }

        Ok(())
    }

    /// EXT: Extract Bit Field
    ///
    /// Extracts `msbd + 1` bits of rs starting at `lsb` and zero-extends
    /// them into rt. With 5-bit fields the only representable invalid
    /// shape is a field running past bit 31, which faults.
    ///
    /// Format: ext rt, rs, lsb, msbd+1
    /// Operation: rt = (rs >> lsb) & ((1 << size) - 1)
    pub(in crate::core::cpu) fn op_ext(&mut self, instruction: Instruction) -> ExecResult {
        let size = instruction.msbd() as u32 + 1;
        let lsb = instruction.lsb() as u32;

        if lsb + size > 32 {
            return Err(ExceptionCause::ReservedInstruction);
        }

        let mask = if size == 32 { !0 } else { (1u32 << size) - 1 };
        let bitfield = (self.reg(instruction.rs()) >> lsb) & mask;
        self.set_reg(instruction.rt(), bitfield);

        Ok(())
    }

    /// INS: Insert Bit Field
    ///
    /// Replaces bits `lsb..=msb` of rt with the low bits of rs. An msb
    /// below lsb describes an empty field and faults.
    ///
    /// Format: ins rt, rs, lsb, msb-lsb+1
    /// Operation: rt[msb..lsb] = rs[msb-lsb..0]
    pub(in crate::core::cpu) fn op_ins(&mut self, instruction: Instruction) -> ExecResult {
        let msb = instruction.msbd() as u32;
        let lsb = instruction.lsb() as u32;

        if msb < lsb {
            return Err(ExceptionCause::ReservedInstruction);
        }
        let size = msb - lsb + 1;

        let mask = if size == 32 { !0 } else { (1u32 << size) - 1 };
        let bitfield = self.reg(instruction.rs()) & mask;

        let hole = !(mask << lsb);
        let result = (self.reg(instruction.rt()) & hole) | (bitfield << lsb);
        self.set_reg(instruction.rt(), result);

        Ok(())
    }
}
