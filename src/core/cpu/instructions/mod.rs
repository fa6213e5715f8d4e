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

//! CPU instruction implementations
//!
//! This module contains all MIPS32r6 instruction implementations,
//! organized by instruction family for better maintainability. The
//! dispatchers here fan a classified word out to the `op_*` handlers;
//! each handler reports a fault through its `Result` instead of
//! panicking.

use super::instruction::{Function, Instruction, Opcode, Type};
use super::{Cpu, ExceptionCause, ExecResult};
use crate::core::memory::Memory;

// Instruction modules organized by family
mod arithmetic;
mod bitfield;
mod branch;
mod jump;
mod load;
mod logical;
mod multiply;
mod pcrel;
mod shift;
mod store;
mod trap;

impl Cpu {
    /// Dispatch a classified instruction to its family handler
    ///
    /// FPU encodings are recognized by the classifier but not executed;
    /// they fault so the host can observe the gap.
    pub(super) fn execute_instruction<M: Memory>(
        &mut self,
        instruction: Instruction,
        ty: Type,
        memory: &mut M,
    ) -> ExecResult {
        match ty {
            Type::RType => self.execute_special(instruction),
            Type::IType | Type::LongImmIType => self.execute_itype(instruction, memory),
            Type::JType => self.execute_jtype(instruction),
            Type::RegimmIType => self.execute_regimm(instruction),
            Type::Special3Bshfl => self.execute_bshfl(instruction),
            Type::Special3Ext => self.op_ext(instruction),
            Type::Special3Ins => self.op_ins(instruction),
            Type::PcRelType1 => self.execute_pcrel1(instruction, memory),
            Type::PcRelType2 => self.execute_pcrel2(instruction),
            Type::FpuRType | Type::FpuTType | Type::FpuBType => {
                log::warn!(
                    "FPU instruction 0x{:08X} recognized but not executed",
                    instruction.raw
                );
                Err(ExceptionCause::ReservedInstruction)
            }
        }
    }

    /// Handle SPECIAL instructions (opcode 0x00)
    ///
    /// The func field selects the operation; SOP30-SOP33 further split
    /// on the shamt field inside the multiply/divide handlers.
    fn execute_special(&mut self, instruction: Instruction) -> ExecResult {
        let func = Function::from_bits(instruction.func())
            .ok_or(ExceptionCause::ReservedInstruction)?;

        let rs = instruction.rs();
        let rt = instruction.rt();
        let rd = instruction.rd();
        let shamt = instruction.shamt();

        match func {
            Function::Sll => self.op_sll(rt, rd, shamt),
            Function::Srl => self.op_srl(rs, rt, rd, shamt),
            Function::Sra => self.op_sra(rt, rd, shamt),
            Function::Sllv => self.op_sllv(rs, rt, rd),
            Function::Srlv => self.op_srlv(rs, rt, rd, shamt),
            Function::Srav => self.op_srav(rs, rt, rd),
            Function::Jr => self.op_jr(rs),
            Function::Jalr => self.op_jalr(rs),
            Function::Clz => self.op_clz(rs, rd),
            Function::Clo => self.op_clo(rs, rd),
            Function::Sop30 => self.op_sop30(rs, rt, rd, shamt),
            Function::Sop31 => self.op_sop31(rs, rt, rd, shamt),
            Function::Sop32 => self.op_sop32(rs, rt, rd, shamt),
            Function::Sop33 => self.op_sop33(rs, rt, rd, shamt),
            Function::Add => self.op_add(rs, rt, rd),
            Function::Addu => self.op_addu(rs, rt, rd),
            Function::Sub => self.op_sub(rs, rt, rd),
            Function::Subu => self.op_subu(rs, rt, rd),
            Function::And => self.op_and(rs, rt, rd),
            Function::Or => self.op_or(rs, rt, rd),
            Function::Xor => self.op_xor(rs, rt, rd),
            Function::Nor => self.op_nor(rs, rt, rd),
            Function::Slt => self.op_slt(rs, rt, rd),
            Function::Sltu => self.op_sltu(rs, rt, rd),
            Function::Tge => self.op_tge(rs, rt),
            Function::Tgeu => self.op_tgeu(rs, rt),
            Function::Tlt => self.op_tlt(rs, rt),
            Function::Tltu => self.op_tltu(rs, rt),
            Function::Teq => self.op_teq(rs, rt),
            Function::Tne => self.op_tne(rs, rt),
            Function::Seleqz => self.op_seleqz(rs, rt, rd),
            Function::Selnez => self.op_selnez(rs, rt, rd),
        }
    }

    /// Handle I-type instructions (arithmetic, branches, loads, stores,
    /// and the POP opcode groups)
    fn execute_itype<M: Memory>(
        &mut self,
        instruction: Instruction,
        memory: &mut M,
    ) -> ExecResult {
        let op =
            Opcode::from_bits(instruction.op()).ok_or(ExceptionCause::ReservedInstruction)?;

        match op {
            Opcode::Beq => self.op_beq(instruction),
            Opcode::Bne => self.op_bne(instruction),
            Opcode::Addiu => self.op_addiu(instruction),
            Opcode::Slti => self.op_slti(instruction),
            Opcode::Sltiu => self.op_sltiu(instruction),
            Opcode::Andi => self.op_andi(instruction),
            Opcode::Ori => self.op_ori(instruction),
            Opcode::Xori => self.op_xori(instruction),
            Opcode::Aui => self.op_aui(instruction),
            Opcode::Lb => self.op_lb(instruction, memory),
            Opcode::Lh => self.op_lh(instruction, memory),
            Opcode::Lw => self.op_lw(instruction, memory),
            Opcode::Lbu => self.op_lbu(instruction, memory),
            Opcode::Lhu => self.op_lhu(instruction, memory),
            Opcode::Sb => self.op_sb(instruction, memory),
            Opcode::Sh => self.op_sh(instruction, memory),
            Opcode::Sw => self.op_sw(instruction, memory),
            Opcode::Pop06
            | Opcode::Pop07
            | Opcode::Pop10
            | Opcode::Pop26
            | Opcode::Pop27
            | Opcode::Pop30
            | Opcode::Pop66
            | Opcode::Pop76 => self.execute_pop(instruction),
            // J-type opcodes are classified away from the I-type path
            _ => Err(ExceptionCause::ReservedInstruction),
        }
    }
}
