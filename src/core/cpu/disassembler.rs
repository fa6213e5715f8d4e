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

//! MIPS32r6 instruction disassembler for debugging
//!
//! Converts binary instruction encodings to human-readable assembly
//! mnemonics. POP opcode groups are resolved to the real instruction via
//! the same tagged decoder the executor uses.

use super::instruction::{BshflFunc, Function, Instruction, PopOp, RegimmOp, RegisterName, Type};

/// Instruction disassembler
///
/// # Example
/// ```
/// use ember_core::core::cpu::Disassembler;
///
/// let disasm = Disassembler::disassemble(0x00000000, 0);
/// assert_eq!(disasm, "nop");
/// ```
pub struct Disassembler;

/// ABI name of a register field
fn reg(index: u8) -> &'static str {
    RegisterName::ABI_NAMES[(index & 0x1F) as usize]
}

impl Disassembler {
    /// Disassemble a single instruction
    ///
    /// # Arguments
    ///
    /// * `word` - The 32-bit instruction encoding
    /// * `pc` - Address of the instruction (used for jump targets)
    pub fn disassemble(word: u32, pc: u32) -> String {
        let instruction = Instruction::new(word);

        let Some(ty) = instruction.get_type() else {
            return format!(".word 0x{:08X}", word);
        };

        match ty {
            Type::RType => Self::disasm_special(instruction),
            Type::RegimmIType => Self::disasm_regimm(instruction),
            Type::JType => Self::disasm_jtype(instruction, pc),
            Type::IType | Type::LongImmIType => Self::disasm_itype(instruction),
            Type::Special3Bshfl => Self::disasm_bshfl(instruction),
            Type::Special3Ext => format!(
                "ext {}, {}, {}, {}",
                reg(instruction.rt()),
                reg(instruction.rs()),
                instruction.lsb(),
                instruction.msbd() as u32 + 1
            ),
            Type::Special3Ins => format!(
                "ins {}, {}, {}, {}",
                reg(instruction.rt()),
                reg(instruction.rs()),
                instruction.lsb(),
                (instruction.msbd() as i32 - instruction.lsb() as i32) + 1
            ),
            Type::PcRelType1 => match instruction.pcrel1_func() {
                0x0 => format!(
                    "addiupc {}, {}",
                    reg(instruction.rs()),
                    instruction.pcrel1_imm_se() as i32
                ),
                _ => format!(
                    "lwpc {}, {}",
                    reg(instruction.rs()),
                    instruction.pcrel1_imm_se() as i32
                ),
            },
            Type::PcRelType2 => match instruction.pcrel2_func() {
                0b110 => format!(
                    "auipc {}, 0x{:04X}",
                    reg(instruction.rs()),
                    instruction.imm()
                ),
                _ => format!(
                    "aluipc {}, 0x{:04X}",
                    reg(instruction.rs()),
                    instruction.imm()
                ),
            },
            // Recognized but not executed; keep the raw word visible
            Type::FpuRType | Type::FpuTType | Type::FpuBType => {
                format!("cop1 0x{:08X}", word)
            }
        }
    }

    fn disasm_special(instruction: Instruction) -> String {
        let rs = instruction.rs();
        let rt = instruction.rt();
        let rd = instruction.rd();
        let shamt = instruction.shamt();

        let Some(func) = Function::from_bits(instruction.func()) else {
            return format!(".word 0x{:08X}", instruction.raw);
        };

        match func {
            Function::Sll if instruction.raw == 0 => "nop".to_string(),
            Function::Sll => format!("sll {}, {}, {}", reg(rd), reg(rt), shamt),
            Function::Srl if rs & 1 != 0 => {
                format!("rotr {}, {}, {}", reg(rd), reg(rt), shamt)
            }
            Function::Srl => format!("srl {}, {}, {}", reg(rd), reg(rt), shamt),
            Function::Sra => format!("sra {}, {}, {}", reg(rd), reg(rt), shamt),
            Function::Sllv => format!("sllv {}, {}, {}", reg(rd), reg(rt), reg(rs)),
            Function::Srlv if shamt & 1 != 0 => {
                format!("rotrv {}, {}, {}", reg(rd), reg(rt), reg(rs))
            }
            Function::Srlv => format!("srlv {}, {}, {}", reg(rd), reg(rt), reg(rs)),
            Function::Srav => format!("srav {}, {}, {}", reg(rd), reg(rt), reg(rs)),
            Function::Jr => format!("jr {}", reg(rs)),
            Function::Jalr => format!("jalr {}", reg(rs)),
            Function::Clz => format!("clz {}, {}", reg(rd), reg(rs)),
            Function::Clo => format!("clo {}, {}", reg(rd), reg(rs)),
            Function::Sop30 => Self::disasm_sop(instruction, "mul", "muh"),
            Function::Sop31 => Self::disasm_sop(instruction, "mulu", "muhu"),
            Function::Sop32 => Self::disasm_sop(instruction, "div", "mod"),
            Function::Sop33 => Self::disasm_sop(instruction, "divu", "modu"),
            Function::Add => format!("add {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Addu => format!("addu {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Sub => format!("sub {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Subu => format!("subu {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::And => format!("and {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Or => format!("or {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Xor => format!("xor {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Nor => format!("nor {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Slt => format!("slt {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Sltu => format!("sltu {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Tge => format!("tge {}, {}", reg(rs), reg(rt)),
            Function::Tgeu => format!("tgeu {}, {}", reg(rs), reg(rt)),
            Function::Tlt => format!("tlt {}, {}", reg(rs), reg(rt)),
            Function::Tltu => format!("tltu {}, {}", reg(rs), reg(rt)),
            Function::Teq => format!("teq {}, {}", reg(rs), reg(rt)),
            Function::Tne => format!("tne {}, {}", reg(rs), reg(rt)),
            Function::Seleqz => format!("seleqz {}, {}, {}", reg(rd), reg(rs), reg(rt)),
            Function::Selnez => format!("selnez {}, {}, {}", reg(rd), reg(rs), reg(rt)),
        }
    }

    /// A SOP encoding names two instructions; shamt picks one
    fn disasm_sop(instruction: Instruction, low: &str, high: &str) -> String {
        let mnemonic = match instruction.shamt() {
            2 => low,
            3 => high,
            _ => return format!(".word 0x{:08X}", instruction.raw),
        };
        format!(
            "{} {}, {}, {}",
            mnemonic,
            reg(instruction.rd()),
            reg(instruction.rs()),
            reg(instruction.rt())
        )
    }

    fn disasm_regimm(instruction: Instruction) -> String {
        let offset = instruction.imm() as i16;
        match RegimmOp::from_bits(instruction.rt()) {
            Some(RegimmOp::Bgez) => format!("bgez {}, {}", reg(instruction.rs()), offset),
            Some(RegimmOp::Bltz) => format!("bltz {}, {}", reg(instruction.rs()), offset),
            None => format!(".word 0x{:08X}", instruction.raw),
        }
    }

    fn disasm_jtype(instruction: Instruction, pc: u32) -> String {
        let jta = (instruction.jump_address() << 2) | (pc & 0xF000_0000);
        let offset = instruction.jump_imm_se() as i32;
        match instruction.op() {
            0x02 => format!("j 0x{:08X}", jta),
            0x03 => format!("jal 0x{:08X}", jta),
            0x32 => format!("bc {}", offset),
            _ => format!("balc {}", offset),
        }
    }

    fn disasm_bshfl(instruction: Instruction) -> String {
        let rd = reg(instruction.rd());
        let rt = reg(instruction.rt());
        match BshflFunc::from_bits(instruction.bshfl_func()) {
            Some(BshflFunc::Bitswap) => format!("bitswap {}, {}", rd, rt),
            Some(BshflFunc::Wsbh) => format!("wsbh {}, {}", rd, rt),
            Some(BshflFunc::Align0)
            | Some(BshflFunc::Align1)
            | Some(BshflFunc::Align2)
            | Some(BshflFunc::Align3) => format!(
                "align {}, {}, {}, {}",
                rd,
                reg(instruction.rs()),
                rt,
                instruction.bshfl_func() & 0x3
            ),
            Some(BshflFunc::Seb) => format!("seb {}, {}", rd, rt),
            Some(BshflFunc::Seh) => format!("seh {}, {}", rd, rt),
            None => format!(".word 0x{:08X}", instruction.raw),
        }
    }

    fn disasm_itype(instruction: Instruction) -> String {
        let rs = reg(instruction.rs());
        let rt = reg(instruction.rt());
        let imm = instruction.imm();
        let offset = imm as i16;

        // POP groups first: their operands depend on the resolved form
        if let Some(pop) = instruction.pop_op() {
            return Self::disasm_pop(instruction, pop);
        }

        match instruction.op() {
            0x04 => format!("beq {}, {}, {}", rs, rt, offset),
            0x05 => format!("bne {}, {}, {}", rs, rt, offset),
            0x09 => format!("addiu {}, {}, {}", rt, rs, offset),
            0x0A => format!("slti {}, {}, {}", rt, rs, offset),
            0x0B => format!("sltiu {}, {}, {}", rt, rs, offset),
            0x0C => format!("andi {}, {}, 0x{:04X}", rt, rs, imm),
            0x0D => format!("ori {}, {}, 0x{:04X}", rt, rs, imm),
            0x0E => format!("xori {}, {}, 0x{:04X}", rt, rs, imm),
            0x0F => format!("aui {}, {}, 0x{:04X}", rt, rs, imm),
            0x20 => format!("lb {}, {}({})", rt, offset, rs),
            0x21 => format!("lh {}, {}({})", rt, offset, rs),
            0x23 => format!("lw {}, {}({})", rt, offset, rs),
            0x24 => format!("lbu {}, {}({})", rt, offset, rs),
            0x25 => format!("lhu {}, {}({})", rt, offset, rs),
            0x28 => format!("sb {}, {}({})", rt, offset, rs),
            0x29 => format!("sh {}, {}({})", rt, offset, rs),
            0x2B => format!("sw {}, {}({})", rt, offset, rs),
            _ => format!(".word 0x{:08X}", instruction.raw),
        }
    }

    fn disasm_pop(instruction: Instruction, pop: PopOp) -> String {
        let rs = reg(instruction.rs());
        let rt = reg(instruction.rt());
        let offset = instruction.imm() as i16;
        let long_offset = instruction.long_imm_se() as i32;

        match pop {
            PopOp::Blez => format!("blez {}, {}", rs, offset),
            PopOp::Bgtz => format!("bgtz {}, {}", rs, offset),
            PopOp::Blezalc => format!("blezalc {}, {}", rt, offset),
            PopOp::Bgezalc => format!("bgezalc {}, {}", rt, offset),
            PopOp::Bgtzalc => format!("bgtzalc {}, {}", rt, offset),
            PopOp::Bltzalc => format!("bltzalc {}, {}", rt, offset),
            PopOp::Beqzalc => format!("beqzalc {}, {}", rt, offset),
            PopOp::Bnezalc => format!("bnezalc {}, {}", rt, offset),
            PopOp::Bgeuc => format!("bgeuc {}, {}, {}", rs, rt, offset),
            PopOp::Bltuc => format!("bltuc {}, {}, {}", rs, rt, offset),
            PopOp::Beqc => format!("beqc {}, {}, {}", rs, rt, offset),
            PopOp::Bnec => format!("bnec {}, {}, {}", rs, rt, offset),
            PopOp::Bovc => format!("bovc {}, {}, {}", rs, rt, offset),
            PopOp::Bnvc => format!("bnvc {}, {}, {}", rs, rt, offset),
            PopOp::Blezc => format!("blezc {}, {}", rt, offset),
            PopOp::Bgezc => format!("bgezc {}, {}", rt, offset),
            PopOp::Bgtzc => format!("bgtzc {}, {}", rt, offset),
            PopOp::Bltzc => format!("bltzc {}, {}", rt, offset),
            PopOp::Bgec => format!("bgec {}, {}, {}", rs, rt, offset),
            PopOp::Bltc => format!("bltc {}, {}, {}", rs, rt, offset),
            PopOp::Jic => format!("jic {}, {}", rt, offset),
            PopOp::Jialc => format!("jialc {}, {}", rt, offset),
            PopOp::Beqzc => format!("beqzc {}, {}", rs, long_offset),
            PopOp::Bnezc => format!("bnezc {}, {}", rs, long_offset),
        }
    }
}
