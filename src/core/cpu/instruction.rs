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

//! MIPS32r6 instruction word
//!
//! A 32-bit machine word with typed views over its bitfields and a
//! [`Type`] classification derived from the primary opcode plus, for the
//! SPECIAL/SPECIAL3/PC-relative extension spaces, the relevant function
//! subfields. Encoding constructors produce bit-exact canonical MIPS
//! words, so `classify(encode(x))` always yields the type of `x`.

/// MIPS ABI register names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RegisterName {
    Zero = 0,
    At = 1,
    V0 = 2,
    V1 = 3,
    A0 = 4,
    A1 = 5,
    A2 = 6,
    A3 = 7,
    T0 = 8,
    T1 = 9,
    T2 = 10,
    T3 = 11,
    T4 = 12,
    T5 = 13,
    T6 = 14,
    T7 = 15,
    S0 = 16,
    S1 = 17,
    S2 = 18,
    S3 = 19,
    S4 = 20,
    S5 = 21,
    S6 = 22,
    S7 = 23,
    T8 = 24,
    T9 = 25,
    K0 = 26,
    K1 = 27,
    Gp = 28,
    Sp = 29,
    Fp = 30,
    Ra = 31,
}

impl RegisterName {
    /// ABI names indexed by register number
    pub const ABI_NAMES: [&'static str; 32] = [
        "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
        "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
        "fp", "ra",
    ];

    /// Register number (0-31)
    #[inline(always)]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// Instruction type classification
///
/// One variant per logical encoding layout; see the field accessors on
/// [`Instruction`] for the corresponding views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// SPECIAL register-register format
    RType,
    /// Immediate format (arithmetic, branches, loads, stores, POP groups)
    IType,
    /// Immediate format with a 21-bit offset (POP66/POP76)
    LongImmIType,
    /// 26-bit jump/compact-branch format
    JType,
    /// REGIMM format (predicate in the rt field)
    RegimmIType,
    /// COP1 arithmetic format
    FpuRType,
    /// COP1 transfer format
    FpuTType,
    /// COP1 branch format
    FpuBType,
    /// SPECIAL3 byte/bit shuffle group
    Special3Bshfl,
    /// SPECIAL3 bitfield extract
    Special3Ext,
    /// SPECIAL3 bitfield insert
    Special3Ins,
    /// PC-relative group with a 19-bit offset
    PcRelType1,
    /// PC-relative group with a 16-bit offset
    PcRelType2,
}

/// SPECIAL function field values (R-type)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Function {
    Sll = 0x00,
    Srl = 0x02,
    Sra = 0x03,
    Sllv = 0x04,
    Srlv = 0x06,
    Srav = 0x07,
    Jr = 0x08,
    Jalr = 0x09,
    Clz = 0x10,
    Clo = 0x11,
    Sop30 = 0x18,
    Sop31 = 0x19,
    Sop32 = 0x1A,
    Sop33 = 0x1B,
    Add = 0x20,
    Addu = 0x21,
    Sub = 0x22,
    Subu = 0x23,
    And = 0x24,
    Or = 0x25,
    Xor = 0x26,
    Nor = 0x27,
    Slt = 0x2A,
    Sltu = 0x2B,
    Tge = 0x30,
    Tgeu = 0x31,
    Tlt = 0x32,
    Tltu = 0x33,
    Teq = 0x34,
    Seleqz = 0x35,
    Tne = 0x36,
    Selnez = 0x37,
}

impl Function {
    /// Decode a 6-bit function field
    pub fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0x00 => Function::Sll,
            0x02 => Function::Srl,
            0x03 => Function::Sra,
            0x04 => Function::Sllv,
            0x06 => Function::Srlv,
            0x07 => Function::Srav,
            0x08 => Function::Jr,
            0x09 => Function::Jalr,
            0x10 => Function::Clz,
            0x11 => Function::Clo,
            0x18 => Function::Sop30,
            0x19 => Function::Sop31,
            0x1A => Function::Sop32,
            0x1B => Function::Sop33,
            0x20 => Function::Add,
            0x21 => Function::Addu,
            0x22 => Function::Sub,
            0x23 => Function::Subu,
            0x24 => Function::And,
            0x25 => Function::Or,
            0x26 => Function::Xor,
            0x27 => Function::Nor,
            0x2A => Function::Slt,
            0x2B => Function::Sltu,
            0x30 => Function::Tge,
            0x31 => Function::Tgeu,
            0x32 => Function::Tlt,
            0x33 => Function::Tltu,
            0x34 => Function::Teq,
            0x35 => Function::Seleqz,
            0x36 => Function::Tne,
            0x37 => Function::Selnez,
            _ => return None,
        })
    }
}

/// Primary opcode values for I-type and J-type encodings
///
/// POP opcodes keep the Release 6 group names; the instruction they stand
/// for depends on the register fields (see [`Instruction::pop_op`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    J = 0x02,
    Jal = 0x03,
    Beq = 0x04,
    Bne = 0x05,
    Pop06 = 0x06,
    Pop07 = 0x07,
    /// Legacy `addi` slot
    Pop10 = 0x08,
    Addiu = 0x09,
    Slti = 0x0A,
    Sltiu = 0x0B,
    Andi = 0x0C,
    Ori = 0x0D,
    Xori = 0x0E,
    Aui = 0x0F,
    Pop26 = 0x16,
    Pop27 = 0x17,
    Pop30 = 0x18,
    Lb = 0x20,
    Lh = 0x21,
    Lw = 0x23,
    Lbu = 0x24,
    Lhu = 0x25,
    Sb = 0x28,
    Sh = 0x29,
    Sw = 0x2B,
    Bc = 0x32,
    Pop66 = 0x36,
    Balc = 0x3A,
    Pop76 = 0x3E,
}

impl Opcode {
    /// Decode a 6-bit primary opcode field
    pub fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0x02 => Opcode::J,
            0x03 => Opcode::Jal,
            0x04 => Opcode::Beq,
            0x05 => Opcode::Bne,
            0x06 => Opcode::Pop06,
            0x07 => Opcode::Pop07,
            0x08 => Opcode::Pop10,
            0x09 => Opcode::Addiu,
            0x0A => Opcode::Slti,
            0x0B => Opcode::Sltiu,
            0x0C => Opcode::Andi,
            0x0D => Opcode::Ori,
            0x0E => Opcode::Xori,
            0x0F => Opcode::Aui,
            0x16 => Opcode::Pop26,
            0x17 => Opcode::Pop27,
            0x18 => Opcode::Pop30,
            0x20 => Opcode::Lb,
            0x21 => Opcode::Lh,
            0x23 => Opcode::Lw,
            0x24 => Opcode::Lbu,
            0x25 => Opcode::Lhu,
            0x28 => Opcode::Sb,
            0x29 => Opcode::Sh,
            0x2B => Opcode::Sw,
            0x32 => Opcode::Bc,
            0x36 => Opcode::Pop66,
            0x3A => Opcode::Balc,
            0x3E => Opcode::Pop76,
            _ => return None,
        })
    }
}

/// REGIMM sub-operations (rt field)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RegimmOp {
    Bltz = 0x00,
    Bgez = 0x01,
}

impl RegimmOp {
    /// Decode the 5-bit rt field of a REGIMM word
    pub fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0x00 => RegimmOp::Bltz,
            0x01 => RegimmOp::Bgez,
            _ => return None,
        })
    }
}

/// SPECIAL3 BSHFL sub-functions (bits 10:6)
///
/// ALIGN occupies four slots: bits 10:8 select the group and the low two
/// bits carry the byte position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BshflFunc {
    Bitswap = 0x00,
    Wsbh = 0x02,
    Align0 = 0x08,
    Align1 = 0x09,
    Align2 = 0x0A,
    Align3 = 0x0B,
    Seb = 0x10,
    Seh = 0x18,
}

impl BshflFunc {
    /// Decode the 5-bit sub-function field of a BSHFL word
    pub fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            0x00 => BshflFunc::Bitswap,
            0x02 => BshflFunc::Wsbh,
            0x08 => BshflFunc::Align0,
            0x09 => BshflFunc::Align1,
            0x0A => BshflFunc::Align2,
            0x0B => BshflFunc::Align3,
            0x10 => BshflFunc::Seb,
            0x18 => BshflFunc::Seh,
            _ => return None,
        })
    }
}

/// PC-relative sub-operations with a 19-bit offset (bits 20:19)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PcRelFunc1 {
    Addiupc = 0x0,
    Lwpc = 0x1,
}

/// PC-relative sub-operations with a 16-bit offset (bits 18:16)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PcRelFunc2 {
    Auipc = 0b110,
    Aluipc = 0b111,
}

/// COP1 arithmetic format field values (bits 25:21)
///
/// `CMP.condn.s`/`CMP.condn.d` reuse the `Word`/`Long` encodings and are
/// told apart by the function field, which this core does not execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FpuFormat {
    Single = 0x10,
    Double = 0x11,
    Word = 0x14,
    Long = 0x15,
}

/// COP1 transfer sub-operations (bits 25:21)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FpuTransferOp {
    Mf = 0x00,
    Cf = 0x02,
    Mfh = 0x03,
    Mt = 0x04,
    Ct = 0x06,
    Mth = 0x07,
}

/// COP1 branch sub-operations (bits 25:21)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FpuBranchOp {
    Bc1eqz = 0x09,
    Bc1nez = 0x0D,
}

/// COP1 function field values used by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FpuFunc {
    Add = 0x00,
    Abs = 0x05,
    FloorL = 0x0B,
    CeilW = 0x0E,
}

/// Logical instruction selected by a POP opcode group
///
/// Release 6 packs several branch/jump forms into each reclaimed opcode
/// and disambiguates them by register-field comparisons. The decoder
/// resolves a group to exactly one of these mnemonics, so the executor
/// and the disassembler dispatch on the real instruction rather than on
/// nested field tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopOp {
    // POP06
    Blez,
    Blezalc,
    Bgezalc,
    Bgeuc,
    // POP07
    Bgtz,
    Bgtzalc,
    Bltzalc,
    Bltuc,
    // POP10
    Beqzalc,
    Beqc,
    Bovc,
    // POP30
    Bnezalc,
    Bnec,
    Bnvc,
    // POP26
    Blezc,
    Bgezc,
    Bgec,
    // POP27
    Bgtzc,
    Bltzc,
    Bltc,
    // POP66
    Jic,
    Beqzc,
    // POP76
    Jialc,
    Bnezc,
}

/// A 32-bit MIPS32r6 machine word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// Canonical encoding, bit-identical to the architecture manual
    pub raw: u32,
}

impl Instruction {
    /// Wrap a fetched machine word
    #[inline(always)]
    pub fn new(raw: u32) -> Self {
        Self { raw }
    }

    // === Field views ===

    /// Primary opcode (bits 31:26)
    #[inline(always)]
    pub fn op(&self) -> u8 {
        (self.raw >> 26) as u8
    }

    /// rs field (bits 25:21)
    #[inline(always)]
    pub fn rs(&self) -> u8 {
        ((self.raw >> 21) & 0x1F) as u8
    }

    /// rt field (bits 20:16)
    #[inline(always)]
    pub fn rt(&self) -> u8 {
        ((self.raw >> 16) & 0x1F) as u8
    }

    /// rd field (bits 15:11)
    #[inline(always)]
    pub fn rd(&self) -> u8 {
        ((self.raw >> 11) & 0x1F) as u8
    }

    /// shamt field (bits 10:6)
    #[inline(always)]
    pub fn shamt(&self) -> u8 {
        ((self.raw >> 6) & 0x1F) as u8
    }

    /// func field (bits 5:0)
    #[inline(always)]
    pub fn func(&self) -> u8 {
        (self.raw & 0x3F) as u8
    }

    /// 16-bit immediate (bits 15:0)
    #[inline(always)]
    pub fn imm(&self) -> u16 {
        (self.raw & 0xFFFF) as u16
    }

    /// 21-bit immediate of the long-immediate I-type view (bits 20:0)
    #[inline(always)]
    pub fn long_imm(&self) -> u32 {
        self.raw & 0x1F_FFFF
    }

    /// 26-bit jump/branch field of the J-type view (bits 25:0)
    #[inline(always)]
    pub fn jump_address(&self) -> u32 {
        self.raw & 0x03FF_FFFF
    }

    /// BSHFL sub-function (bits 10:6)
    #[inline(always)]
    pub fn bshfl_func(&self) -> u8 {
        self.shamt()
    }

    /// msbd/msb field of the EXT/INS views (bits 15:11)
    #[inline(always)]
    pub fn msbd(&self) -> u8 {
        self.rd()
    }

    /// lsb field of the EXT/INS views (bits 10:6)
    #[inline(always)]
    pub fn lsb(&self) -> u8 {
        self.shamt()
    }

    /// PC-relative type 1 function (bits 20:19)
    #[inline(always)]
    pub fn pcrel1_func(&self) -> u8 {
        ((self.raw >> 19) & 0x3) as u8
    }

    /// 19-bit immediate of the PC-relative type 1 view (bits 18:0)
    #[inline(always)]
    pub fn pcrel1_imm(&self) -> u32 {
        self.raw & 0x7_FFFF
    }

    /// PC-relative type 2 function (bits 18:16)
    #[inline(always)]
    pub fn pcrel2_func(&self) -> u8 {
        ((self.raw >> 16) & 0x7) as u8
    }

    /// COP1 format/sub-operation field (bits 25:21)
    #[inline(always)]
    pub fn fmt(&self) -> u8 {
        self.rs()
    }

    // === Sign-extended immediates ===

    /// 16-bit immediate, sign-extended to 32 bits
    #[inline(always)]
    pub fn imm_se(&self) -> u32 {
        self.imm() as i16 as i32 as u32
    }

    /// 21-bit immediate, sign-extended to 32 bits
    #[inline(always)]
    pub fn long_imm_se(&self) -> u32 {
        sign_extend(self.long_imm(), 21)
    }

    /// 26-bit J-type field, sign-extended to 32 bits
    #[inline(always)]
    pub fn jump_imm_se(&self) -> u32 {
        sign_extend(self.jump_address(), 26)
    }

    /// 19-bit PC-relative immediate, sign-extended to 32 bits
    #[inline(always)]
    pub fn pcrel1_imm_se(&self) -> u32 {
        sign_extend(self.pcrel1_imm(), 19)
    }

    // === Classification ===

    /// Classify the word, or `None` for a reserved encoding
    pub fn get_type(&self) -> Option<Type> {
        match self.op() {
            0x00 => Function::from_bits(self.func()).map(|_| Type::RType),
            0x01 => RegimmOp::from_bits(self.rt()).map(|_| Type::RegimmIType),
            0x02 | 0x03 | 0x32 | 0x3A => Some(Type::JType),
            0x11 => match self.fmt() {
                0x00 | 0x02 | 0x03 | 0x04 | 0x06 | 0x07 => Some(Type::FpuTType),
                0x09 | 0x0D => Some(Type::FpuBType),
                0x10 | 0x11 | 0x14 | 0x15 => Some(Type::FpuRType),
                _ => None,
            },
            0x1F => match self.func() {
                0x00 => Some(Type::Special3Ext),
                0x04 => Some(Type::Special3Ins),
                0x20 => BshflFunc::from_bits(self.bshfl_func()).map(|_| Type::Special3Bshfl),
                _ => None,
            },
            0x36 | 0x3E => Some(Type::LongImmIType),
            0x3B => match self.pcrel1_func() {
                0x0 | 0x1 => Some(Type::PcRelType1),
                0x3 => match self.pcrel2_func() {
                    0b110 | 0b111 => Some(Type::PcRelType2),
                    _ => None,
                },
                _ => None,
            },
            0x04..=0x0F | 0x16..=0x18 | 0x20 | 0x21 | 0x23..=0x25 | 0x28 | 0x29 | 0x2B => {
                Some(Type::IType)
            }
            _ => None,
        }
    }

    /// Resolve a POP opcode group to its logical instruction
    ///
    /// Returns `None` when the word is not a POP group, or when the
    /// register fields select no valid form (a reserved encoding).
    pub fn pop_op(&self) -> Option<PopOp> {
        let rs = self.rs();
        let rt = self.rt();

        match self.op() {
            0x06 => Some(match (rs, rt) {
                (_, 0) => PopOp::Blez,
                (0, _) => PopOp::Blezalc,
                _ if rs == rt => PopOp::Bgezalc,
                _ => PopOp::Bgeuc,
            }),
            0x07 => Some(match (rs, rt) {
                (_, 0) => PopOp::Bgtz,
                (0, _) => PopOp::Bgtzalc,
                _ if rs == rt => PopOp::Bltzalc,
                _ => PopOp::Bltuc,
            }),
            // BOVC/BNVC take the rs >= rt encodings, including rs == rt
            // and rt == 0; the equal-compare forms need rs < rt.
            0x08 => Some(match (rs, rt) {
                _ if rs >= rt => PopOp::Bovc,
                (0, _) => PopOp::Beqzalc,
                _ => PopOp::Beqc,
            }),
            0x18 => Some(match (rs, rt) {
                _ if rs >= rt => PopOp::Bnvc,
                (0, _) => PopOp::Bnezalc,
                _ => PopOp::Bnec,
            }),
            0x16 => match (rs, rt) {
                (_, 0) => None,
                (0, _) => Some(PopOp::Blezc),
                _ if rs == rt => Some(PopOp::Bgezc),
                _ => Some(PopOp::Bgec),
            },
            0x17 => match (rs, rt) {
                (_, 0) => None,
                (0, _) => Some(PopOp::Bgtzc),
                _ if rs == rt => Some(PopOp::Bltzc),
                _ => Some(PopOp::Bltc),
            },
            0x36 => Some(if rs == 0 { PopOp::Jic } else { PopOp::Beqzc }),
            0x3E => Some(if rs == 0 { PopOp::Jialc } else { PopOp::Bnezc }),
            _ => None,
        }
    }

    // === Encoding constructors ===

    /// Encode an R-type word
    pub fn rtype(
        func: Function,
        rd: RegisterName,
        rs: RegisterName,
        rt: RegisterName,
        shamt: u8,
    ) -> Self {
        Self::new(
            ((rs.index() as u32) << 21)
                | ((rt.index() as u32) << 16)
                | ((rd.index() as u32) << 11)
                | (((shamt & 0x1F) as u32) << 6)
                | func as u32,
        )
    }

    /// Encode an I-type word
    pub fn itype(op: Opcode, rt: RegisterName, rs: RegisterName, imm: u16) -> Self {
        Self::new(
            ((op as u32) << 26)
                | ((rs.index() as u32) << 21)
                | ((rt.index() as u32) << 16)
                | imm as u32,
        )
    }

    /// Encode a J-type word from a 26-bit field
    pub fn jtype(op: Opcode, address: u32) -> Self {
        Self::new(((op as u32) << 26) | (address & 0x03FF_FFFF))
    }

    /// Encode a long-immediate I-type word (POP66/POP76) from a 21-bit field
    pub fn longimm_itype(op: Opcode, rs: RegisterName, imm: u32) -> Self {
        Self::new(((op as u32) << 26) | ((rs.index() as u32) << 21) | (imm & 0x1F_FFFF))
    }

    /// Encode a REGIMM word
    pub fn regimm(op: RegimmOp, rs: RegisterName, imm: u16) -> Self {
        Self::new(
            (0x01 << 26) | ((rs.index() as u32) << 21) | ((op as u32) << 16) | imm as u32,
        )
    }

    /// Encode a SPECIAL3 BSHFL word
    pub fn bshfl(func: BshflFunc, rd: RegisterName, rs: RegisterName, rt: RegisterName) -> Self {
        Self::new(
            (0x1F << 26)
                | ((rs.index() as u32) << 21)
                | ((rt.index() as u32) << 16)
                | ((rd.index() as u32) << 11)
                | ((func as u32) << 6)
                | 0x20,
        )
    }

    /// Encode a SPECIAL3 EXT word
    pub fn ext(rt: RegisterName, rs: RegisterName, msbd: u8, lsb: u8) -> Self {
        Self::new(
            (0x1F << 26)
                | ((rs.index() as u32) << 21)
                | ((rt.index() as u32) << 16)
                | (((msbd & 0x1F) as u32) << 11)
                | (((lsb & 0x1F) as u32) << 6),
        )
    }

    /// Encode a SPECIAL3 INS word
    pub fn ins(rt: RegisterName, rs: RegisterName, msb: u8, lsb: u8) -> Self {
        Self::new(
            (0x1F << 26)
                | ((rs.index() as u32) << 21)
                | ((rt.index() as u32) << 16)
                | (((msb & 0x1F) as u32) << 11)
                | (((lsb & 0x1F) as u32) << 6)
                | 0x04,
        )
    }

    /// Encode a PC-relative word with a 19-bit offset
    pub fn pcrel1(func: PcRelFunc1, rs: RegisterName, imm: u32) -> Self {
        Self::new(
            (0x3B << 26)
                | ((rs.index() as u32) << 21)
                | ((func as u32) << 19)
                | (imm & 0x7_FFFF),
        )
    }

    /// Encode a PC-relative word with a 16-bit offset
    pub fn pcrel2(func: PcRelFunc2, rs: RegisterName, imm: u16) -> Self {
        Self::new(
            (0x3B << 26) | ((rs.index() as u32) << 21) | ((func as u32) << 16) | imm as u32,
        )
    }

    /// Encode a COP1 arithmetic word
    pub fn fpu_rtype(fmt: FpuFormat, ft: u8, fs: u8, fd: u8, func: FpuFunc) -> Self {
        Self::new(
            (0x11 << 26)
                | ((fmt as u32) << 21)
                | (((ft & 0x1F) as u32) << 16)
                | (((fs & 0x1F) as u32) << 11)
                | (((fd & 0x1F) as u32) << 6)
                | func as u32,
        )
    }

    /// Encode a COP1 transfer word
    pub fn fpu_ttype(op: FpuTransferOp, rt: RegisterName, fs: u8) -> Self {
        Self::new(
            (0x11 << 26)
                | ((op as u32) << 21)
                | ((rt.index() as u32) << 16)
                | (((fs & 0x1F) as u32) << 11),
        )
    }

    /// Encode a COP1 branch word
    pub fn fpu_btype(op: FpuBranchOp, ft: u8, offset: u16) -> Self {
        Self::new(
            (0x11 << 26) | ((op as u32) << 21) | (((ft & 0x1F) as u32) << 16) | offset as u32,
        )
    }
}

/// Sign-extend the low `bits` bits of `value` to 32 bits
#[inline(always)]
pub(crate) fn sign_extend(value: u32, bits: u32) -> u32 {
    let shift = 32 - bits;
    (((value << shift) as i32) >> shift) as u32
}
