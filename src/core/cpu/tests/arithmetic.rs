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

use super::helpers::{machine, step_one};
use crate::core::cpu::instruction::{Function, Instruction, Opcode};

use crate::core::cpu::RegisterName::{Zero, T0, T1, T2};

#[test]
fn test_add_positive_numbers() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg_signed(8, 1);
    cpu.set_reg_signed(9, 5);

    let instruction = Instruction::rtype(Function::Add, T2, T0, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg_signed(10), 6);
}

#[test]
fn test_add_wraps_on_overflow() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg_signed(8, i32::MAX);
    cpu.set_reg_signed(9, 1);

    let instruction = Instruction::rtype(Function::Add, T2, T0, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg_signed(10), i32::MIN);
}

#[test]
fn test_addu() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(8, 0xFFFFFFFF);
    cpu.set_reg(9, 2);

    let instruction = Instruction::rtype(Function::Addu, T2, T0, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(10), 1);
}

#[test]
fn test_sub_positive_numbers() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg_signed(8, 10);
    cpu.set_reg_signed(9, 1);

    let instruction = Instruction::rtype(Function::Sub, T2, T0, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg_signed(10), 9);
}

#[test]
fn test_sub_negative_numbers() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg_signed(8, -3);
    cpu.set_reg_signed(9, -5);

    let instruction = Instruction::rtype(Function::Sub, T2, T0, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg_signed(10), 2);
}

#[test]
fn test_subu() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(8, 0);
    cpu.set_reg(9, 1);

    let instruction = Instruction::rtype(Function::Subu, T2, T0, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(10), 0xFFFFFFFF);
}

#[test]
fn test_slt() {
    let cases: [(i32, i32, u32); 4] = [(5, 5, 0), (2, 5, 1), (-1, 0, 1), (0, -1, 0)];

    for (a, b, expected) in cases {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg_signed(8, a);
        cpu.set_reg_signed(9, b);

        let instruction = Instruction::rtype(Function::Slt, T2, T0, T1, 0);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg(10), expected, "slt({}, {})", a, b);
    }
}

#[test]
fn test_sltu() {
    let cases: [(u32, u32, u32); 4] = [
        (5, 5, 0),
        (2, 5, 1),
        (0xFFFFFFFF, 0, 0),
        (0, 0xFFFFFFFF, 1),
    ];

    for (a, b, expected) in cases {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg(8, a);
        cpu.set_reg(9, b);

        let instruction = Instruction::rtype(Function::Sltu, T2, T0, T1, 0);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg(10), expected, "sltu({}, {})", a, b);
    }
}

#[test]
fn test_slt_and_sltu_agree_for_non_negative_operands() {
    for (a, b) in [(0u32, 1u32), (7, 3), (0x7FFFFFFF, 1), (12, 12)] {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg(8, a);
        cpu.set_reg(9, b);

        assert!(step_one(
            &mut cpu,
            &mut memory,
            Instruction::rtype(Function::Slt, T2, T0, T1, 0)
        ));
        let slt = cpu.reg(10);

        assert!(step_one(
            &mut cpu,
            &mut memory,
            Instruction::rtype(Function::Sltu, T2, T0, T1, 0)
        ));
        let sltu = cpu.reg(10);

        assert_eq!(slt, sltu, "operands {} and {}", a, b);
    }
}

#[test]
fn test_addiu() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(8, 100);

    let instruction = Instruction::itype(Opcode::Addiu, T1, T0, 0xFFFF); // -1
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(9), 99);
}

#[test]
fn test_aui() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(8, 0x0000_1234);

    let instruction = Instruction::itype(Opcode::Aui, T1, T0, 0xABCD);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(9), 0xABCD_1234);
}

#[test]
fn test_aui_with_zero_source_is_lui() {
    let (mut cpu, mut memory) = machine();

    let instruction = Instruction::itype(Opcode::Aui, T0, Zero, 0x1234);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 0x1234_0000);
}

#[test]
fn test_slti() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg_signed(8, -5);

    // -5 < -1
    let instruction = Instruction::itype(Opcode::Slti, T1, T0, 0xFFFF);
    assert!(step_one(&mut cpu, &mut memory, instruction));
    assert_eq!(cpu.reg(9), 1);
}

#[test]
fn test_sltiu_sign_extends_then_compares_unsigned() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(8, 100);

    // imm 0xFFFF sign-extends to 0xFFFFFFFF; 100 < 0xFFFFFFFF unsigned
    let instruction = Instruction::itype(Opcode::Sltiu, T1, T0, 0xFFFF);
    assert!(step_one(&mut cpu, &mut memory, instruction));
    assert_eq!(cpu.reg(9), 1);
}

#[test]
fn test_seleqz() {
    for (rt, expected) in [(0u32, 10u32), (3, 0)] {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg(8, 10);
        cpu.set_reg(9, rt);

        let instruction = Instruction::rtype(Function::Seleqz, T2, T0, T1, 0);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg(10), expected, "seleqz with rt = {}", rt);
    }
}

#[test]
fn test_selnez() {
    for (rt, expected) in [(0u32, 0u32), (3, 10)] {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg(8, 10);
        cpu.set_reg(9, rt);

        let instruction = Instruction::rtype(Function::Selnez, T2, T0, T1, 0);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg(10), expected, "selnez with rt = {}", rt);
    }
}

#[test]
fn test_clz() {
    let cases: [(u32, u32); 5] = [
        (0, 32),
        (1, 31),
        (0x8000_0000, 0),
        (0x0000_8000, 16),
        (0xFFFF_FFFF, 0),
    ];

    for (value, expected) in cases {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg(8, value);

        let instruction = Instruction::rtype(Function::Clz, T2, T0, Zero, 1);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg(10), expected, "clz(0x{:08X})", value);
    }
}

#[test]
fn test_clo() {
    let cases: [(u32, u32); 4] = [
        (0xFFFF_FFFF, 32),
        (0, 0),
        (0x8000_0000, 1),
        (0xFFFF_0000, 16),
    ];

    for (value, expected) in cases {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg(8, value);

        let instruction = Instruction::rtype(Function::Clo, T2, T0, Zero, 1);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg(10), expected, "clo(0x{:08X})", value);
    }
}
