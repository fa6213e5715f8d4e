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
use crate::core::cpu::instruction::{Function, Instruction};

use crate::core::cpu::RegisterName::{At, Zero, T0, T1, T2};

#[test]
fn test_sll() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 123456);

    let instruction = Instruction::rtype(Function::Sll, T0, Zero, T1, 4);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 1_975_296);
}

#[test]
fn test_sll_zero_shift_is_move() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 0x12345678);

    let instruction = Instruction::rtype(Function::Sll, T0, Zero, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 0x12345678);
}

#[test]
fn test_sll_high_bits_come_from_low_bits() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 0xFFFF_FFFF);

    let instruction = Instruction::rtype(Function::Sll, T0, Zero, T1, 31);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 0x8000_0000);
}

#[test]
fn test_srl() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 123456);

    let instruction = Instruction::rtype(Function::Srl, T0, Zero, T1, 4);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 7716);
}

#[test]
fn test_sra_positive() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 123456);

    let instruction = Instruction::rtype(Function::Sra, T0, Zero, T1, 4);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 7716);
}

#[test]
fn test_sra_negative() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg_signed(9, -123456);

    let instruction = Instruction::rtype(Function::Sra, T0, Zero, T1, 4);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg_signed(8), -7716);
    assert_eq!(cpu.reg(8), 0xFFFFE1E3);
}

#[test]
fn test_sra_matches_arithmetic_shift_for_samples() {
    let values: [i32; 6] = [0, 1, -1, i32::MIN, i32::MAX, -123456];

    for value in values {
        for shamt in 0..32u8 {
            let (mut cpu, mut memory) = machine();
            cpu.set_reg_signed(9, value);

            let instruction = Instruction::rtype(Function::Sra, T0, Zero, T1, shamt);
            assert!(step_one(&mut cpu, &mut memory, instruction));

            assert_eq!(
                cpu.reg_signed(8),
                value >> shamt,
                "sra({}, {})",
                value,
                shamt
            );
        }
    }
}

#[test]
fn test_sllv() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 123456);
    cpu.set_reg(10, 4);

    let instruction = Instruction::rtype(Function::Sllv, T0, T2, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 1_975_296);
}

#[test]
fn test_sllv_uses_low_five_bits_of_rs() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 1);
    cpu.set_reg(10, 0xFFFF_FFE1); // low five bits = 1

    let instruction = Instruction::rtype(Function::Sllv, T0, T2, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 2);
}

#[test]
fn test_srlv_uses_low_five_bits_of_rs() {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, 2);
    cpu.set_reg(10, 0xFFFF_FFE1);

    let instruction = Instruction::rtype(Function::Srlv, T0, T2, T1, 0);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.reg(8), 1);
}

#[test]
fn test_srav() {
    for (value, expected) in [(123456i32, 7716i32), (-123456, -7716)] {
        let (mut cpu, mut memory) = machine();
        cpu.set_reg_signed(9, value);
        cpu.set_reg(10, 4);

        let instruction = Instruction::rtype(Function::Srav, T0, T2, T1, 0);
        assert!(step_one(&mut cpu, &mut memory, instruction));

        assert_eq!(cpu.reg_signed(8), expected);
    }
}

/// ROTR is SRL with bit 0 of the rs field set
fn rotr(amount: u8, input: u32) -> u32 {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, input);

    let instruction = Instruction::rtype(Function::Srl, T0, At, T1, amount);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    cpu.reg(8)
}

/// ROTRV is SRLV with bit 0 of the shamt field set
fn rotrv(amount: u32, input: u32) -> u32 {
    let (mut cpu, mut memory) = machine();
    cpu.set_reg(9, input);
    cpu.set_reg(10, amount);

    let instruction = Instruction::rtype(Function::Srlv, T0, T2, T1, 1);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    cpu.reg(8)
}

#[test]
fn test_rotr_preserves_all_ones() {
    for amount in 0..32 {
        assert_eq!(rotr(amount, !0), !0, "rotr(0xFFFFFFFF, {})", amount);
    }
}

#[test]
fn test_rotr_vectors() {
    assert_eq!(rotr(4, 0x162315), 0x50016231);
    assert_eq!(rotr(2, 0x125623), 0xC0049588);
    assert_eq!(rotr(3, 0x45324BFA), 0x48A6497F);
    assert_eq!(rotr(9, 0xDEADBEEF), 0x77EF56DF);
    assert_eq!(rotr(12, 0x124), 0x12400000);
    assert_eq!(rotr(25, 0x4632132), 0x31909902);
}

#[test]
fn test_rotr_by_zero_is_identity() {
    assert_eq!(rotr(0, 0xDEADBEEF), 0xDEADBEEF);
}

#[test]
fn test_rotr_composition_restores_input() {
    for (value, amount) in [(0xDEADBEEFu32, 9u8), (0x12345678, 1), (0x80000001, 31)] {
        let rotated = rotr(amount, value);
        assert_eq!(rotr(32 - amount, rotated), value);
    }
}

#[test]
fn test_rotrv_vectors() {
    assert_eq!(rotrv(4, 0x162315), 0x50016231);
    assert_eq!(rotrv(2, 0x125623), 0xC0049588);
    assert_eq!(rotrv(3, 0x45324BFA), 0x48A6497F);
    assert_eq!(rotrv(9, 0xDEADBEEF), 0x77EF56DF);
    assert_eq!(rotrv(12, 0x124), 0x12400000);
    assert_eq!(rotrv(25, 0x4632132), 0x31909902);
}

#[test]
fn test_rotrv_preserves_all_ones() {
    for amount in 0..32 {
        assert_eq!(rotrv(amount, !0), !0, "rotrv(0xFFFFFFFF, {})", amount);
    }
}
