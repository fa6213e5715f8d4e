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

use super::helpers::{machine, step_one, write_program};
use crate::core::cpu::instruction::{Function, Instruction, Opcode};
use crate::core::cpu::Cpu;

use crate::core::cpu::RegisterName::{Zero, T0, T2};

#[test]
fn test_jr_delay_slot_semantics() {
    let mut cpu = Cpu::new();
    cpu.set_reg(8, 0xBAD);
    cpu.set_pc(0x1000_0000);

    // Emulate the step driver: the PC advances before the handler runs
    cpu.update_pc();
    assert!(cpu.op_jr(8).is_ok());

    // Moves past the delay slot
    cpu.update_pc();
    assert_eq!(cpu.pc(), 0xBAD);
}

#[test]
fn test_jalr_links_delay_slot_address() {
    let mut cpu = Cpu::new();
    cpu.set_reg(8, 0xBAD);
    cpu.set_pc(0x10BE_EF00);

    cpu.update_pc();
    assert!(cpu.op_jalr(8).is_ok());
    cpu.update_pc();

    assert_eq!(cpu.pc(), 0xBAD);
    assert_eq!(cpu.reg(31), 0x10BE_EF04);
}

#[test]
fn test_jr_through_step() {
    let (mut cpu, mut memory) = machine();
    cpu.set_pc(0x1000);
    cpu.set_reg(8, 0x4000);

    write_program(
        &mut memory,
        0x1000,
        &[
            Instruction::rtype(Function::Jr, Zero, T0, Zero, 0),
            // Delay slot still executes
            Instruction::itype(Opcode::Addiu, T2, Zero, 9),
        ],
    );

    assert!(cpu.step(&mut memory));
    assert_eq!(cpu.pc(), 0x1004);

    assert!(cpu.step(&mut memory));
    assert_eq!(cpu.reg(10), 9);
    assert_eq!(cpu.pc(), 0x4000);
}

#[test]
fn test_jalr_overwritten_ra_source() {
    // jalr where rs is ra itself: the target reads before the link write
    let mut cpu = Cpu::new();
    cpu.set_reg(31, 0x5000);
    cpu.set_pc(0x1000);

    cpu.update_pc();
    assert!(cpu.op_jalr(31).is_ok());
    cpu.update_pc();

    assert_eq!(cpu.pc(), 0x5000);
    assert_eq!(cpu.reg(31), 0x1004);
}

#[test]
fn test_j_forms_target_from_high_pc_bits() {
    let (mut cpu, mut memory) = machine();
    cpu.set_pc(0x1000);

    // j 0x040000 → target (0x040000 << 2) | (PC & 0xF0000000) = 0x100000
    write_program(
        &mut memory,
        0x1000,
        &[Instruction::jtype(Opcode::J, 0x040000), Instruction::new(0)],
    );

    assert!(cpu.step(&mut memory));
    assert_eq!(cpu.pending_branch(), Some(0x0010_0000));

    assert!(cpu.step(&mut memory));
    assert_eq!(cpu.pc(), 0x0010_0000);
}

#[test]
fn test_j_preserves_upper_pc_bits() {
    let mut cpu = Cpu::new();
    cpu.set_pc(0x9000_0000);

    cpu.update_pc();
    // Execute the handler directly; the target keeps the 0x9 nibble
    let instruction = Instruction::jtype(Opcode::J, 0x040000);
    assert!(cpu.execute_jtype(instruction).is_ok());
    cpu.update_pc();

    assert_eq!(cpu.pc(), 0x9010_0000);
}

#[test]
fn test_jal_links() {
    let (mut cpu, mut memory) = machine();
    cpu.set_pc(0x1000);

    write_program(
        &mut memory,
        0x1000,
        &[Instruction::jtype(Opcode::Jal, 0x040000), Instruction::new(0)],
    );

    assert!(cpu.step(&mut memory));
    // Return address is the delay-slot address
    assert_eq!(cpu.reg(31), 0x1004);

    assert!(cpu.step(&mut memory));
    assert_eq!(cpu.pc(), 0x0010_0000);
}

#[test]
fn test_bc_compact_forward() {
    let (mut cpu, mut memory) = machine();
    cpu.set_pc(0x1000);

    // bc +16: target = 0x1004 + 64
    let instruction = Instruction::jtype(Opcode::Bc, 16);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.pc(), 0x1004 + 64);
    assert_eq!(cpu.pending_branch(), None);
}

#[test]
fn test_bc_compact_backward() {
    let (mut cpu, mut memory) = machine();
    cpu.set_pc(0x1000);

    // 26-bit immediate of -2: target = 0x1004 - 8
    let instruction = Instruction::jtype(Opcode::Bc, 0x3FF_FFFE);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.pc(), 0x0FFC);
}

#[test]
fn test_balc_links_and_branches() {
    let (mut cpu, mut memory) = machine();
    cpu.set_pc(0x1000);

    let instruction = Instruction::jtype(Opcode::Balc, 16);
    assert!(step_one(&mut cpu, &mut memory, instruction));

    assert_eq!(cpu.pc(), 0x1004 + 64);
    assert_eq!(cpu.reg(31), 0x1004);
    assert_eq!(cpu.pending_branch(), None);
}
