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

use criterion::{criterion_group, criterion_main, Criterion};
use ember_core::core::cpu::Cpu;
use ember_core::core::memory::{LinearMemory, Memory};
use std::hint::black_box;

fn cpu_step_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_step_nop", |b| {
        let mut cpu = Cpu::new();
        let mut memory = LinearMemory::new();

        // NOP = 0x00000000 (SLL zero, zero, 0)
        memory.store::<u32>(0, 0x0000_0000).unwrap();

        b.iter(|| {
            cpu.reset();
            black_box(cpu.step(&mut memory));
        });
    });

    c.bench_function("cpu_step_arithmetic_loop", |b| {
        let mut cpu = Cpu::new();
        let mut memory = LinearMemory::new();

        // addiu t0, t0, 1 / addu t1, t1, t0 / mul t2, t1, t0 / beq zero, zero, -4
        let program = [0x2508_0001u32, 0x0128_4821, 0x0128_5098, 0x1000_FFFC];
        for (i, word) in program.iter().enumerate() {
            memory.store::<u32>(i as u32 * 4, *word).unwrap();
        }

        b.iter(|| {
            cpu.reset();
            for _ in 0..program.len() {
                black_box(cpu.step(&mut memory));
            }
        });
    });
}

fn cpu_register_access_benchmark(c: &mut Criterion) {
    c.bench_function("cpu_register_read", |b| {
        let cpu = Cpu::new();
        b.iter(|| {
            for i in 0..32 {
                black_box(cpu.reg(i));
            }
        });
    });

    c.bench_function("cpu_register_write", |b| {
        let mut cpu = Cpu::new();
        b.iter(|| {
            for i in 0..32 {
                cpu.set_reg(i, black_box(i as u32 * 100));
            }
        });
    });
}

criterion_group!(benches, cpu_step_benchmark, cpu_register_access_benchmark);
criterion_main!(benches);
