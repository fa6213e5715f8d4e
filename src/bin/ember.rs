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

use clap::Parser;
use log::{error, info, trace};

use ember_core::core::cpu::{Cpu, Disassembler};
use ember_core::core::error::Result;
use ember_core::core::loader;
use ember_core::core::memory::{LinearMemory, Memory};
use ember_core::core::save_state::SaveState;

/// MIPS32r6 emulator
#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "MIPS32 Release 6 emulator", long_about = None)]
struct Args {
    /// Path to a flat little-endian program image
    image: String,

    /// Load address and entry point of the image
    #[arg(short = 'b', long, default_value = "0x1000", value_parser = parse_address)]
    base: u32,

    /// Memory size in bytes
    #[arg(short = 'm', long, default_value = "4194304")]
    memory: usize,

    /// Number of instructions to execute
    #[arg(short = 'n', long, default_value = "100000")]
    steps: usize,

    /// Log each executed instruction (requires RUST_LOG=trace)
    #[arg(short = 't', long)]
    trace: bool,

    /// Write a save state here after the run
    #[arg(short = 's', long)]
    snapshot: Option<String>,
}

/// Accept decimal or 0x-prefixed addresses
fn parse_address(raw: &str) -> std::result::Result<u32, String> {
    let parsed = if let Some(hex) = raw.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        raw.parse()
    };
    parsed.map_err(|err| format!("invalid address '{}': {}", raw, err))
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("ember v{}", env!("CARGO_PKG_VERSION"));
    info!("MIPS32r6 emulator");

    let args = Args::parse();

    let mut memory = LinearMemory::with_size(args.memory);
    info!("Loading image from: {}", args.image);

    let image = match loader::load_flat_binary(&args.image, &mut memory, args.base) {
        Ok(image) => image,
        Err(err) => {
            error!("Failed to load image: {}", err);
            return Err(err);
        }
    };

    let mut cpu = Cpu::new();
    cpu.set_pc(image.entry);

    info!("Starting emulation at PC=0x{:08X}...", image.entry);

    const LOG_INTERVAL: usize = 10_000;
    let mut executed = 0usize;

    for i in 0..args.steps {
        if i % LOG_INTERVAL == 0 && i > 0 {
            info!(
                "Progress: {}/{} instructions | PC: 0x{:08X}",
                i,
                args.steps,
                cpu.pc()
            );
        }

        if args.trace {
            if let Ok(word) = memory.read::<u32>(cpu.pc()) {
                trace!(
                    "0x{:08X}: {}",
                    cpu.pc(),
                    Disassembler::disassemble(word, cpu.pc())
                );
            }
        }

        if !cpu.step(&mut memory) {
            if let Some(exception) = cpu.exception() {
                error!(
                    "Fault after {} instructions: {:?} (instruction 0x{:08X})",
                    i, exception.cause, exception.instruction
                );
            }
            cpu.dump_registers();
            break;
        }
        executed += 1;
    }

    info!("Executed {} instructions", executed);
    info!("Final PC: 0x{:08X}", cpu.pc());

    if let Some(path) = &args.snapshot {
        info!("Writing save state to: {}", path);
        SaveState::from_parts(&cpu, &memory).save_to_file(path)?;
    }

    Ok(())
}
