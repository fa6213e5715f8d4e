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

use super::super::{LinearMemory, Memory, MemoryError};

#[test]
fn test_misaligned_word_read() {
    let memory = LinearMemory::with_size(64);

    for address in [1u32, 2, 3, 5] {
        assert_eq!(
            memory.read::<u32>(address),
            Err(MemoryError::Misaligned { address, size: 4 }),
        );
    }
}

#[test]
fn test_misaligned_halfword_read() {
    let memory = LinearMemory::with_size(64);

    assert_eq!(
        memory.read::<u16>(1),
        Err(MemoryError::Misaligned {
            address: 1,
            size: 2
        }),
    );
    assert!(memory.read::<u16>(2).is_ok());
}

#[test]
fn test_misaligned_word_store() {
    let mut memory = LinearMemory::with_size(64);

    assert_eq!(
        memory.store::<u32>(2, 1),
        Err(MemoryError::Misaligned {
            address: 2,
            size: 4
        }),
    );
}

#[test]
fn test_byte_access_has_no_alignment() {
    let mut memory = LinearMemory::with_size(64);
    for address in 0..8 {
        assert!(memory.store::<u8>(address, address as u8).is_ok());
        assert!(memory.read::<u8>(address).is_ok());
    }
}

#[test]
fn test_unmapped_read() {
    let memory = LinearMemory::with_size(64);

    assert_eq!(
        memory.read::<u32>(64),
        Err(MemoryError::Unmapped { address: 64 }),
    );
    assert_eq!(
        memory.read::<u8>(1000),
        Err(MemoryError::Unmapped { address: 1000 }),
    );
}

#[test]
fn test_unmapped_store() {
    let mut memory = LinearMemory::with_size(64);

    assert_eq!(
        memory.store::<u32>(64, 1),
        Err(MemoryError::Unmapped { address: 64 }),
    );
}

#[test]
fn test_word_straddling_the_end_is_unmapped() {
    let memory = LinearMemory::with_size(64);

    // The last aligned word is fine, one past it is not
    assert!(memory.read::<u32>(60).is_ok());
    assert_eq!(
        memory.read::<u16>(62),
        Ok(0),
    );
    assert_eq!(
        memory.read::<u32>(64),
        Err(MemoryError::Unmapped { address: 64 }),
    );
}

#[test]
fn test_error_display() {
    let unmapped = MemoryError::Unmapped { address: 0x1234 };
    assert_eq!(
        unmapped.to_string(),
        "Unmapped access at address 0x00001234"
    );

    let misaligned = MemoryError::Misaligned {
        address: 0x2,
        size: 4,
    };
    assert_eq!(
        misaligned.to_string(),
        "Misaligned 32-bit access at address 0x00000002"
    );
}
