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

//! Memory contract consumed by the CPU core
//!
//! The core never owns storage; it drives an opaque [`Memory`]
//! implementation through typed, alignment-checked accessors. All
//! multi-byte accesses are little-endian relative to the MIPS32 word.
//!
//! [`LinearMemory`] is the reference implementation: a flat,
//! byte-addressable RAM used by the CLI, the tests, and the benches.
//!
//! # Example
//!
//! ```
//! use ember_core::core::memory::{LinearMemory, Memory};
//!
//! let mut memory = LinearMemory::new();
//! memory.store::<u32>(0x100, 0x12345678).unwrap();
//! assert_eq!(memory.read::<u32>(0x100).unwrap(), 0x12345678);
//! assert_eq!(memory.read::<u8>(0x103).unwrap(), 0x12);
//! ```

use std::fmt;


/// Result type for memory operations
pub type MemoryResult<T> = std::result::Result<T, MemoryError>;

/// Memory access failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// Access outside any mapped region
    Unmapped {
        /// The address that was accessed
        address: u32,
    },

    /// Address not aligned to the access width
    Misaligned {
        /// The address that was accessed
        address: u32,
        /// The access width in bytes (2 or 4)
        size: u32,
    },

    /// Write to a read-only region
    ReadOnly {
        /// The address that was accessed
        address: u32,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::Unmapped { address } => {
                write!(f, "Unmapped access at address 0x{:08X}", address)
            }
            MemoryError::Misaligned { address, size } => {
                write!(
                    f,
                    "Misaligned {}-bit access at address 0x{:08X}",
                    size * 8,
                    address
                )
            }
            MemoryError::ReadOnly { address } => {
                write!(f, "Write to read-only address 0x{:08X}", address)
            }
        }
    }
}

impl std::error::Error for MemoryError {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
}

/// Value types a [`Memory`] can transfer
///
/// Implemented for u8/u16/u32 and their signed counterparts. The trait is
/// sealed: the access-width set is part of the memory contract.
pub trait Scalar: Copy + sealed::Sealed {
    /// Access width in bytes
    const SIZE: u32;

    /// Decode from little-endian bytes (`raw.len() == SIZE`)
    fn from_le(raw: &[u8]) -> Self;

    /// Encode into little-endian bytes (`raw.len() == SIZE`)
    fn to_le(self, raw: &mut [u8]);
}

macro_rules! impl_scalar {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const SIZE: u32 = std::mem::size_of::<$ty>() as u32;

                #[inline(always)]
                fn from_le(raw: &[u8]) -> Self {
                    let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                    bytes.copy_from_slice(raw);
                    <$unsigned>::from_le_bytes(bytes) as $ty
                }

                #[inline(always)]
                fn to_le(self, raw: &mut [u8]) {
                    raw.copy_from_slice(&(self as $unsigned).to_le_bytes());
                }
            }
        )*
    };
}

impl_scalar! {
    u8 => u8,
    u16 => u16,
    u32 => u32,
    i8 => u8,
    i16 => u16,
    i32 => u32,
}

/// Byte-addressable memory consumed by the CPU core
///
/// Implementations decide the mapping, alignment policy, and protection;
/// the core only propagates their errors. Accesses are little-endian.
pub trait Memory {
    /// Read a typed value from `address`
    fn read<T: Scalar>(&self, address: u32) -> MemoryResult<T>;

    /// Store a typed value to `address`
    fn store<T: Scalar>(&mut self, address: u32, value: T) -> MemoryResult<()>;
}

/// Flat RAM starting at address zero
///
/// The reference [`Memory`] implementation: a contiguous byte array with
/// natural-alignment checking. Accesses past the end are unmapped.
pub struct LinearMemory {
    bytes: Vec<u8>,
}

impl LinearMemory {
    /// Default capacity (4MB)
    pub const DEFAULT_SIZE: usize = 4 * 1024 * 1024;

    /// Create a zero-filled memory of [`Self::DEFAULT_SIZE`] bytes
    pub fn new() -> Self {
        Self::with_size(Self::DEFAULT_SIZE)
    }

    /// Create a zero-filled memory of `size` bytes
    pub fn with_size(size: usize) -> Self {
        Self {
            bytes: vec![0u8; size],
        }
    }

    /// Capacity in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if the memory has zero capacity
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the raw contents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Replace the contents with a snapshot of the same capacity
    ///
    /// Used by save-state restore. A snapshot of a different size is
    /// rejected as unmapped at the first out-of-range byte.
    pub fn restore(&mut self, snapshot: &[u8]) -> MemoryResult<()> {
        if snapshot.len() != self.bytes.len() {
            return Err(MemoryError::Unmapped {
                address: self.bytes.len().min(snapshot.len()) as u32,
            });
        }
        self.bytes.copy_from_slice(snapshot);
        Ok(())
    }

    /// Copy a byte blob into memory at `base`
    ///
    /// The blob must fit entirely; on failure memory is left untouched.
    pub fn load_blob(&mut self, base: u32, blob: &[u8]) -> MemoryResult<()> {
        let start = base as usize;
        let end = start.checked_add(blob.len()).ok_or(MemoryError::Unmapped {
            address: u32::MAX,
        })?;
        if end > self.bytes.len() {
            return Err(MemoryError::Unmapped { address: base });
        }
        self.bytes[start..end].copy_from_slice(blob);
        Ok(())
    }

    /// Validate alignment and bounds, returning the byte range
    #[inline(always)]
    fn span(&self, address: u32, size: u32) -> MemoryResult<std::ops::Range<usize>> {
        if address % size != 0 {
            return Err(MemoryError::Misaligned { address, size });
        }
        let start = address as usize;
        let end = start + size as usize;
        if end > self.bytes.len() {
            return Err(MemoryError::Unmapped { address });
        }
        Ok(start..end)
    }
}

impl Memory for LinearMemory {
    fn read<T: Scalar>(&self, address: u32) -> MemoryResult<T> {
        let span = self.span(address, T::SIZE)?;
        Ok(T::from_le(&self.bytes[span]))
    }

    fn store<T: Scalar>(&mut self, address: u32, value: T) -> MemoryResult<()> {
        let span = self.span(address, T::SIZE)?;
        value.to_le(&mut self.bytes[span]);
        Ok(())
    }
}

impl Default for LinearMemory {
    fn default() -> Self {
        Self::new()
    }
}
