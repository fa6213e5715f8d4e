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

//! Flat program image loader
//!
//! Reads a raw little-endian machine-code image from disk into a
//! [`LinearMemory`] at a base address. There is no container format: the
//! entry point is the base address.

use std::path::Path;

use crate::core::error::{EmulatorError, Result};
use crate::core::memory::LinearMemory;

/// A program image placed in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadedImage {
    /// Entry PC (the load base)
    pub entry: u32,
    /// Image size in bytes
    pub size: usize,
}

/// Load a flat binary image into memory at `base`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// [`EmulatorError::ImageTooLarge`] if the image does not fit in the
/// memory starting at `base`.
///
/// # Example
///
/// ```no_run
/// use ember_core::core::loader;
/// use ember_core::core::memory::LinearMemory;
///
/// let mut memory = LinearMemory::new();
/// let image = loader::load_flat_binary("program.bin", &mut memory, 0x1000).unwrap();
/// assert_eq!(image.entry, 0x1000);
/// ```
pub fn load_flat_binary<P: AsRef<Path>>(
    path: P,
    memory: &mut LinearMemory,
    base: u32,
) -> Result<LoadedImage> {
    let blob = std::fs::read(path)?;

    let end = (base as usize).checked_add(blob.len());
    if end.is_none() || end.unwrap_or(usize::MAX) > memory.len() {
        return Err(EmulatorError::ImageTooLarge {
            base,
            size: blob.len(),
            capacity: memory.len(),
        });
    }

    memory.load_blob(base, &blob)?;
    log::info!(
        "Loaded {} bytes at 0x{:08X}, entry PC 0x{:08X}",
        blob.len(),
        base,
        base
    );

    Ok(LoadedImage {
        entry: base,
        size: blob.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::memory::Memory;
    use std::io::Write;

    #[test]
    fn test_load_flat_binary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // Two little-endian words: addiu t0, zero, 7 / NOP
        file.write_all(&0x2408_0007u32.to_le_bytes()).unwrap();
        file.write_all(&0u32.to_le_bytes()).unwrap();
        file.flush().unwrap();

        let mut memory = LinearMemory::new();
        let image = load_flat_binary(file.path(), &mut memory, 0x1000).unwrap();

        assert_eq!(image.entry, 0x1000);
        assert_eq!(image.size, 8);
        assert_eq!(memory.read::<u32>(0x1000).unwrap(), 0x2408_0007);
        assert_eq!(memory.read::<u32>(0x1004).unwrap(), 0);
    }

    #[test]
    fn test_image_must_fit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0u8; 64]).unwrap();
        file.flush().unwrap();

        let mut memory = LinearMemory::with_size(32);
        let err = load_flat_binary(file.path(), &mut memory, 0).unwrap_err();

        assert_eq!(
            err,
            EmulatorError::ImageTooLarge {
                base: 0,
                size: 64,
                capacity: 32,
            }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut memory = LinearMemory::new();
        let err = load_flat_binary("/no/such/image.bin", &mut memory, 0).unwrap_err();
        assert!(matches!(err, EmulatorError::IoError { .. }));
    }
}
