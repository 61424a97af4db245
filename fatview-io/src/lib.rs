// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec};

// Core modules
pub mod errors;
mod macros;

// Backend modules
#[cfg(feature = "mem")]
mod mem;

#[cfg(feature = "std")]
mod std;

// Prelude re-exports (central entrypoint)
pub mod prelude {
    pub use super::VolumeIO;
    pub use super::VolumeIOExt;
    pub use super::VolumeIOStructExt;
    pub use super::errors::*;

    #[cfg(feature = "mem")]
    pub use super::mem::MemVolumeIO;

    #[cfg(feature = "std")]
    pub use super::std::StdVolumeIO;
}

// Internal use
use errors::*;

// Constants

/// Maximum size of the internal scratch buffer used for struct reads.
/// 4 KiB = largest sector size a FAT volume can declare.
/// Safe for no_std stack usage.
pub const BLOCK_BUF_SIZE: usize = 4096;

// Traits

/// Random-access read capability over a volume image.
///
/// Offsets are absolute within the volume: the partition offset is added
/// on every read, so a FAT volume nested inside a partitioned image can
/// be addressed from zero. Implementations may target RAM, files, block
/// devices, etc.
///
/// This trait is intentionally read-only. Parsing a volume never writes
/// back, and the narrower capability keeps hostile images harmless.
pub trait VolumeIO {
    /// Reads `buf.len()` bytes into `buf` from `offset` (absolute).
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> VolumeIOResult;

    fn set_offset(&mut self, partition_offset: u64) -> u64;
    fn partition_offset(&self) -> u64;
}

/// Extension helpers for `VolumeIO`.
///
/// Provides decoding conveniences:
/// - fixed-width little-endian integer reads (read_u8/u16/u32)
/// - fixed-length string reads with FAT padding rules
pub trait VolumeIOExt: VolumeIO {
    // Implements read helpers for primitive types (u8, u16, u32)
    volumeio_impl_primitive_read!(u8, u16, u32);

    /// Reads `len` raw bytes at `offset` and strips the trailing NUL and
    /// ASCII-space padding FAT uses for fixed-width text fields.
    ///
    /// Non-printable bytes inside the field are kept (lossy UTF-8);
    /// whether the result is safe to display is the caller's concern.
    #[cfg(feature = "alloc")]
    fn read_string_at(&mut self, offset: u64, len: usize) -> VolumeIOResult<String> {
        let mut buf = vec![0u8; len];
        self.read_at(offset, &mut buf)?;
        let end = buf
            .iter()
            .rposition(|&b| b != b' ' && b != 0)
            .map_or(0, |p| p + 1);
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }
}

impl<T: VolumeIO + ?Sized> VolumeIOExt for T {}

/// Extension trait for reading on-disk structs using zerocopy.
///
/// Requires the struct to implement the zerocopy read traits for safe
/// conversion from raw bytes.
pub trait VolumeIOStructExt: VolumeIO {
    /// Reads a struct of type `T` from the given offset.
    fn read_struct<T: zerocopy::FromBytes + zerocopy::KnownLayout + zerocopy::Immutable>(
        &mut self,
        offset: u64,
    ) -> VolumeIOResult<T> {
        let size = core::mem::size_of::<T>();
        assert!(size <= BLOCK_BUF_SIZE, "read_struct: type too large");
        let mut buf = [0u8; BLOCK_BUF_SIZE];
        self.read_at(offset, &mut buf[..size])?;
        T::read_from_bytes(&buf[..size]).map_err(|_| VolumeIOError::Other("read_struct failed"))
    }
}

impl<T: VolumeIO + ?Sized> VolumeIOStructExt for T {}
