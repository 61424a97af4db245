// SPDX-License-Identifier: MIT

use fatview_io::prelude::*;
use zerocopy::FromBytes as _;

use crate::{
    core::errors::*,
    fat::{
        constant::*,
        geometry::FatGeometry,
        types::{DirEntry, RawDirEntry},
    },
};

/// Read-only FAT12/16 parse session over a [`VolumeIO`] handle.
///
/// Opening reads and validates the boot sector once; root-directory
/// walks reuse the cached geometry and only touch the directory region.
pub struct FatParser<'a, IO: VolumeIO + ?Sized> {
    io: &'a mut IO,
    geometry: FatGeometry,
}

impl<'a, IO: VolumeIO + ?Sized> FatParser<'a, IO> {
    /// Parses the boot sector at the volume base and builds a session.
    pub fn open(io: &'a mut IO) -> FsGeometryResult<Self> {
        let geometry = FatGeometry::parse(io)?;
        Ok(Self { io, geometry })
    }

    /// Builds a session around an already-derived geometry, skipping the
    /// boot-sector read.
    pub fn with_geometry(io: &'a mut IO, geometry: FatGeometry) -> Self {
        Self { io, geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &FatGeometry {
        &self.geometry
    }

    /// Iterates the occupied root-directory slots in on-disk order.
    ///
    /// Deleted slots (0xE5) are skipped, the end marker (0x00) stops the
    /// walk, and everything else is yielded as-is, volume labels and
    /// long-name fragments included. Each call restarts from slot 0.
    pub fn root_entries(&mut self) -> RootDirIter<'_, IO> {
        RootDirIter {
            io: &mut *self.io,
            geometry: &self.geometry,
            index: 0,
            done: false,
        }
    }

    /// Byte offset of the entry's first data cluster on this volume.
    pub fn entry_data_offset(&self, entry: &DirEntry) -> Option<u64> {
        entry.data_offset(&self.geometry)
    }
}

/// Iterator over occupied root-directory slots.
///
/// An IO failure is yielded once as `Err` and fuses the iterator; a slot
/// that cannot be read in full surfaces as [`FsDirectoryError::TruncatedSlot`]
/// since the fixed-size region promised by the BPB is missing bytes.
pub struct RootDirIter<'a, IO: VolumeIO + ?Sized> {
    io: &'a mut IO,
    geometry: &'a FatGeometry,
    index: u16,
    done: bool,
}

impl<IO: VolumeIO + ?Sized> Iterator for RootDirIter<'_, IO> {
    type Item = FsDirectoryResult<DirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done && self.index < self.geometry.root_entry_count {
            let index = self.index;
            self.index += 1;

            let mut slot = [0u8; FAT_DIR_ENTRY_SIZE];
            if let Err(e) = self.io.read_at(self.geometry.slot_offset(index), &mut slot) {
                self.done = true;
                return Some(Err(match e {
                    VolumeIOError::OutOfBounds => FsDirectoryError::TruncatedSlot(index),
                    other => FsDirectoryError::IO(other),
                }));
            }

            match slot[0] {
                FAT_ENTRY_END_OF_DIR => {
                    self.done = true;
                    return None;
                }
                FAT_ENTRY_DELETED => continue,
                _ => {
                    // Infallible: the slot buffer is exactly one entry.
                    let raw = match RawDirEntry::read_from_bytes(&slot) {
                        Ok(raw) => raw,
                        Err(_) => {
                            self.done = true;
                            return Some(Err(FsDirectoryError::Invalid(
                                "Directory slot does not decode",
                            )));
                        }
                    };
                    return Some(Ok(DirEntry { raw, index }));
                }
            }
        }
        None
    }
}
