// SPDX-License-Identifier: MIT

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::string::String;

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fat::{attr::FatAttributes, geometry::FatGeometry, utils};

/// One 32-byte short (8.3) directory slot, as stored on disk.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Copy, Clone, Debug)]
#[repr(C, packed)]
pub struct RawDirEntry {
    pub name: [u8; 8],           // 0x00
    pub ext: [u8; 3],            // 0x08
    pub attr: u8,                // 0x0B
    pub nt_reserved: u8,         // 0x0C
    pub creation_time_tenth: u8, // 0x0D, 10ms units (0-199)
    pub creation_time: u16,      // 0x0E
    pub creation_date: u16,      // 0x10
    pub access_date: u16,        // 0x12
    pub first_cluster_high: u16, // 0x14, always zero on FAT12/16
    pub write_time: u16,         // 0x16
    pub write_date: u16,         // 0x18
    pub first_cluster_low: u16,  // 0x1A
    pub file_size: u32,          // 0x1C
}

/// A decoded, occupied root-directory slot.
///
/// Holds no back-reference to the geometry that produced it; pass the
/// geometry alongside where a derived offset is needed.
#[derive(Debug, Clone, Copy)]
pub struct DirEntry {
    pub(crate) raw: RawDirEntry,
    pub(crate) index: u16,
}

impl DirEntry {
    /// Slot index within the root directory region.
    #[inline]
    pub fn index(&self) -> u16 {
        self.index
    }

    #[inline]
    pub fn raw(&self) -> &RawDirEntry {
        &self.raw
    }

    /// Base name with the trailing space padding removed.
    #[cfg(feature = "alloc")]
    pub fn name(&self) -> String {
        String::from_utf8_lossy(utils::trim_padding(&self.raw.name)).into_owned()
    }

    /// Extension with the trailing space padding removed.
    #[cfg(feature = "alloc")]
    pub fn extension(&self) -> String {
        String::from_utf8_lossy(utils::trim_padding(&self.raw.ext)).into_owned()
    }

    /// `NAME.EXT`, or just `NAME` when the extension field is blank.
    #[cfg(feature = "alloc")]
    pub fn file_name(&self) -> String {
        utils::decode_name(&self.raw.name, &self.raw.ext)
    }

    #[inline]
    pub fn attributes(&self) -> FatAttributes {
        FatAttributes::from_bits_truncate(self.raw.attr)
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.attributes().contains(FatAttributes::READ_ONLY)
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.attributes().contains(FatAttributes::HIDDEN)
    }

    #[inline]
    pub fn is_system(&self) -> bool {
        self.attributes().contains(FatAttributes::SYSTEM)
    }

    #[inline]
    pub fn is_volume_label(&self) -> bool {
        self.attributes().contains(FatAttributes::VOLUME_ID) && !self.is_long_name()
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.attributes().contains(FatAttributes::DIRECTORY)
    }

    #[inline]
    pub fn is_archive(&self) -> bool {
        self.attributes().contains(FatAttributes::ARCHIVE)
    }

    /// True for long-filename fragments, which carry name data rather
    /// than file metadata.
    #[inline]
    pub fn is_long_name(&self) -> bool {
        self.attributes().is_long_name()
    }

    pub fn created_time(&self) -> utils::FatTime {
        let raw_time = self.raw.creation_time;
        utils::decode_time(raw_time, self.raw.creation_time_tenth)
    }

    pub fn created_date(&self) -> utils::FatDate {
        let raw_date = self.raw.creation_date;
        utils::decode_date(raw_date)
    }

    /// Creation instant as a calendar datetime, or `None` when the
    /// on-disk words do not name a real date or time.
    pub fn created_datetime(&self) -> Option<time::PrimitiveDateTime> {
        utils::to_datetime(self.created_date(), self.created_time())
    }

    /// Meaningful only when the entry is not a directory.
    #[inline]
    pub fn file_size(&self) -> u32 {
        self.raw.file_size
    }

    /// First data cluster. FAT12/16 keeps only the low word; the high
    /// word at 0x14 is reserved.
    #[inline]
    pub fn first_cluster(&self) -> u16 {
        self.raw.first_cluster_low
    }

    /// Byte offset of the entry's first data cluster, or `None` for the
    /// reserved cluster numbers 0 and 1 (labels and empty files).
    ///
    /// Following the cluster chain to read content is out of scope here;
    /// this is the anchor a content reader would start from.
    pub fn data_offset(&self, geometry: &FatGeometry) -> Option<u64> {
        geometry.cluster_offset(self.first_cluster())
    }
}
