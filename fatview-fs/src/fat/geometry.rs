// SPDX-License-Identifier: MIT

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::string::String;

use fatview_io::prelude::*;

use crate::{
    core::errors::*,
    ensure,
    fat::{constant::*, types::FatBpb, utils},
};

/// FAT12 and FAT16 differ only in FAT-entry width; the boot sector and
/// root directory region are identical. The variant is determined by the
/// data-cluster count, not by any stored flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatKind {
    Fat12,
    Fat16,
}

/// Volume geometry derived once from the BPB.
///
/// Immutable for the lifetime of a parse session; every region offset is
/// precomputed in bytes so later reads are plain offset arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatGeometry {
    pub oem_name: [u8; 8],
    pub bytes_per_sector: u16,
    pub sectors_per_cluster: u8,
    pub reserved_sectors: u16,
    pub fat_count: u8,
    pub root_entry_count: u16,
    pub sectors_per_fat: u16,
    pub media: u8,
    /// Resolved total: the 16-bit word, or the dword at 0x20 when the
    /// word is zero.
    pub total_sectors: u32,

    pub bytes_per_cluster: u32,
    pub fat_offset: u64,
    pub bytes_per_fat: u64,
    pub root_dir_offset: u64,
    pub data_offset: u64,
    pub cluster_count: u32,
}

impl FatGeometry {
    /// Reads and validates the boot sector at the volume base. The handle
    /// is only borrowed for the read; the result owns no IO state.
    pub fn parse<IO: VolumeIO + ?Sized>(io: &mut IO) -> FsGeometryResult<Self> {
        let bpb: FatBpb = io.read_struct(FAT_VBR_OFFSET)?;
        Self::from_bpb(&bpb)
    }

    /// Derives the region layout from raw BPB fields.
    ///
    /// Offsets grow monotonically (FAT region, then root directory, then
    /// data) because each is the previous plus an unsigned extent; the
    /// only way a BPB can break that is 64-bit overflow, which is
    /// rejected rather than wrapped.
    pub fn from_bpb(bpb: &FatBpb) -> FsGeometryResult<Self> {
        let bytes_per_sector = bpb.bytes_per_sector;
        let sectors_per_cluster = bpb.sectors_per_cluster;

        ensure!(
            FAT_SECTOR_SIZES.contains(&bytes_per_sector),
            FsGeometryError::InvalidSectorSize(bytes_per_sector)
        );
        ensure!(
            sectors_per_cluster > 0 && sectors_per_cluster.is_power_of_two(),
            FsGeometryError::InvalidClusterSize(sectors_per_cluster)
        );
        ensure!(bpb.num_fats > 0, FsGeometryError::NoFats);
        // Zero root entries means a FAT32-style root directory living in
        // the cluster heap, which this parser does not handle.
        ensure!(bpb.root_entry_count > 0, FsGeometryError::NoRootDirectory);

        // BPB_TotSec16 == 0 is the sentinel for "the real count is the
        // 32-bit field at 0x20".
        let total_sectors = if bpb.total_sectors_16 != 0 {
            bpb.total_sectors_16 as u32
        } else {
            bpb.total_sectors_32
        };

        let bps = bytes_per_sector as u64;
        let fat_offset = bpb.reserved_sectors as u64 * bps;
        let bytes_per_fat = bps * bpb.sectors_per_fat as u64;
        let root_dir_offset = bytes_per_fat
            .checked_mul(bpb.num_fats as u64)
            .and_then(|fat_region| fat_offset.checked_add(fat_region))
            .ok_or(FsGeometryError::LayoutOverflow)?;
        let data_offset = root_dir_offset
            .checked_add(FAT_DIR_ENTRY_SIZE as u64 * bpb.root_entry_count as u64)
            .ok_or(FsGeometryError::LayoutOverflow)?;
        let bytes_per_cluster = bytes_per_sector as u32 * sectors_per_cluster as u32;

        // Sectors left for the cluster heap once the reserved, FAT and
        // root-directory regions are taken out.
        let root_dir_sectors =
            (bpb.root_entry_count as u64 * FAT_DIR_ENTRY_SIZE as u64).div_ceil(bps);
        let meta_sectors = bpb.reserved_sectors as u64
            + bpb.num_fats as u64 * bpb.sectors_per_fat as u64
            + root_dir_sectors;
        let data_sectors = (total_sectors as u64).saturating_sub(meta_sectors);
        let cluster_count = (data_sectors / sectors_per_cluster as u64) as u32;

        Ok(Self {
            oem_name: bpb.oem_name,
            bytes_per_sector,
            sectors_per_cluster,
            reserved_sectors: bpb.reserved_sectors,
            fat_count: bpb.num_fats,
            root_entry_count: bpb.root_entry_count,
            sectors_per_fat: bpb.sectors_per_fat,
            media: bpb.media,
            total_sectors,
            bytes_per_cluster,
            fat_offset,
            bytes_per_fat,
            root_dir_offset,
            data_offset,
            cluster_count,
        })
    }

    /// OEM label with the trailing padding removed.
    #[cfg(feature = "alloc")]
    pub fn oem_label(&self) -> String {
        String::from_utf8_lossy(utils::trim_padding(&self.oem_name)).into_owned()
    }

    #[inline]
    pub fn kind(&self) -> FatKind {
        if self.cluster_count < FAT12_MAX_CLUSTERS {
            FatKind::Fat12
        } else {
            FatKind::Fat16
        }
    }

    #[inline]
    pub fn volume_size_bytes(&self) -> u64 {
        self.total_sectors as u64 * self.bytes_per_sector as u64
    }

    /// Byte offset of root-directory slot `index`.
    #[inline]
    pub fn slot_offset(&self, index: u16) -> u64 {
        self.root_dir_offset + index as u64 * FAT_DIR_ENTRY_SIZE as u64
    }

    /// Byte offset of a data cluster, or `None` for the reserved cluster
    /// numbers 0 and 1, which never address data.
    pub fn cluster_offset(&self, cluster: u16) -> Option<u64> {
        if cluster < FAT_FIRST_CLUSTER {
            return None;
        }
        Some(
            self.data_offset
                + (cluster - FAT_FIRST_CLUSTER) as u64 * self.bytes_per_cluster as u64,
        )
    }
}
