// SPDX-License-Identifier: MIT

// === Disk Layout Parameters ===

pub const FAT_VBR_OFFSET: u64 = 0;
pub const FAT_SECTOR_SIZES: [u16; 4] = [512, 1024, 2048, 4096]; // BPB_BytsPerSec

// === Root Directory Parameters ===

pub const FAT_DIR_ENTRY_SIZE: usize = 32;
pub const FAT_ENTRY_END_OF_DIR: u8 = 0x00;
pub const FAT_ENTRY_DELETED: u8 = 0xE5;

// === Cluster Numbering ===

pub const FAT_FIRST_CLUSTER: u16 = 2; // clusters 0 and 1 are reserved
pub const FAT12_MAX_CLUSTERS: u32 = 4085; // fewer data clusters means FAT12

// === Timestamp Encoding ===

pub const FAT_EPOCH_YEAR: u16 = 1980; // year bias of the packed date word
