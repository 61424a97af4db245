// SPDX-License-Identifier: MIT

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// FAT12/16 BIOS Parameter Block: the fixed-layout head of the boot
/// sector, bytes 0x00-0x23. All multi-byte fields are little-endian.
///
/// The extended BPB that follows (drive number, volume label, FS type
/// string) is advisory and not needed to lay the volume out.
#[derive(IntoBytes, FromBytes, KnownLayout, Immutable, Copy, Clone, Debug)]
#[repr(C, packed)]
pub struct FatBpb {
    pub jump_boot: [u8; 3],
    pub oem_name: [u8; 8],       // BS_OEMName, 0x03
    pub bytes_per_sector: u16,   // BPB_BytsPerSec, 0x0B
    pub sectors_per_cluster: u8, // BPB_SecPerClus, 0x0D
    pub reserved_sectors: u16,   // BPB_RsvdSecCnt, 0x0E
    pub num_fats: u8,            // BPB_NumFATs, 0x10
    pub root_entry_count: u16,   // BPB_RootEntCnt, 0x11
    pub total_sectors_16: u16,   // BPB_TotSec16, 0x13
    pub media: u8,               // BPB_Media, 0x15
    pub sectors_per_fat: u16,    // BPB_FATSz16, 0x16
    pub sectors_per_track: u16,  // BPB_SecPerTrk (CHS hint)
    pub num_heads: u16,          // BPB_NumHeads (CHS hint)
    pub hidden_sectors: u32,     // BPB_HiddSec
    pub total_sectors_32: u32,   // BPB_TotSec32, 0x20
}

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::IntoBytes as _;

    #[test]
    fn test_bpb_layout() {
        assert_eq!(core::mem::size_of::<FatBpb>(), 0x24);

        let bpb = FatBpb {
            jump_boot: [0xEB, 0x3C, 0x90],
            oem_name: *b"MSDOS5.0",
            bytes_per_sector: 512,
            sectors_per_cluster: 1,
            reserved_sectors: 1,
            num_fats: 2,
            root_entry_count: 224,
            total_sectors_16: 2880,
            media: 0xF0,
            sectors_per_fat: 9,
            sectors_per_track: 18,
            num_heads: 2,
            hidden_sectors: 0,
            total_sectors_32: 0,
        };
        let raw = bpb.as_bytes();

        // Field offsets must line up with the on-disk table.
        assert_eq!(&raw[0x03..0x0B], b"MSDOS5.0");
        assert_eq!(u16::from_le_bytes([raw[0x0B], raw[0x0C]]), 512);
        assert_eq!(raw[0x0D], 1);
        assert_eq!(u16::from_le_bytes([raw[0x0E], raw[0x0F]]), 1);
        assert_eq!(raw[0x10], 2);
        assert_eq!(u16::from_le_bytes([raw[0x11], raw[0x12]]), 224);
        assert_eq!(u16::from_le_bytes([raw[0x13], raw[0x14]]), 2880);
        assert_eq!(raw[0x15], 0xF0);
        assert_eq!(u16::from_le_bytes([raw[0x16], raw[0x17]]), 9);
        assert_eq!(
            u32::from_le_bytes([raw[0x20], raw[0x21], raw[0x22], raw[0x23]]),
            0
        );
    }
}
