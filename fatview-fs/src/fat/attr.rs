// SPDX-License-Identifier: MIT

bitflags::bitflags! {
    /// Attribute byte at offset 0x0B of a directory slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FatAttributes: u8 {
        const READ_ONLY = 0x01;
        const HIDDEN    = 0x02;
        const SYSTEM    = 0x04;
        const VOLUME_ID = 0x08;
        const DIRECTORY = 0x10;
        const ARCHIVE   = 0x20;
        const LFN       = 0x0F;
    }
}

impl FatAttributes {
    /// Long-filename fragments set all four low bits at once. They are
    /// recognized so callers can skip them, never decoded.
    #[inline]
    pub fn is_long_name(&self) -> bool {
        self.bits() & 0x3F == Self::LFN.bits()
    }
}
