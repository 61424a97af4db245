// SPDX-License-Identifier: MIT

use crate::{VolumeIO, VolumeIOError, VolumeIOResult};

/// In-memory implementation of `VolumeIO`.
///
/// Useful for tests, RAM-backed images, virtual disks. The borrow is
/// immutable: the trait never writes.
#[derive(Debug)]
pub struct MemVolumeIO<'a> {
    buffer: &'a [u8],
    partition_offset: u64,
}

impl<'a> MemVolumeIO<'a> {
    #[inline]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            partition_offset: 0,
        }
    }

    #[inline]
    pub fn new_with_offset(buffer: &'a [u8], partition_offset: u64) -> Self {
        Self {
            buffer,
            partition_offset,
        }
    }

    #[inline]
    fn check_bounds(&self, abs_off: u64, len: usize) -> VolumeIOResult {
        let end = abs_off
            .checked_add(len as u64)
            .ok_or(VolumeIOError::OutOfBounds)?;
        if end > self.buffer.len() as u64 {
            return Err(VolumeIOError::OutOfBounds);
        }
        Ok(())
    }
}

impl<'a> VolumeIO for MemVolumeIO<'a> {
    #[inline(always)]
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> VolumeIOResult {
        let abs_offset = self
            .partition_offset
            .checked_add(offset)
            .ok_or(VolumeIOError::OutOfBounds)?;
        self.check_bounds(abs_offset, buf.len())?;
        let src = &self.buffer[abs_offset as usize..abs_offset as usize + buf.len()];
        buf.copy_from_slice(src);
        Ok(())
    }

    #[inline]
    fn set_offset(&mut self, partition_offset: u64) -> u64 {
        self.partition_offset = partition_offset;
        partition_offset
    }

    #[inline]
    fn partition_offset(&self) -> u64 {
        self.partition_offset
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_read() {
        let buf: Vec<u8> = (0..=255).collect();
        let mut io = MemVolumeIO::new(&buf);

        let mut output = [0u8; 4];
        io.read_at(10, &mut output).unwrap();
        assert_eq!(output, [10, 11, 12, 13]);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let buf = [0u8; 16];
        let mut io = MemVolumeIO::new(&buf);

        let mut output = [0u8; 4];
        assert_eq!(
            io.read_at(14, &mut output),
            Err(VolumeIOError::OutOfBounds)
        );
        assert_eq!(
            io.read_at(u64::MAX, &mut output),
            Err(VolumeIOError::OutOfBounds)
        );
    }

    #[test]
    fn test_partition_offset() {
        let mut buf = vec![0u8; 64];
        buf[40] = 0xAB;
        let mut io = MemVolumeIO::new_with_offset(&buf, 32);

        assert_eq!(io.partition_offset(), 32);
        let mut output = [0u8; 1];
        io.read_at(8, &mut output).unwrap();
        assert_eq!(output, [0xAB]);

        // Offsets are relative to the partition base, so the buffer end
        // moves in as the base moves out.
        assert_eq!(
            io.read_at(33, &mut output),
            Err(VolumeIOError::OutOfBounds)
        );
    }

    #[test]
    fn test_primitive_reads_are_little_endian() {
        let buf = [0x4F, 0x6B, 0x01, 0x02, 0x03, 0x04];
        let mut io = MemVolumeIO::new(&buf);

        assert_eq!(io.read_u8_at(0).unwrap(), 0x4F);
        assert_eq!(io.read_u16_at(0).unwrap(), 0x6B4F);
        assert_eq!(io.read_u32_at(2).unwrap(), 0x04030201);
    }

    #[test]
    fn test_primitive_read_weight_sum() {
        // A little-endian integer is the byte-weighted sum b[i] * 256^i.
        let buf = [1u8, 2, 3, 4];
        let mut io = MemVolumeIO::new(&buf);

        let expected: u32 = buf
            .iter()
            .enumerate()
            .map(|(i, &b)| b as u32 * 256u32.pow(i as u32))
            .sum();
        assert_eq!(io.read_u32_at(0).unwrap(), expected);
    }

    #[test]
    fn test_primitive_read_truncated() {
        let buf = [0xFFu8; 3];
        let mut io = MemVolumeIO::new(&buf);

        assert_eq!(io.read_u32_at(0), Err(VolumeIOError::OutOfBounds));
        assert_eq!(io.read_u16_at(2), Err(VolumeIOError::OutOfBounds));
    }

    #[test]
    fn test_string_read_trims_fat_padding() {
        let buf = *b"MSDOS5.0NAME\0\0\0\0A B ";
        let mut io = MemVolumeIO::new(&buf);

        assert_eq!(io.read_string_at(0, 8).unwrap(), "MSDOS5.0");
        assert_eq!(io.read_string_at(8, 8).unwrap(), "NAME");
        // Interior spaces survive, only the trailing pad goes.
        assert_eq!(io.read_string_at(16, 4).unwrap(), "A B");
    }

    #[test]
    fn test_string_read_all_padding() {
        let buf = [b' '; 8];
        let mut io = MemVolumeIO::new(&buf);
        assert_eq!(io.read_string_at(0, 8).unwrap(), "");
    }
}
