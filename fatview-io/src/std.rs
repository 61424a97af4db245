// SPDX-License-Identifier: MIT

#[cfg(feature = "std")]
use std::io::{Error, ErrorKind, Read, Seek, SeekFrom};

#[cfg(feature = "std")]
use crate::{VolumeIO, VolumeIOError, VolumeIOResult};

#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdVolumeIO<'a, T: Read + Seek> {
    io: &'a mut T,
    partition_offset: u64,
}

#[cfg(feature = "std")]
impl<'a, T: Read + Seek> StdVolumeIO<'a, T> {
    #[inline]
    pub fn new(io: &'a mut T) -> Self {
        Self {
            io,
            partition_offset: 0,
        }
    }

    #[inline]
    pub fn new_with_offset(io: &'a mut T, partition_offset: u64) -> Self {
        Self {
            io,
            partition_offset,
        }
    }
}

#[cfg(feature = "std")]
impl<'a, T: Read + Seek> VolumeIO for StdVolumeIO<'a, T> {
    fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> VolumeIOResult {
        let abs_offset = self
            .partition_offset
            .checked_add(offset)
            .ok_or(VolumeIOError::OutOfBounds)?;
        self.io.seek(SeekFrom::Start(abs_offset))?;
        self.io.read_exact(buf)?;
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

#[cfg(feature = "std")]
impl From<Error> for VolumeIOError {
    #[cold]
    #[inline(never)]
    fn from(e: Error) -> Self {
        // A short read is a truncated source, not an opaque IO failure.
        if e.kind() == ErrorKind::UnexpectedEof {
            return VolumeIOError::OutOfBounds;
        }
        // Leak the string to produce a 'static str. Acceptable for error mapping.
        let leaked_str: &'static str = Box::leak(e.to_string().into_boxed_str());
        VolumeIOError::Other(leaked_str)
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::prelude::*;
    use std::io::Write;
    use tempfile::tempfile;

    #[test]
    fn test_read() {
        let mut file = tempfile().unwrap();
        file.write_all(&[0u8; 10]).unwrap();
        file.write_all(&[1, 2, 3, 4]).unwrap();

        let mut io = StdVolumeIO::new(&mut file);
        let mut output = [0u8; 4];
        io.read_at(10, &mut output).unwrap();
        assert_eq!(output, [1, 2, 3, 4]);
    }

    #[test]
    fn test_read_past_eof() {
        let mut file = tempfile().unwrap();
        file.write_all(&[0u8; 8]).unwrap();

        let mut io = StdVolumeIO::new(&mut file);
        let mut output = [0u8; 4];
        assert_eq!(io.read_at(6, &mut output), Err(VolumeIOError::OutOfBounds));
    }

    #[test]
    fn test_partition_offset() {
        let mut file = tempfile().unwrap();
        file.write_all(&[0u8; 32]).unwrap();
        file.write_all(&[0xCD]).unwrap();

        let mut io = StdVolumeIO::new_with_offset(&mut file, 32);
        assert_eq!(io.read_u8_at(0).unwrap(), 0xCD);
    }

    #[test]
    fn test_primitive_reads() {
        let mut file = tempfile().unwrap();
        file.write_all(&0xA1B2C3D4u32.to_le_bytes()).unwrap();

        let mut io = StdVolumeIO::new(&mut file);
        assert_eq!(io.read_u32_at(0).unwrap(), 0xA1B2C3D4);
        assert_eq!(io.read_u16_at(0).unwrap(), 0xC3D4);
    }

    #[test]
    fn test_string_read() {
        let mut file = tempfile().unwrap();
        file.write_all(b"FAT16   ").unwrap();

        let mut io = StdVolumeIO::new(&mut file);
        assert_eq!(io.read_string_at(0, 8).unwrap(), "FAT16");
    }
}
