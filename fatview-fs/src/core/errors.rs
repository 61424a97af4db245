// SPDX-License-Identifier: MIT

use core::fmt;

pub use fatview_io::errors::*;

/// Boot-sector decode failures: the raw bytes were readable but do not
/// describe a FAT12/16 volume this crate can lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsGeometryError {
    IO(VolumeIOError),
    InvalidSectorSize(u16),
    InvalidClusterSize(u8),
    /// Zero root entries: a FAT32-style root directory, out of scope.
    NoRootDirectory,
    NoFats,
    /// Region offsets no longer grow monotonically (only reachable by
    /// arithmetic overflow from a hostile BPB).
    LayoutOverflow,
    Other(&'static str),
}

impl FsGeometryError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsGeometryError::IO(_) => "IO error",
            FsGeometryError::InvalidSectorSize(_) => "Invalid bytes per sector",
            FsGeometryError::InvalidClusterSize(_) => "Invalid sectors per cluster",
            FsGeometryError::NoRootDirectory => "Zero root entry count",
            FsGeometryError::NoFats => "Zero FAT count",
            FsGeometryError::LayoutOverflow => "Region layout overflows",
            FsGeometryError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<FsError> {
        match self {
            FsGeometryError::IO(e) => Some(FsError::IO(*e)),
            _ => None,
        }
    }
}

impl fmt::Display for FsGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        match self {
            FsGeometryError::InvalidSectorSize(v) => write!(f, " ({v})")?,
            FsGeometryError::InvalidClusterSize(v) => write!(f, " ({v})")?,
            _ => {}
        }
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

/// Root-directory walk failures. A slot that cannot be fully read is
/// terminal: it means the region itself is truncated, not that one entry
/// is bad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsDirectoryError {
    IO(VolumeIOError),
    TruncatedSlot(u16),
    Invalid(&'static str),
    Other(&'static str),
}

impl FsDirectoryError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsDirectoryError::IO(_) => "IO error",
            FsDirectoryError::TruncatedSlot(_) => "Directory slot only partially readable",
            FsDirectoryError::Invalid(msg) => msg,
            FsDirectoryError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<FsError> {
        match self {
            FsDirectoryError::IO(e) => Some(FsError::IO(*e)),
            _ => None,
        }
    }
}

impl fmt::Display for FsDirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        if let FsDirectoryError::TruncatedSlot(index) = self {
            write!(f, " (slot: {index})")?;
        }
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

/// Top-level error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    IO(VolumeIOError),
    Geometry(FsGeometryError),
    Directory(FsDirectoryError),
    Other(&'static str),
}

impl FsError {
    pub fn msg(&self) -> &'static str {
        match self {
            FsError::IO(e) => e.msg(),
            FsError::Geometry(e) => e.msg(),
            FsError::Directory(e) => e.msg(),
            FsError::Other(msg) => msg,
        }
    }

    pub fn source(&self) -> Option<FsError> {
        match self {
            FsError::Geometry(e) => e.source(),
            FsError::Directory(e) => e.source(),
            FsError::IO(_) => None,
            FsError::Other(_) => None,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())?;
        let mut current = self.source();
        while let Some(src) = current {
            write!(f, "\n  caused by: {}", src.msg())?;
            current = src.source();
        }
        Ok(())
    }
}

// === type Fs*Result ===

pub type FsResult<T = ()> = Result<T, FsError>;
pub type FsGeometryResult<T = ()> = Result<T, FsGeometryError>;
pub type FsDirectoryResult<T = ()> = Result<T, FsDirectoryError>;

crate::fs_error_wiring! {
    top => FsError {
        VolumeIOError    : IO,
        FsGeometryError  : Geometry,
        FsDirectoryError : Directory,
    },
    str_into => [
        FsGeometryError,
        FsDirectoryError,
    ],
    sub => {
        VolumeIOError => [ FsGeometryError::IO, FsDirectoryError::IO ],
    },
}
