// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core Modules
pub mod core;
pub mod fat;

// Reusable error types
pub use crate::core::errors::*;

/// FAT12/16 read-only parsing API.
///
/// See [`fat::FatGeometry`], [`fat::FatParser`], and [`fat::DirEntry`].
pub use crate::fat::prelude::*;
