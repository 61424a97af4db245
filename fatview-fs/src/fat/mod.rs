pub mod attr;
pub mod constant;
pub mod geometry;
pub mod parser;
pub mod types;
pub mod utils;

// === Public Interface ===
pub mod prelude {
    pub use super::attr::FatAttributes;
    pub use super::geometry::{FatGeometry, FatKind};
    pub use super::parser::{FatParser, RootDirIter};
    pub use super::types::{DirEntry, FatBpb, RawDirEntry};
    pub use super::utils::{FatDate, FatTime};
    pub use crate::core::errors::*;
    pub use fatview_io::prelude::*;
}
