// === Sub-modules ===
pub mod errors;
mod macros;

// === Error types ===
pub use errors::*;
