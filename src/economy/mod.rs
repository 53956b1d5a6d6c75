//! Economy catalog: upgrade definitions, prices and per-level effects.

pub mod catalog;
pub mod types;

pub use catalog::*;
pub use types::*;
