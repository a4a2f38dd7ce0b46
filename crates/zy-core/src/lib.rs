//! Core types for Zhouyi: lines, trigrams, and the King Wen hexagram table.
//!
//! This crate defines the data model that the casting engine produces results
//! in. It holds no randomness and no I/O — you can construct a [`Hexagram`]
//! from line values programmatically or deserialize one from JSON.

/// Error types used throughout the crate.
pub mod error;
/// Hexagram identity: lines, King Wen number, and the 64-entry name table.
pub mod hexagram;
/// The King Wen sequence lookup table.
pub mod kingwen;
/// Line values (old/young yin and yang) and their transformations.
pub mod line;
/// The eight trigrams and their traditional associations.
pub mod trigram;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export hexagram types.
pub use hexagram::{Hexagram, HexagramInfo};
/// Re-export the King Wen lookup.
pub use kingwen::king_wen_number;
/// Re-export line types.
pub use line::LineValue;
/// Re-export trigram types.
pub use trigram::Trigram;
