//! Casting engine for Zhouyi.
//!
//! Implements the two classical divination methods (yarrow stalks and three
//! coins) as weighted draws from an injected random source, derives the
//! primary and transformed hexagrams, and assembles full readings. Session
//! state — the random source and the reading history — is owned by an
//! explicit [`DivinationSession`], never by a global.

/// Line generation and cast results.
pub mod cast;
/// Session configuration.
pub mod config;
/// Error types for the casting engine.
pub mod error;
/// Append-only reading history with export.
pub mod history;
/// Divination methods and their string forms.
pub mod method;
/// Reading assembly and text rendering.
pub mod reading;
/// Interactive session state.
pub mod session;
/// Injectable random sources.
pub mod source;

pub use cast::{CastResult, cast};
pub use config::DivinationConfig;
pub use error::{DivinationError, DivinationResult};
pub use history::{History, HistoryEntry};
pub use method::Method;
pub use reading::Reading;
pub use session::DivinationSession;
pub use source::{RandomSource, ReplaySource, SeededSource};
