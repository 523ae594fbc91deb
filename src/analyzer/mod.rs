//! Morphological analyzer adapters.
//!
//! The core pipeline consumes `surface[reading]` nodes from an external
//! analyzer; [`MorphAnalyzer`] is the seam between the two, so tests can
//! substitute an in-memory implementation for the real process adapter.

use crate::analysis::token::MorphToken;
use crate::error::Result;

/// Trait for analyzers that segment a sentence into morphological tokens.
///
/// One call analyzes one sentence (no embedded newlines) and returns the
/// token stream in surface order. Implementations are not required to be
/// safe for concurrent use; `&mut self` serializes callers.
pub trait MorphAnalyzer {
    /// Analyze the given text into morphological tokens.
    fn analyze(&mut self, text: &str) -> Result<Vec<MorphToken>>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod mecab;

pub use mecab::{MecabAnalyzer, MecabConfig};
