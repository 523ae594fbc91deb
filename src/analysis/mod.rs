//! Text analysis module for Yomigana.
//!
//! This module provides the core reading-alignment functionality: kana
//! script classification and normalization, the morphological token data
//! model, and the surface/reading aligner that produces minimal annotated
//! spans.

pub mod align;
pub mod kana;
pub mod token;

// Re-export commonly used types
pub use align::*;
pub use kana::*;
pub use token::*;
