//! # Yomigana
//!
//! Furigana annotation for Japanese text, backed by an external
//! MeCab-compatible morphological analyzer.
//!
//! ## Features
//!
//! - Minimal-span reading alignment (okurigana-aware, no dictionary needed)
//! - Ruby markup and bracket notation output
//! - HTML-safe: tags and literal spaces never reach the analyzer
//! - Complementary strip operation for both notations
//! - Long-lived analyzer process, one line in / one line out

pub mod analysis;
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod format;
pub mod reading;
pub mod segment;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
