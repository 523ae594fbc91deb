//! Morphological token and span types.
//!
//! This module defines the core data structures for reading alignment:
//!
//! - [`MorphToken`] - one analyzer-segmented word, surface plus reading
//! - [`Span`] - a substring of the surface with an optional annotation
//! - [`ReadingOptions`] - caller-supplied per-call flags
//!
//! All values are created fresh per call and discarded after producing the
//! output string; there is no persistent state and no cross-call identity.
//!
//! # Examples
//!
//! ```
//! use yomigana::analysis::token::{MorphToken, Span};
//!
//! let token = MorphToken::new("千葉", "チバ");
//! assert_eq!(token.hira_reading(), "ちば");
//!
//! let span = Span::annotated("千葉", "ちば");
//! assert!(span.is_annotated());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::kana::to_hiragana;

/// Kanji numerals and full-width digits that never receive a reading when
/// `ignore_numerals` is set.
pub const NUMERAL_SET: &str = "一二三四五六七八九十０１２３４５６７８９";

/// Check whether a character belongs to the ignorable numeral set.
pub fn is_numeral(c: char) -> bool {
    NUMERAL_SET.contains(c)
}

/// One morphological unit from the analyzer: a surface form (mixed-script
/// text of one word) and its phonetic reading in katakana, possibly empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphToken {
    /// The original mixed-script text of one word.
    pub surface: String,

    /// The phonetic transcription in katakana; empty for unknown words.
    pub reading: String,
}

impl MorphToken {
    /// Create a new token from a surface form and its katakana reading.
    pub fn new<S: Into<String>, R: Into<String>>(surface: S, reading: R) -> Self {
        MorphToken {
            surface: surface.into(),
            reading: reading.into(),
        }
    }

    /// The reading normalized to hiragana.
    pub fn hira_reading(&self) -> String {
        to_hiragana(&self.reading)
    }

    /// Whether the analyzer supplied no reading for this token.
    pub fn has_reading(&self) -> bool {
        !self.reading.is_empty()
    }
}

impl fmt::Display for MorphToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.surface, self.reading)
    }
}

/// A substring of a token's surface form, optionally paired with the
/// phonetic annotation covering exactly that substring.
///
/// Invariant: `annotation` is present only if `text` contains at least one
/// character outside the kana blocks, or is an ambiguous small kana.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// A substring of the original surface form, as written.
    pub text: String,

    /// The hiragana reading for `text`, if it needs one.
    pub annotation: Option<String>,
}

impl Span {
    /// Create a plain span with no annotation.
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Span {
            text: text.into(),
            annotation: None,
        }
    }

    /// Create an annotated span.
    pub fn annotated<S: Into<String>, A: Into<String>>(text: S, annotation: A) -> Self {
        Span {
            text: text.into(),
            annotation: Some(annotation.into()),
        }
    }

    /// Check whether this span carries an annotation.
    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }
}

/// Per-call configuration flags supplied by the caller.
///
/// The core holds no configuration state of its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingOptions {
    /// Render annotations as `<ruby>` markup instead of bracket notation.
    pub use_ruby_tags: bool,

    /// Never attach readings to kanji numerals or full-width digits.
    pub ignore_numerals: bool,
}

impl ReadingOptions {
    /// Create options with both flags off (bracket mode, numerals annotated).
    pub fn new() -> Self {
        ReadingOptions::default()
    }

    /// Enable ruby markup output.
    pub fn with_ruby_tags(mut self, enabled: bool) -> Self {
        self.use_ruby_tags = enabled;
        self
    }

    /// Enable numeral skipping.
    pub fn with_ignore_numerals(mut self, enabled: bool) -> Self {
        self.ignore_numerals = enabled;
        self
    }
}
