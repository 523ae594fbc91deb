//! Markup-safe segmentation of HTML-mixed sentences.
//!
//! The analyzer boundary-delimits its output nodes with ASCII spaces and
//! would happily tokenize the inside of HTML tags, so everything that must
//! survive the round trip verbatim is parsed up front into opaque
//! segments. Instead of substituting sentinel strings into the text (and
//! risking a sentinel colliding with genuine content), the input becomes a
//! typed sequence of [`Segment`]s; reassembly is a single linear emission
//! pass over that sequence, and no intermediate string ever contains a
//! placeholder token.
//!
//! # Examples
//!
//! ```
//! use yomigana::segment::{Segment, SegmentedText};
//!
//! let segmented = SegmentedText::parse("<b>種</b> をまく");
//! assert_eq!(
//!     segmented.segments(),
//!     &[
//!         Segment::Opaque("<b>".to_string()),
//!         Segment::Text("種".to_string()),
//!         Segment::Opaque("</b>".to_string()),
//!         Segment::Opaque(" ".to_string()),
//!         Segment::Text("をまく".to_string()),
//!     ]
//! );
//! ```

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;

lazy_static! {
    /// Anything the analyzer must never see: a `<br>`-family tag, any
    /// other HTML tag, or a literal ASCII space.
    static ref OPAQUE_PATTERN: Regex = Regex::new(r"(?i)<br ?/?>|<[^<]+?>|\x20").unwrap();
    static ref BR_TAG: Regex = Regex::new(r"(?i)^<br ?/?>$").unwrap();
    static ref BR_VARIANTS: Regex = Regex::new(r"< ?br ?>").unwrap();
    static ref NBSP_VARIANTS: Regex = Regex::new(r"& ?nbsp ?;").unwrap();
}

/// One segment of the input sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Analyzable Japanese text.
    Text(String),
    /// An HTML tag, a literal ASCII space, or a canonicalized `<br>`;
    /// emitted verbatim, never shown to the analyzer.
    Opaque(String),
}

/// A sentence split into analyzable and opaque segments, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentedText {
    segments: Vec<Segment>,
}

impl SegmentedText {
    /// Parse a plain/HTML-mixed sentence into segments.
    ///
    /// Newlines become spaces and the full-width wave dash (U+FF5E)
    /// becomes ASCII `~` before segmentation; both characters trip up the
    /// analyzer. `<br>`-family tags are canonicalized to `<br>`.
    pub fn parse(input: &str) -> SegmentedText {
        let prepared: String = input
            .replace("\r\n", " ")
            .replace(['\n', '\r'], " ")
            .replace('\u{FF5E}', "~");

        let mut segments = Vec::new();
        let mut last = 0;
        for found in OPAQUE_PATTERN.find_iter(&prepared) {
            if found.start() > last {
                segments.push(Segment::Text(prepared[last..found.start()].to_string()));
            }
            let piece = found.as_str();
            if BR_TAG.is_match(piece) {
                segments.push(Segment::Opaque("<br>".to_string()));
            } else {
                segments.push(Segment::Opaque(piece.to_string()));
            }
            last = found.end();
        }
        if last < prepared.len() {
            segments.push(Segment::Text(prepared[last..].to_string()));
        }

        SegmentedText { segments }
    }

    /// The parsed segments, in input order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Reassemble the sentence, passing each text segment through `f` and
    /// emitting opaque segments verbatim. One linear pass, in order.
    pub fn render<F>(&self, mut f: F) -> Result<String>
    where
        F: FnMut(&str) -> Result<String>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Opaque(s) => out.push_str(s),
                Segment::Text(t) => out.push_str(&f(t)?),
            }
        }
        Ok(out)
    }
}

/// Normalize residual artifacts in the reassembled sentence: trim outer
/// whitespace, drop a stray space right after `>`, and collapse damaged
/// `<br>` / `&nbsp;` variants left over from markup reconstruction.
pub fn cleanup(s: &str) -> String {
    let trimmed = s.trim();
    let no_tag_space = trimmed.replace("> ", ">");
    let br_fixed = BR_VARIANTS.replace_all(&no_tag_space, "<br>");
    NBSP_VARIANTS.replace_all(&br_fixed, " ").into_owned()
}
