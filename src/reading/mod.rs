//! The per-sentence annotation pipeline.
//!
//! [`ReadingGenerator`] wires the pieces together: segment the input so
//! markup and literal spaces never reach the analyzer, tokenize each text
//! segment, align every token's reading against its surface, render the
//! spans in the requested notation, and reassemble in one linear pass.
//!
//! Both operations report whether they actually changed anything —
//! "no change produced" is not an error, but callers use it to drive
//! user-facing feedback.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::align::align;
use crate::analysis::token::ReadingOptions;
use crate::analyzer::MorphAnalyzer;
use crate::error::Result;
use crate::format::{format_spans, strip};
use crate::segment::{cleanup, SegmentedText};

/// The outcome of an annotate or strip call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingOutput {
    /// The transformed sentence.
    pub text: String,

    /// Whether the output differs from the input.
    pub changed: bool,
}

/// Sentence-level furigana generator backed by a morphological analyzer.
///
/// Owns its analyzer handle; construct one per worker and reuse it — the
/// underlying process is long-lived and calls are serialized by
/// `&mut self`.
pub struct ReadingGenerator<A: MorphAnalyzer> {
    analyzer: A,
}

impl<A: MorphAnalyzer> ReadingGenerator<A> {
    /// Create a generator around an analyzer handle.
    pub fn new(analyzer: A) -> Self {
        ReadingGenerator { analyzer }
    }

    /// Consume the generator, returning the analyzer handle.
    pub fn into_inner(self) -> A {
        self.analyzer
    }

    /// Annotate one sentence with furigana.
    pub fn annotate(&mut self, input: &str, options: &ReadingOptions) -> Result<ReadingOutput> {
        let segmented = SegmentedText::parse(input);
        let analyzer = &mut self.analyzer;

        let rendered = segmented.render(|text| {
            let tokens = analyzer.analyze(text)?;
            debug!("{} tokens for segment {text:?}", tokens.len());
            let mut out = String::new();
            for token in &tokens {
                let spans = align(&token.surface, &token.reading, options.ignore_numerals)?;
                out.push_str(&format_spans(&spans, options.use_ruby_tags));
            }
            Ok(out)
        })?;

        let text = cleanup(&rendered);
        let changed = text != input;
        Ok(ReadingOutput { text, changed })
    }

    /// Strip any existing furigana, then annotate from scratch.
    ///
    /// Makes repeated generation idempotent: stale annotations never stack
    /// on top of each other.
    pub fn regenerate(&mut self, input: &str, options: &ReadingOptions) -> Result<ReadingOutput> {
        let stripped = strip(input);
        let mut output = self.annotate(&stripped, options)?;
        output.changed = output.text != input;
        Ok(output)
    }
}

/// Remove furigana in either notation. A pure Reassembler-only pass; no
/// analyzer involved.
pub fn strip_furigana(input: &str) -> ReadingOutput {
    let text = strip(input);
    ReadingOutput {
        changed: text != input,
        text,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::analysis::token::MorphToken;
    use crate::error::YomiganaError;

    /// In-memory analyzer double keyed by segment text.
    struct StubAnalyzer {
        sentences: HashMap<String, Vec<MorphToken>>,
    }

    impl StubAnalyzer {
        fn new(entries: &[(&str, &[(&str, &str)])]) -> Self {
            let sentences = entries
                .iter()
                .map(|(text, tokens)| {
                    (
                        text.to_string(),
                        tokens
                            .iter()
                            .map(|(s, r)| MorphToken::new(*s, *r))
                            .collect(),
                    )
                })
                .collect();
            StubAnalyzer { sentences }
        }
    }

    impl MorphAnalyzer for StubAnalyzer {
        fn analyze(&mut self, text: &str) -> Result<Vec<MorphToken>> {
            self.sentences
                .get(text)
                .cloned()
                .ok_or_else(|| YomiganaError::other(format!("no stub tokens for {text:?}")))
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    #[test]
    fn test_annotate_simple() {
        let analyzer = StubAnalyzer::new(&[("千葉", &[("千葉", "チバ")])]);
        let mut generator = ReadingGenerator::new(analyzer);

        let output = generator
            .annotate("千葉", &ReadingOptions::new())
            .unwrap();
        assert_eq!(output.text, "千葉[ちば]");
        assert!(output.changed);
    }

    #[test]
    fn test_annotate_reports_no_change() {
        let analyzer = StubAnalyzer::new(&[(
            "ウィキペディア",
            &[("ウィキペディア", "ウィキペディア")],
        )]);
        let mut generator = ReadingGenerator::new(analyzer);

        let output = generator
            .annotate("ウィキペディア", &ReadingOptions::new())
            .unwrap();
        assert_eq!(output.text, "ウィキペディア");
        assert!(!output.changed);
    }

    #[test]
    fn test_annotate_preserves_markup() {
        let analyzer = StubAnalyzer::new(&[
            ("日本語", &[("日本語", "ニホンゴ")]),
            ("を勉強する", &[("を", "ヲ"), ("勉強", "ベンキョウ"), ("する", "スル")]),
        ]);
        let mut generator = ReadingGenerator::new(analyzer);

        // Cleanup drops the stray space after a closing tag.
        let output = generator
            .annotate("<b>日本語</b> を勉強する", &ReadingOptions::new())
            .unwrap();
        assert_eq!(output.text, "<b>日本語[にほんご]</b>を勉強[べんきょう]する");
    }

    #[test]
    fn test_annotate_ruby_mode() {
        let analyzer = StubAnalyzer::new(&[("千葉", &[("千葉", "チバ")])]);
        let mut generator = ReadingGenerator::new(analyzer);

        let output = generator
            .annotate("千葉", &ReadingOptions::new().with_ruby_tags(true))
            .unwrap();
        assert_eq!(
            output.text,
            "<ruby>千葉<rp>(</rp><rt>ちば</rt><rp>)</rp></ruby>"
        );
    }

    #[test]
    fn test_annotate_propagates_alignment_failure() {
        let analyzer = StubAnalyzer::new(&[("書き込む", &[("書き込む", "カキ")])]);
        let mut generator = ReadingGenerator::new(analyzer);

        let err = generator
            .annotate("書き込む", &ReadingOptions::new())
            .unwrap_err();
        assert!(matches!(err, YomiganaError::Alignment(_)));
    }

    #[test]
    fn test_regenerate_replaces_stale_readings() {
        let analyzer = StubAnalyzer::new(&[("千葉", &[("千葉", "チバ")])]);
        let mut generator = ReadingGenerator::new(analyzer);

        let output = generator
            .regenerate("千葉[ちばちば]", &ReadingOptions::new())
            .unwrap();
        assert_eq!(output.text, "千葉[ちば]");
        assert!(output.changed);

        let output = generator
            .regenerate("千葉[ちば]", &ReadingOptions::new())
            .unwrap();
        assert_eq!(output.text, "千葉[ちば]");
        assert!(!output.changed);
    }

    #[test]
    fn test_strip_furigana_outcome() {
        let output = strip_furigana("千葉[ちば]");
        assert_eq!(output.text, "千葉");
        assert!(output.changed);

        let output = strip_furigana("千葉");
        assert_eq!(output.text, "千葉");
        assert!(!output.changed);
    }
}
