//! Rendering of aligned spans and the complementary strip operation.
//!
//! Two output notations are supported:
//!
//! - Ruby markup: `<ruby>漢字<rp>(</rp><rt>かんじ</rt><rp>)</rp></ruby>`
//! - Bracket notation: `漢字[かんじ]`
//!
//! [`strip`] removes both notations regardless of which one produced the
//! text, so callers are decoupled from the configuration that was active
//! when the furigana was generated.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::token::Span;

lazy_static! {
    static ref RUBY_BLOCK: Regex = Regex::new(r"<ruby>(.*?)</ruby>").unwrap();
    static ref RUBY_ANNOTATION: Regex = Regex::new(r"<rp>[^<]*</rp>|<rt>[^<]*</rt>").unwrap();
    static ref BRACKET_GROUP: Regex = Regex::new(r"\[[^\]]*\]").unwrap();
}

/// Render a span list in the requested notation, concatenated with no
/// separators.
pub fn format_spans(spans: &[Span], use_ruby_tags: bool) -> String {
    let mut out = String::new();
    for span in spans {
        match &span.annotation {
            None => out.push_str(&span.text),
            Some(annotation) => {
                if use_ruby_tags {
                    out.push_str("<ruby>");
                    out.push_str(&span.text);
                    out.push_str("<rp>(</rp><rt>");
                    out.push_str(annotation);
                    out.push_str("</rt><rp>)</rp></ruby>");
                } else {
                    out.push_str(&span.text);
                    out.push('[');
                    out.push_str(annotation);
                    out.push(']');
                }
            }
        }
    }
    out
}

/// Remove furigana in either notation, leaving the base text unchanged.
///
/// Ruby blocks keep their body with `<rp>`/`<rt>` content dropped (the
/// `<rp>` parts are optional per the HTML spec and tolerated either way).
/// If bracket notation is present, ASCII spaces are removed first: legacy
/// generators used them as ruby-base separators and they carry no content.
/// Unrelated HTML is preserved. Idempotent.
pub fn strip(text: &str) -> String {
    let stripped = RUBY_BLOCK.replace_all(text, |caps: &regex::Captures| {
        RUBY_ANNOTATION.replace_all(&caps[1], "").into_owned()
    });

    let stripped = if stripped.contains('[') {
        stripped.replace(' ', "")
    } else {
        stripped.into_owned()
    };

    BRACKET_GROUP.replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<Span> {
        vec![
            Span::plain("みじん"),
            Span::annotated("切", "ぎ"),
            Span::plain("り"),
        ]
    }

    #[test]
    fn test_bracket_mode() {
        assert_eq!(format_spans(&spans(), false), "みじん切[ぎ]り");
        assert_eq!(
            format_spans(&[Span::annotated("千葉", "ちば")], false),
            "千葉[ちば]"
        );
    }

    #[test]
    fn test_bracket_mode_consecutive_annotations() {
        let spans = vec![
            Span::annotated("彼", "かれ"),
            Span::plain("二"),
            Span::annotated("千", "せん"),
        ];
        assert_eq!(format_spans(&spans, false), "彼[かれ]二千[せん]");
    }

    #[test]
    fn test_ruby_mode() {
        assert_eq!(
            format_spans(&spans(), true),
            "みじん<ruby>切<rp>(</rp><rt>ぎ</rt><rp>)</rp></ruby>り"
        );
    }

    #[test]
    fn test_strip_empty_string() {
        assert_eq!(strip(""), "");
    }

    #[test]
    fn test_strip_removes_brackets() {
        assert_eq!(strip("日本語[にほんご]を勉強[べんきょう]する"), "日本語を勉強する");
        assert_eq!(strip("走[はし]り込[こ]む"), "走り込む");
    }

    #[test]
    fn test_strip_removes_ruby() {
        assert_eq!(
            strip(
                "<ruby>日本語<rp>(</rp><rt>にほんご</rt><rp>)</rp></ruby>を<ruby>勉強<rp>(</rp><rt>べんきょう</rt><rp>)</rp></ruby>する"
            ),
            "日本語を勉強する"
        );
        assert_eq!(
            strip("<ruby>走<rp>(</rp><rt>はし</rt><rp>)</rp></ruby>り<ruby>込<rp>(</rp><rt>こ</rt><rp>)</rp></ruby>む"),
            "走り込む"
        );
    }

    #[test]
    fn test_strip_removes_ruby_without_rp() {
        assert_eq!(
            strip("<ruby>日本語<rt>にほんご</rt></ruby>を<ruby>勉強<rt>べんきょう</rt></ruby>する"),
            "日本語を勉強する"
        );
        assert_eq!(
            strip("<ruby>走<rt>はし</rt></ruby>り<ruby>込<rt>こ</rt></ruby>む"),
            "走り込む"
        );
    }

    #[test]
    fn test_strip_preserves_other_html() {
        assert_eq!(strip("<b>日本語</b>"), "<b>日本語</b>");
        assert_eq!(
            strip(
                "ビルの<ruby>形<rp>(</rp><rt>かたち</rt><rp>)</rp></ruby>はほぼ<b><u><ruby>正方形<rp>(</rp><rt>せいほうけい</rt><rp>)</rp></ruby></u></b>だった。"
            ),
            "ビルの形はほぼ<b><u>正方形</u></b>だった。"
        );
    }

    #[test]
    fn test_strip_removes_both_notations() {
        assert_eq!(
            strip("<ruby>日本語<rp>(</rp><rt>にほんご</rt><rp>)</rp></ruby>を勉強[べんきょう]する"),
            "日本語を勉強する"
        );
    }

    #[test]
    fn test_strip_removes_legacy_spaces_with_brackets() {
        assert_eq!(strip("お 前[まえ]"), "お前");
    }

    #[test]
    fn test_strip_is_idempotent() {
        for input in [
            "日本語[にほんご]を勉強[べんきょう]する",
            "<ruby>走<rt>はし</rt></ruby>り<ruby>込<rt>こ</rt></ruby>む",
            "<b>日本語</b>",
            "この文に 空白が あります",
        ] {
            let once = strip(input);
            assert_eq!(strip(&once), once, "input: {input}");
        }
    }

    #[test]
    fn test_strip_round_trips_formatting() {
        let spans = vec![
            Span::annotated("書", "か"),
            Span::plain("き"),
            Span::annotated("込", "こ"),
            Span::plain("む"),
        ];
        let plain: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(strip(&format_spans(&spans, false)), plain);
        assert_eq!(strip(&format_spans(&spans, true)), plain);
    }
}
