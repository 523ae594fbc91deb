//! Surface/reading alignment producing minimal annotated spans.
//!
//! Given one morphological unit (surface form plus katakana reading), the
//! aligner finds the smallest kanji sub-spans that need a phonetic
//! annotation and leaves kana, punctuation and (optionally) numerals
//! untouched. The surface is grouped into maximal character runs, each run
//! compiles to either a literal matcher or a lazy capture region, and the
//! concatenated pattern is executed against the hiragana-normalized
//! reading by an explicit backtracking matcher. Capture regions are tried
//! shortest-first, so when two non-kana runs compete for an ambiguous
//! stretch of reading, the earlier run is assigned the minimum number of
//! characters for which the whole pattern still matches. This reproduces
//! okurigana boundaries without any knowledge of conjugation.
//!
//! # Examples
//!
//! ```
//! use yomigana::analysis::align::align;
//! use yomigana::analysis::token::Span;
//!
//! let spans = align("書き込む", "カキコム", false).unwrap();
//! assert_eq!(
//!     spans,
//!     vec![
//!         Span::annotated("書", "か"),
//!         Span::plain("き"),
//!         Span::annotated("込", "こ"),
//!         Span::plain("む"),
//!     ]
//! );
//! ```

use crate::analysis::kana::{
    alternate_readings, is_kana, to_hiragana, to_hiragana_char, MIDDLE_DOT, PROLONGED_SOUND_MARK,
};
use crate::analysis::token::{is_numeral, Span};
use crate::error::{Result, YomiganaError};

/// How a run of surface characters participates in the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunKind {
    /// Kana (or kana-block punctuation) matched literally, character by
    /// character, against the reading.
    Literal,
    /// Kanji or any other script: a lazy capture whose captured reading
    /// becomes the span's annotation.
    Wildcard,
    /// Numeral-set characters under `ignore_numerals`: a lazy capture
    /// whose captured reading is discarded.
    Numeral,
}

/// A maximal run of same-kind surface characters, kept as written so that
/// plain spans preserve katakana versus hiragana.
#[derive(Clone, Debug)]
struct Run {
    kind: RunKind,
    chars: Vec<char>,
}

/// Align one unit's reading against its surface form.
///
/// Returns spans covering `surface` exactly, left to right, with no gaps
/// or overlaps. Fails with [`YomiganaError::Alignment`] when the reading
/// cannot satisfy the surface (malformed analyzer output); the aligner
/// never emits garbage for such a unit.
pub fn align(surface: &str, reading: &str, ignore_numerals: bool) -> Result<Vec<Span>> {
    // Short-circuits: hiragana, punctuation, non-Japanese script, katakana
    // readings that match the surface, and pure-numeral units all come
    // back as one plain span.
    if surface == reading || reading.is_empty() {
        return Ok(vec![Span::plain(surface)]);
    }
    let hira_reading = to_hiragana(reading);
    if hira_reading == surface {
        return Ok(vec![Span::plain(surface)]);
    }
    if ignore_numerals && surface.chars().all(is_numeral) {
        return Ok(vec![Span::plain(surface)]);
    }

    let runs = group_runs(surface, ignore_numerals);
    let reading_chars: Vec<char> = hira_reading.chars().collect();

    let mut captures: Vec<Option<(usize, usize)>> = vec![None; runs.len()];
    if !match_runs(&runs, &reading_chars, 0, 0, &mut captures) {
        return Err(YomiganaError::alignment(format!(
            "reading {reading:?} does not satisfy surface {surface:?}"
        )));
    }

    let mut spans = Vec::with_capacity(runs.len());
    for (run, capture) in runs.iter().zip(captures.iter()) {
        let text: String = run.chars.iter().collect();
        match run.kind {
            RunKind::Literal | RunKind::Numeral => spans.push(Span::plain(text)),
            RunKind::Wildcard => {
                let (start, end) = capture.ok_or_else(|| {
                    YomiganaError::alignment(format!("no reading captured for {text:?}"))
                })?;
                let annotation: String = reading_chars[start..end].iter().collect();
                spans.push(Span::annotated(text, annotation));
            }
        }
    }
    Ok(spans)
}

/// Group the surface into maximal runs of the same pattern kind.
fn group_runs(surface: &str, ignore_numerals: bool) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for c in surface.chars() {
        let kind = classify(c, ignore_numerals);
        match runs.last_mut() {
            Some(run) if run.kind == kind => run.chars.push(c),
            _ => runs.push(Run {
                kind,
                chars: vec![c],
            }),
        }
    }
    runs
}

fn classify(c: char, ignore_numerals: bool) -> RunKind {
    if ignore_numerals && is_numeral(c) {
        RunKind::Numeral
    } else if is_kana(c) || c == MIDDLE_DOT || c == PROLONGED_SOUND_MARK {
        // The two kana-block punctuation marks appear verbatim in readings
        // (ローマ → ろーま), so they match themselves like kana does.
        RunKind::Literal
    } else {
        RunKind::Wildcard
    }
}

/// Does one reading character satisfy one literal surface character?
fn literal_char_matches(surface_char: char, reading_char: char) -> bool {
    let hira = to_hiragana_char(surface_char);
    hira == reading_char || alternate_readings(hira).contains(&reading_char)
}

/// Anchored backtracking match of `runs[run_idx..]` against
/// `reading[pos..]`. Capture lengths are tried shortest-first, which is
/// the lazy tie-break: the earliest ambiguous region takes the fewest
/// characters that still let the remainder match.
fn match_runs(
    runs: &[Run],
    reading: &[char],
    run_idx: usize,
    pos: usize,
    captures: &mut Vec<Option<(usize, usize)>>,
) -> bool {
    if run_idx == runs.len() {
        return pos == reading.len();
    }
    let run = &runs[run_idx];
    match run.kind {
        RunKind::Literal => {
            let mut p = pos;
            for &sc in &run.chars {
                match reading.get(p) {
                    Some(&rc) if literal_char_matches(sc, rc) => p += 1,
                    _ => return false,
                }
            }
            match_runs(runs, reading, run_idx + 1, p, captures)
        }
        RunKind::Wildcard | RunKind::Numeral => {
            // At least one reading character per capture.
            for end in (pos + 1)..=reading.len() {
                captures[run_idx] = Some((pos, end));
                if match_runs(runs, reading, run_idx + 1, end, captures) {
                    return true;
                }
            }
            captures[run_idx] = None;
            false
        }
    }
}
