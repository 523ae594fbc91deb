//! Kana script classification and katakana-to-hiragana mapping.
//!
//! The mapping deliberately mirrors the behavior of the kakasi-based
//! implementations it replaces: full-width katakana is shifted down into
//! the hiragana block by codepoint arithmetic, and everything else
//! (ASCII, hiragana, half-width katakana, CJK, punctuation) passes
//! through unchanged.

/// Middle dot (・). Lives in the katakana block but is punctuation.
pub const MIDDLE_DOT: char = '\u{30FB}';

/// Prolonged sound mark (ー). Lives in the katakana block but is punctuation.
pub const PROLONGED_SOUND_MARK: char = '\u{30FC}';

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x309F;
const KATAKANA_START: u32 = 0x30A1;
const KATAKANA_END: u32 = 0x30FF;

/// Offset between the katakana and hiragana blocks.
const KANA_BLOCK_OFFSET: u32 = 0x60;

/// Check whether a character is kana (hiragana or katakana).
///
/// The middle dot (U+30FB) and the prolonged sound mark (U+30FC) share the
/// katakana block but are treated as punctuation, not kana.
pub fn is_kana(c: char) -> bool {
    if c == MIDDLE_DOT || c == PROLONGED_SOUND_MARK {
        return false;
    }
    let cp = c as u32;
    (HIRAGANA_START..=HIRAGANA_END).contains(&cp) || (KATAKANA_START..=KATAKANA_END).contains(&cp)
}

/// Convert every full-width katakana character in `s` to hiragana.
///
/// Half-width katakana is deliberately not converted, for compatibility
/// with the legacy kakasi-based conversion.
pub fn to_hiragana(s: &str) -> String {
    s.chars().map(to_hiragana_char).collect()
}

/// Convert a single character to hiragana if it is full-width katakana.
pub fn to_hiragana_char(c: char) -> char {
    if c == MIDDLE_DOT || c == PROLONGED_SOUND_MARK {
        return c;
    }
    let cp = c as u32;
    if (KATAKANA_START..=KATAKANA_END).contains(&cp) {
        char::from_u32(cp - KANA_BLOCK_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Check whether two strings are equal modulo the katakana/hiragana split.
pub fn kana_equal(a: &str, b: &str) -> bool {
    to_hiragana(a) == to_hiragana(b)
}

/// Additional valid readings for ambiguous small kana.
///
/// The small ka/ke counters (ゕ/ゖ, the hiragana forms of ヵ/ヶ) are
/// pronounced differently from their nominal kana value depending on the
/// word (一ヶ月 reads いっかげつ, 霞ヶ関 reads かすみがせき). When more
/// than one alternate would satisfy a match, the first listed wins.
pub fn alternate_readings(c: char) -> &'static [char] {
    match c {
        'ゕ' => &['か', 'が'],
        'ゖ' => &['か', 'が', 'け'],
        _ => &[],
    }
}

/// Check whether a character has alternate readings.
pub fn has_alternate_readings(c: char) -> bool {
    !alternate_readings(c).is_empty()
}
