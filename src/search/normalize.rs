//! Card name normalization.
//!
//! Localized card names use middle dots and full-width letters
//! inconsistently. Both the query word and the candidate name are folded
//! the same way before substring comparison.

/// Dot and bullet characters dropped from names.
const DOTS: &[char] = &[
    '\u{00B7}', '\u{0387}', '\u{05BC}', '\u{2022}', '\u{2027}', '\u{2219}', '\u{22C5}',
    '\u{30FB}', '\u{FF0E}', '\u{FF65}', '\u{2051}', ':', '*', '\u{2020}',
];

/// Offset between full-width forms and their ASCII counterparts.
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Strip dots, fold full-width digits/letters/`＝＠＃`, lower-case.
///
/// ```
/// use wx_deck::search::normalize_name;
///
/// assert_eq!(normalize_name("Ｖ・＠・Ｃ"), "v@c");
/// ```
#[must_use]
pub fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !DOTS.contains(c))
        .map(half_width)
        .collect::<String>()
        .to_lowercase()
}

fn half_width(c: char) -> char {
    match c {
        '０'..='９' | 'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '＝' | '＠' | '＃' => {
            char::from_u32(c as u32 - FULL_WIDTH_OFFSET).unwrap_or(c)
        }
        _ => c,
    }
}
