//! Recovery of the canonical vowel symbol from a decorated table cell.
//!
//! Vowel renderings in the cheat sheet are written around the carrier
//! consonant `ก`, sometimes greyed out with an inline `<span>`, and sometimes
//! with dashes marking a required final consonant. The symbol returned here
//! is the key shared by every rendering of one vowel (audio file name,
//! symbol index).

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

/// Carrier consonant used in every rendering.
pub const PLACEHOLDER: char = 'ก';

/// The 44 Thai consonant letters. `ฤ` and `ฦ` are vowels and not listed.
pub const CONSONANTS: &str = "กขฃคฅฆงจฉชซฌญฎฏฐฑฒณดตถทธนบปผฝพฟภมยรลวศษสหฬอฮ";

const DASHES: &[char] = &['-', '\u{2010}', '\u{2013}', '\u{2014}'];

lazy_static! {
    static ref PLACEHOLDER_MARKUP: Regex = Regex::new(r"<span[^>]*>ก</span>").unwrap();
}

/// A single non-consonant character from the Thai block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VowelSymbol(char);

impl VowelSymbol {
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl fmt::Display for VowelSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn is_dash(ch: char) -> bool {
    DASHES.contains(&ch)
}

pub fn is_consonant(ch: char) -> bool {
    CONSONANTS.contains(ch)
}

fn is_thai(ch: char) -> bool {
    ('\u{0E00}'..='\u{0E7F}').contains(&ch)
}

/// True for cells that carry no rendering: empty, or nothing but a dash.
pub fn is_placeholder_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || (trimmed.chars().count() == 1 && trimmed.chars().all(is_dash))
}

/// Remove the greyed-out carrier markup from `cell`.
pub fn strip_placeholder_markup(cell: &str) -> String {
    PLACEHOLDER_MARKUP.replace_all(cell, "").into_owned()
}

/// Extract the vowel symbol from a decorated cell.
///
/// Never fails: when no non-consonant Thai character remains, the first
/// remaining character is returned as-is. `None` only when nothing is left
/// after stripping markup, carrier and dashes.
pub fn extract_vowel_symbol(cell: &str) -> Option<VowelSymbol> {
    let unwrapped = strip_placeholder_markup(cell);
    let rest = unwrapped
        .strip_prefix(PLACEHOLDER)
        .unwrap_or(unwrapped.as_str())
        .trim_matches(|c: char| is_dash(c) || c.is_whitespace());

    rest.chars()
        .find(|&c| is_thai(c) && !is_consonant(c))
        .or_else(|| rest.chars().next())
        .map(VowelSymbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VowelFormTable;

    fn symbol(cell: &str) -> Option<char> {
        extract_vowel_symbol(cell).map(|s| s.as_char())
    }

    #[test]
    fn consonant_set_has_44_letters() {
        assert_eq!(CONSONANTS.chars().count(), 44);
        assert!(!is_consonant('ฤ'));
        assert!(!is_consonant('ฦ'));
    }

    #[test]
    fn returns_first_vowel_mark_before_trailing_dash() {
        assert_eq!(symbol("เกีย-"), Some('เ'));
    }

    #[test]
    fn strips_greyed_out_placeholder_markup() {
        assert_eq!(symbol("<span style=\"x\">ก</span>ี"), Some('ี'));
        assert_eq!(symbol("<span style=\"color:#cccccc\">ก</span>า-"), Some('า'));
    }

    #[test]
    fn leaves_cell_alone_when_placeholder_is_not_first() {
        assert_eq!(symbol("ไก"), Some('ไ'));
    }

    #[test]
    fn strips_leading_placeholder_and_dashes() {
        assert_eq!(symbol("กา-"), Some('า'));
        assert_eq!(symbol("-กา"), Some('า'));
        assert_eq!(symbol(" กุ– "), Some('ุ'));
    }

    #[test]
    fn lone_vowel_maps_to_itself() {
        for ch in ['า', 'ี', 'เ', 'ไ', 'ุ', 'ํ'] {
            assert_eq!(symbol(&ch.to_string()), Some(ch));
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        for cell in ["เกือะ", "กัวะ", "แก็-", "กํา", "ฤ-"] {
            let first = extract_vowel_symbol(cell).unwrap();
            assert_eq!(extract_vowel_symbol(&first.to_string()), Some(first));
        }
    }

    #[test]
    fn falls_back_to_first_remaining_character() {
        // ฤ is outside the consonant set, so it is picked up by the scan itself.
        assert_eq!(symbol("ฤ-"), Some('ฤ'));
        assert_eq!(symbol("กข"), Some('ข'));
        assert_eq!(symbol("abc"), Some('a'));
    }

    #[test]
    fn nothing_left_after_stripping() {
        assert_eq!(symbol("ก"), None);
        assert_eq!(symbol("<span>ก</span>-"), None);
        assert_eq!(symbol("-"), None);
    }

    #[test]
    fn placeholder_cells() {
        assert!(is_placeholder_cell(""));
        assert!(is_placeholder_cell("-"));
        assert!(is_placeholder_cell(" – "));
        assert!(!is_placeholder_cell("กา-"));
        assert!(!is_placeholder_cell("--"));
    }

    #[test]
    fn every_builtin_cell_yields_one_symbol() {
        let table = VowelFormTable::builtin();
        for row in table.rows() {
            for (pos, cell) in row.cells().iter().enumerate() {
                if pos == 2 || is_placeholder_cell(cell) {
                    continue;
                }
                let sym = extract_vowel_symbol(cell);
                assert!(sym.is_some(), "no symbol for {cell:?}");
                assert_eq!(sym.unwrap().to_string().chars().count(), 1);
            }
        }
    }
}
