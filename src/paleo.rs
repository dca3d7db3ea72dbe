//! Square-script Hebrew to Paleo-Hebrew letter mapping.
//!
//! Paleo-Hebrew text is encoded with the Phoenician block (U+10900–U+10915),
//! which has one glyph per letter and no final forms. The 27 Hebrew base
//! letters (U+05D0–U+05EA, finals included) map onto it piecewise:
//!
//! - alef..yod (U+05D0–U+05D9) are contiguous in both blocks: one shift
//! - tsadi..tav (U+05E6–U+05EA) are contiguous too, with a smaller shift
//! - final kaf..final tsadi (U+05DA–U+05E5) interleave regular and final
//!   forms, and each pair collapses onto one Phoenician letter, so they go
//!   through [`MIDDLE_TABLE`]
//!
//! ```
//! use ketav::paleo::to_paleo;
//!
//! assert_eq!(to_paleo("שלום, world"), "𐤔𐤋𐤅𐤌, world");
//! ```

use crate::error::ScriptError;

/// First Hebrew base letter (alef).
pub const HEBREW_LETTER_START: u32 = 0x05D0;
/// Last Hebrew base letter (tav).
pub const HEBREW_LETTER_END: u32 = 0x05EA;

/// Last letter of the head run (yod).
const HEAD_END: u32 = 0x05D9;
/// First letter of the tail run (tsadi).
const TAIL_START: u32 = 0x05E6;
/// First letter of the middle run (final kaf).
const MIDDLE_START: u32 = 0x05DA;

const HEAD_SHIFT: u32 = 0x10330;
const TAIL_SHIFT: u32 = 0x1032B;

/// Paleo forms for U+05DA–U+05E5, indexed by offset from final kaf.
pub const MIDDLE_TABLE: [u32; 12] = [
    0x1090A, // final kaf   -> kaf
    0x1090A, // kaf         -> kaf
    0x1090B, // lamed       -> lamd
    0x1090C, // final mem   -> mem
    0x1090C, // mem         -> mem
    0x1090D, // final nun   -> nun
    0x1090D, // nun         -> nun
    0x1090E, // samekh      -> semk
    0x1090F, // ayin        -> ain
    0x10910, // final pe    -> pe
    0x10910, // pe          -> pe
    0x10911, // final tsadi -> sade
];

/// Map a Hebrew base letter to its Paleo-Hebrew code point without checking
/// the domain.
///
/// Callers must pass a code point in U+05D0–U+05EA. Anything else yields a
/// meaningless (but defined) value: codes below the domain take the head
/// shift and codes above it take the tail shift, with wrapping arithmetic.
/// Use [`map_char_to_paleo`] when the input is not already validated.
pub const fn map_char_to_paleo_unchecked(code: u32) -> u32 {
    if code <= HEAD_END {
        code.wrapping_add(HEAD_SHIFT)
    } else if code >= TAIL_START {
        code.wrapping_add(TAIL_SHIFT)
    } else {
        MIDDLE_TABLE[(code - MIDDLE_START) as usize]
    }
}

/// Map a code point to Paleo-Hebrew, or `None` if it is not a Hebrew base
/// letter.
pub const fn map_char_to_paleo(code: u32) -> Option<u32> {
    if is_hebrew_letter_code(code) {
        Some(map_char_to_paleo_unchecked(code))
    } else {
        None
    }
}

pub const fn is_hebrew_letter_code(code: u32) -> bool {
    HEBREW_LETTER_START <= code && code <= HEBREW_LETTER_END
}

/// `char` form of [`map_char_to_paleo`].
pub fn paleo_char(c: char) -> Option<char> {
    map_char_to_paleo(c as u32).and_then(char::from_u32)
}

/// Replace every Hebrew base letter in `input` with its Paleo-Hebrew form.
///
/// All other characters pass through untouched, diacritics included; strip
/// them first with [`remove_diacritics`](crate::remove::remove_diacritics)
/// for plain Paleo text. The output always has the same number of `char`s
/// as the input.
pub fn to_paleo(input: &str) -> String {
    let mut mapped = 0usize;
    let out: String = input
        .chars()
        .map(|c| match paleo_char(c) {
            Some(p) => {
                mapped += 1;
                p
            }
            None => c,
        })
        .collect();
    tracing::trace!(input_bytes = input.len(), mapped, "mapped to paleo-hebrew");
    out
}

/// A validated Hebrew base letter (U+05D0–U+05EA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct HebrewLetter(char);

impl HebrewLetter {
    /// Number of base letters, final forms included.
    pub const COUNT: usize = (HEBREW_LETTER_END - HEBREW_LETTER_START + 1) as usize;

    pub fn as_char(self) -> char {
        self.0
    }

    /// Whether this is one of the five final (sofit) forms.
    pub fn is_final(self) -> bool {
        matches!(self.0, 'ך' | 'ם' | 'ן' | 'ף' | 'ץ')
    }

    /// The Paleo-Hebrew glyph for this letter.
    pub fn paleo(self) -> char {
        // Every in-domain result lies in U+10900–U+10915.
        char::from_u32(map_char_to_paleo_unchecked(self.0 as u32))
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// All 27 letters in code point order.
    pub fn all() -> impl Iterator<Item = HebrewLetter> {
        ('\u{05D0}'..='\u{05EA}').map(HebrewLetter)
    }
}

impl TryFrom<char> for HebrewLetter {
    type Error = ScriptError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if is_hebrew_letter_code(c as u32) {
            Ok(HebrewLetter(c))
        } else {
            Err(ScriptError::NotHebrewLetter {
                codepoint: c as u32,
            })
        }
    }
}

impl TryFrom<u32> for HebrewLetter {
    type Error = ScriptError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match char::from_u32(code) {
            Some(c) => HebrewLetter::try_from(c),
            None => Err(ScriptError::NotHebrewLetter { codepoint: code }),
        }
    }
}

impl From<HebrewLetter> for char {
    fn from(letter: HebrewLetter) -> char {
        letter.0
    }
}

impl std::fmt::Display for HebrewLetter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_run_is_contiguous() {
        assert_eq!(map_char_to_paleo_unchecked(0x05D0), 0x10900); // alef
        assert_eq!(map_char_to_paleo_unchecked(0x05D1), 0x10901); // bet
        assert_eq!(map_char_to_paleo_unchecked(0x05D9), 0x10909); // yod
    }

    #[test]
    fn tail_run_is_contiguous() {
        assert_eq!(map_char_to_paleo_unchecked(0x05E6), 0x10911); // tsadi
        assert_eq!(map_char_to_paleo_unchecked(0x05E7), 0x10912); // qof
        assert_eq!(map_char_to_paleo_unchecked(0x05EA), 0x10915); // tav
    }

    #[test]
    fn final_forms_collapse_onto_regular_forms() {
        for (fin, reg) in [('ך', 'כ'), ('ם', 'מ'), ('ן', 'נ'), ('ף', 'פ'), ('ץ', 'צ')] {
            assert_eq!(paleo_char(fin), paleo_char(reg), "{fin} vs {reg}");
        }
    }

    #[test]
    fn paleo_forms_cover_phoenician_block() {
        let mut seen: Vec<char> = HebrewLetter::all().map(HebrewLetter::paleo).collect();
        seen.sort_unstable();
        seen.dedup();
        let expected: Vec<char> = ('\u{10900}'..='\u{10915}').collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn checked_mapping_domain() {
        assert_eq!(map_char_to_paleo(0x05CF), None);
        assert_eq!(map_char_to_paleo(0x05EB), None);
        assert_eq!(map_char_to_paleo('a' as u32), None);
        assert_eq!(map_char_to_paleo(0x05B8), None); // qamats
        assert_eq!(map_char_to_paleo(0x05DC), Some(0x1090B)); // lamed
        for code in HEBREW_LETTER_START..=HEBREW_LETTER_END {
            assert!(map_char_to_paleo(code).is_some(), "U+{code:04X}");
        }
    }

    #[test]
    fn unchecked_mapping_out_of_domain_is_defined() {
        assert_eq!(map_char_to_paleo_unchecked(0x05CF), 0x108FF);
        assert_eq!(map_char_to_paleo_unchecked(0x05EB), 0x10916);
        assert_eq!(map_char_to_paleo_unchecked(u32::MAX), TAIL_SHIFT - 1);
    }

    #[test]
    fn to_paleo_passes_through_unmapped() {
        assert_eq!(to_paleo(""), "");
        assert_eq!(to_paleo("abc 123\t׃"), "abc 123\t׃");
        assert_eq!(to_paleo("הארץ"), "𐤄𐤀𐤓𐤑");
    }

    #[test]
    fn to_paleo_keeps_diacritics() {
        // bet, dagesh, sheva
        assert_eq!(to_paleo("\u{05D1}\u{05BC}\u{05B0}"), "\u{10901}\u{05BC}\u{05B0}");
    }

    #[test]
    fn hebrew_letter_validation() {
        let shin = HebrewLetter::try_from('ש').unwrap();
        assert_eq!(shin.paleo(), '𐤔');
        assert!(!shin.is_final());
        assert!(HebrewLetter::try_from('ץ').unwrap().is_final());
        assert_eq!(char::from(shin), 'ש');

        let err = HebrewLetter::try_from('x').unwrap_err();
        assert!(matches!(err, ScriptError::NotHebrewLetter { codepoint: 0x78 }));
        assert!(HebrewLetter::try_from(0xD800u32).is_err()); // surrogate
        assert!(HebrewLetter::try_from(0x05EAu32).is_ok());
    }

    #[test]
    fn letter_count() {
        assert_eq!(HebrewLetter::COUNT, 27);
        assert_eq!(HebrewLetter::all().count(), HebrewLetter::COUNT);
        assert_eq!(HebrewLetter::all().filter(|l| l.is_final()).count(), 5);
    }
}
