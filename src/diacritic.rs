//! Classification of Hebrew diacritic marks.
//!
//! The Hebrew block splits its combining marks into two ranges:
//!
//! - **Ta'amim** (cantillation) at U+0591–U+05AF
//! - **Niqqud** (vowel points) at U+05B0–U+05C7
//!
//! The niqqud range also holds a handful of punctuation and connector glyphs
//! (maqaf, paseq, sof pasuq, nun hafukha). Those are listed in
//! [`NOT_NIQQUD_IN_NIQQUD_RANGE`] and never count as diacritics, so stripping
//! vowels leaves verse punctuation intact.

use serde::{Deserialize, Serialize};

/// First code point of the niqqud range (sheva).
pub const NIQQUD_START: u32 = 0x05B0;
/// Last code point of the niqqud range (qamats qatan).
pub const NIQQUD_END: u32 = 0x05C7;
/// First code point of the ta'am range (etnahta).
pub const TAAM_START: u32 = 0x0591;
/// Last code point of the ta'am range (masora circle).
pub const TAAM_END: u32 = 0x05AF;

/// Code points inside the niqqud range that are not vowel points.
pub const NOT_NIQQUD_IN_NIQQUD_RANGE: [u32; 4] = [
    0x05BE, // maqaf
    0x05C0, // paseq
    0x05C3, // sof pasuq
    0x05C6, // nun hafukha
];

/// Returns `true` if `code` is a niqqud (vowel point) code point.
pub const fn is_niqqud_code(code: u32) -> bool {
    if code < NIQQUD_START || code > NIQQUD_END {
        return false;
    }
    let mut i = 0;
    while i < NOT_NIQQUD_IN_NIQQUD_RANGE.len() {
        if NOT_NIQQUD_IN_NIQQUD_RANGE[i] == code {
            return false;
        }
        i += 1;
    }
    true
}

/// Returns `true` if `code` is a ta'am (cantillation mark) code point.
pub const fn is_taam_code(code: u32) -> bool {
    TAAM_START <= code && code <= TAAM_END
}

/// Returns `true` if `code` is either a niqqud or a ta'am code point.
pub const fn is_diacritic_code(code: u32) -> bool {
    is_niqqud_code(code) || is_taam_code(code)
}

pub fn is_niqqud_char(c: char) -> bool {
    is_niqqud_code(c as u32)
}

pub fn is_taam_char(c: char) -> bool {
    is_taam_code(c as u32)
}

pub fn is_diacritic_char(c: char) -> bool {
    is_diacritic_code(c as u32)
}

/// The category a single code point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiacriticCategory {
    /// Vowel point.
    Niqqud,
    /// Cantillation mark.
    Taam,
    /// Anything else, including the punctuation inside the niqqud range.
    Neither,
}

impl DiacriticCategory {
    /// Classify a code point. The two mark ranges are disjoint, so exactly
    /// one category applies.
    pub const fn of(code: u32) -> Self {
        if is_niqqud_code(code) {
            Self::Niqqud
        } else if is_taam_code(code) {
            Self::Taam
        } else {
            Self::Neither
        }
    }

    pub fn of_char(c: char) -> Self {
        Self::of(c as u32)
    }

    pub fn is_diacritic(self) -> bool {
        !matches!(self, Self::Neither)
    }
}

/// Which diacritics a removal pass targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiacriticClass {
    /// Niqqud and ta'amim.
    #[default]
    All,
    /// Vowel points only; cantillation survives.
    Niqqud,
    /// Cantillation only; vowel points survive.
    Taam,
}

impl DiacriticClass {
    /// The per-character predicate matching this class.
    pub fn predicate(self) -> fn(char) -> bool {
        match self {
            Self::All => is_diacritic_char,
            Self::Niqqud => is_niqqud_char,
            Self::Taam => is_taam_char,
        }
    }

    pub fn matches(self, c: char) -> bool {
        (self.predicate())(c)
    }
}

impl std::fmt::Display for DiacriticClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Niqqud => write!(f, "niqqud"),
            Self::Taam => write!(f, "taam"),
        }
    }
}
