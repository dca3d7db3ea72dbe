// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # ketav
//!
//! Character-level tools for Hebrew-script text: classifying and removing
//! diacritics (niqqud vowel points and ta'amim cantillation marks), and
//! mapping square-script letters to Paleo-Hebrew.
//!
//! ## Modules
//!
//! - **Classifier** (`diacritic`): per-code-point niqqud / ta'am predicates
//! - **Remover** (`remove`): strip the marks a predicate selects from a string
//! - **Mapper** (`paleo`): Hebrew base letter → Paleo-Hebrew, checked and unchecked
//! - **Profiles** (`profile`): TOML-configurable strip-then-map passes
//!
//! Every function is pure and allocation-only, so all of them are safe to
//! call from any thread.
//!
//! ## Library usage
//!
//! ```
//! use ketav::diacritic::is_niqqud_char;
//! use ketav::paleo::to_paleo;
//! use ketav::remove::{remove_diacritics, remove_diacritics_with};
//!
//! let pointed = "הָאָֽרֶץ";
//! assert_eq!(remove_diacritics(pointed), "הארץ");
//! assert_eq!(remove_diacritics_with("בָּרָ֣א", is_niqqud_char), "בר֣א");
//! assert_eq!(to_paleo(&remove_diacritics(pointed)), "𐤄𐤀𐤓𐤑");
//! ```

pub mod diacritic;
pub mod error;
pub mod paleo;
pub mod profile;
pub mod remove;

pub use diacritic::{
    DiacriticCategory, DiacriticClass, is_diacritic_char, is_diacritic_code, is_niqqud_char,
    is_niqqud_code, is_taam_char, is_taam_code,
};
pub use error::{KetavError, KetavResult, ProfileError, ScriptError};
pub use paleo::{HebrewLetter, map_char_to_paleo, map_char_to_paleo_unchecked, to_paleo};
pub use profile::{Script, TransformProfile};
pub use remove::{remove_diacritics, remove_diacritics_with};
