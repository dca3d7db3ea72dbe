//! Rich diagnostic error types for ketav.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so callers know exactly what went wrong
//! and how to fix it. The text transformations themselves are total and never
//! produce errors; only the typed letter API and profile loading can fail.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for ketav.
#[derive(Debug, Error, Diagnostic)]
pub enum KetavError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Profile(#[from] ProfileError),
}

// ---------------------------------------------------------------------------
// Script errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ScriptError {
    #[error("U+{codepoint:04X} is not a Hebrew base letter")]
    #[diagnostic(
        code(ketav::script::not_hebrew_letter),
        help(
            "Only the 27 letters U+05D0 (alef) through U+05EA (tav), final forms \
             included, have Paleo-Hebrew equivalents. Strip diacritics first, or \
             use `paleo::map_char_to_paleo` which returns `None` instead of failing."
        )
    )]
    NotHebrewLetter { codepoint: u32 },
}

// ---------------------------------------------------------------------------
// Profile errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ProfileError {
    #[error("failed to parse transform profile: {message}")]
    #[diagnostic(
        code(ketav::profile::parse),
        help(
            "A profile is a TOML table with optional keys `strip` \
             (\"all\", \"niqqud\", \"taam\") and `script` (\"square\", \"paleo\")."
        )
    )]
    Parse { message: String },

    #[error("failed to serialize transform profile: {message}")]
    #[diagnostic(code(ketav::profile::serialize))]
    Serialize { message: String },

    #[error("unknown built-in profile: \"{name}\"")]
    #[diagnostic(
        code(ketav::profile::unknown),
        help(
            "Built-in profiles: \"consonantal\", \"vocalized\", \"cantillated\", \
             \"paleo\", \"paleo-raw\". Use TransformProfile::builtin_names() to list them."
        )
    )]
    UnknownProfile { name: String },
}

/// Convenience result type for ketav operations.
pub type KetavResult<T> = std::result::Result<T, KetavError>;
