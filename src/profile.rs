//! Transform profiles: a serializable description of a full text pass.
//!
//! A profile combines an optional diacritic strip with a target script, so a
//! host application can keep its transliteration settings in TOML next to
//! the rest of its configuration:
//!
//! ```toml
//! strip = "niqqud"
//! script = "paleo"
//! ```
//!
//! Stripping always runs before script mapping.

use serde::{Deserialize, Serialize};

use crate::diacritic::DiacriticClass;
use crate::error::{KetavResult, ProfileError};
use crate::paleo::to_paleo;
use crate::remove::remove_diacritics_with;

/// Output script of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Leave letters in square (modern) script.
    #[default]
    Square,
    /// Map base letters to Paleo-Hebrew.
    Paleo,
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Script::Square => write!(f, "square"),
            Script::Paleo => write!(f, "paleo"),
        }
    }
}

/// A complete strip-then-map transformation.
///
/// The default profile strips nothing and keeps square script, so it is the
/// identity transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransformProfile {
    /// Diacritics to remove. `None` keeps every mark.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip: Option<DiacriticClass>,
    #[serde(default)]
    pub script: Script,
}

const BUILTIN_NAMES: [&str; 5] = ["consonantal", "vocalized", "cantillated", "paleo", "paleo-raw"];

impl TransformProfile {
    /// Look up a built-in profile by name.
    pub fn builtin(name: &str) -> KetavResult<Self> {
        let (strip, script) = match name {
            "consonantal" => (Some(DiacriticClass::All), Script::Square),
            "vocalized" => (Some(DiacriticClass::Taam), Script::Square),
            "cantillated" => (Some(DiacriticClass::Niqqud), Script::Square),
            "paleo" => (Some(DiacriticClass::All), Script::Paleo),
            "paleo-raw" => (None, Script::Paleo),
            _ => {
                return Err(ProfileError::UnknownProfile {
                    name: name.to_string(),
                }
                .into());
            }
        };
        Ok(Self { strip, script })
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &BUILTIN_NAMES
    }

    /// Parse a profile from TOML.
    pub fn from_toml_str(toml_str: &str) -> KetavResult<Self> {
        let profile = toml::from_str(toml_str).map_err(|e| {
            tracing::warn!(error = %e, "failed to parse transform profile");
            ProfileError::Parse {
                message: e.to_string(),
            }
        })?;
        Ok(profile)
    }

    pub fn to_toml_string(&self) -> KetavResult<String> {
        let text = toml::to_string_pretty(self).map_err(|e| ProfileError::Serialize {
            message: e.to_string(),
        })?;
        Ok(text)
    }

    /// Run the profile over `input`.
    pub fn apply(&self, input: &str) -> String {
        tracing::debug!(
            strip = ?self.strip,
            script = %self.script,
            "applying transform profile"
        );
        let stripped = match self.strip {
            Some(class) => remove_diacritics_with(input, class.predicate()),
            None => input.to_string(),
        };
        match self.script {
            Script::Square => stripped,
            Script::Paleo => to_paleo(&stripped),
        }
    }
}
