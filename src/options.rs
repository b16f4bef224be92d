use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five naming strategies an obfuscation run can pick from. The wire
/// tags are the user-facing option values (`"mangled-shuffled"` etc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierNamesGeneratorKind {
    Dictionary,
    Hexadecimal,
    Mangled,
    MangledShuffled,
    Incremental,
}

impl IdentifierNamesGeneratorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierNamesGeneratorKind::Dictionary => "dictionary",
            IdentifierNamesGeneratorKind::Hexadecimal => "hexadecimal",
            IdentifierNamesGeneratorKind::Mangled => "mangled",
            IdentifierNamesGeneratorKind::MangledShuffled => "mangled-shuffled",
            IdentifierNamesGeneratorKind::Incremental => "incremental",
        }
    }
}

impl fmt::Display for IdentifierNamesGeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierNamesGeneratorKind {
    type Err = OptionsError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "dictionary" => Ok(IdentifierNamesGeneratorKind::Dictionary),
            "hexadecimal" => Ok(IdentifierNamesGeneratorKind::Hexadecimal),
            "mangled" => Ok(IdentifierNamesGeneratorKind::Mangled),
            "mangled-shuffled" => Ok(IdentifierNamesGeneratorKind::MangledShuffled),
            "incremental" => Ok(IdentifierNamesGeneratorKind::Incremental),
            other => Err(OptionsError::UnknownGenerator { tag: other.to_string() }),
        }
    }
}

/// Static configuration for one obfuscation run. Read-only once the run
/// starts; all fatal validation happens before any node is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObfuscatorOptions {
    /// Prefix prepended to names issued for the global scope.
    pub identifiers_prefix: String,
    pub identifier_names_generator: IdentifierNamesGeneratorKind,
    /// Word list for the `dictionary` strategy. Ignored by the others.
    pub identifiers_dictionary: Vec<String>,
    /// Fixed seed for the run's random generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ObfuscatorOptions {
    fn default() -> Self {
        Self {
            identifiers_prefix: String::new(),
            identifier_names_generator: IdentifierNamesGeneratorKind::Hexadecimal,
            identifiers_dictionary: Vec::new(),
            seed: None,
        }
    }
}

/// Configuration problems that must halt the run before it starts.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("unknown identifier names generator: {tag}")]
    UnknownGenerator { tag: String },

    #[error("the dictionary generator needs a non-empty identifiersDictionary")]
    MissingDictionary,

    #[error("identifiersDictionary entry is not a valid identifier: {word}")]
    InvalidDictionaryWord { word: String },
}
