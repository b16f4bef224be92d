pub mod dictionary;
pub mod hexadecimal;
pub mod incremental;
pub mod mangled;
pub mod mangled_shuffled;

use oxc_span::Span;

use crate::options::{IdentifierNamesGeneratorKind, ObfuscatorOptions, OptionsError};
use crate::random::RandomGenerator;

pub use dictionary::DictionaryIdentifierNamesGenerator;
pub use hexadecimal::HexadecimalIdentifierNamesGenerator;
pub use incremental::IncrementalIdentifierNamesGenerator;
pub use mangled::MangledIdentifierNamesGenerator;
pub use mangled_shuffled::MangledShuffledIdentifierNamesGenerator;

/// Opaque key identifying one lexical scope (a function body, a block).
/// Built from the scope node's span, which is unique within a parse; the
/// generators never look inside the node itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    start: u32,
    end: u32,
}

impl From<Span> for ScopeKey {
    fn from(span: Span) -> Self {
        Self { start: span.start, end: span.end }
    }
}

/// One run's supply of replacement identifier names. Every call mutates
/// issuance state: calling twice with the same arguments yields two
/// different names. Instances live exactly as long as one obfuscation run
/// and must not be shared between runs.
pub trait IdentifierNamesGenerator: std::fmt::Debug {
    /// Allocate the next raw name from the strategy's sequence. No scope
    /// semantics attached.
    fn generate_next(&mut self, name_length: Option<usize>) -> String;

    /// Allocate a name for the single global namespace, carrying the
    /// configured identifier prefix.
    fn generate_for_global_scope(&mut self, name_length: Option<usize>) -> String;

    /// Allocate a name for one specific lexical scope. Strategies that do
    /// not partition by scope fall back to the shared sequence.
    fn generate_for_lexical_scope(&mut self, scope: ScopeKey, name_length: Option<usize>) -> String;

    /// Allocate a replacement for a statement label.
    fn generate_for_label(&mut self, label: &str, name_length: Option<usize>) -> String;
}

/// Build the generator selected by the options. This is the fail-fast point
/// for configuration errors: nothing here may be deferred into the run.
pub fn identifier_names_generator(
    options: &ObfuscatorOptions,
    random: &mut RandomGenerator,
) -> Result<Box<dyn IdentifierNamesGenerator>, OptionsError> {
    let generator: Box<dyn IdentifierNamesGenerator> = match options.identifier_names_generator {
        IdentifierNamesGeneratorKind::Dictionary => {
            if options.identifiers_dictionary.is_empty() {
                return Err(OptionsError::MissingDictionary);
            }
            if let Some(word) = options
                .identifiers_dictionary
                .iter()
                .find(|word| !is_valid_identifier_name(word.as_str()))
            {
                return Err(OptionsError::InvalidDictionaryWord { word: word.clone() });
            }
            Box::new(DictionaryIdentifierNamesGenerator::new(options))
        }
        IdentifierNamesGeneratorKind::Hexadecimal => {
            Box::new(HexadecimalIdentifierNamesGenerator::new(options))
        }
        IdentifierNamesGeneratorKind::Mangled => {
            Box::new(MangledIdentifierNamesGenerator::new(options))
        }
        IdentifierNamesGeneratorKind::MangledShuffled => {
            Box::new(MangledShuffledIdentifierNamesGenerator::new(options, random))
        }
        IdentifierNamesGeneratorKind::Incremental => {
            Box::new(IncrementalIdentifierNamesGenerator::new(options))
        }
    };

    Ok(generator)
}

/// Names that can never be issued as identifiers. Covers the ES keywords
/// plus the strict-mode and literal reservations.
pub const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// ASCII identifier check: `[A-Za-z_$][A-Za-z0-9_$]*` and not reserved.
pub fn is_valid_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let leads = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_' || c == '$',
        None => return false,
    };

    leads
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !is_reserved_word(name)
}

/// Glue the configured global prefix onto a raw name, collapsing the one
/// doubled separator the concatenation itself can introduce. Only the first
/// occurrence collapses, matching the original `'...'.replace('__', '_')`.
pub(crate) fn prefixed_global_name(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}").replacen("__", "_", 1)
}
