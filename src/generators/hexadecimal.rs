use crate::generators::{prefixed_global_name, IdentifierNamesGenerator, ScopeKey};
use crate::options::ObfuscatorOptions;

/// Default hex digit width when no name length is requested.
const DEFAULT_HEX_WIDTH: usize = 6;

/// Hex-flavored names: an increasing counter rendered as `_0x` plus hex
/// digits (`_0x000000`, `_0x000001`, ...). The `_0x` lead keeps the name a
/// valid identifier — a bare hex rendering could start with a digit.
#[derive(Debug)]
pub struct HexadecimalIdentifierNamesGenerator {
    prefix: String,
    iterator: usize,
}

impl HexadecimalIdentifierNamesGenerator {
    pub fn new(options: &ObfuscatorOptions) -> Self {
        Self {
            prefix: options.identifiers_prefix.clone(),
            iterator: 0,
        }
    }
}

impl IdentifierNamesGenerator for HexadecimalIdentifierNamesGenerator {
    fn generate_next(&mut self, name_length: Option<usize>) -> String {
        let width = name_length.unwrap_or(DEFAULT_HEX_WIDTH);
        let identifier_name = format!("_0x{:0width$x}", self.iterator);
        self.iterator += 1;
        identifier_name
    }

    fn generate_for_global_scope(&mut self, name_length: Option<usize>) -> String {
        let identifier_name = self.generate_next(name_length);
        prefixed_global_name(&self.prefix, &identifier_name)
    }

    fn generate_for_lexical_scope(&mut self, _scope: ScopeKey, name_length: Option<usize>) -> String {
        self.generate_next(name_length)
    }

    fn generate_for_label(&mut self, _label: &str, name_length: Option<usize>) -> String {
        self.generate_next(name_length)
    }
}
