use crate::generators::{prefixed_global_name, IdentifierNamesGenerator, ScopeKey};
use crate::options::ObfuscatorOptions;

/// Plain counting names: `x0`, `x1`, `x2`, ... One counter for the whole
/// run, shared by every entry point, never reset. Mostly useful for
/// debugging an obfuscation pipeline since the output stays greppable.
#[derive(Debug)]
pub struct IncrementalIdentifierNamesGenerator {
    prefix: String,
    iterator: usize,
}

impl IncrementalIdentifierNamesGenerator {
    pub fn new(options: &ObfuscatorOptions) -> Self {
        Self {
            prefix: options.identifiers_prefix.clone(),
            iterator: 0,
        }
    }
}

impl IdentifierNamesGenerator for IncrementalIdentifierNamesGenerator {
    fn generate_next(&mut self, _name_length: Option<usize>) -> String {
        let identifier_name = format!("x{}", self.iterator);
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
