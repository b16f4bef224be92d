use crate::generators::mangled::{MangledIdentifierNamesGenerator, MANGLED_ALPHABET};
use crate::generators::{IdentifierNamesGenerator, ScopeKey};
use crate::options::ObfuscatorOptions;
use crate::random::RandomGenerator;

/// The mangled strategy over a permuted alphabet. The permutation happens
/// exactly once, at construction, and is then fixed for the whole run:
/// reruns with the same seed reproduce the same names, reruns without a
/// seed do not.
#[derive(Debug)]
pub struct MangledShuffledIdentifierNamesGenerator {
    inner: MangledIdentifierNamesGenerator,
}

impl MangledShuffledIdentifierNamesGenerator {
    pub fn new(options: &ObfuscatorOptions, random: &mut RandomGenerator) -> Self {
        let mut alphabet: Vec<char> = MANGLED_ALPHABET.chars().collect();
        random.shuffle(&mut alphabet);

        Self {
            inner: MangledIdentifierNamesGenerator::with_alphabet(options, alphabet),
        }
    }
}

impl IdentifierNamesGenerator for MangledShuffledIdentifierNamesGenerator {
    fn generate_next(&mut self, name_length: Option<usize>) -> String {
        self.inner.generate_next(name_length)
    }

    fn generate_for_global_scope(&mut self, name_length: Option<usize>) -> String {
        self.inner.generate_for_global_scope(name_length)
    }

    fn generate_for_lexical_scope(&mut self, scope: ScopeKey, name_length: Option<usize>) -> String {
        self.inner.generate_for_lexical_scope(scope, name_length)
    }

    fn generate_for_label(&mut self, label: &str, name_length: Option<usize>) -> String {
        self.inner.generate_for_label(label, name_length)
    }
}
