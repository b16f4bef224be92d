use std::collections::HashMap;

use crate::generators::{prefixed_global_name, IdentifierNamesGenerator, ScopeKey};
use crate::options::ObfuscatorOptions;

/// Names drawn from a user-supplied word list. Each naming namespace (the
/// shared sequence, one per lexical scope, one per label) walks the list
/// from the top without repeats; once a namespace has spent the list it
/// starts over with a numeric suffix (`keys`, `vals`, `keys0`, `vals0`,
/// `keys1`, ...), so exhaustion extends instead of colliding or failing.
///
/// The factory has already rejected empty lists and invalid words by the
/// time this is constructed.
#[derive(Debug)]
pub struct DictionaryIdentifierNamesGenerator {
    prefix: String,
    words: Vec<String>,
    iterator: usize,
    scope_iterators: HashMap<ScopeKey, usize>,
    label_iterators: HashMap<String, usize>,
}

impl DictionaryIdentifierNamesGenerator {
    pub fn new(options: &ObfuscatorOptions) -> Self {
        Self {
            prefix: options.identifiers_prefix.clone(),
            words: options.identifiers_dictionary.clone(),
            iterator: 0,
            scope_iterators: HashMap::new(),
            label_iterators: HashMap::new(),
        }
    }

    fn name_at(words: &[String], index: usize) -> String {
        let word = &words[index % words.len()];
        let cycle = index / words.len();
        if cycle == 0 {
            word.clone()
        } else {
            format!("{}{}", word, cycle - 1)
        }
    }

    fn next_from(words: &[String], iterator: &mut usize) -> String {
        let name = Self::name_at(words, *iterator);
        *iterator += 1;
        name
    }
}

impl IdentifierNamesGenerator for DictionaryIdentifierNamesGenerator {
    fn generate_next(&mut self, _name_length: Option<usize>) -> String {
        Self::next_from(&self.words, &mut self.iterator)
    }

    fn generate_for_global_scope(&mut self, name_length: Option<usize>) -> String {
        let identifier_name = self.generate_next(name_length);
        prefixed_global_name(&self.prefix, &identifier_name)
    }

    fn generate_for_lexical_scope(&mut self, scope: ScopeKey, _name_length: Option<usize>) -> String {
        let iterator = self.scope_iterators.entry(scope).or_insert(0);
        Self::next_from(&self.words, iterator)
    }

    fn generate_for_label(&mut self, label: &str, _name_length: Option<usize>) -> String {
        let iterator = self.label_iterators.entry(label.to_string()).or_insert(0);
        Self::next_from(&self.words, iterator)
    }
}
