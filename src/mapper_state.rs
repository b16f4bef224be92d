use crate::generators::{IdentifierNamesGenerator, IncrementalIdentifierNamesGenerator};
use crate::options::ObfuscatorOptions;

/// Mutable state shared by every visitor of one obfuscation run, behind the
/// mapper's `Rc<RefCell<..>>`. One instance per run; visitors borrow it for
/// the duration of a single callback only.
pub struct MapperState {
    /// The run's active name generator, picked from the options at startup.
    pub names: Box<dyn IdentifierNamesGenerator>,

    // Stack of (original, replacement) label names, innermost last. Pushed
    // when a labeled statement is entered, popped when it is left, so a
    // break/continue always resolves against the nearest enclosing label
    // and shadowing works out by construction.
    pub label_scopes: Vec<(String, String)>,
}

impl MapperState {
    pub fn new(names: Box<dyn IdentifierNamesGenerator>) -> Self {
        Self {
            names,
            label_scopes: Vec::new(),
        }
    }

    /// Resolve a label reference to its replacement, if the enclosing
    /// labeled statement was renamed. Innermost match wins.
    pub fn renamed_label(&self, original: &str) -> Option<&str> {
        self.label_scopes
            .iter()
            .rev()
            .find(|(from, _)| from == original)
            .map(|(_, to)| to.as_str())
    }
}

impl Default for MapperState {
    fn default() -> Self {
        Self::new(Box::new(IncrementalIdentifierNamesGenerator::new(
            &ObfuscatorOptions::default(),
        )))
    }
}
