//! Symbol interning.
//!
//! Grammar symbols are user-facing strings, but every internal algorithm — nullable-set
//! fixed points, reachability matrices, CYK table lookups — operates on dense numeric ids.
//! `SymbolTable` is the single place that translates between the two: it interns each
//! distinct variable/terminal string once and hands out a [`SymbolId`] that is `Copy`,
//! `Hash` and ordered, so it can be used directly as a bit-vector index or hash-map key.

use std::collections::HashMap;

/// A dense handle to an interned symbol. Comparisons and hashing are by id, not by the
/// underlying string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        SymbolId(index as u32)
    }
}

/// Whether an interned symbol is a variable (non-terminal) or a terminal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolKind {
    /// A non-terminal, rewritable by rules.
    Variable,
    /// A terminal, never rewritten.
    Terminal,
}

/// Interns variable and terminal strings into [`SymbolId`]s.
///
/// Every symbol the grammar has ever seen keeps a stable id for the table's lifetime, even
/// across transformations that drop the symbol from use — ids are never recycled, which
/// keeps bit-vectors sized by `num_syms()` valid as long-lived snapshots.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolTable {
    names: Vec<String>,
    kinds: Vec<SymbolKind>,
    ids: HashMap<String, SymbolId>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Interns `name` as a symbol of the given kind, returning its id. If `name` was already
    /// interned, returns the existing id without changing its kind.
    pub fn intern(&mut self, name: &str, kind: SymbolKind) -> SymbolId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = SymbolId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.kinds.push(kind);
        self.ids.insert(name.to_owned(), id);
        id
    }

    /// Looks up the id of an already-interned symbol.
    pub fn id_of(&self, name: &str) -> Option<SymbolId> {
        self.ids.get(name).copied()
    }

    /// Returns the string form of an interned symbol.
    pub fn name(&self, id: SymbolId) -> &str {
        &self.names[id.index()]
    }

    /// Returns the kind (variable or terminal) of an interned symbol.
    pub fn kind(&self, id: SymbolId) -> SymbolKind {
        self.kinds[id.index()]
    }

    /// Returns whether `id` is a variable.
    pub fn is_variable(&self, id: SymbolId) -> bool {
        matches!(self.kind(id), SymbolKind::Variable)
    }

    /// Returns whether `id` is a terminal.
    pub fn is_terminal(&self, id: SymbolId) -> bool {
        matches!(self.kind(id), SymbolKind::Terminal)
    }

    /// Returns the number of distinct symbols ever interned.
    pub fn num_syms(&self) -> usize {
        self.names.len()
    }

    /// Returns an iterator over all currently-known symbol ids with the given kind.
    pub fn ids_of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = SymbolId> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(move |&(_, &k)| k == kind)
            .map(|(i, _)| SymbolId(i as u32))
    }
}

/// Checks if two strings contain each other (one is a substring of the other), per the
/// unique-decoding invariant. Returns `(do they, the longer/containing one, the contained one)`.
pub fn strings_contain_each_other<'a>(a: &'a str, b: &'a str) -> Option<(&'a str, &'a str)> {
    if a == b {
        return Some((a, b));
    }
    if a.contains(b) {
        Some((a, b))
    } else if b.contains(a) {
        Some((b, a))
    } else {
        None
    }
}

/// Returns true if `s` contains any whitespace character.
pub fn contains_whitespace(s: &str) -> bool {
    s.chars().any(|c| c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let mut table = SymbolTable::new();
        let a = table.intern("S", SymbolKind::Variable);
        let b = table.intern("S", SymbolKind::Variable);
        assert_eq!(a, b);
        assert_eq!(table.num_syms(), 1);
    }

    #[test]
    fn distinct_names_get_distinct_ids() {
        let mut table = SymbolTable::new();
        let a = table.intern("S", SymbolKind::Variable);
        let b = table.intern("a", SymbolKind::Terminal);
        assert_ne!(a, b);
        assert!(table.is_variable(a));
        assert!(table.is_terminal(b));
        assert_eq!(table.name(a), "S");
    }

    #[test]
    fn containment_detection() {
        assert_eq!(strings_contain_each_other("ab", "a"), Some(("ab", "a")));
        assert_eq!(strings_contain_each_other("a", "ab"), Some(("ab", "a")));
        assert_eq!(strings_contain_each_other("a", "b"), None);
    }

    #[test]
    fn whitespace_detection() {
        assert!(contains_whitespace("a b"));
        assert!(!contains_whitespace("ab"));
    }
}
