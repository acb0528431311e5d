//! Decomposes a rule's right-hand side string into an ordered sequence of grammar symbols.
//!
//! Given an alphabet `U` in which no symbol is a substring of another (the unique-decoding
//! invariant), the longest-match-at-each-position strategy yields the one and only valid
//! decomposition of any coverable string. This is implemented as a reachability sweep from
//! the end of the string followed by a greedy left-to-right reconstruction, rather than a
//! compiled regular expression alternation — the grammar keeps its alphabet interned as
//! `SymbolId`s, so there is no string-level alternation to build or recompile on every call.

use crate::symbol::{SymbolId, SymbolTable};

/// Tokenizes `input` over the given alphabet, returning the ordered sequence of symbol ids
/// whose concatenation equals `input` exactly, or `None` if no such covering exists.
pub fn tokenize(input: &str, alphabet: &[SymbolId], table: &SymbolTable) -> Option<Vec<SymbolId>> {
    if input.is_empty() {
        return None;
    }

    let mut by_len: Vec<(SymbolId, &str)> = alphabet.iter().map(|&id| (id, table.name(id))).collect();
    by_len.sort_unstable_by(|a, b| b.1.len().cmp(&a.1.len()));

    let n = input.len();
    // reachable[i] == the suffix input[i..] can be fully covered by alphabet symbols.
    let mut reachable = vec![false; n + 1];
    reachable[n] = true;
    for i in (0..n).rev() {
        if !input.is_char_boundary(i) {
            continue;
        }
        for &(_, name) in &by_len {
            let end = i + name.len();
            if end <= n && input.is_char_boundary(end) && input[i..end] == *name && reachable[end] {
                reachable[i] = true;
                break;
            }
        }
    }

    if !reachable[0] {
        return None;
    }

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < n {
        let mut found = None;
        for &(id, name) in &by_len {
            let end = i + name.len();
            if end <= n && input.is_char_boundary(end) && input[i..end] == *name && reachable[end] {
                found = Some((id, end));
                break;
            }
        }
        let (id, end) = found.expect("reachable[i] implies a covering symbol exists at i");
        tokens.push(id);
        i = end;
    }

    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::SymbolKind;

    fn table_with(vars: &[&str], terms: &[&str]) -> (SymbolTable, Vec<SymbolId>) {
        let mut table = SymbolTable::new();
        let mut ids = Vec::new();
        for v in vars {
            ids.push(table.intern(v, SymbolKind::Variable));
        }
        for t in terms {
            ids.push(table.intern(t, SymbolKind::Terminal));
        }
        (table, ids)
    }

    #[test]
    fn tokenizes_unique_decomposition() {
        let (table, alphabet) = table_with(&["S"], &["a", "b", "c"]);
        let s = table.id_of("S").unwrap();
        let a = table.id_of("a").unwrap();
        let toks = tokenize("aSa", &alphabet, &table).unwrap();
        assert_eq!(toks, vec![a, s, a]);
    }

    #[test]
    fn fails_on_uncoverable_remainder() {
        let (table, alphabet) = table_with(&["S"], &["a", "b"]);
        assert!(tokenize("aSx", &alphabet, &table).is_none());
    }

    #[test]
    fn longest_match_preferred() {
        let mut table = SymbolTable::new();
        let ab = table.intern("ab", SymbolKind::Variable);
        let a = table.intern("a", SymbolKind::Terminal);
        let b = table.intern("b", SymbolKind::Terminal);
        let toks = tokenize("ab", &[ab, a, b], &table).unwrap();
        assert_eq!(toks, vec![ab]);
    }

    #[test]
    fn empty_input_never_tokenizes() {
        let (table, alphabet) = table_with(&["S"], &["a"]);
        assert!(tokenize("", &alphabet, &table).is_none());
    }
}
