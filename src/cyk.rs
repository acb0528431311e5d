//! CYK membership testing (§4.7): decides whether a grammar derives a given string.

use std::collections::HashMap;

use crate::grammar::Grammar;
use crate::symbol::SymbolId;
use crate::tokenizer;

impl Grammar {
    /// Decides whether this grammar derives `input`.
    ///
    /// The empty string is handled directly against `accepts_null`, since Chomsky Normal
    /// Form conversion discards the nulling rule that would otherwise answer the question.
    /// A non-empty `input` equal to the literal null-symbol string is never derivable (the
    /// null-symbol is never mixed into a tokenizable string by construction), and any other
    /// input is tokenized over the terminals (excluding the null-symbol) and decided by the
    /// standard dynamic-programming table over the grammar's cached CNF form.
    pub fn cyk(&self, input: &str) -> bool {
        if input.is_empty() {
            return self.accepts_null();
        }
        if input == self.null_symbol() {
            return false;
        }

        self.with_cnf_cache(|cnf, _accepts_null_before_cnf| {
            let alphabet: Vec<_> = cnf
                .terminals
                .iter()
                .copied()
                .filter(|&t| t != cnf.null)
                .collect();

            let tokens = match tokenizer::tokenize(input, &alphabet, &cnf.table) {
                Some(tokens) => tokens,
                None => return false,
            };

            cnf.cyk_decide(&tokens)
        })
    }

    /// The dynamic-programming core: `table[len][start]` is the set of variables that derive
    /// `tokens[start..start+len]`, built bottom-up from length-1 spans.
    ///
    /// Binary CNF rules are indexed once, up front, by their `(B, C)` right-hand-side pair, so
    /// that each cell of the O(n^3) loop below does an O(1)-average lookup per split instead of
    /// scanning every rule in the grammar (§4.7's complexity note).
    fn cyk_decide(&self, tokens: &[SymbolId]) -> bool {
        let n = tokens.len();
        if n == 0 {
            return self.accepts_null();
        }

        let num_syms = self.table.num_syms();

        let mut unary_by_terminal: HashMap<SymbolId, Vec<SymbolId>> = HashMap::new();
        let mut binary_by_pair: HashMap<(SymbolId, SymbolId), Vec<SymbolId>> = HashMap::new();
        for rule in &self.rules {
            match rule.rhs() {
                [t] => unary_by_terminal.entry(*t).or_default().push(rule.lhs()),
                [b, c] => binary_by_pair.entry((*b, *c)).or_default().push(rule.lhs()),
                _ => {}
            }
        }

        // has[span_len - 1][start] : bitset over symbol ids, for the final O(1) membership
        // check; present[..] mirrors it as the list of symbols actually set in that cell, so
        // the split loop below never has to rescan the full `num_syms` range to find them.
        let mut has: Vec<Vec<Vec<bool>>> = vec![vec![vec![false; num_syms]; n]; n];
        let mut present: Vec<Vec<Vec<SymbolId>>> = vec![vec![Vec::new(); n]; n];

        for (i, &tok) in tokens.iter().enumerate() {
            for &lhs in unary_by_terminal.get(&tok).into_iter().flatten() {
                mark(&mut has, &mut present, 0, i, lhs);
            }
        }

        for span in 2..=n {
            for start in 0..=(n - span) {
                for split in 1..span {
                    let left_len = split;
                    let right_len = span - split;
                    let pairs: Vec<(SymbolId, SymbolId)> = present[left_len - 1][start]
                        .iter()
                        .flat_map(|&b| present[right_len - 1][start + split].iter().map(move |&c| (b, c)))
                        .collect();
                    for (b, c) in pairs {
                        for &lhs in binary_by_pair.get(&(b, c)).into_iter().flatten() {
                            mark(&mut has, &mut present, span - 1, start, lhs);
                        }
                    }
                }
            }
        }

        has[n - 1][0][self.start.index()]
    }
}

/// Records that `lhs` derives the span `table[span_idx][start]`, if not already recorded.
fn mark(
    has: &mut [Vec<Vec<bool>>],
    present: &mut [Vec<Vec<SymbolId>>],
    span_idx: usize,
    start: usize,
    lhs: SymbolId,
) {
    if !has[span_idx][start][lhs.index()] {
        has[span_idx][start][lhs.index()] = true;
        present[span_idx][start].push(lhs);
    }
}
