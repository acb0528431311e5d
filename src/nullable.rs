//! Null-rule elimination (§4.3): removes `A -> lambda` productions while preserving the
//! language minus possibly the empty string.

use std::collections::HashSet;

use bit_vec::BitVec;
use log::debug;

use crate::grammar::Grammar;
use crate::rhs_closure::RhsClosure;
use crate::rule::Rule;
use crate::symbol::SymbolId;

impl Grammar {
    /// Removes every nulling rule `A -> lambda`, expanding every other rule's right-hand
    /// side into all combinations of its nullable-symbol occurrences being kept or dropped.
    pub fn remove_null_rules(&mut self) {
        self.invalidate_caches();

        let num_syms = self.table.num_syms();
        let mut nullable = BitVec::from_elem(num_syms, false);
        for rule in &self.rules {
            if rule.is_nulling() {
                nullable.set(rule.lhs().index(), true);
            }
        }
        RhsClosure::new(&self.rules).closure(&mut nullable);

        let mut new_rules: HashSet<Rule> = HashSet::new();
        for rule in &self.rules {
            if rule.is_nulling() {
                continue;
            }
            for expanded in expand_nullable_occurrences(rule, &nullable) {
                new_rules.insert(expanded);
            }
        }

        debug!(
            "remove_null_rules: {} nullable variables, {} -> {} rules",
            nullable.iter().filter(|&b| b).count(),
            self.rules.len(),
            new_rules.len()
        );

        self.rules = new_rules.into_iter().collect();
    }
}

/// Enumerates every rule obtainable from `rule` by independently keeping or dropping each
/// occurrence of a nullable symbol in its right-hand side, discarding the empty result.
/// The original rule (all occurrences kept) is always included.
fn expand_nullable_occurrences(rule: &Rule, nullable: &BitVec) -> Vec<Rule> {
    let rhs = rule.rhs();
    let nullable_positions: Vec<usize> = rhs
        .iter()
        .enumerate()
        .filter(|&(_, &sym)| nullable[sym.index()])
        .map(|(i, _)| i)
        .collect();

    if nullable_positions.is_empty() {
        return vec![rule.clone()];
    }

    let k = nullable_positions.len();
    let mut out = Vec::with_capacity(1 << k);
    for mask in 0..(1u32 << k) {
        let dropped: HashSet<usize> = nullable_positions
            .iter()
            .enumerate()
            .filter(|&(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &pos)| pos)
            .collect();

        let new_rhs: Vec<SymbolId> = rhs
            .iter()
            .enumerate()
            .filter(|&(i, _)| !dropped.contains(&i))
            .map(|(_, &sym)| sym)
            .collect();

        if !new_rhs.is_empty() {
            out.push(Rule::new(rule.lhs(), new_rhs));
        }
    }
    out
}
