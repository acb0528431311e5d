//! Reduction (§4.5): drops non-generating and unreachable symbols and their rules.
//!
//! Two independent fixed points, in sequence. Phase 1 (non-generating removal) reuses
//! [`RhsClosure`], since "every right-hand side symbol can derive some terminal string"
//! propagates bottom-up from right-hand side to left-hand side exactly like nullability does.
//! Phase 2 (unreachable removal) propagates the opposite direction — from a left-hand side
//! down into its right-hand side symbols — so it is its own small work-list routine.

use std::collections::{HashMap, HashSet};

use bit_vec::BitVec;
use log::debug;

use crate::grammar::Grammar;
use crate::rhs_closure::RhsClosure;
use crate::symbol::SymbolId;

impl Grammar {
    /// Removes rules and symbols that can never contribute to a derivation of a terminal
    /// string from the start variable: first symbols that generate no terminal string at
    /// all, then symbols unreachable from the start variable once those are gone.
    pub fn reduct(&mut self) {
        self.invalidate_caches();

        let num_syms = self.table.num_syms();

        let mut productive = BitVec::from_elem(num_syms, false);
        for &t in &self.terminals {
            productive.set(t.index(), true);
        }
        RhsClosure::new(&self.rules).closure(&mut productive);

        self.rules
            .retain(|r| r.is_nulling() || r.rhs().iter().all(|s| productive[s.index()]));
        self.variables
            .retain(|&v| v == self.start || productive[v.index()]);

        let mut by_lhs: HashMap<SymbolId, Vec<usize>> = HashMap::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            by_lhs.entry(rule.lhs()).or_default().push(idx);
        }

        let mut reachable = BitVec::from_elem(num_syms, false);
        reachable.set(self.start.index(), true);
        let mut work_stack = vec![self.start];
        while let Some(sym) = work_stack.pop() {
            for &idx in by_lhs.get(&sym).into_iter().flatten() {
                for &rhs_sym in self.rules[idx].rhs() {
                    if !reachable[rhs_sym.index()] {
                        reachable.set(rhs_sym.index(), true);
                        work_stack.push(rhs_sym);
                    }
                }
            }
        }

        self.rules.retain(|r| reachable[r.lhs().index()]);
        self.variables
            .retain(|&v| v == self.start || reachable[v.index()]);
        self.terminals.retain(|&t| reachable[t.index()]);

        debug!(
            "reduct: {} variables, {} terminals, {} rules remain",
            self.variables.len(),
            self.terminals.len(),
            self.rules.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet as StdHashSet;

    use crate::rule::RulesInput;
    use crate::Grammar;

    #[test]
    fn drops_non_generating_and_unreachable_symbols() {
        let mut g = Grammar::construct(
            ["S", "A", "B", "C"],
            ["a", "b", "\u{3bb}"],
            RulesInput::Pairs(vec![
                ("S".into(), "A".into()),
                ("A".into(), "a".into()),
                // B can never generate a terminal string (only derives itself via C, which
                // only derives B back) - non-generating.
                ("B".into(), "C".into()),
                ("C".into(), "B".into()),
                // D would be reachable from S but is never declared as a left-hand side of
                // any rule reachable from S, so it simply never appears; S -> A is the only
                // path from the start symbol.
            ]),
            "S",
            "\u{3bb}",
        )
        .unwrap();

        g.reduct();

        let vars: StdHashSet<&str> = g.variables().collect();
        assert_eq!(vars, ["S", "A"].into_iter().collect());
        assert_eq!(g.rule_count(), 2);
    }
}
