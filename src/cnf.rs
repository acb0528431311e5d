//! Chomsky Normal Form conversion (§4.6): rewrites every rule to either `A -> BC` or `A -> a`.
//!
//! Two phases, run in order on a grammar that has already been simplified (no nulling or unit
//! rules remain): terminal isolation replaces every terminal occurring inside a right-hand
//! side of length two or more with a fresh variable that derives it; arity reduction then
//! collapses every right-hand side longer than two symbols into a chain of binary rules.
//!
//! The arity-reduction chain is built so it **preserves left-to-right order**: for a rule
//! `A -> X1 X2 ... Xk` it introduces fresh variables `Y1 .. Y(k-2)` and produces
//! `A -> Y1 Xk`, `Y1 -> Y2 X(k-1)`, ..., `Y(k-2) -> X1 X2`. The chain is built from the end of
//! the right-hand side inward, so the first two original symbols end up paired directly at
//! the bottom of the chain rather than reversed.

use std::collections::HashMap;

use log::debug;

use crate::grammar::Grammar;
use crate::namegen::NameGenerator;
use crate::rule::Rule;
use crate::symbol::{SymbolId, SymbolKind};

impl Grammar {
    /// Converts every rule to Chomsky Normal Form. Assumes null and unit rules have already
    /// been removed (see [`Grammar::simplify`]); nulling or unit rules left in place pass
    /// through untouched and are not valid CNF.
    pub fn chomsky(&mut self) {
        self.invalidate_caches();

        let mut namegen = NameGenerator::new();
        self.isolate_terminals(&mut namegen);
        self.reduce_arity(&mut namegen);

        self.is_cnf = true;
        debug!("chomsky: {} rules in CNF", self.rules.len());
    }

    fn isolate_terminals(&mut self, namegen: &mut NameGenerator) {
        let mut rule_count_by_lhs: HashMap<SymbolId, usize> = HashMap::new();
        for rule in &self.rules {
            *rule_count_by_lhs.entry(rule.lhs()).or_insert(0) += 1;
        }

        // Only a variable whose *sole* right-hand side is a single terminal may be reused as
        // that terminal's isolating variable (§4.6 Phase 1) — a variable with any other
        // production (even a second rule for the same terminal) is not eligible, or every
        // rule referencing that terminal would silently inherit its other alternatives too.
        let mut terminal_vars: HashMap<SymbolId, SymbolId> = HashMap::new();
        for rule in &self.rules {
            if rule.rhs().len() == 1
                && self.table.is_terminal(rule.rhs()[0])
                && rule_count_by_lhs.get(&rule.lhs()) == Some(&1)
            {
                terminal_vars.entry(rule.rhs()[0]).or_insert(rule.lhs());
            }
        }

        let mut new_vars: Vec<SymbolId> = Vec::new();

        for rule in self.rules.iter_mut() {
            if rule.rhs().len() < 2 {
                continue;
            }
            let mut changed = false;
            let mut new_rhs = Vec::with_capacity(rule.rhs().len());
            for &sym in rule.rhs() {
                if self.table.is_terminal(sym) {
                    changed = true;
                    let var = *terminal_vars.entry(sym).or_insert_with(|| {
                        let name = namegen.next_name(&self.table);
                        let id = self.table.intern(&name, SymbolKind::Variable);
                        new_vars.push(id);
                        id
                    });
                    new_rhs.push(var);
                } else {
                    new_rhs.push(sym);
                }
            }
            if changed {
                *rule = Rule::new(rule.lhs(), new_rhs);
            }
        }

        for &var in &new_vars {
            self.variables.insert(var);
        }
        for (&term, &var) in &terminal_vars {
            if new_vars.contains(&var) {
                self.rules.push(Rule::new(var, vec![term]));
            }
        }
    }

    fn reduce_arity(&mut self, namegen: &mut NameGenerator) {
        let mut new_vars: Vec<SymbolId> = Vec::new();
        let mut out_rules = Vec::with_capacity(self.rules.len());

        for rule in self.rules.drain(..) {
            if rule.rhs().len() <= 2 {
                out_rules.push(rule);
                continue;
            }

            let lhs = rule.lhs();
            let rhs = rule.rhs().to_vec();
            let k = rhs.len();

            let mut lhs_seq = vec![lhs];
            for _ in 0..(k - 2) {
                let name = namegen.next_name(&self.table);
                let id = self.table.intern(&name, SymbolKind::Variable);
                new_vars.push(id);
                lhs_seq.push(id);
            }

            for (i, &step_lhs) in lhs_seq.iter().enumerate().take(k - 2) {
                out_rules.push(Rule::new(step_lhs, vec![lhs_seq[i + 1], rhs[k - 1 - i]]));
            }
            out_rules.push(Rule::new(lhs_seq[k - 2], vec![rhs[0], rhs[1]]));
        }

        self.rules = out_rules;
        for v in new_vars {
            self.variables.insert(v);
        }
    }
}
