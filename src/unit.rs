//! Unit-rule elimination (§4.4): removes `A -> B` productions via transitive closure over
//! unit-productions, leaving the generated language unchanged.

use std::collections::{HashMap, HashSet};

use bit_matrix::BitMatrix;
use log::debug;

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::SymbolId;

fn is_unit_rule(rule: &Rule, is_variable: impl Fn(SymbolId) -> bool) -> bool {
    rule.is_unit(is_variable)
}

impl Grammar {
    /// Removes every unit rule `A -> B` (where `B` is a single variable), folding in `B`'s
    /// non-unit alternatives transitively.
    pub fn remove_unit_rules(&mut self) {
        self.invalidate_caches();

        let num_syms = self.table.num_syms();
        let is_var = |sym: SymbolId| self.table.is_variable(sym);

        let mut reach = BitMatrix::new(num_syms, num_syms);
        for rule in &self.rules {
            if is_unit_rule(rule, is_var) {
                reach.set(rule.lhs().index(), rule.rhs()[0].index(), true);
            }
        }
        reach.transitive_closure();

        let mut non_unit_by_var: HashMap<SymbolId, Vec<&Rule>> = HashMap::new();
        for rule in &self.rules {
            if !is_unit_rule(rule, is_var) {
                non_unit_by_var.entry(rule.lhs()).or_default().push(rule);
            }
        }

        let mut new_rules: HashSet<Rule> = HashSet::new();
        for &var in &self.variables {
            for rule in non_unit_by_var.get(&var).into_iter().flatten() {
                new_rules.insert(Rule::new(var, rule.rhs().to_vec()));
            }
            for &related in &self.variables {
                if related != var && reach[var.index()][related.index()] {
                    for rule in non_unit_by_var.get(&related).into_iter().flatten() {
                        new_rules.insert(Rule::new(var, rule.rhs().to_vec()));
                    }
                }
            }
        }

        debug!(
            "remove_unit_rules: {} -> {} rules",
            self.rules.len(),
            new_rules.len()
        );

        self.rules = new_rules.into_iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use crate::rule::RulesInput;
    use crate::Grammar;

    #[test]
    fn folds_in_unit_targets_transitively() {
        let mut g = Grammar::construct(
            ["S", "A", "B"],
            ["a", "\u{3bb}"],
            RulesInput::Pairs(vec![
                ("S".into(), "A".into()),
                ("A".into(), "B".into()),
                ("B".into(), "a".into()),
            ]),
            "S",
            "\u{3bb}",
        )
        .unwrap();

        g.remove_unit_rules();

        let table = &g.table;
        let rendered: std::collections::HashSet<String> = g
            .rules
            .iter()
            .map(|r| {
                let lhs = table.name(r.lhs()).to_string();
                let rhs: String = r.rhs().iter().map(|&s| table.name(s)).collect();
                format!("{lhs}->{rhs}")
            })
            .collect();

        assert_eq!(rendered, ["S->a", "A->a", "B->a"].iter().map(|s| s.to_string()).collect());
    }
}
