//! A shared iterative (work-list) fixed-point routine: given a starting set of symbols that
//! have some property, propagate the property to every left-hand side all of whose
//! right-hand-side symbols already have it, until no more symbols can be added.
//!
//! This single routine backs both the nullable-variable computation (§4.3) and the
//! non-generating-variable computation (§4.5, phase 1) — the two are the same fixed point
//! over different rule sets and different seed properties. It is deliberately iterative
//! rather than recursive, to avoid blowing the stack on a long chain of dependent symbols.

use bit_vec::BitVec;

use crate::rule::Rule;
use crate::symbol::SymbolId;

/// Precomputed index from a right-hand-side symbol to the rules it appears in, so that
/// adding a symbol to the property set can cheaply find every rule it might newly enable.
pub struct RhsClosure<'a> {
    rules: &'a [Rule],
    derived_by: Vec<(SymbolId, usize)>,
    work_stack: Vec<SymbolId>,
}

impl<'a> RhsClosure<'a> {
    /// Indexes `rules` by the symbols occurring in their right-hand sides.
    pub fn new(rules: &'a [Rule]) -> Self {
        let mut derived_by = Vec::new();
        for (idx, rule) in rules.iter().enumerate() {
            for &sym in rule.rhs() {
                derived_by.push((sym, idx));
            }
        }
        derived_by.sort_unstable_by_key(|&(sym, _)| sym.index());

        RhsClosure {
            rules,
            derived_by,
            work_stack: Vec::new(),
        }
    }

    /// Computes the closure in place: repeatedly adds to `property` any left-hand side whose
    /// entire right-hand side already holds the property, starting from the symbols already
    /// set in `property`.
    pub fn closure(&mut self, property: &mut BitVec) {
        self.work_stack.clear();
        for (id, has_property) in property.iter().enumerate() {
            if has_property {
                self.work_stack.push(SymbolId::from_index(id));
            }
        }

        while let Some(sym) = self.work_stack.pop() {
            let start = self
                .derived_by
                .partition_point(|&(s, _)| s.index() < sym.index());
            for &(s, rule_idx) in self.derived_by[start..].iter() {
                if s != sym {
                    break;
                }
                let rule = &self.rules[rule_idx];
                let lhs = rule.lhs();
                if !property[lhs.index()] && rule.rhs().iter().all(|sym| property[sym.index()]) {
                    property.set(lhs.index(), true);
                    self.work_stack.push(lhs);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{SymbolKind, SymbolTable};

    #[test]
    fn propagates_to_lhs_when_all_rhs_symbols_qualify() {
        let mut table = SymbolTable::new();
        let s = table.intern("S", SymbolKind::Variable);
        let a = table.intern("A", SymbolKind::Variable);
        let b = table.intern("B", SymbolKind::Variable);
        // S -> A B ; A is seeded, B is seeded => S should become qualified.
        let rules = vec![Rule::new(s, vec![a, b])];
        let mut property = BitVec::from_elem(table.num_syms(), false);
        property.set(a.index(), true);
        property.set(b.index(), true);
        RhsClosure::new(&rules).closure(&mut property);
        assert!(property[s.index()]);
    }

    #[test]
    fn does_not_propagate_when_rhs_partially_qualifies() {
        let mut table = SymbolTable::new();
        let s = table.intern("S", SymbolKind::Variable);
        let a = table.intern("A", SymbolKind::Variable);
        let b = table.intern("B", SymbolKind::Variable);
        let rules = vec![Rule::new(s, vec![a, b])];
        let mut property = BitVec::from_elem(table.num_syms(), false);
        property.set(a.index(), true);
        RhsClosure::new(&rules).closure(&mut property);
        assert!(!property[s.index()]);
    }
}
