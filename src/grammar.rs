//! The grammar value: construction, validation, and the in-place transformation pipeline.

use std::cell::RefCell;
use std::collections::HashSet;

use log::debug;

use crate::error::{GrammarError, Result};
use crate::rule::{Rule, RulesInput};
use crate::symbol::{contains_whitespace, strings_contain_each_other, SymbolId, SymbolKind, SymbolTable};
use crate::tokenizer;

/// A cached Chomsky Normal Form copy of a grammar, built lazily on first [`Grammar::cyk`] call.
struct CnfCache {
    grammar: Box<Grammar>,
    /// `accepts_null` as observed on the pre-CNF grammar — CNF conversion destroys the
    /// nulling rule that would otherwise let us recompute this afterwards.
    accepts_null_before_cnf: bool,
}

/// A context-free grammar `(V, Sigma, R, S, lambda)` over string-concatenated symbols.
///
/// With the `serialize` feature enabled, a `Grammar` can be serialized directly via `serde`;
/// the lazily-built CNF cache is a derived artifact and is never serialized, just like a fresh
/// [`Clone`] never carries it over (it is rebuilt on demand after deserializing, same as after
/// cloning).
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    pub(crate) table: SymbolTable,
    pub(crate) variables: HashSet<SymbolId>,
    pub(crate) terminals: HashSet<SymbolId>,
    pub(crate) start: SymbolId,
    pub(crate) null: SymbolId,
    pub(crate) rules: Vec<Rule>,
    pub(crate) is_cnf: bool,
    #[cfg_attr(feature = "serialize", serde(skip))]
    cnf_cache: RefCell<Option<CnfCache>>,
}

impl Clone for Grammar {
    fn clone(&self) -> Self {
        Grammar {
            table: self.table.clone(),
            variables: self.variables.clone(),
            terminals: self.terminals.clone(),
            start: self.start,
            null: self.null,
            rules: self.rules.clone(),
            is_cnf: self.is_cnf,
            // The cache is a derived artifact; each clone rebuilds it lazily on demand.
            cnf_cache: RefCell::new(None),
        }
    }
}

impl Grammar {
    /// Constructs and validates a grammar from user-supplied sets and rules.
    ///
    /// Validation, in order: (1) no symbol contains whitespace, (2) no two symbols within
    /// the same set (variables, or terminals) contain each other, (3) every rule's
    /// left-hand side is a variable and its right-hand side is either the null-symbol or a
    /// full tokenization over variables ∪ terminals with no null-symbol mixed in, (4) the
    /// start variable is a variable and the null-symbol is a terminal.
    pub fn construct<I, J>(
        variables: I,
        terminals: J,
        rules: RulesInput,
        start: &str,
        null: &str,
    ) -> Result<Grammar>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let mut table = SymbolTable::new();

        for v in variables {
            table.intern(v.as_ref(), SymbolKind::Variable);
        }
        for t in terminals {
            table.intern(t.as_ref(), SymbolKind::Terminal);
        }

        let raw_pairs = rules.into_pairs();
        for lhs in RulesInput::Pairs(raw_pairs.clone()).lhs_variables() {
            table.intern(&lhs, SymbolKind::Variable);
        }

        // (1) whitespace
        for id in table.ids_of_kind(SymbolKind::Variable) {
            let name = table.name(id);
            if contains_whitespace(name) {
                return Err(GrammarError::WhitespaceInSymbol(name.to_owned()));
            }
        }
        for id in table.ids_of_kind(SymbolKind::Terminal) {
            let name = table.name(id);
            if contains_whitespace(name) {
                return Err(GrammarError::WhitespaceInSymbol(name.to_owned()));
            }
        }
        for (lhs, rhs) in &raw_pairs {
            if contains_whitespace(lhs) || contains_whitespace(rhs) {
                return Err(GrammarError::WhitespaceInSymbol(format!("{lhs} -> {rhs}")));
            }
        }

        // (2) containment, checked independently within each set (not across the union).
        check_no_containment(&table, SymbolKind::Variable)?;
        check_no_containment(&table, SymbolKind::Terminal)?;

        // (3) rules
        let alphabet: Vec<SymbolId> = table
            .ids_of_kind(SymbolKind::Variable)
            .chain(table.ids_of_kind(SymbolKind::Terminal))
            .collect();

        let mut rule_list = Vec::with_capacity(raw_pairs.len());
        for (lhs, rhs) in &raw_pairs {
            let lhs_id = table
                .id_of(lhs)
                .ok_or_else(|| GrammarError::UnknownVariableInRule(lhs.clone()))?;
            if !table.is_variable(lhs_id) {
                return Err(GrammarError::UnknownVariableInRule(lhs.clone()));
            }

            if rhs == null {
                rule_list.push(Rule::new(lhs_id, vec![]));
                continue;
            }

            let tokens = tokenizer::tokenize(rhs, &alphabet, &table).ok_or_else(|| {
                GrammarError::MalformedRightHandSide {
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                }
            })?;

            if let Some(null_id) = table.id_of(null) {
                if tokens.contains(&null_id) {
                    return Err(GrammarError::MalformedRightHandSide {
                        lhs: lhs.clone(),
                        rhs: rhs.clone(),
                    });
                }
            }

            rule_list.push(Rule::new(lhs_id, tokens));
        }

        // (4) start and null
        let start_id = table
            .id_of(start)
            .filter(|&id| table.is_variable(id))
            .ok_or_else(|| GrammarError::StartNotInVariables(start.to_owned()))?;
        let null_id = table
            .id_of(null)
            .filter(|&id| table.is_terminal(id))
            .ok_or_else(|| GrammarError::NullSymbolNotInTerminals(null.to_owned()))?;

        let variables: HashSet<SymbolId> = table.ids_of_kind(SymbolKind::Variable).collect();
        let terminals: HashSet<SymbolId> = table.ids_of_kind(SymbolKind::Terminal).collect();

        debug!(
            "constructed grammar: {} variables, {} terminals, {} rules",
            variables.len(),
            terminals.len(),
            rule_list.len()
        );

        Ok(Grammar {
            table,
            variables,
            terminals,
            start: start_id,
            null: null_id,
            rules: rule_list,
            is_cnf: false,
            cnf_cache: RefCell::new(None),
        })
    }

    /// Invalidates derived caches. Called at the top of every in-place transformation.
    pub(crate) fn invalidate_caches(&mut self) {
        self.is_cnf = false;
        *self.cnf_cache.borrow_mut() = None;
    }

    /// The grammar's variables, as strings, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(move |&id| self.table.name(id))
    }

    /// The grammar's terminals, as strings, in no particular order.
    pub fn terminals(&self) -> impl Iterator<Item = &str> {
        self.terminals.iter().map(move |&id| self.table.name(id))
    }

    /// The start variable.
    pub fn start(&self) -> &str {
        self.table.name(self.start)
    }

    /// The null-symbol.
    pub fn null_symbol(&self) -> &str {
        self.table.name(self.null)
    }

    /// The number of rules currently in the grammar.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Whether the start variable can derive the empty string, i.e. whether `(S, lambda)` is
    /// currently a rule. Always recomputed from the current rule set (invariant 6).
    pub fn accepts_null(&self) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.lhs() == self.start && rule.is_nulling())
    }

    /// Whether every rule is currently in Chomsky Normal Form (`A -> BC` or `A -> a`).
    pub fn is_cnf(&self) -> bool {
        self.is_cnf
    }

    /// Runs the full simplification pipeline in place: null-rule removal, then unit-rule
    /// removal, then reduction to generating and reachable symbols only.
    pub fn simplify(&mut self) {
        self.remove_null_rules();
        self.remove_unit_rules();
        self.reduct();
    }

    /// Builds (if absent) and returns the cached CNF copy of this grammar, together with the
    /// `accepts_null` value observed before conversion.
    pub(crate) fn with_cnf_cache<R>(&self, f: impl FnOnce(&Grammar, bool) -> R) -> R {
        if self.is_cnf {
            return f(self, self.accepts_null());
        }
        {
            let cache = self.cnf_cache.borrow();
            if let Some(cache) = cache.as_ref() {
                return f(&cache.grammar, cache.accepts_null_before_cnf);
            }
        }
        let accepts_null_before_cnf = self.accepts_null();
        let mut cnf = self.clone();
        cnf.simplify();
        cnf.chomsky();
        let result = f(&cnf, accepts_null_before_cnf);
        *self.cnf_cache.borrow_mut() = Some(CnfCache {
            grammar: Box::new(cnf),
            accepts_null_before_cnf,
        });
        result
    }
}

fn check_no_containment(table: &SymbolTable, kind: SymbolKind) -> Result<()> {
    let names: Vec<&str> = table.ids_of_kind(kind).map(|id| table.name(id)).collect();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            if let Some((containing, contained)) = strings_contain_each_other(names[i], names[j]) {
                return Err(GrammarError::SymbolContainment {
                    containing: containing.to_owned(),
                    contained: contained.to_owned(),
                });
            }
        }
    }
    Ok(())
}
