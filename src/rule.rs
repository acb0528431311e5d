//! Grammar rules. Each rule consists of a single variable on its left-hand side and an
//! ordered sequence of symbols — or, for a nulling rule, none — on its right-hand side.

use crate::symbol::SymbolId;

/// A single grammar rule `lhs -> rhs`. An empty `rhs` denotes a nulling rule `lhs -> λ`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    lhs: SymbolId,
    rhs: Vec<SymbolId>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(lhs: SymbolId, rhs: Vec<SymbolId>) -> Self {
        Rule { lhs, rhs }
    }

    /// The rule's left-hand side.
    pub fn lhs(&self) -> SymbolId {
        self.lhs
    }

    /// The rule's right-hand side. Empty means the rule derives the empty string.
    pub fn rhs(&self) -> &[SymbolId] {
        &self.rhs
    }

    /// Whether this rule is a nulling rule (`lhs -> λ`).
    pub fn is_nulling(&self) -> bool {
        self.rhs.is_empty()
    }

    /// Whether this rule is a unit rule (`lhs -> single variable`).
    pub fn is_unit(&self, is_variable: impl Fn(SymbolId) -> bool) -> bool {
        self.rhs.len() == 1 && is_variable(self.rhs[0])
    }
}

/// The two shapes in which callers may supply a grammar's rules: a flat set of
/// `(variable, rhs)` pairs, or a mapping from each variable to its list of right-hand sides.
#[derive(Clone, Debug)]
pub enum RulesInput {
    /// A flat collection of `(left-hand side, right-hand side)` pairs.
    Pairs(Vec<(String, String)>),
    /// A mapping from a variable to all of its right-hand sides.
    Map(Vec<(String, Vec<String>)>),
}

impl RulesInput {
    /// Flattens this input into a plain list of `(lhs, rhs)` pairs.
    pub fn into_pairs(self) -> Vec<(String, String)> {
        match self {
            RulesInput::Pairs(pairs) => pairs,
            RulesInput::Map(map) => map
                .into_iter()
                .flat_map(|(lhs, rhss)| rhss.into_iter().map(move |rhs| (lhs.clone(), rhs)))
                .collect(),
        }
    }

    /// Variables mentioned as a left-hand side anywhere in this input, in first-seen order.
    pub fn lhs_variables(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        let lhss: Vec<&String> = match self {
            RulesInput::Pairs(pairs) => pairs.iter().map(|(lhs, _)| lhs).collect(),
            RulesInput::Map(map) => map.iter().map(|(lhs, _)| lhs).collect(),
        };
        for lhs in lhss {
            if seen.insert(lhs.clone()) {
                out.push(lhs.clone());
            }
        }
        out
    }
}
