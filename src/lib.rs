//! Context-free grammars over string-concatenated symbols.
//!
//! A [`Grammar`] is built from a set of variables, a set of terminals, a start variable, a
//! null-symbol, and a set of rules whose right-hand sides are given as plain strings and
//! tokenized greedily over the declared alphabet (§4.1). From there it can be simplified
//! (§4.3-§4.5), converted to Chomsky Normal Form (§4.6), and tested for membership with the
//! CYK algorithm (§4.7). Rules can be rendered back to text (§6) or persisted in a small
//! plain-text file format ([`Grammar::to_file_format`] / [`Grammar::from_file_format`]).
//!
//! ```
//! use cfg_strings::{Grammar, RulesInput};
//!
//! let mut g = Grammar::construct(
//!     ["S"],
//!     ["a", "b", "\u{3bb}"],
//!     RulesInput::Pairs(vec![
//!         ("S".into(), "aSa".into()),
//!         ("S".into(), "bSb".into()),
//!         ("S".into(), "\u{3bb}".into()),
//!     ]),
//!     "S",
//!     "\u{3bb}",
//! ).unwrap();
//!
//! assert!(g.cyk("abba"));
//! assert!(!g.cyk("ab"));
//!
//! g.simplify();
//! g.chomsky();
//! assert!(g.is_cnf());
//! assert!(g.cyk("abba"));
//! ```

mod cnf;
mod cyk;
mod error;
mod file_format;
mod format;
mod grammar;
mod namegen;
mod nullable;
mod reduct;
mod rhs_closure;
mod rule;
mod symbol;
mod tokenizer;
mod unit;

pub use error::{GrammarError, Result};
pub use format::{FormatOptions, FormattedRules};
pub use grammar::Grammar;
pub use rule::RulesInput;
pub use symbol::SymbolId;
