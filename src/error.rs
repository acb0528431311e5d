//! Typed errors returned by grammar construction and file-format I/O.

use thiserror::Error;

/// Errors that can occur while constructing or validating a [`crate::grammar::Grammar`].
#[derive(Debug, Error)]
pub enum GrammarError {
    /// A symbol (variable or terminal) contained whitespace.
    #[error("symbol '{0}' contains whitespace")]
    WhitespaceInSymbol(String),

    /// Two symbols within the same set (both variables, or both terminals) contain each other.
    #[error("'{containing}' and '{contained}' contain each other and cannot coexist")]
    SymbolContainment {
        /// The longer (or equal) symbol.
        containing: String,
        /// The symbol that is a substring of `containing`.
        contained: String,
    },

    /// A rule's left-hand side is not a known variable.
    #[error("unknown variable '{0}' on the left-hand side of a rule")]
    UnknownVariableInRule(String),

    /// A rule's right-hand side could not be tokenized over variables ∪ terminals, or mixed
    /// the null-symbol with other symbols.
    #[error("malformed right-hand side '{rhs}' for rule with left-hand side '{lhs}'")]
    MalformedRightHandSide {
        /// The rule's left-hand side.
        lhs: String,
        /// The offending right-hand side text.
        rhs: String,
    },

    /// The null-symbol is not a member of the terminals set.
    #[error("null-symbol '{0}' is not among the terminals")]
    NullSymbolNotInTerminals(String),

    /// The start variable is not a member of the variables set.
    #[error("start variable '{0}' is not among the variables")]
    StartNotInVariables(String),

    /// A rule line was missing or had a malformed `->` separator.
    #[error("rule syntax error in '{0}'")]
    RuleSyntax(String),

    /// An I/O failure at the persisted file-format boundary.
    #[error("grammar file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for fallible grammar operations.
pub type Result<T> = std::result::Result<T, GrammarError>;
