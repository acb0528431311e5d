//! Rendering a grammar's rules and description back out as text (§6).

use crate::grammar::Grammar;

/// Controls how [`Grammar::format_rules`] renders a grammar's rules.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// If true, returns one string per variable instead of joining them all together.
    pub return_as_list: bool,
    /// A prefix prepended to every rendered line (e.g. indentation).
    pub prepend_prefix: String,
    /// The separator placed between rendered variable blocks when not returning a list.
    pub line_separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            return_as_list: false,
            prepend_prefix: String::new(),
            line_separator: "\n".to_owned(),
        }
    }
}

/// The result of [`Grammar::format_rules`]: either a single joined string or one entry per
/// variable, depending on [`FormatOptions::return_as_list`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormattedRules {
    /// All variable blocks joined with the configured separator.
    Joined(String),
    /// One rendered block per variable, in display order.
    List(Vec<String>),
}

impl Grammar {
    /// Renders this grammar's rules as `variable -> rhs1 | rhs2 | ...` blocks, one per
    /// variable. The start variable is always listed first; every other variable follows in
    /// lexicographic order. Within a variable's block, right-hand sides are lexicographic,
    /// except that the null-symbol is always listed first when the variable accepts it.
    pub fn format_rules(&self, options: &FormatOptions) -> FormattedRules {
        let mut variables: Vec<&str> = self.variables().filter(|&v| v != self.start()).collect();
        variables.sort_unstable();
        variables.insert(0, self.start());

        let mut blocks = Vec::with_capacity(variables.len());
        for var in variables {
            let var_id = self.table.id_of(var).expect("variable came from this grammar's table");
            let mut rhss: Vec<String> = self
                .rules
                .iter()
                .filter(|r| r.lhs() == var_id)
                .map(|r| {
                    if r.is_nulling() {
                        self.null_symbol().to_owned()
                    } else {
                        r.rhs().iter().map(|&s| self.table.name(s)).collect()
                    }
                })
                .collect();
            rhss.sort_unstable_by(|a, b| {
                let a_is_null = a == self.null_symbol();
                let b_is_null = b == self.null_symbol();
                match (a_is_null, b_is_null) {
                    (true, false) => std::cmp::Ordering::Less,
                    (false, true) => std::cmp::Ordering::Greater,
                    _ => a.cmp(b),
                }
            });
            rhss.dedup();

            blocks.push(format!(
                "{}{} -> {}",
                options.prepend_prefix,
                var,
                rhss.join(" | ")
            ));
        }

        if options.return_as_list {
            FormattedRules::List(blocks)
        } else {
            FormattedRules::Joined(blocks.join(&options.line_separator))
        }
    }

    /// Renders a short multi-line description of this grammar: its variables, terminals,
    /// start symbol, null-symbol, and rules.
    pub fn format_grammar(&self) -> String {
        let mut variables: Vec<&str> = self.variables().collect();
        variables.sort_unstable();
        let mut terminals: Vec<&str> = self.terminals().collect();
        terminals.sort_unstable();

        let rules = self.format_rules(&FormatOptions::default());
        let rules_text = match rules {
            FormattedRules::Joined(s) => s,
            FormattedRules::List(lines) => lines.join("\n"),
        };

        format!(
            "Variables: {}\nTerminals: {}\nStart: {}\nNull: {}\nRules:\n{}",
            variables.join(", "),
            terminals.join(", "),
            self.start(),
            self.null_symbol(),
            rules_text
        )
    }
}
