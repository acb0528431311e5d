//! The persisted plain-text grammar format: four header lines (variables, terminals, start,
//! null-symbol) followed by one rule line per variable, each of the form
//! `variable -> rhs1 | rhs2 | ...`.
//!
//! This mirrors the layout the original tool's file save/load routines used, minus anything
//! tied to its interactive GUI — here it is a plain data format with no editor attached. The
//! first two header lines are comma-separated lists; everything past the header is read line
//! by line, so the reader and writer accept any `std::io::Read` / `std::io::Write`, not just
//! in-memory strings.

use std::io::{Read, Write};

use crate::error::{GrammarError, Result};
use crate::format::FormatOptions;
use crate::grammar::Grammar;
use crate::rule::RulesInput;

impl Grammar {
    /// Serializes this grammar to the persisted plain-text format.
    pub fn to_file_format(&self) -> String {
        let mut variables: Vec<&str> = self.variables().collect();
        variables.sort_unstable();
        let mut terminals: Vec<&str> = self.terminals().collect();
        terminals.sort_unstable();

        let rules = match self.format_rules(&FormatOptions {
            return_as_list: true,
            ..FormatOptions::default()
        }) {
            crate::format::FormattedRules::List(lines) => lines,
            crate::format::FormattedRules::Joined(_) => unreachable!("requested as list"),
        };

        let mut out = String::new();
        out.push_str(&variables.join(","));
        out.push('\n');
        out.push_str(&terminals.join(","));
        out.push('\n');
        out.push_str(self.start());
        out.push('\n');
        out.push_str(self.null_symbol());
        out.push('\n');
        out.push_str(&rules.join("\n"));
        out
    }

    /// Writes this grammar, in the persisted plain-text format, to `writer`.
    pub fn write_file_format(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(self.to_file_format().as_bytes())?;
        Ok(())
    }

    /// Parses a grammar from the persisted plain-text format.
    pub fn from_file_format(text: &str) -> Result<Grammar> {
        let mut lines = text.lines();
        let variables_line = lines
            .next()
            .ok_or_else(|| GrammarError::RuleSyntax("missing variables line".to_owned()))?;
        let terminals_line = lines
            .next()
            .ok_or_else(|| GrammarError::RuleSyntax("missing terminals line".to_owned()))?;
        let start = lines
            .next()
            .ok_or_else(|| GrammarError::RuleSyntax("missing start line".to_owned()))?
            .trim();
        let null = lines
            .next()
            .ok_or_else(|| GrammarError::RuleSyntax("missing null-symbol line".to_owned()))?
            .trim();

        let variables: Vec<&str> = variables_line
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        let terminals: Vec<&str> = terminals_line
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut pairs = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (lhs, rhs_alternatives) = line
                .split_once("->")
                .ok_or_else(|| GrammarError::RuleSyntax(line.to_owned()))?;
            let lhs = lhs.trim();
            for alt in rhs_alternatives.split('|') {
                pairs.push((lhs.to_owned(), alt.trim().to_owned()));
            }
        }

        Grammar::construct(variables, terminals, RulesInput::Pairs(pairs), start, null)
    }

    /// Reads a grammar, in the persisted plain-text format, from `reader`.
    pub fn read_file_format(reader: &mut impl Read) -> Result<Grammar> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Grammar::from_file_format(&text)
    }
}

#[cfg(test)]
mod tests {
    use crate::rule::RulesInput;
    use crate::Grammar;

    #[test]
    fn round_trips_through_the_file_format() {
        let g = Grammar::construct(
            ["S"],
            ["a", "b", "\u{3bb}"],
            RulesInput::Pairs(vec![
                ("S".into(), "aSa".into()),
                ("S".into(), "bSb".into()),
                ("S".into(), "\u{3bb}".into()),
            ]),
            "S",
            "\u{3bb}",
        )
        .unwrap();

        let text = g.to_file_format();
        let reloaded = Grammar::from_file_format(&text).unwrap();

        assert_eq!(reloaded.start(), g.start());
        assert_eq!(reloaded.null_symbol(), g.null_symbol());
        assert_eq!(reloaded.rule_count(), g.rule_count());
        assert!(reloaded.cyk("aa"));
        assert!(reloaded.cyk(""));
        assert!(!reloaded.cyk("ab"));
    }

    #[test]
    fn rejects_a_rule_line_missing_the_arrow() {
        let text = "S\na\nS\n\u{3bb}\nS a";
        let err = Grammar::from_file_format(text).unwrap_err();
        assert!(matches!(err, crate::error::GrammarError::RuleSyntax(_)));
    }

    #[test]
    fn header_lines_are_comma_separated() {
        let g = Grammar::construct(
            ["S", "A"],
            ["a", "b", "\u{3bb}"],
            RulesInput::Pairs(vec![("S".into(), "A".into()), ("A".into(), "a".into())]),
            "S",
            "\u{3bb}",
        )
        .unwrap();

        let text = g.to_file_format();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "A,S");
        assert_eq!(lines.next().unwrap(), "a,b,\u{3bb}");
    }

    #[test]
    fn rejects_fewer_than_four_lines() {
        let err = Grammar::from_file_format("S\na\nS").unwrap_err();
        assert!(matches!(err, crate::error::GrammarError::RuleSyntax(_)));
    }

    #[test]
    fn round_trips_through_a_reader_and_writer() {
        let g = Grammar::construct(
            ["S"],
            ["a", "b", "\u{3bb}"],
            RulesInput::Pairs(vec![("S".into(), "aSb".into()), ("S".into(), "\u{3bb}".into())]),
            "S",
            "\u{3bb}",
        )
        .unwrap();

        let mut buf: Vec<u8> = Vec::new();
        g.write_file_format(&mut buf).unwrap();

        let reloaded = Grammar::read_file_format(&mut buf.as_slice()).unwrap();
        assert_eq!(reloaded.rule_count(), g.rule_count());
        assert!(reloaded.cyk("ab"));
    }
}
