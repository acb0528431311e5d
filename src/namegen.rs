//! Mints fresh variable names during Chomsky Normal Form conversion.
//!
//! State is a monotonic character sequence, initially `["A"]`. A candidate *base* is the
//! concatenation of the sequence; if it would violate the containment invariant against any
//! variable currently in the grammar, the sequence advances (last letter `A`→`B`→…→`Z`,
//! overflowing by growing one more position, all re-initialized to `A`) and the candidate is
//! retried. Once a clean base is found, nine names `base1`..`base9` are queued and the
//! sequence advances again for the next batch. This generator's state lives only for the
//! duration of a single `chomsky` call — it is never process-wide.

use std::collections::VecDeque;

use crate::symbol::{strings_contain_each_other, SymbolKind, SymbolTable};

/// Per-conversion-call fresh variable name source.
pub struct NameGenerator {
    seq: Vec<u8>,
    queue: VecDeque<String>,
}

impl Default for NameGenerator {
    fn default() -> Self {
        NameGenerator {
            seq: vec![0],
            queue: VecDeque::new(),
        }
    }
}

impl NameGenerator {
    /// Creates a generator starting at base "A".
    pub fn new() -> Self {
        Self::default()
    }

    fn base(&self) -> String {
        self.seq.iter().map(|&c| (b'A' + c) as char).collect()
    }

    fn advance(&mut self) {
        let last = self.seq.len() - 1;
        if self.seq[last] == 25 {
            self.seq = vec![0; self.seq.len() + 1];
        } else {
            self.seq[last] += 1;
        }
    }

    fn refill(&mut self, table: &SymbolTable) {
        loop {
            let base = self.base();
            let conflicts = table
                .ids_of_kind(SymbolKind::Variable)
                .any(|id| strings_contain_each_other(table.name(id), &base).is_some());
            if conflicts {
                self.advance();
                continue;
            }
            for i in 1..=9 {
                self.queue.push_back(format!("{base}{i}"));
            }
            self.advance();
            break;
        }
    }

    /// Returns the next fresh variable name, disjoint from `table`'s current variables and
    /// from every other name this generator has returned.
    pub fn next_name(&mut self, table: &SymbolTable) -> String {
        if self.queue.is_empty() {
            self.refill(table);
        }
        self.queue.pop_front().expect("refill always queues nine names")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_batch_is_a1_through_a9() {
        let table = SymbolTable::new();
        let mut gen = NameGenerator::new();
        let names: Vec<_> = (0..9).map(|_| gen.next_name(&table)).collect();
        assert_eq!(
            names,
            vec!["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9"]
        );
    }

    #[test]
    fn tenth_name_starts_a_new_base() {
        let table = SymbolTable::new();
        let mut gen = NameGenerator::new();
        for _ in 0..9 {
            gen.next_name(&table);
        }
        assert_eq!(gen.next_name(&table), "B1");
    }

    #[test]
    fn skips_bases_that_conflict_with_existing_variables() {
        let mut table = SymbolTable::new();
        table.intern("A1", SymbolKind::Variable);
        let mut gen = NameGenerator::new();
        let name = gen.next_name(&table);
        assert_ne!(name, "A1");
        assert!(strings_contain_each_other(&name, "A1").is_none());
    }
}
