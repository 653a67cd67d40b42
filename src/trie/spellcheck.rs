use tracing::{debug, debug_span};

use super::{is_rejected_query, Correction, TrieIndex, TrieNode, TERMINATOR};
use crate::distance::{advance_row, first_row};

/// Per-query state threaded through the recursive walk.
struct Search<'a> {
    target: Vec<char>,
    max_cost: usize,
    results: Vec<Correction>,
    visited: usize,
    index: &'a TrieIndex,
}

impl TrieIndex {
    /// Stored entries within `max_cost` edits of `keyword` (default
    /// `default_max_cost`), unordered. Exact matches (distance 0) are never
    /// returned.
    ///
    /// `keyword` is compared as given against the stored canonical keys; it
    /// is not normalized or romanized first.
    ///
    /// Walks every branch of the trie carrying one edit-distance row per
    /// node, and abandons a branch once no cell of its row is within budget.
    pub fn spellcheck(&self, keyword: &str, max_cost: Option<usize>) -> Vec<Correction> {
        let max_cost = max_cost.unwrap_or(self.settings.default_max_cost);
        let _span = debug_span!("spellcheck", keyword, max_cost).entered();
        if is_rejected_query(keyword) {
            return Vec::new();
        }
        let target: Vec<char> = keyword
            .chars()
            .chain(std::iter::once(TERMINATOR))
            .collect();
        let row = first_row(&target);
        let mut search = Search {
            target,
            max_cost,
            results: Vec::new(),
            visited: 0,
            index: self,
        };
        for (c, child) in self.root.children() {
            search.descend(child, c, &row);
        }

        debug!(result_count = search.results.len(), visited = search.visited);
        search.results
    }
}

impl Search<'_> {
    fn descend(&mut self, node: &TrieNode, letter: char, prev: &[usize]) {
        self.visited += 1;
        let row = advance_row(prev, &self.target, letter);
        let cost = row[row.len() - 1];

        if cost != 0 && cost <= self.max_cost && letter == TERMINATOR {
            let index = self.index;
            if let Some(entry) = index.entry(node) {
                self.results.push(Correction {
                    surface: entry.surface.clone(),
                    score: node.score,
                    distance: cost,
                });
            }
        }

        // Costs never decrease along an extension, so the row minimum bounds
        // every entry below this node.
        if row.iter().min().is_some_and(|&m| m <= self.max_cost) {
            for (c, child) in node.children() {
                self.descend(child, c, &row);
            }
        }
    }
}
