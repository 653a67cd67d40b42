use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, debug_span};

use super::{by_score_desc, is_rejected_query, Suggestion, TrieIndex, TrieNode};

impl TrieIndex {
    /// Ranked completions of `prefix`, at most `max_suggestions`, by
    /// descending cumulative score at extraction time.
    ///
    /// Approximate top-k: the frontier keeps at most `frontier_width` nodes,
    /// and expanding a non-terminal node admits only its single best child.
    /// Use `suggest_exhaustive` for the exact ranking.
    pub fn suggest(&self, prefix: &str) -> Vec<Suggestion> {
        let _span = debug_span!("suggest", prefix).entered();
        let Some(start) = self.prefix_node(prefix) else {
            return Vec::new();
        };

        let width = self.settings.frontier_width;
        let limit = self.settings.max_suggestions;
        let mut frontier: Vec<&TrieNode> = start.children.values().collect();
        frontier.sort_by(|a, b| by_score_desc(a, b));
        frontier.truncate(width);

        let mut results = Vec::new();
        let mut expanded = 0usize;
        while !frontier.is_empty() {
            let node = frontier.remove(0);
            if node.is_terminal() {
                if let Some(entry) = self.entry(node) {
                    results.push(Suggestion {
                        surface: entry.surface.clone(),
                        score: node.score,
                    });
                    if results.len() >= limit {
                        break;
                    }
                }
                continue;
            }
            let Some(best) = node.best_child() else {
                continue;
            };
            expanded += 1;
            frontier.push(best);
            frontier.sort_by(|a, b| by_score_desc(a, b));
            frontier.truncate(width);
        }

        debug!(result_count = results.len(), expanded);
        results
    }

    /// Exact top-`limit` completions of `prefix` by cumulative score.
    ///
    /// Best-first over a max-heap: a child never scores above its parent, so
    /// terminals come off the heap in non-increasing score order.
    pub fn suggest_exhaustive(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        let _span = debug_span!("suggest_exhaustive", prefix, limit).entered();
        let Some(start) = self.prefix_node(prefix) else {
            return Vec::new();
        };

        let mut heap: BinaryHeap<Ranked<'_>> = start.children.values().map(Ranked).collect();
        let mut results = Vec::new();
        while results.len() < limit {
            let Some(Ranked(node)) = heap.pop() else {
                break;
            };
            if node.is_terminal() {
                if let Some(entry) = self.entry(node) {
                    results.push(Suggestion {
                        surface: entry.surface.clone(),
                        score: node.score,
                    });
                }
            } else {
                heap.extend(node.children.values().map(Ranked));
            }
        }

        debug!(result_count = results.len(), heap_left = heap.len());
        results
    }

    /// Node reached by the canonical key of `prefix`, with the shared query
    /// preconditions applied.
    fn prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        if is_rejected_query(prefix) {
            return None;
        }
        let key = self.canonicalizer.key_to_latin(prefix);
        if key.is_empty() {
            return None;
        }
        self.root.descend(&key)
    }
}

/// Heap adapter: greatest = highest score, then smallest path key.
struct Ranked<'a>(&'a TrieNode);

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        by_score_desc(other.0, self.0)
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked<'_> {}
