//! Popularity-weighted prefix tree over canonical (romanized) keys.
//!
//! Every inserted key is stored as `key + TERMINATOR`; each node on that path
//! accumulates the insertion score, so a node's score is the total popularity
//! of everything below it. A side dictionary maps each key to the surface form
//! with the highest single insertion score (first insertion wins ties).
//!
//! Build with `add_word` from one writer, then query read-only; `TrieIndex` is
//! `Send + Sync` so a frozen index can be shared behind an `Arc`.

mod spellcheck;
mod suggest;

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::pipeline::Canonicalizer;
use crate::settings::IndexSettings;
use crate::unicode::is_blank;

/// End-of-key sentinel appended to every canonical key inside the trie.
pub const TERMINATOR: char = '+';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub surface: String,
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correction {
    pub surface: String,
    pub score: i64,
    pub distance: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IndexStats {
    /// Distinct canonical keys.
    pub entries: usize,
    /// Trie nodes, root excluded.
    pub nodes: usize,
    /// Longest root-to-leaf path, terminator included.
    pub max_depth: usize,
}

#[derive(Debug)]
pub struct TrieNode {
    path_key: String,
    score: i64,
    children: HashMap<char, TrieNode>,
}

impl TrieNode {
    fn new(path_key: String) -> Self {
        Self {
            path_key,
            score: 0,
            children: HashMap::new(),
        }
    }

    /// Key substring from the root to this node, inclusive.
    pub fn path_key(&self) -> &str {
        &self.path_key
    }

    /// Sum of every insertion score whose key passed through this node.
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// True for the node one level below a completed key.
    pub fn is_terminal(&self) -> bool {
        self.path_key.ends_with(TERMINATOR)
    }

    /// Dictionary key of a terminal node (path without the terminator).
    fn entry_key(&self) -> &str {
        self.path_key
            .strip_suffix(TERMINATOR)
            .unwrap_or(&self.path_key)
    }

    /// Walk strictly along `key`; `None` as soon as a character is missing.
    fn descend(&self, key: &str) -> Option<&TrieNode> {
        key.chars().try_fold(self, |node, c| node.child(c))
    }

    /// Highest-scoring child; ties go to the lexicographically smaller path.
    fn best_child(&self) -> Option<&TrieNode> {
        self.children.values().min_by(|a, b| by_score_desc(a, b))
    }
}

/// Descending score, then ascending path key so ordering is deterministic.
fn by_score_desc(a: &TrieNode, b: &TrieNode) -> std::cmp::Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.path_key.cmp(&b.path_key))
}

#[derive(Debug, Clone)]
struct DictValue {
    surface: String,
    score: i64,
}

pub struct TrieIndex {
    root: TrieNode,
    dictionary: HashMap<String, DictValue>,
    canonicalizer: Canonicalizer,
    settings: IndexSettings,
}

impl TrieIndex {
    /// Empty index using the global settings.
    pub fn new(canonicalizer: Canonicalizer) -> Self {
        Self::with_settings(canonicalizer, IndexSettings::default())
    }

    pub fn with_settings(canonicalizer: Canonicalizer, settings: IndexSettings) -> Self {
        Self {
            root: TrieNode::new(String::new()),
            dictionary: HashMap::new(),
            canonicalizer,
            settings,
        }
    }

    pub fn settings(&self) -> &IndexSettings {
        &self.settings
    }

    pub fn canonicalizer(&self) -> &Canonicalizer {
        &self.canonicalizer
    }

    /// Canonical trie key for `raw` (empty when `raw` cannot be indexed).
    pub fn canonical_key(&self, raw: &str) -> String {
        self.canonicalizer.key_to_latin(raw)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node reached by walking `path` from the root, if any.
    pub fn node(&self, path: &str) -> Option<&TrieNode> {
        self.root.descend(path)
    }

    /// Number of distinct canonical keys.
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Insert `keyword` with popularity `score`.
    ///
    /// Returns `false` (and leaves the index untouched) when the keyword is
    /// blank, the score is below `min_score`, or no canonical key survives
    /// normalization.
    pub fn add_word(&mut self, keyword: &str, score: i64) -> bool {
        if is_blank(keyword) {
            return false;
        }
        if score < self.settings.min_score {
            debug!(keyword, score, "score below threshold");
            return false;
        }
        let key = self.canonicalizer.key_to_latin(keyword);
        let surface = self.canonicalizer.normalize(keyword);
        if key.is_empty() || surface.is_empty() {
            debug!(keyword, "empty canonical key");
            return false;
        }

        let replace = self
            .dictionary
            .get(&key)
            .map_or(true, |existing| existing.score < score);
        if replace {
            self.dictionary
                .insert(key.clone(), DictValue { surface, score });
        }

        let mut path = String::with_capacity(key.len() + 1);
        let mut node = &mut self.root;
        for c in key.chars().chain(std::iter::once(TERMINATOR)) {
            path.push(c);
            node = node
                .children
                .entry(c)
                .or_insert_with(|| TrieNode::new(path.clone()));
            node.score = node.score.saturating_add(score);
        }
        true
    }

    /// Insert a batch; returns how many entries were accepted.
    pub fn extend<I, S>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let _span = debug_span!("extend").entered();
        let mut accepted = 0;
        for (keyword, score) in entries {
            if self.add_word(keyword.as_ref(), score) {
                accepted += 1;
            }
        }
        debug!(accepted, entries = self.len());
        accepted
    }

    /// Surface form stored for exactly `keyword`'s canonical key.
    ///
    /// A prefix of a stored key does not match.
    pub fn match_word(&self, keyword: &str) -> Option<&str> {
        let _span = debug_span!("match_word", keyword).entered();
        if is_rejected_query(keyword) {
            return None;
        }
        let key = self.canonicalizer.key_to_latin(keyword);
        if key.is_empty() {
            return None;
        }
        let node = self.root.descend(&key)?;
        node.child(TERMINATOR)?;
        let surface = self.dictionary.get(node.path_key()).map(|v| v.surface.as_str());
        debug!(found = surface.is_some());
        surface
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            entries: self.dictionary.len(),
            ..IndexStats::default()
        };
        let mut stack: Vec<(&TrieNode, usize)> = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            stats.max_depth = stats.max_depth.max(depth);
            for child in node.children.values() {
                stats.nodes += 1;
                stack.push((child, depth + 1));
            }
        }
        stats
    }

    fn entry(&self, node: &TrieNode) -> Option<&DictValue> {
        let entry = self.dictionary.get(node.entry_key());
        if entry.is_none() {
            debug!(path_key = node.path_key(), "terminal node without dictionary entry");
        }
        entry
    }
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self::new(Canonicalizer::standard())
    }
}

/// Blank queries and the bare terminator never reach the trie.
fn is_rejected_query(query: &str) -> bool {
    let mut chars = query.chars();
    is_blank(query) || (chars.next() == Some(TERMINATOR) && chars.next().is_none())
}
