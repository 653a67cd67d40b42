use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::parse_kana_toml;
use super::table::DEFAULT_TOML;

#[derive(Debug, Clone)]
struct Node {
    children: HashMap<char, Node>,
    romaji: Option<String>,
}

impl Node {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            romaji: None,
        }
    }
}

/// Kana → romaji lookup trie keyed by code point.
#[derive(Debug, Clone)]
pub struct KanaTrie {
    root: Node,
}

impl KanaTrie {
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let mut trie = KanaTrie { root: Node::new() };
        for (kana, romaji) in map {
            trie.insert(kana, romaji);
        }
        trie
    }

    /// Get or initialize the trie for the embedded default table.
    pub fn global() -> &'static KanaTrie {
        static INSTANCE: OnceLock<KanaTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let map = parse_kana_toml(DEFAULT_TOML).expect("kana TOML must be valid");
            KanaTrie::from_map(&map)
        })
    }

    /// Longest table key that is a prefix of `input`: (length in chars, romaji).
    pub fn longest_match(&self, input: &[char]) -> Option<(usize, &str)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in input.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(romaji) = &node.romaji {
                best = Some((i + 1, romaji.as_str()));
            }
        }
        best
    }

    fn insert(&mut self, kana: &str, romaji: &str) {
        let mut node = &mut self.root;
        for c in kana.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        node.romaji = Some(romaji.to_string());
    }
}
