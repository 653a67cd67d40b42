use super::trie::KanaTrie;
use crate::unicode::katakana_to_hiragana;

const SOKUON: char = 'っ';

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'n')
}

/// Geminate consonant that `っ` contributes before `next` ("tch" for "ch").
fn sokuon_prefix(next: &str) -> Option<char> {
    if next.starts_with("ch") {
        return Some('t');
    }
    next.chars().next().filter(|&c| is_consonant(c))
}

/// Convert a kana string (hiragana or katakana) to romaji.
///
/// Greedy longest match over `trie`; `っ` doubles the following consonant.
/// Characters without a mapping are copied through unchanged.
pub fn kana_to_romaji(trie: &KanaTrie, kana: &str) -> String {
    let chars: Vec<char> = katakana_to_hiragana(kana).chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == SOKUON {
            let geminate = trie
                .longest_match(&chars[i + 1..])
                .and_then(|(_, next)| sokuon_prefix(next));
            if let Some(c) = geminate {
                out.push(c);
                i += 1;
                continue;
            }
        }

        match trie.longest_match(&chars[i..]) {
            Some((len, romaji)) => {
                out.push_str(romaji);
                i += len;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }

    out
}
