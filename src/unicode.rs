//! Character-level Unicode classification for mixed Latin/Japanese text.
//!
//! All helpers work on code points, never on UTF-8 byte offsets.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF), including the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK unified ideographs (base block, extension A, extension B) plus the
/// iteration mark 々, which morphological analyzers treat as part of a kanji run.
pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || c == '々'
}

/// Kanji used as numerals (〇一二三...). These are also `is_kanji` except 〇.
pub fn is_kanji_numeric(c: char) -> bool {
    matches!(
        c,
        '〇' | '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十' | '百' | '千'
            | '万' | '億' | '兆'
    )
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_greek(c: char) -> bool {
    ('\u{0370}'..='\u{03FF}').contains(&c)
}

pub fn is_cyrillic(c: char) -> bool {
    ('\u{0400}'..='\u{04FF}').contains(&c)
}

/// True if any code point of `s` is a Han ideograph, counting 〇 (U+3007).
pub fn contains_han(s: &str) -> bool {
    s.chars().any(|c| is_kanji(c) || c == '〇')
}

/// True for the empty string and strings made only of whitespace
/// (ASCII or the ideographic space U+3000).
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Strip ASCII and ideographic spaces.
pub fn remove_spaces(s: &str) -> String {
    s.chars().filter(|&c| c != ' ' && c != '\u{3000}').collect()
}

/// Fold fullwidth digits and Latin letters (`０-９ａ-ｚＡ-Ｚ`) to ASCII.
/// Every other code point passes through unchanged.
pub fn fold_fullwidth_alnum(c: char) -> char {
    match c {
        '０'..='９' | 'ａ'..='ｚ' | 'Ａ'..='Ｚ' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    }
}

/// Convert a katakana string to hiragana.
/// ー and anything outside ァ..ヶ pass through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if ('\u{30A1}'..='\u{30F6}').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_kanji('漢'));
        assert!(is_kanji('々'));
        assert!(!is_kanji('あ'));
        assert!(is_kanji_numeric('三'));
        assert!(!is_kanji_numeric('東'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
        assert!(is_greek('λ'));
        assert!(is_cyrillic('ж'));
    }

    #[test]
    fn test_contains_han() {
        assert!(contains_han("東京タワー"));
        assert!(!contains_han("とうきょう"));
        assert!(!contains_han("tokyo"));
        assert!(contains_han("〇"));
        assert!(contains_han("二〇二四年"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(is_blank("\u{3000}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_remove_spaces() {
        assert_eq!(remove_spaces("new york"), "newyork");
        assert_eq!(remove_spaces("東京\u{3000}タワー"), "東京タワー");
    }

    #[test]
    fn test_fold_fullwidth() {
        let folded: String = "ＡＢＣ１２３ｘｙｚ".chars().map(fold_fullwidth_alnum).collect();
        assert_eq!(folded, "ABC123xyz");
        assert_eq!(fold_fullwidth_alnum('！'), '！');
        assert_eq!(fold_fullwidth_alnum('あ'), 'あ');
    }

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("トウキョウ"), "とうきょう");
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana(""), "");
        assert_eq!(katakana_to_hiragana("abc"), "abc");
    }
}
