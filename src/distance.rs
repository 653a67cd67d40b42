//! Levenshtein edit distance (insert/delete/substitute, unit costs).
//!
//! `advance_row` is the single DP step shared by `levenshtein` and the trie
//! spellcheck walk: given the row for some prefix `p` of the source, it
//! produces the row for `p + c`, where `row[j]` is the distance between that
//! prefix and the first `j` code points of `target`.

/// Initial row: distance from the empty prefix to each prefix of `target`.
pub fn first_row(target: &[char]) -> Vec<usize> {
    (0..=target.len()).collect()
}

/// Extend the source prefix of `prev` by `c`.
pub fn advance_row(prev: &[usize], target: &[char], c: char) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev.len());
    row.push(prev[0] + 1);
    for j in 1..prev.len() {
        let insert = row[j - 1] + 1;
        let delete = prev[j] + 1;
        let replace = prev[j - 1] + usize::from(target[j - 1] != c);
        row.push(insert.min(delete).min(replace));
    }
    row
}

/// Classic edit distance between `a` and `b`, compared by code point.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let target: Vec<char> = a.chars().collect();
    let mut row = first_row(&target);
    for c in b.chars() {
        row = advance_row(&row, &target, c);
    }
    row[target.len()]
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn classic_pairs() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("saturday", "sunday"), 3);
    }

    #[test]
    fn identity_and_empty() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn counts_code_points() {
        assert_eq!(levenshtein("とうきょう", "ときょう"), 1);
        assert_eq!(levenshtein("東京", "京都"), 2);
    }

    #[test]
    fn no_transposition_shortcut() {
        assert_eq!(levenshtein("ab", "ba"), 2);
    }

    #[test]
    fn advance_row_matches_recurrence() {
        let target: Vec<char> = "ab".chars().collect();
        let row0 = first_row(&target);
        assert_eq!(row0, vec![0, 1, 2]);
        let row1 = advance_row(&row0, &target, 'a');
        assert_eq!(row1, vec![1, 0, 1]);
        let row2 = advance_row(&row1, &target, 'x');
        assert_eq!(row2, vec![2, 1, 1]);
    }

    proptest! {
        #[test]
        fn symmetric(a in "[abc]{0,8}", b in "[abc]{0,8}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn bounded_by_longer_length(a in "[abc]{0,8}", b in "[abc]{0,8}") {
            let d = levenshtein(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }
    }
}
