use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lex_suggest::{Canonicalizer, ReadingTokenizer, TrieIndex};

const SYLLABLES: &[&str] = &[
    "ka", "ki", "ku", "ke", "ko", "sa", "shi", "su", "ta", "to", "na", "no", "ma", "mi", "ra",
    "ri", "ya", "yo",
];

/// Deterministic synthetic vocabulary: three-syllable words with a
/// pseudo-random popularity, plus a few kana and kanji entries.
fn bench_index() -> TrieIndex {
    let tokenizer = ReadingTokenizer::with_readings([
        ("東京", "とうきょう"),
        ("京都", "きょうと"),
        ("大阪", "おおさか"),
    ]);
    let mut index = TrieIndex::new(Canonicalizer::with_tokenizer(tokenizer));
    let mut score: i64 = 7;
    for a in SYLLABLES {
        for b in SYLLABLES {
            for c in SYLLABLES {
                score = (score * 48271) % 2_147_483_647;
                index.add_word(&format!("{a}{b}{c}"), 10 + score % 1000);
            }
        }
    }
    index.extend([
        ("東京", 900),
        ("京都", 800),
        ("大阪", 700),
        ("とうきょうたわー", 300),
    ]);
    index
}

static PREFIXES: &[(&str, &str)] = &[
    ("short", "k"),
    ("medium", "kashi"),
    ("kana", "とう"),
];

static TYPOS: &[(&str, &str)] = &[
    ("short", "kasu"),
    ("medium", "kashimu"),
    ("long", "shirayoka"),
];

fn bench_suggest(c: &mut Criterion) {
    let index = bench_index();
    let mut group = c.benchmark_group("index/suggest");
    for &(label, prefix) in PREFIXES {
        group.bench_with_input(BenchmarkId::new(label, prefix), &prefix, |b, &prefix| {
            b.iter(|| index.suggest(prefix));
        });
    }
    group.finish();
}

fn bench_suggest_exhaustive(c: &mut Criterion) {
    let index = bench_index();
    let mut group = c.benchmark_group("index/suggest_exhaustive");
    for &(label, prefix) in PREFIXES {
        group.bench_with_input(BenchmarkId::new(label, prefix), &prefix, |b, &prefix| {
            b.iter(|| index.suggest_exhaustive(prefix, 10));
        });
    }
    group.finish();
}

fn bench_spellcheck(c: &mut Criterion) {
    let index = bench_index();
    let mut group = c.benchmark_group("index/spellcheck");
    for &(label, word) in TYPOS {
        group.bench_with_input(BenchmarkId::new(label, word), &word, |b, &word| {
            b.iter(|| index.spellcheck(word, Some(2)));
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("index/build", |b| b.iter(bench_index));
}

criterion_group!(
    benches,
    bench_suggest,
    bench_suggest_exhaustive,
    bench_spellcheck,
    bench_build
);
criterion_main!(benches);
