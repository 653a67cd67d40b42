use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use lex_suggest::settings;
use lex_suggest::trace_init::init_tracing;
use lex_suggest::vocab::{load_readings, load_vocabulary};
use lex_suggest::{levenshtein, Canonicalizer, ReadingTokenizer, TrieIndex};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "suggesttool", about = "Typeahead index diagnostics")]
struct Cli {
    /// Custom settings TOML (replaces the embedded defaults)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write JSON trace lines to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct IndexArgs {
    /// Vocabulary file (keyword<TAB>score per line)
    #[arg(long)]
    vocab: PathBuf,
    /// Kanji readings file (surface<TAB>kana per line)
    #[arg(long)]
    readings: Option<PathBuf>,
    /// Output as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Ranked completions of a prefix
    Suggest {
        #[command(flatten)]
        index: IndexArgs,
        /// Prefix to complete
        query: String,
        /// Exact ranking over every branch instead of the bounded frontier
        #[arg(long)]
        exhaustive: bool,
        /// Result count for --exhaustive
        #[arg(short, long, default_value = "10")]
        n: usize,
    },
    /// Exact lookup of a keyword's canonical key
    Exact {
        #[command(flatten)]
        index: IndexArgs,
        query: String,
    },
    /// Stored keywords within an edit-distance budget
    Spell {
        #[command(flatten)]
        index: IndexArgs,
        query: String,
        /// Edit budget (default: index.default_max_cost)
        #[arg(long)]
        max_cost: Option<usize>,
    },
    /// Show index size after loading a vocabulary
    Stats {
        #[command(flatten)]
        index: IndexArgs,
    },
    /// Canonical key of each argument
    Key {
        /// Kanji readings file (surface<TAB>kana per line)
        #[arg(long)]
        readings: Option<PathBuf>,
        words: Vec<String>,
    },
    /// Levenshtein distance between two strings
    Distance { a: String, b: String },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default kana table as TOML
    KanaExport,
    /// Validate a custom kana table TOML file
    KanaValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn canonicalizer(readings: Option<&Path>) -> Canonicalizer {
    let tokenizer = match readings {
        Some(path) => {
            let pairs = die!(
                load_readings(path),
                "Failed to load readings from {}: {}",
                path.display()
            );
            ReadingTokenizer::with_readings(pairs)
        }
        None => ReadingTokenizer::new(),
    };
    Canonicalizer::with_tokenizer(tokenizer)
}

fn build_index(args: &IndexArgs) -> TrieIndex {
    let mut index = TrieIndex::new(canonicalizer(args.readings.as_deref()));
    let entries = die!(
        load_vocabulary(&args.vocab),
        "Failed to load vocabulary from {}: {}",
        args.vocab.display()
    );
    let total = entries.len();
    let accepted = index.extend(entries);
    eprintln!(
        "Loaded {accepted}/{total} entries ({} keys) from {}",
        index.len(),
        args.vocab.display()
    );
    index
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        die!(serde_json::to_string_pretty(value), "JSON serialization failed: {}")
    );
}

/// Left-align `s` to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{s}{}", " ".repeat(width - w))
    } else {
        s.to_string()
    }
}

/// Render rows as columns; the first column is padded by display width.
fn print_table(rows: &[(String, Vec<String>)]) {
    if rows.is_empty() {
        println!("(no results)");
        return;
    }
    let width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(label.as_str()))
        .max()
        .unwrap_or(0);
    for (i, (label, rest)) in rows.iter().enumerate() {
        println!("  #{:<2} {}  {}", i + 1, pad(label, width), rest.join("  "));
    }
}

fn suggest_cmd(args: &IndexArgs, query: &str, exhaustive: bool, n: usize) {
    let index = build_index(args);
    let results = if exhaustive {
        index.suggest_exhaustive(query, n)
    } else {
        index.suggest(query)
    };
    if args.json {
        print_json(&results);
        return;
    }
    println!(
        "=== Suggestions for \"{query}\" (key \"{}\") ===",
        index.canonical_key(query)
    );
    let rows: Vec<_> = results
        .into_iter()
        .map(|s| (s.surface, vec![format!("score={}", s.score)]))
        .collect();
    print_table(&rows);
}

fn exact_cmd(args: &IndexArgs, query: &str) {
    let index = build_index(args);
    let found = index.match_word(query);
    if args.json {
        print_json(&found);
        return;
    }
    match found {
        Some(surface) => println!("{query} -> {surface}"),
        None => {
            println!("{query} -> (no match)");
            process::exit(1);
        }
    }
}

fn spell_cmd(args: &IndexArgs, query: &str, max_cost: Option<usize>) {
    let index = build_index(args);
    let mut results = index.spellcheck(query, max_cost);
    results.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| b.score.cmp(&a.score))
            .then_with(|| a.surface.cmp(&b.surface))
    });
    if args.json {
        print_json(&results);
        return;
    }
    println!(
        "=== Corrections for \"{query}\" (max_cost={}) ===",
        max_cost.unwrap_or(index.settings().default_max_cost)
    );
    let rows: Vec<_> = results
        .into_iter()
        .map(|c| {
            (
                c.surface,
                vec![format!("distance={}", c.distance), format!("score={}", c.score)],
            )
        })
        .collect();
    print_table(&rows);
}

fn stats_cmd(args: &IndexArgs) {
    let index = build_index(args);
    let stats = index.stats();
    if args.json {
        print_json(&stats);
        return;
    }
    println!("Entries:   {}", stats.entries);
    println!("Nodes:     {}", stats.nodes);
    println!("Max depth: {}", stats.max_depth);
}

fn key_cmd(readings: Option<&Path>, words: &[String]) {
    let canonicalizer = canonicalizer(readings);
    let rows: Vec<_> = words
        .iter()
        .map(|w| {
            let key = canonicalizer.key_to_latin(w);
            let key = if key.is_empty() { "(empty)".to_string() } else { key };
            (w.clone(), vec![key])
        })
        .collect();
    print_table(&rows);
}

fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: index.min_score={}, index.max_suggestions={}, index.frontier_width={}, index.default_max_cost={}, normalize.max_chars={}",
        s.index.min_score,
        s.index.max_suggestions,
        s.index.frontier_width,
        s.index.default_max_cost,
        s.normalize.max_chars
    );
}

fn kana_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(lex_suggest::romaji::parse_kana_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.settings {
        let content = die!(
            fs::read_to_string(path),
            "Error reading {}: {}",
            path.display()
        );
        die!(settings::init_custom(content), "Error: {}");
    }
    init_tracing(cli.trace_dir.as_deref());

    match cli.command {
        Command::Suggest {
            index,
            query,
            exhaustive,
            n,
        } => suggest_cmd(&index, &query, exhaustive, n),
        Command::Exact { index, query } => exact_cmd(&index, &query),
        Command::Spell {
            index,
            query,
            max_cost,
        } => spell_cmd(&index, &query, max_cost),
        Command::Stats { index } => stats_cmd(&index),
        Command::Key { readings, words } => key_cmd(readings.as_deref(), &words),
        Command::Distance { a, b } => println!("{}", levenshtein(&a, &b)),
        Command::SettingsExport => print!("{}", settings::default_toml()),
        Command::SettingsValidate { file } => settings_validate(&file),
        Command::KanaExport => print!("{}", lex_suggest::romaji::default_toml()),
        Command::KanaValidate { file } => kana_validate(&file),
    }
}
