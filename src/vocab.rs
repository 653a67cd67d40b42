//! Tab-separated vocabulary and reading files.
//!
//! Vocabulary lines are `keyword<TAB>score`; reading lines are
//! `surface<TAB>reading`. Blank lines and lines starting with `#` are
//! skipped. Errors report 1-based line numbers.

use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid score {value:?}")]
    InvalidScore { line: usize, value: String },
    #[error("line {line}: missing score column")]
    MissingScore { line: usize },
    #[error("line {line}: missing reading column")]
    MissingReading { line: usize },
}

/// Non-comment lines with their 1-based numbers.
fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
}

pub fn parse_vocabulary(text: &str) -> Result<Vec<(String, i64)>, VocabError> {
    data_lines(text)
        .map(|(line, content)| {
            let (keyword, score) = content
                .rsplit_once('\t')
                .ok_or(VocabError::MissingScore { line })?;
            let score = score
                .trim()
                .parse::<i64>()
                .map_err(|_| VocabError::InvalidScore {
                    line,
                    value: score.to_string(),
                })?;
            Ok((keyword.to_string(), score))
        })
        .collect()
}

pub fn load_vocabulary(path: &Path) -> Result<Vec<(String, i64)>, VocabError> {
    parse_vocabulary(&fs::read_to_string(path)?)
}

pub fn parse_readings(text: &str) -> Result<Vec<(String, String)>, VocabError> {
    data_lines(text)
        .map(|(line, content)| match content.split_once('\t') {
            Some((surface, reading)) if !reading.trim().is_empty() => {
                Ok((surface.trim().to_string(), reading.trim().to_string()))
            }
            _ => Err(VocabError::MissingReading { line }),
        })
        .collect()
}

pub fn load_readings(path: &Path) -> Result<Vec<(String, String)>, VocabError> {
    parse_readings(&fs::read_to_string(path)?)
}
