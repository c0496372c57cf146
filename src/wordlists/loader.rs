//! Word list loading utilities
//!
//! Reads custom word lists from disk. Entries are only normalised here;
//! validation happens when a game starts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to read a word list file
#[derive(Debug, Error)]
#[error("failed to read word list {}: {source}", .path.display())]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

/// Load words from a file
///
/// One word per line. Surrounding whitespace is trimmed, words are
/// lowercased, and blank lines or lines starting with `#` are skipped.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_word_list(&content);
    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split file contents into normalised entries
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

/// Copy an embedded slice into owned entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let words = parse_word_list("  Crane \nslate\n\n# comment\nIRATE\n");
        assert_eq!(words, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_keeps_invalid_entries_for_validation() {
        let words = parse_word_list("crane\nab1de\ntoolong\n");
        assert_eq!(words, vec!["crane", "ab1de", "toolong"]);
    }

    #[test]
    fn parse_empty() {
        assert!(parse_word_list("").is_empty());
        assert!(parse_word_list("\n# only comments\n").is_empty());
    }

    #[test]
    fn load_round_trips_through_file() {
        let path = std::env::temp_dir().join(format!("wordle_game_loader_{}.txt", std::process::id()));
        fs::write(&path, "Hello\nworld\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let err = load_from_file("/definitely/not/here/words.txt").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here/words.txt"));
    }

    #[test]
    fn words_from_slice_copies_everything() {
        let words = words_from_slice(&["crane", "slate"]);
        assert_eq!(words, vec!["crane", "slate"]);
    }
}
