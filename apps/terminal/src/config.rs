//! Runtime configuration from the environment and command line.

use std::path::PathBuf;

const DEFAULT_CARD_FILE: &str = "card.tsv";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tab-separated card file.
    pub card_file: PathBuf,
    /// SQLite database holding saved progress.
    pub db_path: PathBuf,
    pub log_filter: String,
}

impl Config {
    /// Read `FLASHCARDS_CARD_FILE`, `FLASHCARDS_DB_PATH` and `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            card_file: lookup("FLASHCARDS_CARD_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CARD_FILE)),
            db_path: lookup("FLASHCARDS_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_db_path),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// The first positional argument overrides the card file.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(card_file) = args.into_iter().find(|arg| !arg.starts_with('-')) {
            self.card_file = PathBuf::from(card_file);
        }
        self
    }
}

pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("german-flashcards")
        .join("progress.db")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.card_file, PathBuf::from("card.tsv"));
        assert_eq!(config.db_path, default_db_path());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("FLASHCARDS_CARD_FILE", "decks/a1.tsv"),
            ("FLASHCARDS_DB_PATH", "/tmp/progress.db"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.card_file, PathBuf::from("decks/a1.tsv"));
        assert_eq!(config.db_path, PathBuf::from("/tmp/progress.db"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_positional_arg_wins() {
        let config = Config::from_lookup(lookup_from(&[("FLASHCARDS_CARD_FILE", "env.tsv")]))
            .with_args(vec!["--verbose".to_string(), "cli.tsv".to_string()]);
        assert_eq!(config.card_file, PathBuf::from("cli.tsv"));
    }

    #[test]
    fn test_no_args_keeps_env() {
        let config = Config::from_lookup(lookup_from(&[("FLASHCARDS_CARD_FILE", "env.tsv")]))
            .with_args(Vec::new());
        assert_eq!(config.card_file, PathBuf::from("env.tsv"));
    }

    #[test]
    fn test_default_db_path_file_name() {
        let path = default_db_path();
        assert!(path.ends_with("german-flashcards/progress.db"));
    }
}
