//! Runtime configuration.
use std::env;
use std::path::PathBuf;

pub const DATABASE_ENV: &str = "FLASHCARDS_DB";
pub const DEFAULT_DATABASE_PATH: &str = "flashcards.sqlite3";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

impl Config {
    /// Reads `FLASHCARDS_DB`, falling back to the default path when it is
    /// unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DATABASE_ENV) {
            Some(path) if !path.trim().is_empty() => Self {
                database_path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }

    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DATABASE_PATH));
    }

    #[test]
    fn test_env_path_and_blank_value() {
        let config = Config::from_lookup(|_| Some("/tmp/cards.db".to_string()));
        assert_eq!(config.database_path, PathBuf::from("/tmp/cards.db"));

        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = Config::from_lookup(|_| Some("/tmp/cards.db".to_string()))
            .with_database_path(Some(PathBuf::from("other.db")));
        assert_eq!(config.database_path, PathBuf::from("other.db"));
    }
}
