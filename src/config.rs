// src/config.rs

use crate::error::{DiaryError, Result};
use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the default database location.
pub const DB_ENV_VAR: &str = "DIARY_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub editor: String,
}

impl Config {
    /// Resolves the database path: `--db` flag, then `DIARY_DB`, then
    /// `~/.config/diary/diary.db`.
    pub fn resolve(db_flag: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_flag {
            Some(path) => path,
            None => match env::var_os(DB_ENV_VAR) {
                Some(path) if !path.is_empty() => PathBuf::from(path),
                _ => default_db_path()?,
            },
        };
        Ok(Config {
            db_path,
            editor: detect_editor(),
        })
    }
}

/// Standard database location (~/.config/diary/diary.db)
pub fn default_db_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(DiaryError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/diary/diary.db"))
}

fn detect_editor() -> String {
    env::var("EDITOR")
        .or_else(|_| env::var("VISUAL"))
        .unwrap_or_else(|_| "vi".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/explicit.db"))).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/explicit.db"));
        assert!(!config.editor.is_empty());
    }

    #[test]
    fn test_default_path_lives_under_config_dir() {
        if let Ok(path) = default_db_path() {
            assert!(path.ends_with(".config/diary/diary.db"));
        }
    }
}
