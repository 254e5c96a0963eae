use crate::error::{NewDayError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const CONFIG_DIR_ENV: &str = "NEWDAY_CONFIG_DIR";

pub const DEFAULT_NOTES_DIR: &str = "CraftingInterpreter TODOList";
pub const DEFAULT_INDEX_FILE: &str = "main.typ";
pub const DEFAULT_FILE_EXT: &str = "typ";
pub const DEFAULT_SUBHEADINGS: u32 = 3;

/// Configuration for newday, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewDayConfig {
    /// Trailing path segment the working directory must end with
    pub notes_dir: String,

    /// Index file that collects the include directives
    pub index_file: String,

    /// Extension of the dated note (without the dot)
    pub file_ext: String,

    /// Number of empty `== ` subheadings in a fresh note
    pub subheadings: u32,

    /// Whether appended includes are followed by a page break
    pub page_break: bool,
}

impl Default for NewDayConfig {
    fn default() -> Self {
        Self {
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            file_ext: DEFAULT_FILE_EXT.to_string(),
            subheadings: DEFAULT_SUBHEADINGS,
            page_break: true,
        }
    }
}

impl NewDayConfig {
    /// `$NEWDAY_CONFIG_DIR` if set, otherwise the platform config directory.
    pub fn default_dir() -> Option<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Some(PathBuf::from(dir));
        }
        ProjectDirs::from("com", "newday", "newday").map(|d| d.config_dir().to_path_buf())
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| NewDayError::file(&config_path, e))?;
        let config: NewDayConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
