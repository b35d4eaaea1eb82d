use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Username used when `--as` is not given.
    #[serde(default)]
    pub current_user: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// Work sites registered in the database by `init`.
    #[serde(default)]
    pub locations: Vec<String>,
}

fn default_page_size() -> usize {
    10
}
fn default_report_file() -> String {
    "timesheets_report.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            current_user: None,
            page_size: default_page_size(),
            report_file: default_report_file(),
            locations: Vec::new(),
        }
    }
}

impl Config {
    /// `~/.farmsheets` (or `./.farmsheets` when no home directory is known)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".farmsheets")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("farmsheets.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("farmsheets.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Where a `--db` value points: `~/` is expanded and a relative name
    /// lives inside the config directory. `:memory:` is kept as is.
    pub fn resolve_db_path(name: &str) -> PathBuf {
        if name == ":memory:" {
            return PathBuf::from(name);
        }
        let p = crate::utils::path::expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize the config directory, config file and database file.
    ///
    /// A relative `custom_db` is placed inside the config directory. In test
    /// mode the config file is left untouched. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = match custom_db {
            Some(name) => Self::resolve_db_path(&name),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            // keep user settings from a previous init
            let mut config = Self::load()?;
            config.database = db_path.to_string_lossy().to_string();
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }
}
