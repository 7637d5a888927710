use log::LevelFilter;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::RwLock;

use crate::error::{AckError, Result};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_STATUS_DIR: &str = "./acks";
static DEFAULT_LOG_LEVEL: &str = "info";
static DEFAULT_CONFIG_FILE: &str = "factom-ack.toml";

const STATUS_DIR_KEY: &str = "STATUS_DIR";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

pub const CONFIG_FILE_ENV: &str = "FACTOM_ACK_CONFIG";
pub const STATUS_DIR_ENV: &str = "FACTOM_ACK_STATUS_DIR";
pub const LOG_LEVEL_ENV: &str = "FACTOM_ACK_LOG";

/// Settings accepted in the TOML config file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    status_dir: Option<String>,
    log_level: Option<String>,
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Defaults overlaid with the environment
    pub fn new() -> Config {
        let config = Config::with_defaults();
        config.apply_vars(env_vars());
        config
    }

    pub fn with_defaults() -> Config {
        let mut map = HashMap::new();
        map.insert(String::from(STATUS_DIR_KEY), String::from(DEFAULT_STATUS_DIR));
        map.insert(String::from(LOG_LEVEL_KEY), String::from(DEFAULT_LOG_LEVEL));
        Config {
            inner: RwLock::new(map),
        }
    }

    /// Config file named by `FACTOM_ACK_CONFIG`, or `factom-ack.toml`
    pub fn default_file_path() -> PathBuf {
        match env::var(CONFIG_FILE_ENV) {
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    /// Layer the config file and then the environment over the current values.
    ///
    /// A missing file is skipped; a malformed one is an error. Returns whether
    /// the file was read.
    pub fn load(&self, path: &Path) -> Result<bool> {
        let from_file = self.apply_file(path)?;
        self.apply_vars(env_vars());
        Ok(from_file)
    }

    /// Apply a TOML config file; returns false when the file does not exist
    pub fn apply_file(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        let contents = fs::read_to_string(path)?;
        self.apply_toml(&contents)?;
        Ok(true)
    }

    pub fn apply_toml(&self, contents: &str) -> Result<()> {
        let settings: FileSettings = toml::from_str(contents)?;
        if let Some(level) = &settings.log_level {
            parse_level(level)?;
        }
        let mut inner = self.write();
        if let Some(dir) = settings.status_dir {
            inner.insert(String::from(STATUS_DIR_KEY), dir);
        }
        if let Some(level) = settings.log_level {
            inner.insert(String::from(LOG_LEVEL_KEY), level);
        }
        Ok(())
    }

    /// Apply the `FACTOM_ACK_*` variables found in `vars`
    pub fn apply_vars<I>(&self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut inner = self.write();
        for (name, value) in vars {
            match name.as_str() {
                STATUS_DIR_ENV => {
                    inner.insert(String::from(STATUS_DIR_KEY), value);
                }
                LOG_LEVEL_ENV => {
                    inner.insert(String::from(LOG_LEVEL_KEY), value);
                }
                _ => {}
            }
        }
    }

    pub fn get_status_dir(&self) -> PathBuf {
        let inner = self.read();
        PathBuf::from(
            inner
                .get(STATUS_DIR_KEY)
                .map(String::as_str)
                .unwrap_or(DEFAULT_STATUS_DIR),
        )
    }

    pub fn set_status_dir(&self, dir: String) {
        self.write().insert(String::from(STATUS_DIR_KEY), dir);
    }

    /// Configured log level; an unrecognised value is a configuration error
    pub fn get_log_level(&self) -> Result<LevelFilter> {
        let inner = self.read();
        let level = inner
            .get(LOG_LEVEL_KEY)
            .map(String::as_str)
            .unwrap_or(DEFAULT_LOG_LEVEL);
        parse_level(level)
    }

    pub fn set_log_level(&self, level: String) {
        self.write().insert(String::from(LOG_LEVEL_KEY), level);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, String>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, String>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// The `FACTOM_ACK_*` variables that are set and valid unicode
fn env_vars() -> Vec<(String, String)> {
    [STATUS_DIR_ENV, LOG_LEVEL_ENV]
        .iter()
        .filter_map(|name| env::var(name).ok().map(|value| (name.to_string(), value)))
        .collect()
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|_| AckError::Config(format!("Invalid log level: {level}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::with_defaults();
        assert_eq!(config.get_status_dir(), PathBuf::from("./acks"));
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = Config::with_defaults();
        config
            .apply_toml("status_dir = \"/var/lib/acks\"\nlog_level = \"debug\"\n")
            .unwrap();
        assert_eq!(config.get_status_dir(), PathBuf::from("/var/lib/acks"));
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_toml_rejects_unknown_keys_and_bad_levels() {
        let config = Config::with_defaults();
        assert!(matches!(
            config.apply_toml("node = \"localhost\""),
            Err(AckError::Config(_))
        ));
        assert!(matches!(
            config.apply_toml("log_level = \"loud\""),
            Err(AckError::Config(_))
        ));
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_vars_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("factom-ack.toml");
        fs::write(&path, "status_dir = \"from-file\"\n").unwrap();

        let config = Config::with_defaults();
        assert!(config.apply_file(&path).unwrap());
        config.apply_vars(vec![
            (STATUS_DIR_ENV.to_string(), "from-env".to_string()),
            ("UNRELATED".to_string(), "ignored".to_string()),
        ]);
        assert_eq!(config.get_status_dir(), PathBuf::from("from-env"));
    }

    #[test]
    fn test_load_reports_whether_file_was_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("factom-ack.toml");
        let config = Config::with_defaults();
        assert!(!config.load(&path).unwrap());

        fs::write(&path, "log_level = \"warn\"\n").unwrap();
        assert!(config.load(&path).unwrap());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = tempdir().unwrap();
        let config = Config::with_defaults();
        assert!(!config.apply_file(&dir.path().join("absent.toml")).unwrap());
    }

    #[test]
    fn test_setters() {
        let config = Config::with_defaults();
        config.set_status_dir("elsewhere".to_string());
        config.set_log_level("warn".to_string());
        assert_eq!(config.get_status_dir(), PathBuf::from("elsewhere"));
        assert_eq!(config.get_log_level().unwrap(), LevelFilter::Warn);
    }
}
