use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_timezone;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// `production` or `testing`
    #[serde(default = "default_env")]
    pub env: String,
    /// Log file; empty logs to stderr
    #[serde(default)]
    pub log: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Directory holding index.html and the static folders
    #[serde(default = "default_workdir")]
    pub workdir: String,
}

fn default_env() -> String {
    "production".to_string()
}
fn default_port() -> u16 {
    4001
}
fn default_timezone() -> String {
    "Europe/Amsterdam".to_string()
}
fn default_workdir() -> String {
    "web".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            env: default_env(),
            log: String::new(),
            port: default_port(),
            timezone: default_timezone(),
            workdir: default_workdir(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.kmlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".kmlog")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("kmlog.yml")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("kmlog.sqlite")
    }

    /// Load configuration from `path` (or the default file), falling back to
    /// defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, yaml)?;
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.env != "production" && self.env != "testing" {
            return Err(AppError::Config(format!(
                "env must be 'production' or 'testing', got '{}'",
                self.env
            )));
        }
        self.tz()?;
        Ok(())
    }

    pub fn is_testing(&self) -> bool {
        self.env == "testing"
    }

    pub fn tz(&self) -> AppResult<Tz> {
        parse_timezone(&self.timezone)
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn workdir_path(&self) -> PathBuf {
        expand_tilde(&self.workdir)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        if self.log.is_empty() {
            None
        } else {
            Some(expand_tilde(&self.log))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_config(name: &str) -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("{}_kmlog.yml", name));
        fs::remove_file(&path).ok();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_config("cfg_missing");
        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.port, 4001);
        assert_eq!(cfg.timezone, "Europe/Amsterdam");
        assert!(!cfg.is_testing());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let path = temp_config("cfg_partial");
        fs::write(&path, "database: /tmp/x.sqlite\nenv: testing\nport: 8080\n").unwrap();
        let cfg = Config::load(Some(&path)).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.port, 8080);
        assert!(cfg.is_testing());
        assert_eq!(cfg.workdir, "web");
        assert!(cfg.log_path().is_none());
    }

    #[test]
    fn save_then_load() {
        let path = temp_config("cfg_roundtrip");
        let cfg = Config {
            database: "/tmp/km.sqlite".into(),
            timezone: "UTC".into(),
            ..Default::default()
        };
        cfg.save(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.database, "/tmp/km.sqlite");
        assert_eq!(loaded.tz().unwrap(), chrono_tz::UTC);
    }

    #[test]
    fn bad_values_are_rejected() {
        let path = temp_config("cfg_bad_tz");
        fs::write(&path, "database: x\ntimezone: Mars/Olympus\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));

        let path = temp_config("cfg_bad_env");
        fs::write(&path, "database: x\nenv: staging\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));

        let path = temp_config("cfg_bad_yaml");
        fs::write(&path, "database: [unclosed\n").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(AppError::Config(_))));
    }
}
