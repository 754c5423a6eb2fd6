use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, HeaderLanguage};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use crate::utils::time::DEFAULT_PUNCH_SEPARATOR;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_punch_file")]
    pub punch_file: String,
    #[serde(default = "default_schedule_file")]
    pub schedule_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default)]
    pub output_format: ExportFormat,
    #[serde(default)]
    pub header_language: HeaderLanguage,
    #[serde(default = "default_punch_separator")]
    pub punch_separator: String,
}

/// Every key a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 6] = [
    "punch_file",
    "schedule_file",
    "output_file",
    "output_format",
    "header_language",
    "punch_separator",
];

fn default_punch_file() -> String {
    "punches.csv".to_string()
}
fn default_schedule_file() -> String {
    "schedule.csv".to_string()
}
fn default_output_file() -> String {
    "attendance_summary.xlsx".to_string()
}
fn default_punch_separator() -> String {
    DEFAULT_PUNCH_SEPARATOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            punch_file: default_punch_file(),
            schedule_file: default_schedule_file(),
            output_file: default_output_file(),
            output_format: ExportFormat::default(),
            header_language: HeaderLanguage::default(),
            punch_separator: default_punch_separator(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rattendance")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Config path to use: the `--config` override or the default one.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    /// A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info(format!(
                "No configuration file at {}, using defaults",
                path.display()
            ));
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Keys absent from a configuration file (filled from defaults on load).
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content)?
        };

        let missing = match yaml.as_mapping() {
            Some(map) => CONFIG_KEYS
                .iter()
                .copied()
                .filter(|k| !map.contains_key(*k))
                .collect(),
            None => CONFIG_KEYS.to_vec(),
        };

        Ok(missing)
    }

    /// Write the default configuration to `path`.
    pub fn write_defaults(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        if path.exists() {
            warning(format!("Overwriting {}", path.display()));
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok(())
    }

    pub fn punch_path(&self) -> PathBuf {
        expand_tilde(&self.punch_file)
    }

    pub fn schedule_path(&self) -> PathBuf {
        expand_tilde(&self.schedule_file)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_file)
    }
}
