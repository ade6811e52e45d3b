use crate::core::logic::ScanSettings;
use crate::core::sessions::TrailingBreak;
use crate::errors::{AppError, AppResult};
use crate::source::{BackupPattern, TimestampKind};
use crate::utils::path::{expand_tilde, home_dir};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many `_`-separated name tokens identify a shot.
    pub underscore_depth: usize,
    /// Width of each printed column.
    pub column_width: usize,
    /// Gap above which a new session starts.
    pub session_gap_minutes: f64,
    pub backup_marker: String,
    pub extension_prefix: String,
    pub timestamp: TimestampKind,
    pub trailing_break: TrailingBreak,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            underscore_depth: 1,
            column_width: 25,
            session_gap_minutes: 30.0,
            backup_marker: "bak".to_string(),
            extension_prefix: "hip".to_string(),
            timestamp: TimestampKind::Created,
            trailing_break: TrailingBreak::Drop,
        }
    }
}

/// Values given on the command line; `None` keeps the config value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub underscore_depth: Option<usize>,
    pub column_width: Option<usize>,
    pub session_gap_minutes: Option<f64>,
    pub timestamp: Option<TimestampKind>,
    pub keep_trailing: bool,
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("shotlog")
        } else {
            home_dir().join(".shotlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shotlog.conf")
    }

    /// Config file in use: the `--config` override or the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.underscore_depth == 0 {
            return Err(AppError::InvalidSetting {
                key: "underscore_depth",
                reason: "must be at least 1".into(),
            });
        }
        if self.column_width == 0 {
            return Err(AppError::InvalidSetting {
                key: "column_width",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.session_gap_minutes.is_finite() && self.session_gap_minutes > 0.0) {
            return Err(AppError::InvalidSetting {
                key: "session_gap_minutes",
                reason: format!("must be a positive number, got {}", self.session_gap_minutes),
            });
        }
        Ok(())
    }

    /// Copy with command-line values applied, re-validated.
    pub fn with_overrides(&self, o: &Overrides) -> AppResult<Self> {
        let mut cfg = self.clone();

        if let Some(d) = o.underscore_depth {
            cfg.underscore_depth = d;
        }
        if let Some(w) = o.column_width {
            cfg.column_width = w;
        }
        if let Some(g) = o.session_gap_minutes {
            cfg.session_gap_minutes = g;
        }
        if let Some(t) = o.timestamp {
            cfg.timestamp = t;
        }
        if o.keep_trailing {
            cfg.trailing_break = TrailingBreak::Keep;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn scan_settings(&self) -> ScanSettings {
        ScanSettings {
            underscore_depth: self.underscore_depth,
            session_gap_minutes: self.session_gap_minutes,
            trailing_break: self.trailing_break,
        }
    }

    pub fn pattern(&self) -> BackupPattern {
        BackupPattern::new(&self.backup_marker, &self.extension_prefix)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write a default config file at `path`. An existing file is left alone
    /// and `Ok(false)` is returned.
    pub fn init_at(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = migrate::annotate(&Self::default().to_yaml()?);
        fs::write(path, yaml)?;
        Ok(true)
    }
}
