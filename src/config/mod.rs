use crate::core::schedule::CollectionSchedule;
use crate::errors::{AppError, AppResult};
use crate::models::CollectionTime;
use crate::storage::StorageKind;
use crate::utils::path::resolve_in;
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "emogo.conf";
const CACHE_SUBDIR: &str = "emogo";
const LOCAL_CACHE_DIR: &str = "cache";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the config file; relative paths resolve against it.
    #[serde(skip)]
    pub app_dir: PathBuf,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_vlog_dir")]
    pub vlog_dir: String,
    /// Unset: `<cache dir>/emogo` for the default app directory,
    /// `<app dir>/cache` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<String>,
    #[serde(default)]
    pub storage: StorageKind,
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_collection_times")]
    pub collection_times: Vec<CollectionTime>,
}

fn default_data_file() -> String {
    "emogo_log.json".to_string()
}
fn default_vlog_dir() -> String {
    "vlogs".to_string()
}
fn default_utc_offset() -> i32 {
    8
}
fn default_collection_times() -> Vec<CollectionTime> {
    vec![
        CollectionTime::new(7, 30),
        CollectionTime::new(13, 30),
        CollectionTime::new(19, 30),
    ]
}

impl Config {
    /// Defaults rooted at `app_dir`.
    pub fn with_app_dir(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            data_file: default_data_file(),
            vlog_dir: default_vlog_dir(),
            export_dir: None,
            storage: StorageKind::default(),
            utc_offset_hours: default_utc_offset(),
            collection_times: default_collection_times(),
        }
    }

    /// `~/.emogo` (or `./.emogo` when no home directory is known).
    pub fn default_app_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".emogo")
    }

    pub fn config_file(app_dir: &Path) -> PathBuf {
        app_dir.join(CONFIG_FILE_NAME)
    }

    /// Load `emogo.conf` from `app_dir`, or defaults if the file is absent.
    pub fn load(app_dir: &Path) -> AppResult<Self> {
        let path = Self::config_file(app_dir);

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str::<Config>(&content).map_err(|e| {
                AppError::Config(format!("cannot parse {}: {e}", path.display()))
            })?
        } else {
            Config::with_app_dir(app_dir)
        };

        cfg.app_dir = app_dir.to_path_buf();
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration file. Returns its path.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.app_dir)?;
        let path = Self::config_file(&self.app_dir);
        let yaml = self.to_yaml()?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn validate(&self) -> AppResult<()> {
        self.utc_offset()?;
        self.schedule()?;
        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        resolve_in(&self.app_dir, &self.data_file)
    }

    pub fn vlog_path(&self) -> PathBuf {
        resolve_in(&self.app_dir, &self.vlog_dir)
    }

    pub fn export_path(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return resolve_in(&self.app_dir, dir);
        }
        if self.app_dir == Self::default_app_dir()
            && let Some(cache) = dirs::cache_dir()
        {
            return cache.join(CACHE_SUBDIR);
        }
        self.app_dir.join(LOCAL_CACHE_DIR)
    }

    /// Fixed offset used for record timestamps.
    pub fn utc_offset(&self) -> AppResult<FixedOffset> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(AppError::Config(format!(
                "utc_offset_hours out of range: {}",
                self.utc_offset_hours
            )));
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            AppError::Config(format!("invalid utc offset: {}", self.utc_offset_hours))
        })
    }

    pub fn schedule(&self) -> AppResult<CollectionSchedule> {
        CollectionSchedule::new(self.collection_times.clone())
    }
}
