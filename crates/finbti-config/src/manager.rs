use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Manager rooted at [`Config::app_data_dir`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_base_dir(Config::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self::new(config_dir.join(CONFIG_FILE)))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored configuration, or defaults when nothing was saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.config_path)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
