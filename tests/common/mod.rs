#![allow(dead_code)]

use std::{fs, path::PathBuf};

use finbti::finbti_config::ConfigManager;
use tempfile::TempDir;

/// Isolated data directory plus helpers for writing JSON fixtures into it.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn home(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    pub fn config_manager(&self) -> ConfigManager {
        ConfigManager::with_base_dir(self.home()).expect("create config manager for temp dir")
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn fixture(&self, name: &str) -> PathBuf {
        let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name);
        let contents = fs::read_to_string(&source).expect("read fixture");
        self.write(name, &contents)
    }
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
