use std::env;
use std::path::PathBuf;

use crate::store::kv::DEFAULT_QUOTA_BYTES;

/// Runtime settings, all overridable through the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub quota_bytes: usize,
}

impl Config {
    pub fn from_env() -> Config {
        let bind_addr = env::var("EMS_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let data_dir: PathBuf = env::var("EMS_DATA_DIR")
            .unwrap_or_else(|_| "./data".to_string())
            .into();
        let quota_bytes = env::var("EMS_STORAGE_QUOTA_BYTES")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_QUOTA_BYTES);
        Config {
            bind_addr,
            data_dir,
            quota_bytes,
        }
    }

    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join("ems-storage.json")
    }
}
