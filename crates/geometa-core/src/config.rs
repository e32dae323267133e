use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where reference lists live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaConfig {
    /// Directory holding the list files.
    pub base_dir: PathBuf,
    /// Mount list file name, relative to `base_dir` unless absolute.
    pub mounts_file: PathBuf,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            mounts_file: PathBuf::from("mounts.csv"),
        }
    }
}

impl MetaConfig {
    /// Defaults overridden by `GEOMETA_DIR` and `GEOMETA_MOUNTS`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(dir) = env::var("GEOMETA_DIR") {
            cfg.base_dir = PathBuf::from(dir);
        }
        if let Ok(file) = env::var("GEOMETA_MOUNTS") {
            cfg.mounts_file = PathBuf::from(file);
        }
        cfg
    }

    pub fn mounts_path(&self) -> PathBuf {
        self.base_dir.join(&self.mounts_file)
    }
}
