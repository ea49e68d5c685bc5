//! Export output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory that receives `exported_data.csv` / `exported_data.xlsx`.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}
