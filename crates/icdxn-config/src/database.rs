//! Relational store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "database.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the store lives only for the lifetime of the process.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_next_to_process() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "database.db");
        assert!(!config.is_in_memory());
    }
}
