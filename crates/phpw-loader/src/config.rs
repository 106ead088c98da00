//! loader.toml configuration parser.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub module: ModuleConfig,
    pub run: Option<RunConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of evaluation cycles to drive (default 1).
    pub cycles: Option<u32>,
    /// Log filter handed to the subscriber (e.g. "info").
    pub log_filter: Option<String>,
}

impl LoaderConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LoaderConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn cycles(&self) -> u32 {
        self.run.as_ref().and_then(|run| run.cycles).unwrap_or(1)
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.run.as_ref().and_then(|run| run.log_filter.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let toml_str = r#"
[module]
name = "php"
path = "build/php.wasm"
"#;
        let config: LoaderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.module.name, "php");
        assert_eq!(config.cycles(), 1);
        assert!(config.log_filter().is_none());
    }

    #[test]
    fn parse_with_run_table() {
        let toml_str = r#"
[module]
name = "php"
path = "build/php.wasm"

[run]
cycles = 5
log_filter = "debug"
"#;
        let config: LoaderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cycles(), 5);
        assert_eq!(config.log_filter(), Some("debug"));
    }
}
