//! Generator configuration loading

use crate::constants::{CONFIG_FILENAMES, DEFAULT_INSTALL_COMMAND};
use crate::error::{Error, Result};
use crate::manifest::Author;
use crate::rule_set::RuleSet;
use serde::Deserialize;
use std::path::Path;

/// Settings shared by every generation run of one user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub rule_set: RuleSet,
    /// Program and arguments installing the generated package's dependencies.
    #[serde(default = "get_default_install_command")]
    pub install_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: Author::default(),
            rule_set: RuleSet::default(),
            install_command: get_default_install_command(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        match self.install_command.first() {
            Some(program) if !program.is_empty() => Ok(()),
            _ => Err(Error::ValidationError("install_command must name a program".into())),
        }
    }

    /// Looks for a config file in `dir`, falling back to defaults when none exists.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = dir.join(config_file_name);
            if config_file_path.is_file() {
                return Self::load_file(&config_file_path);
            }
        }
        log::debug!("No config file in '{}', using defaults", dir.display());
        Ok(Self::default())
    }

    /// Loads an explicitly named config file. YAML unless the extension is `.json`.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.display().to_string(),
                config_files: CONFIG_FILENAMES.join(", "),
            });
        }

        log::debug!("Loading config from '{}'", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => serde_yaml::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn get_default_install_command() -> Vec<String> {
    DEFAULT_INSTALL_COMMAND.iter().map(|arg| arg.to_string()).collect()
}
