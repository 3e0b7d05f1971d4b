//! Run configuration: input column names and preloaded post values
//!
//! Configuration is optional. It is looked up, in order, at the path given on
//! the command line, `norma.toml` in the working directory, and
//! `~/.config/norma-cli/config.toml`. Without a file the built-in defaults
//! match the standard course-assignment export.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sheet::Cell;
use crate::staffing::PostDefaults;

const LOCAL_CONFIG: &str = "norma.toml";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub columns: ColumnMap,
    /// Default values for post columns, keyed by output column name
    pub preloaded: BTreeMap<String, PreloadedValue>,
}

/// Names of the input columns the pipeline reads
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    /// Faculty/domain code, matched by the faculty filter
    pub domain: String,
    /// Study-program domain tag, read by the final-semester and act-code rules
    pub domain_tag: String,
    pub discipline: String,
    pub instructor: String,
    pub activity: String,
    pub semester: String,
    pub study_year: String,
    pub group_code: String,
    pub hours: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            domain: "Domeniu".to_string(),
            domain_tag: "Domeniu".to_string(),
            discipline: "Denumire disciplina".to_string(),
            instructor: "Cadru didactic".to_string(),
            activity: "Tip".to_string(),
            semester: "Semestru".to_string(),
            study_year: "An de studii".to_string(),
            group_code: "Cod formatiune".to_string(),
            hours: "Numar ore / saptamana".to_string(),
        }
    }
}

/// A scalar value in the `[preloaded]` table
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PreloadedValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<&PreloadedValue> for Cell {
    fn from(value: &PreloadedValue) -> Self {
        match value {
            PreloadedValue::Bool(b) => Cell::Bool(*b),
            PreloadedValue::Int(i) => Cell::Int(*i),
            PreloadedValue::Float(f) => Cell::Float(*f),
            PreloadedValue::Text(s) => Cell::String(s.clone()),
        }
    }
}

impl Config {
    /// Load the configuration from an explicit path or the default locations
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        for candidate in default_locations() {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        log::debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        // Surface unknown post columns at load time
        config.post_defaults()?;
        Ok(config)
    }

    /// Build the immutable post defaults from the `[preloaded]` table
    pub fn post_defaults(&self) -> Result<PostDefaults> {
        self.preloaded
            .iter()
            .try_fold(PostDefaults::new(), |defaults, (name, value)| {
                defaults.with(name, Cell::from(value))
            })
            .context("Invalid [preloaded] entry")
    }
}

fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(LOCAL_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("norma-cli").join("config.toml"));
    }
    locations
}
