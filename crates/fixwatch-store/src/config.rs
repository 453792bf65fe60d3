//! `fixwatch.toml` loading.
//!
//! Every section is optional; an absent file yields the defaults.

#![allow(clippy::result_large_err)]

use crate::errors::{config_error, io_error_at, Result};
use fixwatch_core::report::ExportKind;
use fixwatch_core::{Organization, RuleTable, Schema};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "fixwatch.toml";

/// File names of the working set, relative to the working directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayout {
    /// Canonical current fixtures, written by `ingest`
    pub fixtures: String,
    /// Last committed snapshot
    pub baseline: String,
    pub new: String,
    pub changed: String,
    pub removed: String,
}

impl Default for FileLayout {
    fn default() -> Self {
        Self {
            fixtures: "Ballincollig_Fixtures_Final.csv".to_string(),
            baseline: "clubzap_uploaded_baseline.csv".to_string(),
            new: "clubzap_new_fixtures.csv".to_string(),
            changed: "clubzap_changed_fixtures.csv".to_string(),
            removed: "clubzap_removed_fixtures.csv".to_string(),
        }
    }
}

impl FileLayout {
    pub fn fixtures_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.fixtures)
    }

    pub fn baseline_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.baseline)
    }

    pub fn extract_path(&self, dir: &Path, kind: ExportKind) -> PathBuf {
        let name = match kind {
            ExportKind::New => &self.new,
            ExportKind::Changed => &self.changed,
            ExportKind::Removed => &self.removed,
        };
        dir.join(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixwatchConfig {
    pub organization: Organization,
    pub files: FileLayout,
    /// Overrides the built-in classifier table when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RuleTable>,
    pub schema: Schema,
}

impl FixwatchConfig {
    /// Parse and validate TOML text; `origin` is used in error messages
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        let config: FixwatchConfig =
            toml::from_str(text).map_err(|e| config_error(origin, &e.to_string()))?;
        config.validate(origin)?;
        Ok(config)
    }

    fn validate(&self, origin: &Path) -> Result<()> {
        self.organization
            .validate()
            .map_err(|e| config_error(origin, &e.to_string()))?;
        self.schema
            .validate()
            .map_err(|e| config_error(origin, &e.to_string()))?;
        Ok(())
    }

    /// The configured rule table, or the built-in one
    pub fn rule_table(&self) -> Result<RuleTable> {
        match &self.rules {
            Some(table) => Ok(table.clone()),
            None => RuleTable::builtin().map_err(Into::into),
        }
    }
}

/// Load config from `path`; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<FixwatchConfig> {
    if !path.exists() {
        tracing::debug!(
            component = module_path!(),
            op = "load_config",
            path = %path.display(),
            "config file absent, using defaults"
        );
        return Ok(FixwatchConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| io_error_at("load_config", path, e))?;
    FixwatchConfig::from_toml_str(&text, path)
}
