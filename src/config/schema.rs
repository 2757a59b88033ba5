// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures that can be loaded from commit-policy.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::policy::{project_policy, PolicyConfiguration, RuleName, RuleSpec};

/// The main configuration structure for commit-policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    /// Export configuration.
    pub export: ExportConfig,

    /// UI/UX configuration.
    pub ui: UiConfig,

    /// Rule overrides, replacing whole entries of the project policy.
    pub rules: BTreeMap<RuleName, RuleSpec>,
}

impl ToolConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// The project policy with this configuration's overrides applied.
    pub fn effective_policy(&self) -> PolicyConfiguration {
        if self.rules.is_empty() {
            return project_policy().clone();
        }
        project_policy().with_overrides(&self.rules)
    }

    /// Path exports are written to, relative to the repository root.
    pub fn export_path(&self, format: ExportFormat) -> PathBuf {
        self.export
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()))
    }
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when none is given on the command line.
    pub format: ExportFormat,

    /// Output file (defaults to the format's conventional file name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// UI/UX configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Applicability, RuleParameter, Severity};

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.export.format, ExportFormat::Js);
        assert!(config.ui.color);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_default_effective_policy_is_project_policy() {
        let config = ToolConfig::default();
        assert_eq!(&config.effective_policy(), project_policy());
    }

    #[test]
    fn test_effective_policy_applies_overrides() {
        let mut config = ToolConfig::default();
        config.rules.insert(
            RuleName::HeaderMaxLength,
            RuleSpec::new(Severity::Error, Applicability::Always)
                .with_parameter(RuleParameter::Length(72)),
        );

        let policy = config.effective_policy();
        let spec = policy.get(RuleName::HeaderMaxLength).unwrap();
        assert_eq!(spec.parameter, Some(RuleParameter::Length(72)));
        assert_eq!(policy.len(), RuleName::all().len());
    }

    #[test]
    fn test_export_path_defaults_per_format() {
        let config = ToolConfig::default();
        assert_eq!(
            config.export_path(ExportFormat::Json),
            PathBuf::from(".commitlintrc.json")
        );

        let mut config = ToolConfig::default();
        config.export.path = Some(PathBuf::from("config/commitlint.config.js"));
        assert_eq!(
            config.export_path(ExportFormat::Js),
            PathBuf::from("config/commitlint.config.js")
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = ToolConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("format = \"js\""));
    }
}
