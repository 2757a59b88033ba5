// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Export file formats.

use serde::{Deserialize, Serialize};

/// A file format the linter can load its configuration from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// JavaScript module (`module.exports = ...`)
    #[default]
    Js,
    /// JSON document
    Json,
    /// TOML document
    Toml,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Js => "js",
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
        }
    }

    /// Conventional file name for this format.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Js => "commitlint.config.js",
            ExportFormat::Json => ".commitlintrc.json",
            ExportFormat::Toml => "commitlint.toml",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
