// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-policy - Commit Message Lint Policy
//!
//! The project's commit-message lint rules as typed, immutable data, plus
//! the tooling to export them for a commitlint-compatible linter.
//!
//! # Features
//!
//! - **Project Policy**: The rule table as a lazily built static
//! - **Typed Rules**: Severities, applicability and parameters as enums
//! - **Export**: `commitlint.config.js`, `.commitlintrc.json` or TOML
//! - **Overrides**: Optional per-rule overrides from `commit-policy.toml`
//!
//! # Example
//!
//! ```
//! use commit_policy::policy::{project_policy, RuleName, Severity};
//!
//! let policy = project_policy();
//! let spec = policy.get(RuleName::TypeEnum).unwrap();
//! assert_eq!(spec.severity, Severity::Error);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod git;
pub mod policy;

// Re-exports for convenience
pub use config::ToolConfig;
pub use error::{PolicyError, Result};
pub use policy::{project_policy, PolicyConfiguration};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-policy.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
