// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::ToolConfig;

/// Get the default configuration.
pub fn default_config() -> ToolConfig {
    ToolConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# commit-policy configuration file
#
# Every setting is optional. Without this file the project policy is
# exported unchanged.

# Export configuration
[export]
# One of "js", "json", "toml"
format = "js"
# Output file, relative to the repository root
# path = "commitlint.config.js"

# UI configuration
[ui]
color = true

# Rule overrides replace whole entries of the project policy.
# Each value is [severity, applicability, parameter?] with severity
# 0 (off), 1 (warn) or 2 (error) and applicability "always" or "never".
[rules]
# "header-max-length" = [2, "always", 72]
# "type-enum" = [2, "always", ["feat", "fix", "docs", "style", "refactor", "test", "chore", "revert"]]
"#
}
