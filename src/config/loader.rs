// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and override checks.

use crate::error::{ConfigError, PolicyError, Result};
use crate::policy::{ParameterKind, RuleName, RuleSpec};

use super::default::default_config;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::schema::ToolConfig;

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &[
    "commit-policy.toml",
    ".commit-policy.toml",
    ".config/commit-policy.toml",
];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        if let Some(found) = first_existing(&current) {
            return Some(found);
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(found) = first_existing(&home) {
            return Some(found);
        }
    }

    // XDG config directory
    let xdg = dirs::config_dir()?.join("commit-policy").join("config.toml");
    xdg.exists().then_some(xdg)
}

fn first_existing(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<ToolConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_config())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<ToolConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(PolicyError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path)?;

    parse_config(&content)
}

/// Parse configuration from a TOML string and check its rule overrides.
pub fn parse_config(content: &str) -> Result<ToolConfig> {
    let mut config: ToolConfig = toml::from_str(content).map_err(|e| {
        PolicyError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    config.rules = validate_overrides(config.rules)?;
    Ok(config)
}

/// Check that each override carries the parameter shape its rule expects.
///
/// Returns the overrides with parameters re-shaped to their canonical variant.
pub fn validate_overrides(
    overrides: BTreeMap<RuleName, RuleSpec>,
) -> Result<BTreeMap<RuleName, RuleSpec>> {
    overrides
        .into_iter()
        .map(|(rule, spec)| validate_override(rule, spec).map(|spec| (rule, spec)))
        .collect()
}

fn validate_override(rule: RuleName, mut spec: RuleSpec) -> Result<RuleSpec> {
    if !spec.is_enabled() {
        tracing::debug!("Rule {} is switched off, skipping parameter checks", rule);
        spec.parameter = spec.parameter.map(|p| p.conform(rule.parameter_kind()));
        return Ok(spec);
    }

    let kind = rule.parameter_kind();
    let invalid = |message: &str| {
        PolicyError::Config(ConfigError::InvalidValue {
            key: format!("rules.{}", rule),
            message: message.to_string(),
        })
    };

    spec.parameter = match (kind, spec.parameter.take()) {
        (ParameterKind::None, None) => None,
        (ParameterKind::None, Some(_)) => return Err(invalid("rule takes no parameter")),
        (_, None) => return Err(invalid("rule requires a parameter")),
        (kind, Some(parameter)) => {
            let parameter = parameter.conform(kind);
            if !parameter.matches_kind(kind) {
                return Err(invalid(&format!("expected {} parameter", kind_label(kind))));
            }
            Some(parameter)
        }
    };

    match spec.parameter.as_ref() {
        Some(parameter) if kind == ParameterKind::Length => {
            if parameter.as_length() == Some(0) {
                return Err(invalid("length must be greater than zero"));
            }
        }
        Some(parameter) if kind == ParameterKind::Case => {
            if parameter.as_cases().map_or(true, |cases| cases.is_empty()) {
                return Err(invalid("at least one case is required"));
            }
        }
        Some(parameter) if kind == ParameterKind::Text => {
            if parameter.as_text().map_or(true, str::is_empty) {
                return Err(invalid("string must not be empty"));
            }
        }
        Some(parameter) if kind == ParameterKind::Tokens => {
            let tokens = parameter.as_tokens().unwrap_or_default();
            if tokens.is_empty() {
                return Err(invalid("allowed values must not be empty"));
            }
            let mut seen = BTreeSet::new();
            for token in tokens {
                if token.is_empty() || token.to_lowercase() != token {
                    return Err(invalid(&format!("'{}' must be a lowercase value", token)));
                }
                if !seen.insert(token) {
                    return Err(invalid(&format!("'{}' is listed more than once", token)));
                }
            }
        }
        _ => {}
    }

    Ok(spec)
}

fn kind_label(kind: ParameterKind) -> &'static str {
    match kind {
        ParameterKind::None => "no",
        ParameterKind::Length => "a length",
        ParameterKind::Case => "a case",
        ParameterKind::Tokens => "a list of values",
        ParameterKind::Text => "a string",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use crate::policy::{Applicability, RuleParameter, Severity, TargetCase};

    fn expect_invalid(toml: &str) -> String {
        match parse_config(toml) {
            Err(PolicyError::Config(ConfigError::InvalidValue { key, message })) => {
                format!("{}: {}", key, message)
            }
            other => panic!("Expected invalid value error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ToolConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[export]
format = "json"
path = "tools/.commitlintrc.json"

[ui]
color = false
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(config.export.format, ExportFormat::Json);
        assert_eq!(
            config.export.path,
            Some(PathBuf::from("tools/.commitlintrc.json"))
        );
        assert!(!config.ui.color);
    }

    #[test]
    fn test_parse_rule_overrides() {
        let toml = r#"
[rules]
"header-max-length" = [1, "always", 72]
"type-enum" = [2, "always", ["feat", "fix", "revert"]]
"subject-case" = [2, "never", "upper-case"]
"#;
        let config = parse_config(toml).unwrap();

        let header = &config.rules[&RuleName::HeaderMaxLength];
        assert_eq!(header.severity, Severity::Warning);
        assert_eq!(header.parameter, Some(RuleParameter::Length(72)));

        let types = &config.rules[&RuleName::TypeEnum];
        assert_eq!(
            types.parameter,
            Some(RuleParameter::tokens(&["feat", "fix", "revert"]))
        );

        let subject = &config.rules[&RuleName::SubjectCase];
        assert_eq!(subject.parameter, Some(RuleParameter::Case(TargetCase::UpperCase)));
    }

    #[test]
    fn test_case_named_tokens_become_tokens() {
        let toml = r#"
[rules]
"scope-enum" = [2, "always", ["upper-case"]]
"#;
        let config = parse_config(toml).unwrap();
        assert_eq!(
            config.rules[&RuleName::ScopeEnum].parameter,
            Some(RuleParameter::tokens(&["upper-case"]))
        );
    }

    #[test]
    fn test_rejects_unknown_rule() {
        let toml = r#"
[rules]
"body-max-length" = [2, "always", 100]
"#;
        assert!(matches!(
            parse_config(toml),
            Err(PolicyError::Config(ConfigError::ParseError { .. }))
        ));
    }

    #[test]
    fn test_rejects_unknown_severity() {
        let toml = r#"
[rules]
"type-empty" = [3, "never"]
"#;
        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn test_rejects_empty_enumeration() {
        let message = expect_invalid(
            r#"
[rules]
"type-enum" = [2, "always", []]
"#,
        );
        assert!(message.starts_with("rules.type-enum"));
        assert!(message.contains("empty"));
    }

    #[test]
    fn test_rejects_duplicate_enumeration() {
        let message = expect_invalid(
            r#"
[rules]
"scope-enum" = [2, "always", ["git", "git"]]
"#,
        );
        assert!(message.contains("more than once"));
    }

    #[test]
    fn test_rejects_uppercase_enumeration() {
        let message = expect_invalid(
            r#"
[rules]
"type-enum" = [2, "always", ["Feat"]]
"#,
        );
        assert!(message.contains("lowercase"));
    }

    #[test]
    fn test_rejects_wrong_parameter_shape() {
        let message = expect_invalid(
            r#"
[rules]
"header-max-length" = [2, "always", "long"]
"#,
        );
        assert!(message.contains("a length"));

        let message = expect_invalid(
            r#"
[rules]
"type-empty" = [2, "never", 1]
"#,
        );
        assert!(message.contains("no parameter"));

        let message = expect_invalid(
            r#"
[rules]
"type-enum" = [2, "always"]
"#,
        );
        assert!(message.contains("requires a parameter"));
    }

    #[test]
    fn test_disabled_rules_need_no_parameter() {
        let toml = r#"
[rules]
"type-enum" = [0, "always"]
"header-max-length" = [0]
"#;
        let config = parse_config(toml).unwrap();

        let types = &config.rules[&RuleName::TypeEnum];
        assert_eq!(types.severity, Severity::Disabled);
        assert!(types.parameter.is_none());

        let header = &config.rules[&RuleName::HeaderMaxLength];
        assert_eq!(
            *header,
            RuleSpec::new(Severity::Disabled, Applicability::Always)
        );

        let policy = config.effective_policy();
        assert!(!policy.get(RuleName::TypeEnum).unwrap().is_enabled());
    }

    #[test]
    fn test_enabled_rule_still_requires_parameter() {
        let message = expect_invalid(
            r#"
[rules]
"header-max-length" = [1]
"#,
        );
        assert!(message.contains("requires a parameter"));
    }

    #[test]
    fn test_rejects_empty_case_list() {
        let message = expect_invalid(
            r#"
[rules]
"subject-case" = [2, "never", []]
"#,
        );
        assert!(message.starts_with("rules.subject-case"));
        assert!(message.contains("at least one case"));
    }

    #[test]
    fn test_rejects_empty_full_stop() {
        let message = expect_invalid(
            r#"
[rules]
"subject-full-stop" = [2, "never", ""]
"#,
        );
        assert!(message.starts_with("rules.subject-full-stop"));
        assert!(message.contains("must not be empty"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/commit-policy.toml"));
        assert!(matches!(
            result,
            Err(PolicyError::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_unreadable_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(dir.path());
        assert!(matches!(result, Err(PolicyError::Io(_))));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("commit-policy.toml");
        std::fs::write(&config_path, "[ui]\ncolor = false\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_config_file_from(&nested), Some(config_path.clone()));

        let config = load_config_from(&config_path).unwrap();
        assert!(!config.ui.color);
    }
}
