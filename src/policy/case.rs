// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Letter-casing styles understood by casing rules.

use serde::{Deserialize, Serialize};

/// A casing style, named the way commitlint names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetCase {
    LowerCase,
    UpperCase,
    CamelCase,
    KebabCase,
    PascalCase,
    SentenceCase,
    SnakeCase,
    StartCase,
}

impl TargetCase {
    /// Get the string representation of the case.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetCase::LowerCase => "lower-case",
            TargetCase::UpperCase => "upper-case",
            TargetCase::CamelCase => "camel-case",
            TargetCase::KebabCase => "kebab-case",
            TargetCase::PascalCase => "pascal-case",
            TargetCase::SentenceCase => "sentence-case",
            TargetCase::SnakeCase => "snake-case",
            TargetCase::StartCase => "start-case",
        }
    }

    /// Get all casing styles.
    pub fn all() -> &'static [TargetCase] {
        &[
            TargetCase::LowerCase,
            TargetCase::UpperCase,
            TargetCase::CamelCase,
            TargetCase::KebabCase,
            TargetCase::PascalCase,
            TargetCase::SentenceCase,
            TargetCase::SnakeCase,
            TargetCase::StartCase,
        ]
    }
}

impl std::str::FromStr for TargetCase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetCase::all()
            .iter()
            .copied()
            .find(|case| case.as_str() == s)
            .ok_or(())
    }
}

impl std::fmt::Display for TargetCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_from_str() {
        assert_eq!("lower-case".parse::<TargetCase>(), Ok(TargetCase::LowerCase));
        assert_eq!("start-case".parse::<TargetCase>(), Ok(TargetCase::StartCase));
        assert!("Lower-Case".parse::<TargetCase>().is_err());
    }

    #[test]
    fn test_serde_matches_as_str() {
        for case in TargetCase::all() {
            let json = serde_json::to_string(case).unwrap();
            assert_eq!(json, format!("\"{}\"", case.as_str()));
        }
    }
}
