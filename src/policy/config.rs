// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The project's commit lint policy.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::case::TargetCase;
use super::rule::{RuleName, RuleParameter, RuleSpec};
use super::severity::{Applicability, Severity};

/// Commit types the project accepts.
pub const ALLOWED_TYPES: &[&str] = &["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Scopes the project accepts.
pub const ALLOWED_SCOPES: &[&str] = &[
    "git",
    "version",
    "license",
    "tests",
    "cicd",
    "metrics",
    "deployment",
    "documentation",
    "general",
];

/// Longest header the project accepts.
pub const HEADER_MAX_LENGTH: usize = 100;

lazy_static! {
    static ref PROJECT_POLICY: PolicyConfiguration = PolicyConfiguration::project();
}

/// Get the shared project policy.
///
/// Built on first access and never mutated afterwards.
pub fn project_policy() -> &'static PolicyConfiguration {
    &PROJECT_POLICY
}

/// A mapping from rule name to rule spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfiguration {
    rules: BTreeMap<RuleName, RuleSpec>,
}

impl PolicyConfiguration {
    /// Build a fresh copy of the project policy.
    pub fn project() -> Self {
        use Applicability::{Always, Never};
        use Severity::{Error, Warning};

        let rules = [
            (RuleName::BodyLeadingBlank, RuleSpec::new(Warning, Always)),
            (RuleName::FooterLeadingBlank, RuleSpec::new(Warning, Always)),
            (
                RuleName::HeaderMaxLength,
                RuleSpec::new(Error, Always).with_parameter(RuleParameter::Length(HEADER_MAX_LENGTH)),
            ),
            (
                RuleName::ScopeCase,
                RuleSpec::new(Error, Always).with_parameter(RuleParameter::Case(TargetCase::LowerCase)),
            ),
            (
                RuleName::ScopeEnum,
                RuleSpec::new(Error, Always).with_parameter(RuleParameter::tokens(ALLOWED_SCOPES)),
            ),
            (
                RuleName::SubjectCase,
                RuleSpec::new(Error, Never).with_parameter(RuleParameter::Cases(vec![
                    TargetCase::SentenceCase,
                    TargetCase::StartCase,
                    TargetCase::PascalCase,
                    TargetCase::UpperCase,
                ])),
            ),
            (RuleName::SubjectEmpty, RuleSpec::new(Error, Never)),
            (
                RuleName::SubjectFullStop,
                RuleSpec::new(Error, Never).with_parameter(RuleParameter::Text(".".to_string())),
            ),
            (
                RuleName::TypeCase,
                RuleSpec::new(Error, Always).with_parameter(RuleParameter::Case(TargetCase::LowerCase)),
            ),
            (RuleName::TypeEmpty, RuleSpec::new(Error, Never)),
            (
                RuleName::TypeEnum,
                RuleSpec::new(Error, Always).with_parameter(RuleParameter::tokens(ALLOWED_TYPES)),
            ),
        ];

        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Get the complete rule table.
    pub fn rules(&self) -> &BTreeMap<RuleName, RuleSpec> {
        &self.rules
    }

    /// Get the spec for one rule.
    pub fn get(&self, rule: RuleName) -> Option<&RuleSpec> {
        self.rules.get(&rule)
    }

    /// Number of rules in the policy.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate rules in export order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleName, &RuleSpec)> {
        self.rules.iter()
    }

    /// Produce a new policy with `overrides` replacing whole entries.
    pub fn with_overrides(&self, overrides: &BTreeMap<RuleName, RuleSpec>) -> Self {
        let mut rules = self.rules.clone();
        for (rule, spec) in overrides {
            tracing::debug!("Overriding rule {} with {:?}", rule, spec);
            rules.insert(*rule, spec.clone());
        }
        Self { rules }
    }
}
