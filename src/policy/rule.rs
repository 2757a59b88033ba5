// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule names and rule specifications.

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::case::TargetCase;
use super::severity::{Applicability, Severity};

/// The part of a commit message a rule looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitPart {
    Header,
    Type,
    Scope,
    Subject,
    Body,
    Footer,
}

impl CommitPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitPart::Header => "header",
            CommitPart::Type => "type",
            CommitPart::Scope => "scope",
            CommitPart::Subject => "subject",
            CommitPart::Body => "body",
            CommitPart::Footer => "footer",
        }
    }
}

impl std::fmt::Display for CommitPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of argument a rule takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// No argument.
    None,
    /// A maximum length.
    Length,
    /// One casing style or a list of them.
    Case,
    /// A list of allowed tokens.
    Tokens,
    /// A literal string.
    Text,
}

/// Names of the rules in the policy.
///
/// Declaration order is the order rules are listed and exported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleName {
    BodyLeadingBlank,
    FooterLeadingBlank,
    HeaderMaxLength,
    ScopeCase,
    ScopeEnum,
    SubjectCase,
    SubjectEmpty,
    SubjectFullStop,
    TypeCase,
    TypeEmpty,
    TypeEnum,
}

impl RuleName {
    /// Get the rule name as the linter spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::FooterLeadingBlank => "footer-leading-blank",
            RuleName::HeaderMaxLength => "header-max-length",
            RuleName::ScopeCase => "scope-case",
            RuleName::ScopeEnum => "scope-enum",
            RuleName::SubjectCase => "subject-case",
            RuleName::SubjectEmpty => "subject-empty",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::TypeCase => "type-case",
            RuleName::TypeEmpty => "type-empty",
            RuleName::TypeEnum => "type-enum",
        }
    }

    /// Get a description of what the rule checks.
    pub fn description(&self) -> &'static str {
        match self {
            RuleName::BodyLeadingBlank => "Checks whether the body begins with a blank line",
            RuleName::FooterLeadingBlank => "Checks whether the footer begins with a blank line",
            RuleName::HeaderMaxLength => "Checks the header length against the given maximum",
            RuleName::ScopeCase => "Checks whether the scope is in the given case",
            RuleName::ScopeEnum => "Checks whether the scope is one of the given values",
            RuleName::SubjectCase => "Checks whether the subject is in one of the given cases",
            RuleName::SubjectEmpty => "Checks whether the subject is empty",
            RuleName::SubjectFullStop => "Checks whether the subject ends with the given character",
            RuleName::TypeCase => "Checks whether the type is in the given case",
            RuleName::TypeEmpty => "Checks whether the type is empty",
            RuleName::TypeEnum => "Checks whether the type is one of the given values",
        }
    }

    /// Get the commit message part the rule applies to.
    pub fn target(&self) -> CommitPart {
        match self {
            RuleName::BodyLeadingBlank => CommitPart::Body,
            RuleName::FooterLeadingBlank => CommitPart::Footer,
            RuleName::HeaderMaxLength => CommitPart::Header,
            RuleName::ScopeCase | RuleName::ScopeEnum => CommitPart::Scope,
            RuleName::SubjectCase | RuleName::SubjectEmpty | RuleName::SubjectFullStop => {
                CommitPart::Subject
            }
            RuleName::TypeCase | RuleName::TypeEmpty | RuleName::TypeEnum => CommitPart::Type,
        }
    }

    /// Get the kind of parameter the rule takes.
    pub fn parameter_kind(&self) -> ParameterKind {
        match self {
            RuleName::BodyLeadingBlank
            | RuleName::FooterLeadingBlank
            | RuleName::SubjectEmpty
            | RuleName::TypeEmpty => ParameterKind::None,
            RuleName::HeaderMaxLength => ParameterKind::Length,
            RuleName::ScopeCase | RuleName::SubjectCase | RuleName::TypeCase => {
                ParameterKind::Case
            }
            RuleName::ScopeEnum | RuleName::TypeEnum => ParameterKind::Tokens,
            RuleName::SubjectFullStop => ParameterKind::Text,
        }
    }

    /// Get all rule names, in export order.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::BodyLeadingBlank,
            RuleName::FooterLeadingBlank,
            RuleName::HeaderMaxLength,
            RuleName::ScopeCase,
            RuleName::ScopeEnum,
            RuleName::SubjectCase,
            RuleName::SubjectEmpty,
            RuleName::SubjectFullStop,
            RuleName::TypeCase,
            RuleName::TypeEmpty,
            RuleName::TypeEnum,
        ]
    }
}

impl std::str::FromStr for RuleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| format!("unknown rule '{}'", s))
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Rule names are map keys in every format we read, so go through strings
// rather than serde's enum representation.
impl Serialize for RuleName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// A rule's argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleParameter {
    /// A maximum length.
    Length(usize),
    /// A single casing style.
    Case(TargetCase),
    /// Several casing styles.
    Cases(Vec<TargetCase>),
    /// Allowed tokens, in the order they are listed.
    Tokens(Vec<String>),
    /// A literal string.
    Text(String),
}

impl RuleParameter {
    /// Build a token list from string slices.
    pub fn tokens(tokens: &[&str]) -> Self {
        RuleParameter::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }

    /// Get the parameter as a token list, if it is one.
    ///
    /// A list of case names reads back as a case list, so it is accepted here too.
    pub fn as_tokens(&self) -> Option<Vec<&str>> {
        match self {
            RuleParameter::Tokens(tokens) => Some(tokens.iter().map(String::as_str).collect()),
            RuleParameter::Cases(cases) => Some(cases.iter().map(TargetCase::as_str).collect()),
            _ => None,
        }
    }

    /// Get the parameter as a length, if it is one.
    pub fn as_length(&self) -> Option<usize> {
        match self {
            RuleParameter::Length(length) => Some(*length),
            _ => None,
        }
    }

    /// Get the parameter as casing styles, if it is one or more.
    pub fn as_cases(&self) -> Option<Vec<TargetCase>> {
        match self {
            RuleParameter::Case(case) => Some(vec![*case]),
            RuleParameter::Cases(cases) => Some(cases.clone()),
            _ => None,
        }
    }

    /// Get the parameter as a literal string, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleParameter::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this parameter has the shape `kind` describes.
    pub fn matches_kind(&self, kind: ParameterKind) -> bool {
        match kind {
            ParameterKind::None => false,
            ParameterKind::Length => self.as_length().is_some(),
            ParameterKind::Case => self.as_cases().is_some(),
            ParameterKind::Tokens => self.as_tokens().is_some(),
            ParameterKind::Text => self.as_text().is_some(),
        }
    }

    /// Re-shape a parameter read from a file into the variant `kind` expects.
    pub fn conform(self, kind: ParameterKind) -> Self {
        match (kind, self) {
            (ParameterKind::Tokens, RuleParameter::Cases(cases)) => {
                RuleParameter::Tokens(cases.iter().map(|c| c.as_str().to_string()).collect())
            }
            (ParameterKind::Text, RuleParameter::Case(case)) => {
                RuleParameter::Text(case.as_str().to_string())
            }
            (_, parameter) => parameter,
        }
    }
}

impl std::fmt::Display for RuleParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleParameter::Length(length) => write!(f, "{}", length),
            RuleParameter::Case(case) => write!(f, "{}", case),
            RuleParameter::Text(text) => write!(f, "\"{}\"", text),
            RuleParameter::Cases(_) | RuleParameter::Tokens(_) => {
                let tokens = self.as_tokens().unwrap_or_default();
                write!(f, "[{}]", tokens.join(", "))
            }
        }
    }
}

/// Severity, applicability and optional parameter for one rule.
///
/// Serialized in the linter's tuple shape: `[2, "always", 100]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub severity: Severity,
    pub applicability: Applicability,
    pub parameter: Option<RuleParameter>,
}

impl RuleSpec {
    /// Create a rule spec without a parameter.
    pub fn new(severity: Severity, applicability: Applicability) -> Self {
        Self {
            severity,
            applicability,
            parameter: None,
        }
    }

    /// Set the parameter.
    pub fn with_parameter(mut self, parameter: RuleParameter) -> Self {
        self.parameter = Some(parameter);
        self
    }

    /// Whether the linter applies this rule at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Disabled
    }
}

impl Serialize for RuleSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.parameter.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref parameter) = self.parameter {
            seq.serialize_element(parameter)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for RuleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RuleSpecVisitor)
    }
}

struct RuleSpecVisitor;

impl<'de> Visitor<'de> for RuleSpecVisitor {
    type Value = RuleSpec;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("an array of [severity, applicability?, parameter?]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let severity: Severity = seq
            .next_element()?
            .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
        // `[0]` is how the linter switches a rule off
        let applicability: Applicability = seq.next_element()?.unwrap_or(Applicability::Always);
        let parameter: Option<RuleParameter> = seq.next_element()?;

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(4, &self));
        }

        Ok(RuleSpec {
            severity,
            applicability,
            parameter,
        })
    }
}
