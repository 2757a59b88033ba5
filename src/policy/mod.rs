// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit lint policy module.
//!
//! This module defines the rule table the project's commit messages are
//! linted against, and the types it is built from.

mod case;
mod config;
mod rule;
mod severity;

pub use case::TargetCase;
pub use config::{
    project_policy, PolicyConfiguration, ALLOWED_SCOPES, ALLOWED_TYPES, HEADER_MAX_LENGTH,
};
pub use rule::{CommitPart, ParameterKind, RuleName, RuleParameter, RuleSpec};
pub use severity::{Applicability, Severity};
