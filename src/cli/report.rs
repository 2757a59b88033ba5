// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule table output.

use console::{style, Style};

use crate::policy::{PolicyConfiguration, RuleName, RuleSpec, Severity};

use super::args::OutputFormat;

/// Print rules to stdout.
pub fn print_rules<'a>(
    rules: impl IntoIterator<Item = (RuleName, &'a RuleSpec)>,
    format: Option<OutputFormat>,
) {
    let rules: Vec<_> = rules.into_iter().collect();
    match format {
        Some(OutputFormat::Json) => {
            let json: Vec<_> = rules.iter().map(|(rule, spec)| rule_json(*rule, spec)).collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        _ => {
            for (rule, spec) in rules {
                println!("{}", format_rule(rule, spec));
            }
        }
    }
}

/// Format one rule as a styled table row.
pub fn format_rule(rule: RuleName, spec: &RuleSpec) -> String {
    let severity_style = match spec.severity {
        Severity::Error => Style::new().red().bold(),
        Severity::Warning => Style::new().yellow().bold(),
        Severity::Disabled => Style::new().dim(),
    };

    let parameter = spec
        .parameter
        .as_ref()
        .map(|p| p.to_string())
        .unwrap_or_default();

    format!(
        "{} {} {} {}\n  {} {}",
        style(format!("{:<22}", rule.as_str())).cyan(),
        severity_style.apply_to(format!("{:<5}", spec.severity.label())),
        format!("{:<6}", spec.applicability),
        parameter,
        style("→").dim(),
        style(rule.description()).dim()
    )
}

fn rule_json(rule: RuleName, spec: &RuleSpec) -> serde_json::Value {
    serde_json::json!({
        "rule": rule.as_str(),
        "target": rule.target().as_str(),
        "description": rule.description(),
        "severity": spec.severity.level(),
        "applicability": spec.applicability.as_str(),
        "parameter": spec.parameter,
    })
}

/// One-line summary of a policy.
pub fn summary(policy: &PolicyConfiguration) -> String {
    let count = |severity: Severity| policy.iter().filter(|(_, s)| s.severity == severity).count();
    format!(
        "{} rules ({} error, {} warning, {} off)",
        policy.len(),
        count(Severity::Error),
        count(Severity::Warning),
        count(Severity::Disabled)
    )
}
