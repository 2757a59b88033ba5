// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Policy rendering and writing.

use std::fs;
use std::path::Path;

use crate::error::{ExportError, PolicyError, Result};
use crate::policy::PolicyConfiguration;

use super::format::ExportFormat;

/// Render a policy in the given format.
///
/// Output is deterministic: rules appear in a fixed order and list
/// parameters keep their declared order.
pub fn render(policy: &PolicyConfiguration, format: ExportFormat) -> Result<String> {
    let failed = |message: String| {
        PolicyError::Export(ExportError::SerializeFailed {
            format: format.to_string(),
            message,
        })
    };

    match format {
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(policy).map_err(|e| failed(e.to_string()))?;
            Ok(format!("{}\n", json))
        }
        ExportFormat::Js => {
            let json = serde_json::to_string_pretty(policy).map_err(|e| failed(e.to_string()))?;
            Ok(format!("module.exports = {};\n", json))
        }
        ExportFormat::Toml => toml::to_string(policy).map_err(|e| failed(e.to_string())),
    }
}

/// Write rendered output to `path`.
///
/// An existing file is only replaced when `force` is set.
pub fn write(path: &Path, contents: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PolicyError::Export(ExportError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    let write_failed = |e: std::io::Error| {
        PolicyError::Export(ExportError::WriteFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failed)?;
    }

    tracing::debug!("Writing {} bytes to {:?}", contents.len(), path);
    fs::write(path, contents).map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::project_policy;

    #[test]
    fn test_json_export_reads_back() {
        let json = render(project_policy(), ExportFormat::Json).unwrap();
        let parsed: PolicyConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, project_policy());
    }

    #[test]
    fn test_js_export_wraps_json() {
        let json = render(project_policy(), ExportFormat::Json).unwrap();
        let js = render(project_policy(), ExportFormat::Js).unwrap();

        let body = js
            .strip_prefix("module.exports = ")
            .and_then(|rest| rest.strip_suffix(";\n"))
            .unwrap();
        assert_eq!(format!("{}\n", body), json);
    }

    #[test]
    fn test_js_export_lists_rules_in_order() {
        let js = render(project_policy(), ExportFormat::Js).unwrap();
        let body_pos = js.find("\"body-leading-blank\"").unwrap();
        let header_pos = js.find("\"header-max-length\"").unwrap();
        let type_enum_pos = js.find("\"type-enum\"").unwrap();
        assert!(body_pos < header_pos && header_pos < type_enum_pos);
        assert!(js.contains("\"sentence-case\""));
    }

    #[test]
    fn test_toml_export_reads_back() {
        let rendered = render(project_policy(), ExportFormat::Toml).unwrap();
        assert!(rendered.contains("[rules]"));
        let parsed: PolicyConfiguration = toml::from_str(&rendered).unwrap();
        assert_eq!(&parsed, project_policy());
    }

    #[test]
    fn test_render_is_deterministic() {
        for format in [ExportFormat::Js, ExportFormat::Json, ExportFormat::Toml] {
            assert_eq!(
                render(project_policy(), format).unwrap(),
                render(&PolicyConfiguration::project(), format).unwrap()
            );
        }
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("commitlint.config.js");

        write(&path, "first", false).unwrap();
        assert!(matches!(
            write(&path, "second", false),
            Err(PolicyError::Export(ExportError::AlreadyExists { .. }))
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");

        write(&path, "second", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }
}
