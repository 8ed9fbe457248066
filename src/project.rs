use crate::error::{Result, RiskLabError};
use crate::types::config::ScoringConfig;
use crate::types::report::ProjectInfo;
use crate::types::selection::InputSelection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

pub const DEFAULT_PROJECT_FILE: &str = "risk-lab.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub inputs: InputSelection,
}

pub fn load_project(path: &Path) -> Result<ProjectFile> {
    if !path.exists() {
        return Err(RiskLabError::PathNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let file: ProjectFile = toml::from_str(&content)
        .map_err(|e| RiskLabError::ProjectParse(format!("{}: {}", path.display(), e)))?;
    if file.inputs.is_empty() {
        warn!(path = %path.display(), "project file has no [inputs]; using catalog defaults");
    } else {
        debug!(path = %path.display(), selections = file.inputs.len(), "project file loaded");
    }
    Ok(file)
}

/// Splits a `ATTRIBUTE=VALUE` command-line assignment.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (attribute, value) = raw
        .split_once('=')
        .ok_or_else(|| RiskLabError::MalformedAssignment(raw.to_string()))?;
    let (attribute, value) = (attribute.trim(), value.trim());
    if attribute.is_empty() || value.is_empty() {
        return Err(RiskLabError::MalformedAssignment(raw.to_string()));
    }
    Ok((attribute.to_string(), value.to_string()))
}

/// Project file pre-filled with catalog defaults, listing every allowed
/// option as a comment.
pub fn render_template(config: &ScoringConfig) -> String {
    let defaults = ProjectInfo::default();
    let mut output = String::new();
    output.push_str("[project]\n");
    output.push_str("title = \"\"\n");
    output.push_str(&format!("targets = {}\n", toml_string(&defaults.targets)));
    output.push_str("# client = \"\"\n");
    output.push_str("# location = \"\"\n\n");
    output.push_str("[inputs]\n");
    for attribute in &config.catalog {
        let Some(default) = attribute.default_value() else {
            continue;
        };
        let options = attribute
            .options
            .iter()
            .map(|option| format!("{} ({})", option.value, option.display_label()))
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("# {options}\n"));
        output.push_str(&format!("{} = {}\n", attribute.name, toml_string(default)));
    }
    output
}

fn toml_string(raw: &str) -> String {
    toml::Value::String(raw.to_string()).to_string()
}

pub fn write_template(path: &Path, config: &ScoringConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(RiskLabError::OutputExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render_template(config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_config;
    use tempfile::TempDir;

    #[test]
    fn parse_assignment_accepts_trimmed_pairs() {
        assert_eq!(
            parse_assignment(" CRI = Low ").expect("assignment should parse"),
            ("CRI".to_string(), "Low".to_string())
        );
        assert_eq!(
            parse_assignment("Combination_Count=5+").expect("assignment should parse"),
            ("Combination_Count".to_string(), "5+".to_string())
        );
    }

    #[test]
    fn parse_assignment_rejects_missing_parts() {
        for raw in ["CRI", "=Low", "CRI="] {
            assert!(matches!(
                parse_assignment(raw),
                Err(RiskLabError::MalformedAssignment(_))
            ));
        }
    }

    #[test]
    fn template_round_trips_into_default_selection() {
        let cfg = builtin_config().expect("builtin config should load");
        let parsed: ProjectFile =
            toml::from_str(&render_template(&cfg)).expect("template should parse");
        assert_eq!(parsed.project, ProjectInfo::default());
        assert_eq!(parsed.inputs.len(), cfg.catalog.len());
        assert_eq!(parsed.inputs.get("Combination_Count"), Some("1-2"));
    }

    #[test]
    fn write_template_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join(DEFAULT_PROJECT_FILE);
        let cfg = builtin_config().expect("builtin config should load");

        write_template(&path, &cfg, false).expect("first write should succeed");
        let err = write_template(&path, &cfg, false).expect_err("second write should fail");
        assert!(matches!(err, RiskLabError::OutputExists(_)));
        write_template(&path, &cfg, true).expect("forced write should succeed");
    }

    #[test]
    fn load_project_defaults_missing_sections() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("empty.toml");
        fs::write(&path, "").expect("empty project should write");
        let file = load_project(&path).expect("empty project should load");
        assert!(file.inputs.is_empty());
        assert_eq!(file.project.display_title(), "Untitled");
    }

    #[test]
    fn load_project_reports_parse_errors() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[inputs]\nCRI = ").expect("broken project should write");
        let err = load_project(&path).expect_err("broken project should fail");
        assert!(matches!(err, RiskLabError::ProjectParse(_)));
    }
}
