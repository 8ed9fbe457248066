use crate::types::config::Layer;
use crate::types::scoring::{Analysis, Grade};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TARGETS: &str = "Walls (White), Floor (Oak), Furniture (Neutral)";
pub const UNTITLED: &str = "Untitled";

/// Free-text project details. Carried into the report, never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_targets")]
    pub targets: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

fn default_targets() -> String {
    DEFAULT_TARGETS.to_string()
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            targets: default_targets(),
            client: None,
            location: None,
        }
    }
}

impl ProjectInfo {
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            UNTITLED
        } else {
            title
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeProfile {
    pub grade: Grade,
    pub status: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionLine {
    pub attribute: String,
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<Layer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub reference: String,
    pub issued_on: NaiveDate,
    pub project: ProjectInfo,
    pub selections: Vec<SelectionLine>,
    pub analysis: Analysis,
    pub profile: GradeProfile,
    pub recommendations: Vec<String>,
    pub client_message: String,
}
