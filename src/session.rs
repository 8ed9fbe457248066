use crate::analyze;
use crate::error::{Result, RiskLabError};
use crate::project::ProjectFile;
use crate::types::config::ScoringConfig;
use crate::types::report::{ProjectInfo, SelectionLine};
use crate::types::scoring::Analysis;
use crate::types::selection::InputSelection;
use tracing::debug;

/// Editing state for one project: the free-text details, the current
/// selection and the analysis derived from it.
///
/// Every mutation goes through `select`/`apply`, which validate first and
/// then recompute the whole analysis before returning, so `analysis()`
/// always matches `inputs()`.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    config: &'a ScoringConfig,
    project: ProjectInfo,
    inputs: InputSelection,
    analysis: Analysis,
}

impl<'a> Session<'a> {
    /// Starts from the first option of every catalog attribute.
    pub fn new(config: &'a ScoringConfig, project: ProjectInfo) -> Self {
        let inputs: InputSelection = config
            .catalog
            .iter()
            .filter_map(|attribute| {
                attribute
                    .default_value()
                    .map(|value| (attribute.name.as_str(), value))
            })
            .collect();
        let analysis = analyze::evaluate(&inputs, config);
        Self {
            config,
            project,
            inputs,
            analysis,
        }
    }

    pub fn from_project(config: &'a ScoringConfig, file: ProjectFile) -> Result<Self> {
        let ProjectFile { project, inputs } = file;
        let mut session = Self::new(config, project);
        session.apply(
            inputs
                .iter()
                .map(|(attribute, value)| (attribute.to_string(), value.to_string())),
        )?;
        Ok(session)
    }

    pub fn select(&mut self, attribute: &str, value: &str) -> Result<&Analysis> {
        self.apply([(attribute.to_string(), value.to_string())])
    }

    /// Applies all assignments or none of them.
    pub fn apply<I>(&mut self, assignments: I) -> Result<&Analysis>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let assignments: Vec<_> = assignments.into_iter().collect();
        for (attribute, value) in &assignments {
            check_selection(self.config, attribute, value)?;
        }
        for (attribute, value) in assignments {
            debug!(%attribute, %value, "selection changed");
            self.inputs.set(attribute, value);
        }
        self.analysis = analyze::evaluate(&self.inputs, self.config);
        Ok(&self.analysis)
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn inputs(&self) -> &InputSelection {
        &self.inputs
    }

    pub fn project(&self) -> &ProjectInfo {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut ProjectInfo {
        &mut self.project
    }

    /// Current selection in catalog order, with display labels.
    pub fn selection_lines(&self) -> Vec<SelectionLine> {
        self.config
            .catalog
            .iter()
            .filter_map(|attribute| {
                let value = self.inputs.get(&attribute.name)?;
                let label = attribute
                    .option(value)
                    .map(|option| option.display_label().to_string())
                    .unwrap_or_else(|| value.to_string());
                Some(SelectionLine {
                    attribute: attribute.name.clone(),
                    value: value.to_string(),
                    label,
                    layer: self
                        .config
                        .weights
                        .layer_of(&attribute.name)
                        .map(|(layer, _)| layer),
                })
            })
            .collect()
    }
}

fn check_selection(config: &ScoringConfig, attribute: &str, value: &str) -> Result<()> {
    let spec = config
        .attribute(attribute)
        .ok_or_else(|| RiskLabError::UnknownAttribute(attribute.to_string()))?;
    if spec.allows(value) {
        Ok(())
    } else {
        Err(RiskLabError::InvalidSelection {
            attribute: attribute.to_string(),
            value: value.to_string(),
            allowed: spec.allowed_values().join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_config;
    use crate::types::config::Layer;
    use crate::types::scoring::Grade;

    #[test]
    fn new_session_uses_first_option_of_each_attribute() {
        let cfg = builtin_config().expect("builtin config should load");
        let session = Session::new(&cfg, ProjectInfo::default());
        assert_eq!(session.inputs().len(), cfg.catalog.len());
        assert_eq!(session.inputs().get("Light_Type"), Some("Single"));
        assert_eq!(session.inputs().get("Combination_Count"), Some("1-2"));
        assert_eq!(session.analysis().adjust, 0);
    }

    #[test]
    fn select_recomputes_analysis_before_returning() {
        let cfg = builtin_config().expect("builtin config should load");
        let mut session = Session::new(&cfg, ProjectInfo::default());
        let before = session.analysis().clone();

        let after = session
            .select("CRI", "Low")
            .expect("catalog value should be accepted")
            .clone();
        assert_eq!(after.adjust, before.adjust + 8);
        assert!(after.final_score > before.final_score);
        assert_eq!(session.analysis(), &after);
        assert_eq!(
            &analyze::evaluate(session.inputs(), &cfg),
            session.analysis()
        );
    }

    #[test]
    fn select_rejects_values_outside_catalog() {
        let cfg = builtin_config().expect("builtin config should load");
        let mut session = Session::new(&cfg, ProjectInfo::default());
        let err = session
            .select("CCT", "Ultraviolet")
            .expect_err("value outside catalog should fail");
        assert!(err.to_string().contains("allowed: Warm, Neutral, Cool"));
        assert_eq!(session.inputs().get("CCT"), Some("Warm"));
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let cfg = builtin_config().expect("builtin config should load");
        let mut session = Session::new(&cfg, ProjectInfo::default());
        let result = session.apply([
            ("CRI".to_string(), "Low".to_string()),
            ("Ceiling".to_string(), "High".to_string()),
        ]);
        assert!(matches!(result, Err(RiskLabError::UnknownAttribute(_))));
        assert_eq!(session.inputs().get("CRI"), Some("High"));
        assert!(session.analysis().fired.is_empty());
    }

    #[test]
    fn from_project_overlays_file_inputs_on_defaults() {
        let cfg = builtin_config().expect("builtin config should load");
        let file: ProjectFile = toml::from_str(
            r#"
[project]
title = "Gallery refit"

[inputs]
Light_Type = "Mixed"
Combination_Count = "5+"
Area_Size = "Large"
"#,
        )
        .expect("project file should parse");

        let session = Session::from_project(&cfg, file).expect("session should build");
        assert_eq!(session.project().title, "Gallery refit");
        assert_eq!(session.inputs().get("CCT"), Some("Warm"));
        let ids: Vec<_> = session
            .analysis()
            .fired
            .iter()
            .map(|rule| rule.id.as_str())
            .collect();
        assert_eq!(ids, vec!["R1", "R4"]);
        assert_eq!(session.analysis().grade, Grade::C);
    }

    #[test]
    fn selection_lines_follow_catalog_order_with_labels() {
        let cfg = builtin_config().expect("builtin config should load");
        let session = Session::new(&cfg, ProjectInfo::default());
        let lines = session.selection_lines();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].attribute, "Light_Type");
        assert_eq!(lines[0].label, "Single light source");
        assert_eq!(lines[0].layer, Some(Layer::Lighting));
        let area = lines
            .iter()
            .find(|line| line.attribute == "Area_Size")
            .expect("area line should exist");
        assert_eq!(area.layer, None);
    }
}
