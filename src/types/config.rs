use crate::error::RiskLabError;
use crate::types::rule::Rule;
use crate::types::scoring::Score;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Layer {
    Lighting,
    Material,
    Spatial,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Lighting, Layer::Material, Layer::Spatial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Lighting => "Lighting",
            Layer::Material => "Material",
            Layer::Spatial => "Spatial",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    pub catalog: Vec<AttributeSpec>,
    pub weights: WeightTable,
    pub scores: ScoreTable,
    #[serde(default)]
    pub rules: Vec<Rule>,
    pub grading: GradeThresholds,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttributeSpec {
    pub name: String,
    pub options: Vec<OptionSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionSpec {
    pub value: String,
    pub label: Option<String>,
}

impl OptionSpec {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

impl AttributeSpec {
    pub fn option(&self, value: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn allows(&self, value: &str) -> bool {
        self.option(value).is_some()
    }

    /// First listed option; new sessions start from it.
    pub fn default_value(&self) -> Option<&str> {
        self.options.first().map(|option| option.value.as_str())
    }

    pub fn allowed_values(&self) -> Vec<&str> {
        self.options
            .iter()
            .map(|option| option.value.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LayerWeights {
    #[serde(rename = "Lighting")]
    pub lighting: f64,
    #[serde(rename = "Material")]
    pub material: f64,
    #[serde(rename = "Spatial")]
    pub spatial: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeightTable {
    pub layer: LayerWeights,
    #[serde(rename = "Lighting", default)]
    pub lighting: BTreeMap<String, f64>,
    #[serde(rename = "Material", default)]
    pub material: BTreeMap<String, f64>,
    #[serde(rename = "Spatial", default)]
    pub spatial: BTreeMap<String, f64>,
}

impl WeightTable {
    pub fn layer_weight(&self, layer: Layer) -> f64 {
        match layer {
            Layer::Lighting => self.layer.lighting,
            Layer::Material => self.layer.material,
            Layer::Spatial => self.layer.spatial,
        }
    }

    pub fn attributes(&self, layer: Layer) -> &BTreeMap<String, f64> {
        match layer {
            Layer::Lighting => &self.lighting,
            Layer::Material => &self.material,
            Layer::Spatial => &self.spatial,
        }
    }

    /// Layer an attribute is weighted into. `None` for bonus-only attributes.
    pub fn layer_of(&self, attribute: &str) -> Option<(Layer, f64)> {
        Layer::ALL.into_iter().find_map(|layer| {
            self.attributes(layer)
                .get(attribute)
                .map(|weight| (layer, *weight))
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScoreTable(pub BTreeMap<String, BTreeMap<String, Score>>);

impl ScoreTable {
    pub fn get(&self, attribute: &str, value: &str) -> Option<Score> {
        self.0
            .get(attribute)
            .and_then(|values| values.get(value))
            .copied()
    }
}

/// Inclusive upper bounds: `final <= A_max` is A, `final <= B_max` is B,
/// anything above is C.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GradeThresholds {
    #[serde(rename = "A_max")]
    pub a_max: Score,
    #[serde(rename = "B_max")]
    pub b_max: Score,
}

impl ScoringConfig {
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.catalog.iter().find(|attribute| attribute.name == name)
    }

    pub fn validate(&self) -> Result<(), RiskLabError> {
        self.validate_catalog()?;
        self.validate_weights()?;
        self.validate_scores()?;
        self.validate_grading()?;
        self.validate_rules()
    }

    fn validate_catalog(&self) -> Result<(), RiskLabError> {
        if self.catalog.is_empty() {
            return Err(RiskLabError::ConfigInvalid(
                "catalog must declare at least one attribute".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for attribute in &self.catalog {
            let name = attribute.name.trim();
            if name.is_empty() {
                return Err(RiskLabError::ConfigInvalid(
                    "catalog entries must have a non-empty name".to_string(),
                ));
            }
            if !names.insert(name) {
                return Err(RiskLabError::ConfigInvalid(format!(
                    "catalog contains duplicate attribute: {name}"
                )));
            }
            if attribute.options.is_empty() {
                return Err(RiskLabError::ConfigInvalid(format!(
                    "catalog.{name} must list at least one option"
                )));
            }
            let mut values = HashSet::new();
            for option in &attribute.options {
                if !values.insert(option.value.as_str()) {
                    return Err(RiskLabError::ConfigInvalid(format!(
                        "catalog.{name} contains duplicate option: {}",
                        option.value
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_weights(&self) -> Result<(), RiskLabError> {
        let layer_weights = Layer::ALL.map(|layer| self.weights.layer_weight(layer));
        if layer_weights
            .iter()
            .any(|weight| !(0.0..=1.0).contains(weight))
        {
            return Err(RiskLabError::ConfigInvalid(
                "weights.layer values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let layer_sum: f64 = layer_weights.iter().sum();
        if (layer_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RiskLabError::ConfigInvalid(format!(
                "weights.layer must sum to 1.0 (found {layer_sum:.3})"
            )));
        }

        let mut seen = HashSet::new();
        for layer in Layer::ALL {
            let attributes = self.weights.attributes(layer);
            let key = layer.as_str();
            if attributes.is_empty() {
                return Err(RiskLabError::ConfigInvalid(format!(
                    "weights.{key} must weight at least one attribute"
                )));
            }
            for (attribute, weight) in attributes {
                if !(0.0..=1.0).contains(weight) {
                    return Err(RiskLabError::ConfigInvalid(format!(
                        "weights.{key}.{attribute} must be between 0.0 and 1.0"
                    )));
                }
                if self.attribute(attribute).is_none() {
                    return Err(RiskLabError::ConfigInvalid(format!(
                        "weights.{key}.{attribute} is not a catalog attribute"
                    )));
                }
                if !seen.insert(attribute.as_str()) {
                    return Err(RiskLabError::ConfigInvalid(format!(
                        "attribute {attribute} is weighted in more than one layer"
                    )));
                }
            }
            let sum: f64 = attributes.values().sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(RiskLabError::ConfigInvalid(format!(
                    "weights.{key} must sum to 1.0 (found {sum:.3})"
                )));
            }
        }
        Ok(())
    }

    fn validate_scores(&self) -> Result<(), RiskLabError> {
        for attribute in &self.catalog {
            for option in &attribute.options {
                match self.scores.get(&attribute.name, &option.value) {
                    Some(score) if (0.0..=100.0).contains(&score) => {}
                    Some(score) => {
                        return Err(RiskLabError::ConfigInvalid(format!(
                            "scores.{}.{} must be between 0 and 100 (found {score})",
                            attribute.name, option.value
                        )));
                    }
                    None => {
                        return Err(RiskLabError::ConfigInvalid(format!(
                            "scores.{} is missing a score for option {}",
                            attribute.name, option.value
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn validate_grading(&self) -> Result<(), RiskLabError> {
        let GradeThresholds { a_max, b_max } = self.grading;
        if !a_max.is_finite() || !b_max.is_finite() {
            return Err(RiskLabError::ConfigInvalid(
                "grading thresholds must be finite numbers".to_string(),
            ));
        }
        if a_max >= b_max {
            return Err(RiskLabError::ConfigInvalid(format!(
                "grading.A_max ({a_max}) must be lower than grading.B_max ({b_max})"
            )));
        }
        Ok(())
    }

    fn validate_rules(&self) -> Result<(), RiskLabError> {
        let mut ids = HashSet::new();
        for rule in &self.rules {
            let id = rule.id.trim();
            if id.is_empty() {
                return Err(RiskLabError::ConfigInvalid(
                    "rules entries must have a non-empty id".to_string(),
                ));
            }
            if !ids.insert(id) {
                return Err(RiskLabError::ConfigInvalid(format!(
                    "rules contains duplicate id: {id}"
                )));
            }
            if let Err(fault) = rule.when.check_shape() {
                return Err(RiskLabError::ConfigInvalid(format!("rule {id}: {fault}")));
            }
            for (field, value) in rule.when.comparisons() {
                let Some(attribute) = self.attribute(field) else {
                    return Err(RiskLabError::ConfigInvalid(format!(
                        "rule {id} references unknown attribute: {field}"
                    )));
                };
                if !attribute.allows(value) {
                    return Err(RiskLabError::ConfigInvalid(format!(
                        "rule {id} compares {field} against unknown option: {value}"
                    )));
                }
            }
        }
        Ok(())
    }
}
