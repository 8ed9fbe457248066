use crate::types::config::{Layer, ScoringConfig};
use crate::types::scoring::{LayerScores, Score};
use crate::types::selection::InputSelection;
use tracing::debug;

/// Configured score for `value` of `attribute`, or 0 when either is
/// missing from the score table.
pub fn lookup_score(config: &ScoringConfig, attribute: &str, value: Option<&str>) -> Score {
    match value.and_then(|value| config.scores.get(attribute, value)) {
        Some(score) => score,
        None => {
            debug!(attribute, ?value, "score lookup miss, contributing 0");
            0.0
        }
    }
}

pub fn layer_score(config: &ScoringConfig, inputs: &InputSelection, layer: Layer) -> Score {
    config
        .weights
        .attributes(layer)
        .iter()
        .map(|(attribute, weight)| weight * lookup_score(config, attribute, inputs.get(attribute)))
        .sum()
}

pub fn layer_scores(config: &ScoringConfig, inputs: &InputSelection) -> LayerScores {
    LayerScores {
        lighting: layer_score(config, inputs, Layer::Lighting),
        material: layer_score(config, inputs, Layer::Material),
        spatial: layer_score(config, inputs, Layer::Spatial),
    }
}

pub fn base_score(config: &ScoringConfig, layers: &LayerScores) -> Score {
    let weights = &config.weights;
    layers.lighting * weights.layer_weight(Layer::Lighting)
        + layers.material * weights.layer_weight(Layer::Material)
        + layers.spatial * weights.layer_weight(Layer::Spatial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_config;

    fn approx(left: Score, right: Score) -> bool {
        (left - right).abs() < 1e-9
    }

    #[test]
    fn lookup_defaults_to_zero_for_unknown_value_or_attribute() {
        let cfg = builtin_config().expect("builtin config should load");
        assert_eq!(lookup_score(&cfg, "CCT", Some("Cool")), 65.0);
        assert_eq!(lookup_score(&cfg, "CCT", Some("Ultraviolet")), 0.0);
        assert_eq!(lookup_score(&cfg, "Ceiling_Height", Some("High")), 0.0);
        assert_eq!(lookup_score(&cfg, "CCT", None), 0.0);
    }

    #[test]
    fn layer_score_weights_each_attribute() {
        let cfg = builtin_config().expect("builtin config should load");
        let inputs: InputSelection = [
            ("Light_Type", "Mixed"),
            ("CCT", "Cool"),
            ("CRI", "Mid"),
            ("Lux", "High"),
        ]
        .into_iter()
        .collect();
        // 75*0.25 + 65*0.30 + 55*0.25 + 70*0.20
        assert!(approx(
            layer_score(&cfg, &inputs, Layer::Lighting),
            18.75 + 19.5 + 13.75 + 14.0
        ));
    }

    #[test]
    fn empty_selection_scores_zero_everywhere() {
        let cfg = builtin_config().expect("builtin config should load");
        let layers = layer_scores(&cfg, &InputSelection::default());
        assert_eq!(layers.lighting, 0.0);
        assert_eq!(layers.material, 0.0);
        assert_eq!(layers.spatial, 0.0);
        assert_eq!(base_score(&cfg, &layers), 0.0);
    }

    #[test]
    fn base_combines_layers_by_layer_weight() {
        let cfg = builtin_config().expect("builtin config should load");
        let layers = LayerScores {
            lighting: 50.0,
            material: 60.0,
            spatial: 80.0,
        };
        assert!(approx(base_score(&cfg, &layers), 20.0 + 21.0 + 20.0));
    }
}
