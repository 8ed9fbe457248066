pub mod grade;
pub mod layers;
pub mod rules;

use crate::types::config::ScoringConfig;
use crate::types::scoring::{Analysis, Score};
use crate::types::selection::InputSelection;
use tracing::debug;

pub const MAX_SCORE: Score = 100.0;

/// Scores `inputs` against `config` in a single pass.
///
/// Total over any selection: unknown attributes or values contribute 0 and
/// faulting rule predicates count as not fired (see `Analysis::diagnostics`).
pub fn evaluate(inputs: &InputSelection, config: &ScoringConfig) -> Analysis {
    let layers = layers::layer_scores(config, inputs);
    let base = layers::base_score(config, &layers);
    let outcome = rules::fire_rules(config, inputs);
    let final_score = (base + Score::from(outcome.adjust)).min(MAX_SCORE);
    let grade = grade::classify(final_score, &config.grading);

    debug!(
        lighting = layers.lighting,
        material = layers.material,
        spatial = layers.spatial,
        base,
        adjust = outcome.adjust,
        final_score,
        %grade,
        "evaluation complete"
    );

    Analysis {
        layers,
        base,
        adjust: outcome.adjust,
        final_score,
        grade,
        fired: outcome.fired,
        diagnostics: outcome.faults,
    }
}
