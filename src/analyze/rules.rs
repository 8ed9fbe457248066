use crate::types::config::ScoringConfig;
use crate::types::rule::{Predicate, MAX_PREDICATE_DEPTH};
use crate::types::scoring::{FiredRule, PredicateFault, RuleFault};
use crate::types::selection::InputSelection;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub fired: Vec<FiredRule>,
    pub adjust: u32,
    pub faults: Vec<RuleFault>,
}

/// Evaluates every configured rule in config order. A rule whose
/// predicate faults is recorded and skipped; the rest still fire.
pub fn fire_rules(config: &ScoringConfig, inputs: &InputSelection) -> RuleOutcome {
    let mut outcome = RuleOutcome::default();
    for rule in &config.rules {
        match evaluate_predicate(&rule.when, config, inputs) {
            Ok(true) => {
                debug!(rule = %rule.id, points = rule.points, "rule fired");
                outcome.adjust = outcome.adjust.saturating_add(rule.points);
                outcome.fired.push(FiredRule {
                    id: rule.id.clone(),
                    title: rule.title.clone(),
                    points: rule.points,
                });
            }
            Ok(false) => {}
            Err(fault) => {
                warn!(rule = %rule.id, %fault, "rule predicate fault, treating as not fired");
                outcome.faults.push(RuleFault {
                    rule_id: rule.id.clone(),
                    fault,
                });
            }
        }
    }
    outcome
}

/// Faults depend only on the predicate's shape and the catalog, so every
/// branch is visited even when an earlier one already decides the result.
pub fn evaluate_predicate(
    predicate: &Predicate,
    config: &ScoringConfig,
    inputs: &InputSelection,
) -> Result<bool, PredicateFault> {
    eval(predicate, config, inputs, 0)
}

fn eval(
    predicate: &Predicate,
    config: &ScoringConfig,
    inputs: &InputSelection,
    depth: usize,
) -> Result<bool, PredicateFault> {
    if depth > MAX_PREDICATE_DEPTH {
        return Err(PredicateFault::TooDeep(MAX_PREDICATE_DEPTH));
    }

    match predicate {
        Predicate::Eq { field, value } => {
            known_field(config, field)?;
            Ok(inputs.get(field) == Some(value.as_str()))
        }
        Predicate::In { field, values } => {
            known_field(config, field)?;
            if values.is_empty() {
                return Err(PredicateFault::EmptyGroup("in"));
            }
            Ok(inputs
                .get(field)
                .is_some_and(|selected| values.iter().any(|candidate| candidate == selected)))
        }
        Predicate::All(children) => {
            Ok(eval_children(children, "all", config, inputs, depth)?
                .into_iter()
                .all(|matched| matched))
        }
        Predicate::Any(children) => {
            Ok(eval_children(children, "any", config, inputs, depth)?
                .into_iter()
                .any(|matched| matched))
        }
        Predicate::Not(inner) => eval(inner, config, inputs, depth + 1).map(|matched| !matched),
    }
}

fn eval_children(
    children: &[Predicate],
    group: &'static str,
    config: &ScoringConfig,
    inputs: &InputSelection,
    depth: usize,
) -> Result<Vec<bool>, PredicateFault> {
    if children.is_empty() {
        return Err(PredicateFault::EmptyGroup(group));
    }
    children
        .iter()
        .map(|child| eval(child, config, inputs, depth + 1))
        .collect()
}

fn known_field(config: &ScoringConfig, field: &str) -> Result<(), PredicateFault> {
    if config.attribute(field).is_some() {
        Ok(())
    } else {
        Err(PredicateFault::UnknownField(field.to_string()))
    }
}
