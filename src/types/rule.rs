use crate::types::scoring::PredicateFault;
use serde::{Deserialize, Serialize};

/// Deepest nesting of `all`/`any`/`not` accepted, counting the root as 0.
pub const MAX_PREDICATE_DEPTH: usize = 16;

/// A bonus rule: when `when` matches the current selection, `points` are
/// added on top of the weighted base score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: String,
    pub title: String,
    pub points: u32,
    pub when: Predicate,
}

/// Boolean condition over the input selection.
///
/// Serialized externally tagged, so in TOML a rule reads
/// `when = { eq = { field = "CRI", value = "Low" } }` or
/// `when = { all = [ { eq = { ... } }, { in = { ... } } ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Eq { field: String, value: String },
    In { field: String, values: Vec<String> },
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    /// Every `(field, value)` pair the predicate compares against, in
    /// declaration order.
    pub fn comparisons(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_comparisons(&mut out);
        out
    }

    /// Rejects predicates that fault for every input: empty `all`, `any`
    /// or `in`, and nesting beyond `MAX_PREDICATE_DEPTH`.
    pub fn check_shape(&self) -> Result<(), PredicateFault> {
        self.check_shape_at(0)
    }

    fn check_shape_at(&self, depth: usize) -> Result<(), PredicateFault> {
        if depth > MAX_PREDICATE_DEPTH {
            return Err(PredicateFault::TooDeep(MAX_PREDICATE_DEPTH));
        }
        match self {
            Predicate::Eq { .. } => Ok(()),
            Predicate::In { values, .. } if values.is_empty() => {
                Err(PredicateFault::EmptyGroup("in"))
            }
            Predicate::In { .. } => Ok(()),
            Predicate::All(children) | Predicate::Any(children) => {
                if children.is_empty() {
                    let group = if matches!(self, Predicate::All(_)) { "all" } else { "any" };
                    return Err(PredicateFault::EmptyGroup(group));
                }
                children
                    .iter()
                    .try_for_each(|child| child.check_shape_at(depth + 1))
            }
            Predicate::Not(inner) => inner.check_shape_at(depth + 1),
        }
    }

    fn collect_comparisons<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            Predicate::Eq { field, value } => out.push((field.as_str(), value.as_str())),
            Predicate::In { field, values } => {
                out.extend(values.iter().map(|value| (field.as_str(), value.as_str())));
            }
            Predicate::All(children) | Predicate::Any(children) => {
                for child in children {
                    child.collect_comparisons(out);
                }
            }
            Predicate::Not(inner) => inner.collect_comparisons(out),
        }
    }
}

#[cfg(test)]
impl Predicate {
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Predicate::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn one_of<I, S>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}
