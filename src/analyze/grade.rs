use crate::types::config::GradeThresholds;
use crate::types::scoring::{Grade, Score};

pub fn classify(final_score: Score, thresholds: &GradeThresholds) -> Grade {
    if final_score <= thresholds.a_max {
        Grade::A
    } else if final_score <= thresholds.b_max {
        Grade::B
    } else {
        Grade::C
    }
}
