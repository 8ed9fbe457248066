use super::narrative;
use crate::types::scoring::Analysis;

/// Compact live summary printed by `evaluate`.
pub fn to_text(analysis: &Analysis) -> String {
    let profile = narrative::grade_profile(analysis.grade);
    let mut output = format!(
        "grade: {} ({})\nscore: {:.1} (base {:.1}, adjust +{})\nlayers: lighting {:.1}, material {:.1}, spatial {:.1}\n",
        analysis.grade,
        profile.status,
        analysis.final_score,
        analysis.base,
        analysis.adjust,
        analysis.layers.lighting,
        analysis.layers.material,
        analysis.layers.spatial
    );

    if analysis.fired.is_empty() {
        output.push_str("fired rules: none\n");
    } else {
        output.push_str("fired rules:\n");
        for rule in &analysis.fired {
            output.push_str(&format!("- {} +{}: {}\n", rule.id, rule.points, rule.title));
        }
    }

    for fault in &analysis.diagnostics {
        output.push_str(&format!("skipped rule {}: {}\n", fault.rule_id, fault.fault));
    }
    output
}

pub fn to_json(analysis: &Analysis) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    #[test]
    fn text_summary_lists_grade_and_rules() {
        let cfg = fixtures::config();
        let report = fixtures::risky_report(&cfg);
        let rendered = to_text(&report.analysis);
        assert!(rendered.starts_with("grade: C (At risk)\n"));
        assert!(rendered.contains("adjust +24"));
        assert!(rendered.contains("- R1 +12: Mixed light sources"));
    }

    #[test]
    fn text_summary_reports_no_rules() {
        let cfg = fixtures::config();
        let report = fixtures::calm_report(&cfg);
        assert!(to_text(&report.analysis).contains("fired rules: none"));
    }
}
