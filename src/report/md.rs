use super::narrative;
use crate::types::report::RiskReport;

pub fn to_markdown(report: &RiskReport) -> String {
    let analysis = &report.analysis;
    let mut output = String::new();
    output.push_str("# Color Risk Pre-Verification Report\n\n");
    output.push_str(&format!(
        "REF: {}  \nDATE: {}\n\n",
        report.reference, report.issued_on
    ));

    output.push_str("## 01. Project Overview\n\n");
    output.push_str(&format!(
        "- Project: {}\n- Targets: {}\n",
        report.project.display_title(),
        report.project.targets
    ));
    if let Some(client) = &report.project.client {
        output.push_str(&format!("- Client: {client}\n"));
    }
    if let Some(location) = &report.project.location {
        output.push_str(&format!("- Location: {location}\n"));
    }
    output.push_str(&format!("\n{}\n\n", narrative::PURPOSE));

    output.push_str("## 02. Overall Risk Diagnosis\n\n");
    output.push_str(&format!(
        "Grade **{}** ({})\n\n{}\n\n",
        analysis.grade, report.profile.status, report.profile.description
    ));
    output.push_str(&format!(
        "- Final score: {:.1} (base {:.1}, adjust +{})\n- Lighting perception: {:.1}\n- Material properties: {:.1}\n- Spatial variables: {:.1}\n\n",
        analysis.final_score,
        analysis.base,
        analysis.adjust,
        analysis.layers.lighting,
        analysis.layers.material,
        analysis.layers.spatial
    ));

    output.push_str("### Selections\n\n");
    output.push_str("| Attribute | Selection | Layer |\n|---|---|---|\n");
    for line in &report.selections {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            line.attribute,
            line.label,
            line.layer.map(|layer| layer.as_str()).unwrap_or("bonus only")
        ));
    }
    output.push('\n');

    output.push_str("## 03. Detected Risks\n\n");
    if analysis.fired.is_empty() {
        output.push_str(&format!("- {}\n\n", narrative::NO_COMPOUND_RISK));
    } else {
        for rule in &analysis.fired {
            output.push_str(&format!(
                "- **{}** {} (+{}): {}\n",
                rule.id,
                rule.title,
                rule.points,
                narrative::fired_rule_explanation(rule)
            ));
        }
        output.push('\n');
    }

    output.push_str("## 04. Recommendations\n\n");
    for recommendation in &report.recommendations {
        output.push_str(&format!("- {recommendation}\n"));
    }
    output.push_str(&format!("\n> {}\n", report.client_message));

    output
}
