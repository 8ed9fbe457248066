use super::narrative;
use crate::types::report::RiskReport;
use crate::types::scoring::Grade;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; color: #0f172a; max-width: 56rem; margin: 2rem auto; padding: 0 1.5rem; }
header { border-bottom: 4px solid #0f172a; padding-bottom: 1.5rem; margin-bottom: 2.5rem; display: flex; justify-content: space-between; align-items: flex-end; }
h2 { border-left: 4px solid #0f172a; padding-left: 0.75rem; text-transform: uppercase; font-size: 1.05rem; }
.meta { font-family: ui-monospace, monospace; color: #94a3b8; text-align: right; font-size: 0.85rem; }
.grade { font-size: 6rem; font-weight: 900; line-height: 1; }
.grade-A { color: #10b981; } .grade-B { color: #f59e0b; } .grade-C { color: #f43f5e; }
.layers { display: grid; grid-template-columns: repeat(3, 1fr); text-align: center; font-family: ui-monospace, monospace; }
.risk { background: #f8fafc; border-left: 4px solid #6366f1; padding: 0.75rem 1rem; margin: 0.5rem 0; }
.clear { background: #ecfdf5; border-left: 4px solid #10b981; padding: 0.75rem 1rem; }
table { border-collapse: collapse; width: 100%; font-size: 0.9rem; }
td, th { border-bottom: 1px solid #e2e8f0; padding: 0.35rem 0.5rem; text-align: left; }
blockquote { font-style: italic; border-left: 2px solid #6366f1; margin-left: 0; padding-left: 1rem; }
footer { margin-top: 4rem; border-top: 1px solid #f1f5f9; padding-top: 1rem; font-size: 0.75rem; color: #94a3b8; text-transform: uppercase; }
@media print { body { margin: 0; max-width: none; } @page { margin: 1cm; } }
"#;

/// Standalone printable document; hand it to a browser's print dialog to
/// produce a PDF.
pub fn to_html(report: &RiskReport) -> String {
    let analysis = &report.analysis;
    let grade_class = match analysis.grade {
        Grade::A => "grade-A",
        Grade::B => "grade-B",
        Grade::C => "grade-C",
    };

    let mut body = String::new();
    body.push_str(&format!(
        "<header><div><p>PRE-COLOR RISK LAB</p><h1>Color Risk Pre-Verification Report</h1></div>\
<div class=\"meta\">REF: {}<br>DATE: {}</div></header>\n",
        escape(&report.reference),
        report.issued_on
    ));

    body.push_str("<section><h2>01. Project Overview</h2><table>\n");
    body.push_str(&row("Project", report.project.display_title()));
    body.push_str(&row("Targets", &report.project.targets));
    if let Some(client) = &report.project.client {
        body.push_str(&row("Client", client));
    }
    if let Some(location) = &report.project.location {
        body.push_str(&row("Location", location));
    }
    body.push_str(&format!(
        "</table><p>{}</p></section>\n",
        escape(narrative::PURPOSE)
    ));

    body.push_str(&format!(
        "<section><h2>02. Overall Risk Diagnosis</h2>\
<div class=\"grade {grade_class}\">{}</div>\
<p><strong>Status: {}</strong></p><p>{}</p>\
<p>Final score {:.1} (base {:.1}, adjust +{})</p>\
<div class=\"layers\"><div>Lighting<br>{:.1}</div><div>Material<br>{:.1}</div><div>Spatial<br>{:.1}</div></div>\n",
        analysis.grade,
        escape(report.profile.status),
        escape(report.profile.description),
        analysis.final_score,
        analysis.base,
        analysis.adjust,
        analysis.layers.lighting,
        analysis.layers.material,
        analysis.layers.spatial
    ));
    body.push_str("<table><tr><th>Attribute</th><th>Selection</th><th>Layer</th></tr>\n");
    for line in &report.selections {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&line.attribute),
            escape(&line.label),
            line.layer.map(|layer| layer.as_str()).unwrap_or("bonus only")
        ));
    }
    body.push_str("</table></section>\n");

    body.push_str("<section><h2>03. Detected Risks</h2>\n");
    if analysis.fired.is_empty() {
        body.push_str(&format!(
            "<div class=\"clear\">{}</div>\n",
            escape(narrative::NO_COMPOUND_RISK)
        ));
    } else {
        for rule in &analysis.fired {
            body.push_str(&format!(
                "<div class=\"risk\"><strong>{} {}</strong><p>{}</p></div>\n",
                escape(&rule.id),
                escape(&rule.title),
                escape(&narrative::fired_rule_explanation(rule))
            ));
        }
    }
    body.push_str("</section>\n");

    body.push_str("<section><h2>04. Recommendations</h2><ul>\n");
    for recommendation in &report.recommendations {
        body.push_str(&format!("<li>{}</li>\n", escape(recommendation)));
    }
    body.push_str(&format!(
        "</ul><blockquote>\"{}\"</blockquote></section>\n",
        escape(&report.client_message)
    ));
    body.push_str("<footer>Pre-Color Risk Lab Certified</footer>\n");

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<title>Color Risk Report {}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(&report.reference)
    )
}

fn row(label: &str, value: &str) -> String {
    format!("<tr><th>{}</th><td>{}</td></tr>\n", label, escape(value))
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
