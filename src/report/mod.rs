pub mod html;
pub mod json;
pub mod md;
pub mod narrative;
pub mod summary;

use crate::error::RiskLabError;
use crate::session::Session;
use crate::types::report::RiskReport;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Html,
}

pub fn compose(session: &Session<'_>, issued_on: NaiveDate) -> RiskReport {
    let analysis = session.analysis().clone();
    let project = session.project().clone();
    RiskReport {
        reference: format!("{}-BETA", issued_on.format("%Y%m%d")),
        issued_on,
        profile: narrative::grade_profile(analysis.grade),
        recommendations: narrative::recommendations(session.inputs()),
        client_message: narrative::client_message(&project.targets, analysis.grade),
        selections: session.selection_lines(),
        project,
        analysis,
    }
}

pub fn render(report: &RiskReport, format: OutputFormat) -> Result<String, RiskLabError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(RiskLabError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Html => Ok(html::to_html(report)),
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::types::scoring::Grade;

    #[test]
    fn compose_derives_reference_and_profile() {
        let cfg = config();
        let report = risky_report(&cfg);
        assert_eq!(report.reference, "20260309-BETA");
        assert_eq!(report.analysis.grade, Grade::C);
        assert_eq!(report.profile.status, "At risk");
        assert_eq!(report.selections.len(), 12);
        assert_eq!(report.recommendations.len(), 2);
    }
}
