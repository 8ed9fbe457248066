use crate::types::report::RiskReport;

pub fn to_json(report: &RiskReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;
    use serde_json::Value;

    #[test]
    fn json_report_exposes_analysis_contract() {
        let cfg = fixtures::config();
        let rendered = to_json(&fixtures::risky_report(&cfg)).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("json should parse back");

        assert_eq!(value["analysis"]["grade"], "C");
        assert_eq!(value["analysis"]["adjust"], 24);
        assert!(value["analysis"]["final"].is_number());
        assert!(value["analysis"]["layers"]["lighting"].is_number());
        assert_eq!(value["analysis"]["fired"][0]["id"], "R1");
        assert_eq!(value["analysis"]["fired"][1]["points"], 12);
        assert!(value["analysis"].get("diagnostics").is_none());
        assert_eq!(value["issued_on"], "2026-03-09");
        assert_eq!(value["profile"]["status"], "At risk");
    }
}
