use crate::model::AuditReport;
use anyhow::Result;

pub fn render(report: &AuditReport<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyKind, Finding, ProjectResult};
    use crate::registry::Registry;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn test_json_report_shape() {
        let registry = Registry::builtin();
        let finding = Finding {
            package_id: "@ctrl/tinycolor".to_string(),
            version: "4.1.1".to_string(),
            kind: DependencyKind::Transitive,
            source_file: PathBuf::from("app/package-lock.json"),
            path: Some("node_modules/a/node_modules/@ctrl/tinycolor".to_string()),
            advisory: registry.get("@ctrl/tinycolor").unwrap(),
        };
        let report = AuditReport::new(
            vec![ProjectResult::new("app", vec![], vec![finding])],
            registry.len(),
        );

        let json: Value = serde_json::from_str(&render(&report).unwrap()).unwrap();

        assert_eq!(json["totals"]["total"], 1);
        assert_eq!(json["totals"]["attack_2"], 1);
        assert_eq!(json["registry_size"], 58);

        let f = &json["projects"][0]["lockfile_findings"][0];
        assert_eq!(f["kind"], "transitive");
        assert_eq!(f["advisory"]["severity"], "CRITICAL");
        assert_eq!(f["advisory"]["campaign_date"], "2025-09-16");
        assert_eq!(f["advisory"]["affected_versions"]["exact"][1], "4.1.2");
    }
}
