use crate::model::{AuditReport, Severity};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct FindingRow {
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Package")]
    package: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Attack Date")]
    date: String,
}

/// Renders findings as a table, critical first, followed by a one-line
/// summary.
pub fn render(report: &AuditReport<'_>) -> String {
    let mut rows: Vec<(Severity, FindingRow)> = report
        .projects
        .iter()
        .flat_map(|project| {
            project.findings().map(move |f| {
                (
                    f.severity(),
                    FindingRow {
                        project: project.project_root.display().to_string(),
                        severity: f.severity().to_string(),
                        package: f.package_id.clone(),
                        version: f.version.clone(),
                        kind: f.kind.to_string(),
                        date: f.advisory.campaign_date.format("%Y-%m-%d").to_string(),
                    },
                )
            })
        })
        .collect();

    let summary = format!(
        "Summary: {} projects, {} findings ({} critical, {} high)",
        report.projects.len(),
        report.totals.total,
        report.totals.critical,
        report.totals.high
    );

    if rows.is_empty() {
        return format!("No compromised packages found.\n\n{}\n", summary);
    }

    // Stable sort keeps discovery order within a severity.
    rows.sort_by_key(|(severity, _)| *severity);

    let table = Table::new(rows.into_iter().map(|(_, row)| row))
        .with(Style::rounded())
        .to_string();

    format!("{}\n\n{}\n", table, summary)
}
