pub mod json;
pub mod table;
pub mod text;

use crate::model::AuditReport;
use anyhow::Result;

/// Output format for audit reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full line-oriented report with indicators and recommendations
    Text,
    /// JSON format for programmatic use
    Json,
    /// Compact findings table
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "Unknown format: {}. Use 'text', 'json', or 'table'",
                s
            )),
        }
    }
}

/// Format a report to a string for printing or file output
pub fn format_report(report: &AuditReport<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(report)),
        OutputFormat::Json => json::render(report),
        OutputFormat::Table => Ok(table::render(report)),
    }
}
