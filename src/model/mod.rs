//! Core data types for advisories, findings, and audit results.
//!
//! - [`Advisory`] - A registry entry for one compromised package
//! - [`Severity`] - Advisory severity (critical or high)
//! - [`Campaign`] - The attack event an advisory belongs to
//! - [`Finding`] - A dependency that matched an advisory
//! - [`ProjectResult`] - Findings and tallies for one project root
//! - [`AuditReport`] - Results across all audited projects
//!
//! # Example
//!
//! ```
//! use chainaudit::{AuditReport, ProjectResult};
//!
//! let project = ProjectResult::new("my-app", vec![], vec![]);
//! let report = AuditReport::new(vec![project], 0);
//!
//! assert_eq!(report.totals.total, 0);
//! ```

mod advisory;
mod finding;

pub use advisory::*;
pub use finding::*;
