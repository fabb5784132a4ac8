//! Project auditing.
//!
//! [`Auditor`] runs both scanners over each project root and aggregates the
//! results. Loading is delegated to a [`ManifestLoader`]; a document that is
//! missing or unparseable simply contributes no findings.
//!
//! # Example
//!
//! ```no_run
//! use chainaudit::{Auditor, FsLoader, Registry};
//!
//! let registry = Registry::builtin();
//! let auditor = Auditor::new(&registry, FsLoader);
//!
//! let report = auditor.audit_projects(&["./my-app"]);
//! println!("{} findings", report.totals.total);
//! ```

use crate::config::IgnoreConfig;
use crate::loader::{LoadError, ManifestLoader};
use crate::model::{AuditReport, Finding, ProjectResult};
use crate::registry::Registry;
use crate::scanner::{scan_lockfile, scan_manifest, LOCKFILE_FILE, MANIFEST_FILE};
use serde_json::Value;
use std::path::Path;

pub struct Auditor<'r, L> {
    registry: &'r Registry,
    loader: L,
    ignore: IgnoreConfig,
}

impl<'r, L: ManifestLoader> Auditor<'r, L> {
    pub fn new(registry: &'r Registry, loader: L) -> Self {
        Self {
            registry,
            loader,
            ignore: IgnoreConfig::default(),
        }
    }

    /// Drops findings for packages on the ignore list before tallying.
    pub fn with_ignore(mut self, ignore: IgnoreConfig) -> Self {
        self.ignore = ignore;
        self
    }

    /// Audits a single project root. Manifest findings come first, then
    /// lockfile findings.
    pub fn audit_project(&self, root: &Path) -> ProjectResult<'r> {
        let manifest_path = root.join(MANIFEST_FILE);
        let lockfile_path = root.join(LOCKFILE_FILE);

        let manifest_findings = self
            .load(&manifest_path)
            .map(|doc| scan_manifest(self.registry, &doc, &manifest_path))
            .unwrap_or_default();

        let lockfile_findings = self
            .load(&lockfile_path)
            .map(|doc| scan_lockfile(self.registry, &doc, &lockfile_path))
            .unwrap_or_default();

        let result = ProjectResult::new(
            root,
            self.filter_ignored(manifest_findings),
            self.filter_ignored(lockfile_findings),
        );

        tracing::info!(
            project = %root.display(),
            total = result.counts.total,
            critical = result.counts.critical,
            high = result.counts.high,
            attack_1 = result.counts.attack_1,
            attack_2 = result.counts.attack_2,
            "scanned project"
        );

        result
    }

    /// Audits every root in order and sums the per-project counts.
    pub fn audit_projects<P: AsRef<Path>>(&self, roots: &[P]) -> AuditReport<'r> {
        tracing::info!(
            projects = roots.len(),
            advisories = self.registry.len(),
            "starting audit"
        );

        let projects = roots
            .iter()
            .map(|root| self.audit_project(root.as_ref()))
            .collect();

        AuditReport::new(projects, self.registry.len())
    }

    fn load(&self, path: &Path) -> Option<Value> {
        match self.loader.load(path) {
            Ok(doc) => Some(doc),
            Err(LoadError::NotFound(_)) => {
                tracing::info!(path = %path.display(), "file not found, skipping");
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    fn filter_ignored(&self, findings: Vec<Finding<'r>>) -> Vec<Finding<'r>> {
        findings
            .into_iter()
            .filter(|f| {
                let ignored = self.ignore.should_ignore_package(&f.package_id);
                if ignored {
                    tracing::debug!(package = %f.package_id, "finding ignored by config");
                }
                !ignored
            })
            .collect()
    }
}
