use serde::Serialize;
use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use super::{Advisory, Campaign, Severity};

/// How a matched package entered the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DependencyKind {
    #[serde(rename = "dependencies")]
    Dependencies,
    #[serde(rename = "devDependencies")]
    DevDependencies,
    #[serde(rename = "peerDependencies")]
    PeerDependencies,
    #[serde(rename = "direct")]
    Direct,
    #[serde(rename = "transitive")]
    Transitive,
}

impl DependencyKind {
    /// Declared-manifest groups, in scan order.
    pub const MANIFEST_GROUPS: [DependencyKind; 3] = [
        DependencyKind::Dependencies,
        DependencyKind::DevDependencies,
        DependencyKind::PeerDependencies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Dependencies => "dependencies",
            DependencyKind::DevDependencies => "devDependencies",
            DependencyKind::PeerDependencies => "peerDependencies",
            DependencyKind::Direct => "direct",
            DependencyKind::Transitive => "transitive",
        }
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single match between an observed dependency and a registry advisory.
///
/// Findings borrow their advisory from the [`Registry`](crate::Registry)
/// that produced them, so one can only exist for a registered package.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding<'r> {
    pub package_id: String,
    /// Version or spec exactly as it appeared in the source document.
    pub version: String,
    pub kind: DependencyKind,
    pub source_file: PathBuf,
    /// Lockfile path of the entry, only set for resolved-tree findings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub advisory: &'r Advisory,
}

impl<'r> Finding<'r> {
    pub fn severity(&self) -> Severity {
        self.advisory.severity
    }
}

/// Severity and campaign tallies for a set of findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub attack_1: usize,
    pub attack_2: usize,
}

impl Counts {
    pub fn tally<'a, 'r: 'a>(findings: impl IntoIterator<Item = &'a Finding<'r>>) -> Self {
        let mut counts = Counts::default();
        for finding in findings {
            counts.total += 1;
            match finding.severity() {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
            }
            match finding.advisory.campaign() {
                Some(Campaign::CryptoWalletHijack) => counts.attack_1 += 1,
                Some(Campaign::AdvancedMalware) => counts.attack_2 += 1,
                None => {}
            }
        }
        counts
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.critical += other.critical;
        self.high += other.high;
        self.attack_1 += other.attack_1;
        self.attack_2 += other.attack_2;
    }
}

/// Findings and tallies for one project root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectResult<'r> {
    pub project_root: PathBuf,
    pub manifest_findings: Vec<Finding<'r>>,
    pub lockfile_findings: Vec<Finding<'r>>,
    pub counts: Counts,
}

impl<'r> ProjectResult<'r> {
    pub fn new(
        project_root: impl AsRef<Path>,
        manifest_findings: Vec<Finding<'r>>,
        lockfile_findings: Vec<Finding<'r>>,
    ) -> Self {
        let counts = Counts::tally(manifest_findings.iter().chain(&lockfile_findings));
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            manifest_findings,
            lockfile_findings,
            counts,
        }
    }

    /// Manifest findings first, then lockfile findings.
    pub fn findings(&self) -> impl Iterator<Item = &Finding<'r>> {
        self.manifest_findings.iter().chain(&self.lockfile_findings)
    }

    pub fn is_clean(&self) -> bool {
        self.counts.total == 0
    }
}

/// Results for every audited project plus global totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport<'r> {
    pub projects: Vec<ProjectResult<'r>>,
    pub totals: Counts,
    pub registry_size: usize,
}

impl<'r> AuditReport<'r> {
    pub fn new(projects: Vec<ProjectResult<'r>>, registry_size: usize) -> Self {
        let mut totals = Counts::default();
        for project in &projects {
            totals += project.counts;
        }
        Self {
            projects,
            totals,
            registry_size,
        }
    }

    pub fn highest_severity(&self) -> Option<Severity> {
        if self.totals.critical > 0 {
            Some(Severity::Critical)
        } else if self.totals.high > 0 {
            Some(Severity::High)
        } else {
            None
        }
    }
}
