//! Registry of known-compromised packages.
//!
//! The registry is an immutable lookup table from package id (including
//! scoped ids such as `@ctrl/tinycolor`) to its [`Advisory`]. Build it once
//! with [`Registry::builtin`] and pass it by reference to the scanners.
//!
//! # Example
//!
//! ```
//! use chainaudit::Registry;
//!
//! let registry = Registry::builtin();
//!
//! assert!(registry.lookup("debug", "4.4.2"));
//! assert!(!registry.lookup("debug", "4.4.3"));
//! assert!(!registry.lookup("debug", "^4.4.2"));
//! ```

mod data;

use crate::model::{Advisory, AffectedVersions, Campaign, Severity};
use std::collections::BTreeMap;

/// Marks an advisory that covers every published version.
const ALL_VERSIONS: &str = "*";

struct RawAdvisory {
    id: &'static str,
    versions: &'static [&'static str],
    campaign: Campaign,
    severity: Severity,
    description: &'static str,
    weekly_downloads: Option<&'static str>,
}

impl RawAdvisory {
    fn to_advisory(&self) -> Advisory {
        let affected_versions = if self.versions.contains(&ALL_VERSIONS) {
            AffectedVersions::All
        } else {
            AffectedVersions::Exact(self.versions.iter().map(|v| v.to_string()).collect())
        };

        Advisory {
            package_id: self.id.to_string(),
            affected_versions,
            campaign_date: self.campaign.date(),
            severity: self.severity,
            description: self.description.to_string(),
            popularity: self.weekly_downloads.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    advisories: BTreeMap<String, Advisory>,
}

impl Registry {
    /// Loads the built-in advisory table for both September 2025 campaigns.
    pub fn builtin() -> Self {
        Self::from_advisories(data::ADVISORIES.iter().map(RawAdvisory::to_advisory))
    }

    /// Builds a registry from arbitrary advisories. A later advisory for the
    /// same package id replaces an earlier one.
    pub fn from_advisories(advisories: impl IntoIterator<Item = Advisory>) -> Self {
        let advisories = advisories
            .into_iter()
            .map(|a| (a.package_id.clone(), a))
            .collect();
        Self { advisories }
    }

    /// Returns true if `version` of `package_id` is known to be compromised.
    pub fn lookup(&self, package_id: &str, version: &str) -> bool {
        self.advisory(package_id, version).is_some()
    }

    /// Returns the advisory covering `version` of `package_id`, if any.
    pub fn advisory(&self, package_id: &str, version: &str) -> Option<&Advisory> {
        self.advisories
            .get(package_id)
            .filter(|a| a.affected_versions.matches(version))
    }

    pub fn get(&self, package_id: &str) -> Option<&Advisory> {
        self.advisories.get(package_id)
    }

    pub fn len(&self) -> usize {
        self.advisories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Iterates advisories in package id order.
    pub fn iter(&self) -> impl Iterator<Item = &Advisory> {
        self.advisories.values()
    }
}
