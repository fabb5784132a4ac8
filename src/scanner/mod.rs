//! Manifest scanners.
//!
//! Both scanners are pure functions from an already-parsed JSON document to
//! an ordered list of [`Finding`](crate::model::Finding)s:
//!
//! | Scanner | Document | Dependency kinds |
//! |---------|----------|------------------|
//! | [`scan_manifest`] | `package.json` | `dependencies`, `devDependencies`, `peerDependencies` |
//! | [`scan_lockfile`] | `package-lock.json` | `direct`, `transitive` |
//!
//! A document without the expected keys yields no findings rather than an
//! error.
//!
//! # Example
//!
//! ```
//! use chainaudit::scanner::scan_lockfile;
//! use chainaudit::Registry;
//! use serde_json::json;
//! use std::path::Path;
//!
//! let registry = Registry::builtin();
//! let lock = json!({
//!     "packages": {
//!         "node_modules/debug": {"version": "4.4.2"}
//!     }
//! });
//!
//! let findings = scan_lockfile(&registry, &lock, Path::new("package-lock.json"));
//! assert_eq!(findings.len(), 1);
//! ```

mod lockfile;
mod manifest;

pub use lockfile::{kind_from_path, package_id_from_path, scan_lockfile};
pub use manifest::scan_manifest;

/// Declared-dependencies document name.
pub const MANIFEST_FILE: &str = "package.json";

/// Resolved-tree document name.
pub const LOCKFILE_FILE: &str = "package-lock.json";
