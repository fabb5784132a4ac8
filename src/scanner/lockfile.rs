use crate::model::{DependencyKind, Finding};
use crate::registry::Registry;
use serde_json::Value;
use std::path::Path;

const NODE_MODULES: &str = "node_modules";

/// Recovers a package id from a lockfile path such as
/// `node_modules/foo/node_modules/@scope/bar`.
///
/// The first `@scope` segment that directly follows a `node_modules` marker
/// is joined with the segment after it. Otherwise the id is the last segment
/// left once every `node_modules` marker is stripped. Packages nested under a
/// scoped parent therefore resolve to the parent's id.
pub fn package_id_from_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();

    let scoped = segments.windows(3).find_map(|w| match w {
        [marker, scope, name] if *marker == NODE_MODULES && scope.starts_with('@') => {
            Some(format!("{}/{}", scope, name))
        }
        _ => None,
    });

    scoped.unwrap_or_else(|| {
        segments
            .iter()
            .rev()
            .find(|s| **s != NODE_MODULES)
            .map(|s| s.to_string())
            .unwrap_or_default()
    })
}

/// Classifies a lockfile entry as direct or transitive.
///
/// This is structural only: a path nested under another package's
/// `node_modules` is transitive, anything at the top level is direct, even
/// when the top-level entry was hoisted from a deeper dependency.
pub fn kind_from_path(path: &str) -> DependencyKind {
    let markers = path.split('/').filter(|s| *s == NODE_MODULES).count();
    if markers > 1 {
        DependencyKind::Transitive
    } else {
        DependencyKind::Direct
    }
}

/// Scans a resolved tree (`package-lock.json`) for compromised packages.
///
/// Walks the `packages` map in document order and checks every entry that
/// carries a concrete `version`.
pub fn scan_lockfile<'r>(registry: &'r Registry, doc: &Value, file: &Path) -> Vec<Finding<'r>> {
    let Some(packages) = doc.get("packages").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut findings = Vec::new();

    for (path, entry) in packages {
        let Some(version) = entry.get("version").and_then(Value::as_str) else {
            continue;
        };

        let package_id = package_id_from_path(path);
        if let Some(advisory) = registry.advisory(&package_id, version) {
            let kind = kind_from_path(path);
            tracing::debug!(package = %package_id, version, path = %path, kind = %kind, "lockfile match");
            findings.push(Finding {
                package_id,
                version: version.to_string(),
                kind,
                source_file: file.to_path_buf(),
                path: Some(path.clone()),
                advisory,
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_package_id_top_level() {
        assert_eq!(package_id_from_path("node_modules/chalk"), "chalk");
        assert_eq!(kind_from_path("node_modules/chalk"), DependencyKind::Direct);
    }

    #[test]
    fn test_package_id_scoped_top_level() {
        assert_eq!(package_id_from_path("node_modules/@ctrl/tinycolor"), "@ctrl/tinycolor");
        assert_eq!(kind_from_path("node_modules/@ctrl/tinycolor"), DependencyKind::Direct);
    }

    #[test]
    fn test_package_id_scoped_nested() {
        let path = "node_modules/foo/node_modules/@ctrl/tinycolor";
        assert_eq!(package_id_from_path(path), "@ctrl/tinycolor");
        assert_eq!(kind_from_path(path), DependencyKind::Transitive);
    }

    #[test]
    fn test_package_id_nested_under_scoped() {
        let path = "node_modules/@babel/core/node_modules/debug";
        assert_eq!(package_id_from_path(path), "@babel/core");
        assert_eq!(kind_from_path(path), DependencyKind::Transitive);
    }

    #[test]
    fn test_scan_lockfile_nested_under_scoped_parent() {
        let registry = Registry::builtin();
        let doc = json!({
            "packages": {
                "node_modules/@babel/core/node_modules/debug": {"version": "4.4.2"}
            }
        });

        assert!(scan_lockfile(&registry, &doc, Path::new("package-lock.json")).is_empty());
    }

    #[test]
    fn test_package_id_scope_marker_without_name() {
        assert_eq!(package_id_from_path("node_modules/@ctrl"), "@ctrl");
    }

    #[test]
    fn test_package_id_workspace_paths() {
        // npm workspaces record local packages without a node_modules prefix.
        assert_eq!(package_id_from_path("packages/ui"), "ui");
        assert_eq!(package_id_from_path("packages/ui/node_modules/chalk"), "chalk");
        assert_eq!(kind_from_path("packages/ui/node_modules/chalk"), DependencyKind::Direct);
    }

    #[test]
    fn test_package_id_root_entry() {
        assert_eq!(package_id_from_path(""), "");
        assert_eq!(kind_from_path(""), DependencyKind::Direct);
    }

    #[test]
    fn test_scan_lockfile_findings() {
        let registry = Registry::builtin();
        let doc = json!({
            "name": "app",
            "lockfileVersion": 3,
            "packages": {
                "": {"name": "app", "version": "1.0.0"},
                "node_modules/debug": {"version": "4.4.2"},
                "node_modules/express": {"version": "4.18.2"},
                "node_modules/foo/node_modules/@ctrl/tinycolor": {"version": "4.1.1"},
                "node_modules/chalk": {"version": "5.6.0"}
            }
        });

        let findings = scan_lockfile(&registry, &doc, Path::new("package-lock.json"));
        assert_eq!(findings.len(), 2);

        assert_eq!(findings[0].package_id, "debug");
        assert_eq!(findings[0].kind, DependencyKind::Direct);
        assert_eq!(findings[0].path.as_deref(), Some("node_modules/debug"));

        assert_eq!(findings[1].package_id, "@ctrl/tinycolor");
        assert_eq!(findings[1].version, "4.1.1");
        assert_eq!(findings[1].kind, DependencyKind::Transitive);
        assert_eq!(
            findings[1].path.as_deref(),
            Some("node_modules/foo/node_modules/@ctrl/tinycolor")
        );
    }

    #[test]
    fn test_scan_lockfile_skips_entries_without_version() {
        let registry = Registry::builtin();
        let doc = json!({
            "packages": {
                "node_modules/tinycolor": {"resolved": "https://registry.npmjs.org/tinycolor"},
                "node_modules/debug": {"version": 442}
            }
        });

        assert!(scan_lockfile(&registry, &doc, Path::new("package-lock.json")).is_empty());
    }

    #[test]
    fn test_scan_lockfile_without_packages() {
        let registry = Registry::builtin();
        let v1 = json!({
            "lockfileVersion": 1,
            "dependencies": {"debug": {"version": "4.4.2"}}
        });

        assert!(scan_lockfile(&registry, &v1, Path::new("package-lock.json")).is_empty());
        assert!(scan_lockfile(&registry, &json!({}), Path::new("package-lock.json")).is_empty());
    }
}
