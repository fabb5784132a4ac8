use crate::model::{DependencyKind, Finding};
use crate::registry::Registry;
use serde_json::Value;
use std::path::Path;

/// Scans a declared manifest (`package.json`) for compromised dependencies.
///
/// Groups are visited as `dependencies`, `devDependencies`, then
/// `peerDependencies`; entries within a group keep their document order.
/// The declared spec is compared verbatim, so range expressions like
/// `^5.6.0` never match an exact advisory version.
pub fn scan_manifest<'r>(registry: &'r Registry, doc: &Value, file: &Path) -> Vec<Finding<'r>> {
    let mut findings = Vec::new();

    for kind in DependencyKind::MANIFEST_GROUPS {
        let Some(group) = doc.get(kind.as_str()).and_then(Value::as_object) else {
            continue;
        };

        for (package_id, spec) in group {
            let Some(spec) = spec.as_str() else {
                continue;
            };

            if let Some(advisory) = registry.advisory(package_id, spec) {
                tracing::debug!(package = %package_id, version = spec, kind = %kind, "manifest match");
                findings.push(Finding {
                    package_id: package_id.clone(),
                    version: spec.to_string(),
                    kind,
                    source_file: file.to_path_buf(),
                    path: None,
                    advisory,
                });
            }
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scan(doc: Value) -> Vec<(String, String, DependencyKind)> {
        let registry = Registry::builtin();
        scan_manifest(&registry, &doc, Path::new("package.json"))
            .into_iter()
            .map(|f| (f.package_id, f.version, f.kind))
            .collect()
    }

    #[test]
    fn test_single_runtime_dependency() {
        let registry = Registry::builtin();
        let doc = json!({
            "dependencies": {"chalk": "5.6.1"},
            "devDependencies": {},
            "peerDependencies": {}
        });

        let findings = scan_manifest(&registry, &doc, Path::new("app/package.json"));
        assert_eq!(findings.len(), 1);

        let finding = &findings[0];
        assert_eq!(finding.package_id, "chalk");
        assert_eq!(finding.version, "5.6.1");
        assert_eq!(finding.kind, DependencyKind::Dependencies);
        assert_eq!(finding.source_file, Path::new("app/package.json"));
        assert_eq!(finding.path, None);
        assert_eq!(finding.advisory.package_id, "chalk");
    }

    #[test]
    fn test_group_order_is_fixed() {
        // Document lists peer before dev before runtime; output follows group order.
        let doc = json!({
            "peerDependencies": {"debug": "4.4.2"},
            "devDependencies": {"tinycolor": "^1.0.0"},
            "dependencies": {"ansi-regex": "6.2.1"}
        });

        assert_eq!(
            scan(doc),
            vec![
                ("ansi-regex".to_string(), "6.2.1".to_string(), DependencyKind::Dependencies),
                ("tinycolor".to_string(), "^1.0.0".to_string(), DependencyKind::DevDependencies),
                ("debug".to_string(), "4.4.2".to_string(), DependencyKind::PeerDependencies),
            ]
        );
    }

    #[test]
    fn test_entries_keep_document_order() {
        let doc = json!({
            "dependencies": {
                "strip-ansi": "7.1.1",
                "express": "4.18.2",
                "chalk": "5.6.1",
                "ansi-styles": "6.2.2"
            }
        });

        let ids: Vec<_> = scan(doc).into_iter().map(|(id, _, _)| id).collect();
        assert_eq!(ids, vec!["strip-ansi", "chalk", "ansi-styles"]);
    }

    #[test]
    fn test_range_specs_do_not_match() {
        let doc = json!({
            "dependencies": {
                "chalk": "^5.6.0",
                "debug": "~4.4.2",
                "color-name": ">=2.0.1"
            }
        });
        assert!(scan(doc).is_empty());
    }

    #[test]
    fn test_scoped_package() {
        let doc = json!({"devDependencies": {"@ctrl/tinycolor": "4.1.2"}});
        assert_eq!(
            scan(doc),
            vec![(
                "@ctrl/tinycolor".to_string(),
                "4.1.2".to_string(),
                DependencyKind::DevDependencies
            )]
        );
    }

    #[test]
    fn test_missing_or_malformed_groups() {
        assert!(scan(json!({})).is_empty());
        assert!(scan(json!({"name": "app", "version": "1.0.0"})).is_empty());
        assert!(scan(json!({"dependencies": ["chalk"]})).is_empty());
        assert!(scan(json!({"dependencies": {"chalk": {"version": "5.6.1"}}})).is_empty());
        assert!(scan(json!(null)).is_empty());
    }
}
