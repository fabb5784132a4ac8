use crate::model::{AuditReport, Campaign, Finding, ProjectResult};
use std::fmt::{self, Display, Formatter};

const RULE_WIDTH: usize = 120;
const PROJECT_RULE_WIDTH: usize = 60;

/// Renders the full plain-text audit report.
///
/// Output depends only on `report`, so identical inputs render identical
/// text.
pub fn render(report: &AuditReport<'_>) -> String {
    TextReport(report).to_string()
}

/// Plain-text view of an [`AuditReport`].
pub struct TextReport<'a, 'r>(pub &'a AuditReport<'r>);

impl Display for TextReport<'_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "NPM SUPPLY CHAIN ATTACK SECURITY AUDIT REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;

        write_summary(f, report)?;
        writeln!(f)?;
        writeln!(f, "{}", rule)?;

        for project in report.projects.iter().filter(|p| !p.is_clean()) {
            write_project(f, project)?;
        }

        writeln!(f, "{}", rule)?;
        writeln!(f, "MALWARE INDICATORS OF COMPROMISE:")?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        f.write_str(INDICATORS)?;

        writeln!(f, "{}", rule)?;
        writeln!(f, "IMMEDIATE ACTIONS REQUIRED:")?;
        writeln!(f, "{}", rule)?;
        if report.totals.total > 0 {
            f.write_str(CRITICAL_ACTIONS)?;
        }
        f.write_str(PREVENTIVE_MEASURES)
    }
}

fn write_summary(f: &mut Formatter<'_>, report: &AuditReport<'_>) -> fmt::Result {
    let totals = &report.totals;

    writeln!(f, "EXECUTIVE SUMMARY:")?;
    writeln!(f, "- Total projects scanned: {}", report.projects.len())?;
    writeln!(f, "- Known compromised packages checked: {}", report.registry_size)?;
    writeln!(f, "- Total vulnerabilities found: {}", totals.total)?;
    writeln!(f, "- Critical vulnerabilities: {}", totals.critical)?;
    writeln!(f, "- High vulnerabilities: {}", totals.high)?;
    writeln!(
        f,
        "- Attack 1 ({}): {}",
        Campaign::CryptoWalletHijack.display_name(),
        totals.attack_1
    )?;
    writeln!(
        f,
        "- Attack 2 ({}): {}",
        Campaign::AdvancedMalware.display_name(),
        totals.attack_2
    )?;
    writeln!(f)?;

    if totals.total == 0 {
        writeln!(f, "[SAFE] NO VULNERABILITIES DETECTED")?;
        return writeln!(
            f,
            "Your projects appear to be safe from both NPM supply chain attacks."
        );
    }

    if totals.critical > 0 {
        writeln!(f, "[CRITICAL] CRITICAL VULNERABILITIES DETECTED")?;
    } else {
        writeln!(f, "[WARNING] HIGH SEVERITY VULNERABILITIES DETECTED")?;
    }
    writeln!(f, "The following vulnerabilities were found in your projects:")
}

fn write_project(f: &mut Formatter<'_>, project: &ProjectResult<'_>) -> fmt::Result {
    let counts = &project.counts;

    writeln!(f)?;
    writeln!(f, "PROJECT: {}", project.project_root.display())?;
    writeln!(f, "{}", "-".repeat(PROJECT_RULE_WIDTH))?;
    writeln!(f, "Total Vulnerabilities: {}", counts.total)?;
    writeln!(f, "Critical: {}, High: {}", counts.critical, counts.high)?;
    writeln!(f, "Attack 1: {}, Attack 2: {}", counts.attack_1, counts.attack_2)?;
    writeln!(f)?;

    for finding in project.findings() {
        write_finding(f, finding)?;
    }
    Ok(())
}

fn write_finding(f: &mut Formatter<'_>, finding: &Finding<'_>) -> fmt::Result {
    let advisory = finding.advisory;

    writeln!(f, "Package: {}", finding.package_id)?;
    writeln!(f, "Version: {}", finding.version)?;
    writeln!(f, "Type: {}", finding.kind)?;
    writeln!(f, "Severity: {}", advisory.severity)?;
    writeln!(f, "Attack Date: {}", advisory.campaign_date.format("%Y-%m-%d"))?;
    writeln!(f, "Weekly Downloads: {}", advisory.popularity_or_unknown())?;
    writeln!(f, "Description: {}", advisory.description)?;
    if let Some(path) = &finding.path {
        writeln!(f, "Path: {}", path)?;
    }
    writeln!(f)
}

const INDICATORS: &str = "\
ATTACK 1 - Crypto Wallet Hijacking:
- Phishing Domain: npmjs.help
- Target: Cryptocurrency transactions and wallet interactions
- Method: Browser-based malware that intercepts crypto activity
- Affected: 18 packages with 2+ billion weekly downloads

ATTACK 2 - Advanced Malware:
- bundle.js SHA-256: 46faab8ab153fae6e80e7cca38eab363075bb524edd79e42269217a083628f09
- Exfiltration endpoint: hxxps://webhook[.]site/bb8ca5f6-4175-45d2-b042-fc9ebb8170b7
- Malicious GitHub Actions workflows in .github/workflows/
- Unauthorized npm publishes or package modifications

";

const CRITICAL_ACTIONS: &str = "\
1. CRITICAL ACTIONS:
   - IMMEDIATELY uninstall or pin to known-good versions
   - Audit environments (CI/CD agents, developer laptops) for unauthorized activity
   - Rotate npm tokens and other exposed secrets
   - Monitor logs for unusual npm publish or package modification events
   - Check for malicious GitHub Actions workflows
   - Scan for bundle.js files with the specified SHA-256
   - Clean npm cache and reinstall all packages
   - Use package lock files with pinned versions

";

const PREVENTIVE_MEASURES: &str = "\
2. PREVENTIVE MEASURES:
   - Enable 2FA on all developer accounts
   - Implement automated dependency scanning in CI/CD
   - Regular security audits of dependencies
   - Use tools like 'npm audit', Snyk, or OWASP Dependency Check
   - Keep dependencies updated to latest secure versions
   - Implement package signing verification
   - Consider using Aikido SafeChain for secure package management

3. MONITORING:
   - Set up alerts for new security vulnerabilities
   - Monitor package update frequencies and sources
   - Regular security training for development team
   - Monitor for suspicious network activity to known IOCs
   - Implement Software Bill of Materials (SBOM) tracking
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependencyKind, ProjectResult};
    use crate::registry::Registry;
    use std::path::PathBuf;

    fn finding<'r>(
        registry: &'r Registry,
        id: &str,
        version: &str,
        kind: DependencyKind,
        path: Option<&str>,
    ) -> Finding<'r> {
        Finding {
            package_id: id.to_string(),
            version: version.to_string(),
            kind,
            source_file: PathBuf::from("app/package-lock.json"),
            path: path.map(str::to_string),
            advisory: registry.advisory(id, version).unwrap(),
        }
    }

    #[test]
    fn test_render_clean_report() {
        let report = AuditReport::new(vec![ProjectResult::new("app", vec![], vec![])], 58);
        let text = render(&report);

        assert!(text.starts_with(&"=".repeat(120)));
        assert!(text.contains("- Total projects scanned: 1"));
        assert!(text.contains("- Total vulnerabilities found: 0"));
        assert!(text.contains("[SAFE] NO VULNERABILITIES DETECTED"));
        assert!(!text.contains("PROJECT: app"));
        assert!(!text.contains("1. CRITICAL ACTIONS:"));
        assert!(text.contains("MALWARE INDICATORS OF COMPROMISE:"));
        assert!(text.contains("2. PREVENTIVE MEASURES:"));
        assert!(text.contains(
            "   - Implement package signing verification\n   - Consider using Aikido SafeChain for secure package management\n\n3. MONITORING:"
        ));
        assert!(text.ends_with("   - Implement Software Bill of Materials (SBOM) tracking\n"));
    }

    #[test]
    fn test_render_critical_findings() {
        let registry = Registry::builtin();
        let project = ProjectResult::new(
            "app",
            vec![finding(&registry, "chalk", "5.6.1", DependencyKind::Dependencies, None)],
            vec![finding(
                &registry,
                "debug",
                "4.4.2",
                DependencyKind::Transitive,
                Some("node_modules/foo/node_modules/debug"),
            )],
        );
        let clean = ProjectResult::new("other", vec![], vec![]);
        let report = AuditReport::new(vec![project, clean], registry.len());
        let text = render(&report);

        assert!(text.contains("[CRITICAL] CRITICAL VULNERABILITIES DETECTED"));
        assert!(text.contains("PROJECT: app"));
        assert!(!text.contains("PROJECT: other"));
        assert!(text.contains("Total Vulnerabilities: 2"));
        assert!(text.contains("Attack 1: 2, Attack 2: 0"));
        assert!(text.contains(
            "Package: chalk\nVersion: 5.6.1\nType: dependencies\nSeverity: CRITICAL\nAttack Date: 2025-09-08\n"
        ));
        assert!(text.contains("Weekly Downloads: 357.6M"));
        assert!(text.contains("Path: node_modules/foo/node_modules/debug"));
        assert!(text.contains("1. CRITICAL ACTIONS:"));

        // Manifest findings are listed before lockfile findings.
        let chalk = text.find("Package: chalk").unwrap();
        let debug = text.find("Package: debug").unwrap();
        assert!(chalk < debug);
    }

    #[test]
    fn test_render_high_only_warning() {
        let registry = Registry::builtin();
        let project = ProjectResult::new(
            "app",
            vec![finding(&registry, "ngx-toastr", "19.0.2", DependencyKind::DevDependencies, None)],
            vec![],
        );
        let text = render(&AuditReport::new(vec![project], registry.len()));

        assert!(text.contains("[WARNING] HIGH SEVERITY VULNERABILITIES DETECTED"));
        assert!(text.contains("Weekly Downloads: Unknown"));
        assert!(text.contains("Attack 1: 0, Attack 2: 1"));
        assert!(!text.contains("Path:"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let registry = Registry::builtin();
        let build = || {
            AuditReport::new(
                vec![ProjectResult::new(
                    "app",
                    vec![finding(&registry, "tinycolor", "*", DependencyKind::Dependencies, None)],
                    vec![],
                )],
                registry.len(),
            )
        };

        assert_eq!(render(&build()), render(&build()));
        assert_eq!(render(&build()), TextReport(&build()).to_string());
    }
}
