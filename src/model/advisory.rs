use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One of the two tracked supply-chain attack events, keyed by date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Campaign {
    /// 2025-09-08: maintainer phishing, crypto wallet hijacking payload.
    CryptoWalletHijack,
    /// 2025-09-16: self-propagating malware with credential exfiltration.
    AdvancedMalware,
}

/// Builds a date at compile time; an invalid date fails the build.
const fn campaign_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid campaign date"),
    }
}

const CRYPTO_WALLET_HIJACK_DATE: NaiveDate = campaign_date(2025, 9, 8);
const ADVANCED_MALWARE_DATE: NaiveDate = campaign_date(2025, 9, 16);

impl Campaign {
    pub fn date(&self) -> NaiveDate {
        match self {
            Campaign::CryptoWalletHijack => CRYPTO_WALLET_HIJACK_DATE,
            Campaign::AdvancedMalware => ADVANCED_MALWARE_DATE,
        }
    }

    /// Maps an advisory date onto a campaign. Dates matching neither event
    /// return `None` and are left out of campaign tallies.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        [Campaign::CryptoWalletHijack, Campaign::AdvancedMalware]
            .into_iter()
            .find(|c| c.date() == date)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Campaign::CryptoWalletHijack => "Crypto Wallet Hijacking",
            Campaign::AdvancedMalware => "Advanced Malware",
        }
    }
}

/// Versions of a package covered by an advisory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectedVersions {
    /// Every published version is treated as compromised.
    All,
    Exact(Vec<String>),
}

impl AffectedVersions {
    /// Exact string comparison only. Range operators such as `^` or `~` are
    /// never interpreted, so `^5.6.0` does not match `5.6.1`.
    pub fn matches(&self, version: &str) -> bool {
        match self {
            AffectedVersions::All => true,
            AffectedVersions::Exact(versions) => versions.iter().any(|v| v == version),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub package_id: String,
    pub affected_versions: AffectedVersions,
    pub campaign_date: NaiveDate,
    pub severity: Severity,
    pub description: String,
    /// Weekly download figure at the time of the advisory, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<String>,
}

impl Advisory {
    pub fn campaign(&self) -> Option<Campaign> {
        Campaign::from_date(self.campaign_date)
    }

    pub fn popularity_or_unknown(&self) -> &str {
        self.popularity.as_deref().unwrap_or("Unknown")
    }
}
