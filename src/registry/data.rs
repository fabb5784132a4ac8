//! Built-in advisory table.

use super::RawAdvisory;
use crate::model::Campaign::{AdvancedMalware, CryptoWalletHijack};
use crate::model::Severity::{Critical, High};

pub(super) const ADVISORIES: &[RawAdvisory] = &[
    // 2025-09-08: crypto wallet hijacking
    RawAdvisory {
        id: "backslash",
        versions: &["0.2.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Backslash package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("0.26M"),
    },
    RawAdvisory {
        id: "chalk-template",
        versions: &["1.1.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Chalk template package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("3.9M"),
    },
    RawAdvisory {
        id: "supports-hyperlinks",
        versions: &["4.1.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Supports hyperlinks package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("19.2M"),
    },
    RawAdvisory {
        id: "has-ansi",
        versions: &["6.0.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Has ansi package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("12.1M"),
    },
    RawAdvisory {
        id: "simple-swizzle",
        versions: &["0.2.3"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Simple swizzle package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("26.26M"),
    },
    RawAdvisory {
        id: "color-string",
        versions: &["2.1.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Color string package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("27.48M"),
    },
    RawAdvisory {
        id: "error-ex",
        versions: &["1.3.3"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Error ex package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("47.17M"),
    },
    RawAdvisory {
        id: "color-name",
        versions: &["2.0.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Color name package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("191.71M"),
    },
    RawAdvisory {
        id: "is-arrayish",
        versions: &["0.3.3"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Is arrayish package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("73.8M"),
    },
    RawAdvisory {
        id: "slice-ansi",
        versions: &["7.1.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Slice ansi package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("59.8M"),
    },
    RawAdvisory {
        id: "color-convert",
        versions: &["3.1.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Color convert package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("193.5M"),
    },
    RawAdvisory {
        id: "wrap-ansi",
        versions: &["9.0.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Wrap ansi package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("197.99M"),
    },
    RawAdvisory {
        id: "ansi-regex",
        versions: &["6.2.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Ansi regex package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("243.64M"),
    },
    RawAdvisory {
        id: "supports-color",
        versions: &["10.2.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Supports color package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("287.1M"),
    },
    RawAdvisory {
        id: "strip-ansi",
        versions: &["7.1.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Strip ansi package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("261.17M"),
    },
    RawAdvisory {
        id: "chalk",
        versions: &["5.6.1"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Chalk package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("299.99M"),
    },
    RawAdvisory {
        id: "debug",
        versions: &["4.4.2"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Debug package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("357.6M"),
    },
    RawAdvisory {
        id: "ansi-styles",
        versions: &["6.2.2"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Ansi styles package compromised with crypto wallet hijacking malware",
        weekly_downloads: Some("371.41M"),
    },
    RawAdvisory {
        id: "proto-tinker-wc",
        versions: &["0.1.87"],
        campaign: CryptoWalletHijack,
        severity: Critical,
        description: "Proto tinker wc package compromised with crypto wallet hijacking malware",
        weekly_downloads: None,
    },
    // 2025-09-16: self-propagating malware
    RawAdvisory {
        id: "@ctrl/tinycolor",
        versions: &["4.1.1", "4.1.2"],
        campaign: AdvancedMalware,
        severity: Critical,
        description: "Tinycolor package compromised with advanced malware (2.2M weekly downloads)",
        weekly_downloads: Some("2.2M"),
    },
    RawAdvisory {
        id: "angulartics2",
        versions: &["14.1.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Angulartics2 package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/deluge",
        versions: &["7.2.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Deluge package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/golang-template",
        versions: &["1.4.3"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Golang template package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/magnet-link",
        versions: &["4.0.4"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Magnet link package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/ngx-codemirror",
        versions: &["7.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX Codemirror package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/ngx-csv",
        versions: &["6.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX CSV package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/ngx-emoji-mart",
        versions: &["9.2.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX Emoji Mart package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/ngx-rightclick",
        versions: &["4.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX Rightclick package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/qbittorrent",
        versions: &["9.7.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "QBittorrent package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/react-adsense",
        versions: &["2.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "React AdSense package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/shared-torrent",
        versions: &["6.3.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Shared Torrent package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/torrent-file",
        versions: &["4.1.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Torrent File package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/transmission",
        versions: &["7.3.1"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Transmission package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@ctrl/ts-base32",
        versions: &["4.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "TS Base32 package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "encounter-playground",
        versions: &["0.0.5"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Encounter Playground package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "json-rules-engine-simplified",
        versions: &["0.2.4", "0.2.1"],
        campaign: AdvancedMalware,
        severity: High,
        description: "JSON Rules Engine Simplified package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "koa2-swagger-ui",
        versions: &["5.11.2", "5.11.1"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Koa2 Swagger UI package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/gesturehandler",
        versions: &["2.0.35"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript Gesture Handler package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/sentry",
        versions: &["4.6.43"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript Sentry package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/text",
        versions: &["1.6.13"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript Text package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/ui-collectionview",
        versions: &["6.0.6"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript UI Collection View package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/ui-drawer",
        versions: &["0.1.30"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript UI Drawer package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/ui-image",
        versions: &["4.5.6"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript UI Image package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/ui-material-bottomsheet",
        versions: &["7.2.72"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript UI Material Bottom Sheet package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/ui-material-core",
        versions: &["7.2.76"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript UI Material Core package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "@nativescript-community/ui-material-core-tabs",
        versions: &["7.2.76"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NativeScript UI Material Core Tabs package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "ngx-color",
        versions: &["10.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX Color package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "ngx-toastr",
        versions: &["19.0.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX Toastr package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "ngx-trend",
        versions: &["8.0.1"],
        campaign: AdvancedMalware,
        severity: High,
        description: "NGX Trend package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "react-complaint-image",
        versions: &["0.0.35"],
        campaign: AdvancedMalware,
        severity: High,
        description: "React Complaint Image package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "react-jsonschema-form-conditionals",
        versions: &["0.3.21"],
        campaign: AdvancedMalware,
        severity: High,
        description: "React JSON Schema Form Conditionals package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "react-jsonschema-form-extras",
        versions: &["1.0.4"],
        campaign: AdvancedMalware,
        severity: High,
        description: "React JSON Schema Form Extras package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "rxnt-authentication",
        versions: &["0.0.6"],
        campaign: AdvancedMalware,
        severity: High,
        description: "RXNT Authentication package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "rxnt-healthchecks-nestjs",
        versions: &["1.0.5"],
        campaign: AdvancedMalware,
        severity: High,
        description: "RXNT Healthchecks NestJS package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "rxnt-kue",
        versions: &["1.0.7"],
        campaign: AdvancedMalware,
        severity: High,
        description: "RXNT Kue package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "swc-plugin-component-annotate",
        versions: &["1.9.2"],
        campaign: AdvancedMalware,
        severity: High,
        description: "SWC Plugin Component Annotate package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "ts-gaussian",
        versions: &["3.0.6"],
        campaign: AdvancedMalware,
        severity: High,
        description: "TS Gaussian package compromised with advanced malware",
        weekly_downloads: None,
    },
    RawAdvisory {
        id: "tinycolor",
        versions: &["*"],
        campaign: AdvancedMalware,
        severity: High,
        description: "Tinycolor package compromised with advanced malware",
        weekly_downloads: None,
    },
];
