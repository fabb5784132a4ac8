pub mod audit;
pub mod config;
pub mod discover;
pub mod loader;
pub mod model;
pub mod output;
pub mod registry;
pub mod scanner;

pub use audit::Auditor;
pub use config::Config;
pub use loader::{FsLoader, LoadError, ManifestLoader};
pub use model::{Advisory, AuditReport, Finding, ProjectResult, Severity};
pub use registry::Registry;
