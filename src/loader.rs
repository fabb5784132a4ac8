//! Loading of manifest documents.
//!
//! The audit core never touches the filesystem directly. It asks a
//! [`ManifestLoader`] for parsed JSON and treats every [`LoadError`] as
//! "this source contributes no findings".

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies parsed JSON documents to the auditor.
pub trait ManifestLoader {
    fn load(&self, path: &Path) -> Result<Value, LoadError>;
}

impl<L: ManifestLoader + ?Sized> ManifestLoader for &L {
    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        (**self).load(path)
    }
}

/// Parses a JSON document, attributing failures to `path`.
pub fn parse_document(path: &Path, content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads documents from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl ManifestLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                LoadError::NotFound(path.to_path_buf())
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        parse_document(path, &content)
    }
}
