//! Filesystem store reading one JSON document per file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::data::RawDocument;
use crate::errors::DatasetError;
use crate::source::DocumentStore;
use crate::types::StoreId;

/// Store that scans a directory tree for `.json` files, each holding
/// one serialized [`RawDocument`].
///
/// Files are visited in path order so corpus layout is stable across
/// runs. Unreadable files are skipped with a debug log; a readable
/// file with a malformed payload fails the load, since silently
/// dropping it would skew document accounting without any signal.
pub struct JsonDirStore {
    id: StoreId,
    root: PathBuf,
    follow_links: bool,
}

impl JsonDirStore {
    /// Create a store rooted at `root`.
    pub fn new(id: impl Into<StoreId>, root: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            root: root.into(),
            follow_links: false,
        }
    }

    /// Configure symlink traversal.
    pub fn with_follow_symlinks(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    fn document_paths(&self) -> Result<Vec<PathBuf>, DatasetError> {
        if !self.root.is_dir() {
            return Err(DatasetError::StoreUnavailable {
                store_id: self.id.clone(),
                reason: format!("'{}' is not a directory", self.root.display()),
            });
        }
        let mut walker = WalkDir::new(&self.root);
        if self.follow_links {
            walker = walker.follow_links(true);
        }
        let mut paths: Vec<PathBuf> = walker
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_path_buf())
            .filter(|path| has_json_extension(path))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

impl DocumentStore for JsonDirStore {
    fn id(&self) -> &str {
        &self.id
    }

    fn load(&self) -> Result<Vec<RawDocument>, DatasetError> {
        let mut documents = Vec::new();
        for path in self.document_paths()? {
            let payload = match fs::read_to_string(&path) {
                Ok(payload) => payload,
                Err(error) => {
                    debug!(
                        store_id = %self.id,
                        path = %path.display(),
                        %error,
                        "skipping unreadable document file"
                    );
                    continue;
                }
            };
            documents.push(serde_json::from_str(&payload)?);
        }
        debug!(
            store_id = %self.id,
            documents = documents.len(),
            "loaded document directory"
        );
        Ok(documents)
    }
}
