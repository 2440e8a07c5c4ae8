use dependency_diff::prelude::*;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving in-memory manifests keyed by path
#[derive(Default)]
pub struct MockManifestReader {
    manifests: HashMap<PathBuf, Value>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: &str, manifest: Value) -> Self {
        self.manifests.insert(PathBuf::from(path), manifest);
        self
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        match self.manifests.get(path) {
            Some(value) => Ok(Manifest::new(value.clone())),
            None => Err(DiffError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: "Register the manifest with MockManifestReader::with_manifest"
                    .to_string(),
            }
            .into()),
        }
    }
}
