use crate::comparison::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for loading manifest snapshots
///
/// This port abstracts where manifests come from (files on disk, test
/// fixtures, ...). Decoding the raw format into a [`Manifest`] is the
/// reader's job.
pub trait ManifestReader {
    /// Reads and decodes the manifest at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist or cannot be read
    /// - The content is not a valid manifest document
    fn read_manifest(&self, path: &Path) -> Result<Manifest>;
}
