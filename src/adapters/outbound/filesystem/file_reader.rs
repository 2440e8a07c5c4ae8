use crate::comparison::domain::Manifest;
use crate::ports::outbound::ManifestReader;
use crate::shared::error::DiffError;
use crate::shared::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Maximum manifest size for security (16 MiB)
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// FileSystemReader adapter for reading manifests from the file system
///
/// This adapter implements the ManifestReader port. Files ending in `.toml`
/// are decoded as TOML, everything else as JSON.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read manifest metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read manifest: {}", e))
    }

    fn decode(path: &Path, content: &str) -> std::result::Result<Value, String> {
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;
            serde_json::to_value(table).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())
        }
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<Manifest> {
        if !path.exists() {
            return Err(DiffError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "Manifest file \"{}\" does not exist.\n   \
                     Please check the path, e.g. point it at a package.json file.",
                    path.display()
                ),
            }
            .into());
        }

        let content = self.safe_read_file(path).map_err(|e| DiffError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let value = Self::decode(path, &content).map_err(|details| DiffError::ManifestParseError {
            path: path.to_path_buf(),
            details,
        })?;

        if !value.is_object() {
            return Err(DiffError::ManifestParseError {
                path: path.to_path_buf(),
                details: "the top-level value must be an object".to_string(),
            }
            .into());
        }

        Ok(Manifest::new(value))
    }
}
