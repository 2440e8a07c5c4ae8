use serde::Serialize;

/// ComparisonMetadata - Describes one comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    old_manifest: String,
    new_manifest: String,
}

impl ComparisonMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        old_manifest: String,
        new_manifest: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            old_manifest,
            new_manifest,
        }
    }

    /// Metadata stamped with the current time and this crate's name and version
    pub fn now(old_manifest: String, new_manifest: String) -> Self {
        Self::new(
            chrono::Utc::now().to_rfc3339(),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            old_manifest,
            new_manifest,
        )
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn old_manifest(&self) -> &str {
        &self.old_manifest
    }

    pub fn new_manifest(&self) -> &str {
        &self.new_manifest
    }
}
