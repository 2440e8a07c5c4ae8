use crate::application::dto::CompareResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering comparison results
///
/// One implementation per output format (JSON, Markdown, plain text).
pub trait ReportFormatter {
    /// Renders the comparison and its metadata
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &CompareResponse) -> Result<String>;
}
