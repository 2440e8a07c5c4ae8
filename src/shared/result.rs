/// Type alias for Result with anyhow::Error as the error type.
/// The comparison core returns [`DiffError`](super::error::DiffError) directly;
/// everything around it (file loading, formatting, CLI) uses this alias.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
