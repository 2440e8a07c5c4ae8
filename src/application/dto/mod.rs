/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the comparison core isolated.
mod compare_request;
mod compare_response;
mod comparison_metadata;
mod output_format;

pub use compare_request::CompareRequest;
pub use compare_response::CompareResponse;
pub use comparison_metadata::ComparisonMetadata;
pub use output_format::OutputFormat;
