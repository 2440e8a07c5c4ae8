/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the comparison core and talks to infrastructure
/// through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
