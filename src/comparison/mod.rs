//! Comparison core: manifest indexing and change classification.
//!
//! Pure and synchronous; nothing in here performs I/O or logging.
pub mod domain;
pub mod services;
