//! Serialized/public schema models used across the workspace.

/// Protocol configuration schema.
pub mod config;
/// Serializable witness input formats.
pub mod witness;
