//! Discord interaction handlers
//!
//! Handlers for non-command interactions such as autocomplete.

/// Autocomplete handlers for hour type names
pub mod autocomplete;
