//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Entry logging and management commands
pub mod entry;

/// General utility commands
pub mod general;

/// Goal and hour type settings commands
pub mod settings;

/// Statistics and period navigation
pub mod stats;

// Export commands
pub use entry::*;
pub use general::*;
pub use settings::*;
pub use stats::*;
