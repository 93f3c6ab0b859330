// Public modules
pub mod archive;
pub mod cli;
pub mod download;
pub mod error;
pub mod install;
pub mod models;
pub mod runner;
pub mod utils;
pub mod vars;

// Re-export commonly used types
pub use archive::{ArchiveKind, ExtractedEntry};
pub use error::{Error, Result};
pub use models::*;
pub use vars::VariableSet;
