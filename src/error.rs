//! Errors raised while processing the documentation set.
//!
//! Every variant is fatal: the run stops at the first one.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("`{path}` has no element matching `{selector}`")]
    MissingRegion { path: PathBuf, selector: String },

    #[error("invalid selector `{0}`")]
    InvalidSelector(String),

    #[error("`{0}` was already processed; regenerate the documentation before running again")]
    AlreadyProcessed(PathBuf),
}
