//! Demo error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Trail error: {0}")]
    Trail(#[from] breadcrumb_trail::TrailError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
