// src/error.rs
use std::{io, path::PathBuf};

/// Everything the pipeline can fail with. Display strings are shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid attribute path: {0}")]
    InvalidPath(String),

    #[error("No skin types available for this animal.")]
    NoValues,

    #[error("Skin type not found. Try again...")]
    InvalidSelection(String),

    #[error("Missing configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Could not decode records: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Could not read template {}: {source}", path.display())]
    TemplateUnreadable { path: PathBuf, source: io::Error },

    #[error("Permission error: {}: {source}", path.display())]
    OutputPermission { path: PathBuf, source: io::Error },

    #[error("File system error: {}: {source}", path.display())]
    OutputFs { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
