// src/directory/error.rs

use thiserror::Error;

/// Failure modes of a directory fetch. A well-formed zero-length
/// result is not one of them; it comes back as an empty `Ok` vec and
/// gets its own message in the UI.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Server answered with a non-success status.
    #[error("directory returned HTTP {0}")]
    Status(u16),

    /// Network failure, timeout, or a body that did not parse.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}
