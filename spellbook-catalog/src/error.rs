use thiserror::Error;

/// Failure modes when talking to the remote spell catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("spell catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("spell catalog returned status {0}")]
    Status(u16),
    #[error("unknown spell: {0}")]
    UnknownSpell(String),
}
