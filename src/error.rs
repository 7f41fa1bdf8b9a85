use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("missing #{id}")]
    MissingElement { id: String },
    #[error("no document")]
    NoDocument,
    #[error("failed to register listener on #{id}: {reason}")]
    Listener { id: String, reason: String },
}

impl ToggleError {
    pub fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_string() }
    }
}
