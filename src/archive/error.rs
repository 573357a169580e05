use thiserror::Error;

/// Recoverable conditions raised by [`ArchiveStore`](super::ArchiveStore) operations.
///
/// Neither variant aborts a run; the dispatcher reports them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    #[error("Invalid key. Keys must contain only letters, numbers, and underscores.")]
    InvalidKey(String),

    #[error("There is no saved clipboard under the name '{0}'")]
    KeyNotFound(String),
}
