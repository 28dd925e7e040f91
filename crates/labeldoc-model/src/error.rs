use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// The lookup table is not strictly increasing (case-insensitively) or
    /// contains duplicate terms.
    #[error("lookup table out of order at entry {index}: {left:?} >= {right:?}")]
    LookupOrder {
        index: usize,
        left: String,
        right: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
