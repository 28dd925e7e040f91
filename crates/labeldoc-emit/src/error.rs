use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    /// Label identifiers must start with `LBL`; anything else is a content
    /// error that aborts the run.
    #[error("record {record}: label {label:?} does not start with \"LBL\"")]
    LabelPrefix { record: usize, label: String },

    /// The template number characteristic is required.
    #[error("record {record}: missing template number")]
    MissingTemplate { record: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EmitError>;
