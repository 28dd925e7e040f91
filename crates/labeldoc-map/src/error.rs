use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    /// The same column heading appears more than once.
    #[error("duplicate column heading {name:?} in spreadsheet")]
    DuplicateColumn { name: String },

    /// MATERIAL and its PCODE alias are both present; the mapping would be
    /// ambiguous.
    #[error("found both \"MATERIAL\" and \"PCODE\" column headings; eliminate one")]
    MaterialAliasConflict,
}

pub type Result<T> = std::result::Result<T, MapError>;
