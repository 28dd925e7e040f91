//! Data model for the label-to-IDoc converter.
//!
//! Holds the per-row [`LabelRecord`], the tri-state flag enumeration, the
//! characteristic-value lookup table, typed diagnostics, and the run options
//! shared by the pipeline stages.

pub mod error;
pub mod flags;
pub mod issues;
pub mod lookup;
pub mod options;
pub mod record;

pub use error::{ModelError, Result};
pub use flags::{TriState, cell_is_no, cell_is_yes};
pub use issues::{Issue, Severity};
pub use lookup::LookupTable;
pub use options::{ConvertOptions, DEFAULT_CONTROL_NUMBER, DEFAULT_GRAPHICS_DIR};
pub use record::{LabelRecord, sort_by_label};
