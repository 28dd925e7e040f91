//! IDoc document emission.
//!
//! Serializes sorted label records into the fixed-column hierarchical
//! document: one control record, then per label an optional material block,
//! the label block, optional free-text continuation lines, and the fixed
//! battery of characteristic lines. One global sequence counter ticks for
//! every line; parent back-references always point at the nearest preceding
//! ancestor of the right kind.

mod error;
mod graphics;
mod layout;
mod state;
mod writer;

pub use error::{EmitError, Result};
pub use graphics::{BLANK_GRAPHIC, graphic_field};
pub use layout::{pad_right, spaces};
pub use state::ControlState;
pub use writer::{EmitReport, IdocWriter};
