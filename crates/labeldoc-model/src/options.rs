//! Run options shared by the pipeline stages.

/// Graphics folder stamped into every graphic characteristic line.
pub const DEFAULT_GRAPHICS_DIR: &str = r"T:\MEDICAL\NA\RTP\TEAM CENTER\TEMPLATES\GRAPHICS\";

/// Document control number stamped on every line.
pub const DEFAULT_CONTROL_NUMBER: &str = "2541435";

/// Options selected on the command line and threaded through dispatch and
/// serialization.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Populate and emit the non-standard columns (GTIN, IPN, DESCRIPTION,
    /// OLDLABEL, OLDTEMPLATE, PREVLABEL, PREVTEMPLATE).
    pub non_standard_fields: bool,
    /// Directory prepended to every graphic file reference.
    pub graphics_dir: String,
    /// Fixed document control number.
    pub control_number: String,
    /// Also write the tab-delimited label-data extract.
    pub label_data: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            non_standard_fields: false,
            graphics_dir: DEFAULT_GRAPHICS_DIR.to_string(),
            control_number: DEFAULT_CONTROL_NUMBER.to_string(),
            label_data: false,
        }
    }
}
