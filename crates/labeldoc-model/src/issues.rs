//! Typed diagnostics collected during a conversion.
//!
//! Diagnostics never stop processing (fatal conditions are crate errors);
//! they are logged as they occur and surfaced in the run summary.

use serde::Serialize;

/// Diagnostic severity. Fatal conditions are modeled as errors in the
/// per-crate error enums, not as issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Suspect data; the offending value was still used or the line skipped.
    Warning,
    /// Operator notice (substitutions, ignored columns).
    Info,
}

/// A single diagnostic finding.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Stable short code, e.g. `BC001` for a GTIN check-digit mismatch.
    pub code: String,
    pub severity: Severity,
    /// 1-based record position in label-sorted order, when applicable.
    pub record: Option<usize>,
    /// Column / characteristic name, when applicable.
    pub column: Option<String>,
    pub message: String,
}

impl Issue {
    pub fn warning(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: Severity::Warning,
            record: None,
            column: None,
            message: message.into(),
        }
    }

    pub fn info(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: Severity::Info,
            record: None,
            column: None,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn with_record(mut self, record: usize) -> Self {
        self.record = Some(record);
        self
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

/// Count issues of a given severity.
pub fn count_of(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|issue| issue.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_context() {
        let issue = Issue::warning("BC001", "check digit mismatch")
            .with_record(3)
            .with_column("BARCODETEXT");
        assert_eq!(issue.record, Some(3));
        assert_eq!(issue.column.as_deref(), Some("BARCODETEXT"));
        assert_eq!(issue.severity, Severity::Warning);
    }

    #[test]
    fn counts_by_severity() {
        let issues = vec![
            Issue::warning("REV001", "bad revision"),
            Issue::info("COL003", "substitution"),
            Issue::warning("REL001", "bad date"),
        ];
        assert_eq!(count_of(&issues, Severity::Warning), 2);
        assert_eq!(count_of(&issues, Severity::Info), 1);
    }

    #[test]
    fn issue_serializes() {
        let issue = Issue::warning("LVL001", "not a standard LEVEL value").with_record(1);
        let json = serde_json::to_string(&issue).expect("serialize issue");
        assert!(json.contains("LVL001"));
        assert!(json.contains("Warning"));
    }
}
