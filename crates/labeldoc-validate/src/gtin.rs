//! GTIN validation.
//!
//! Accepts 13- or 14-digit numeric values. A 14-digit value gets its check
//! digit recomputed; both lengths get country/company prefix extraction.
//! The two prefix conditions are evaluated independently and OR-combined
//! into a single diagnostic; the grouping reproduces the upstream rule
//! exactly (see DESIGN.md) rather than a plausible-looking correction.

use tracing::warn;

use labeldoc_model::Issue;

/// Divisor isolating the first digit of a 14-digit GTIN.
const GTIN_14_FIRST_DIGIT: u64 = 10_000_000_000_000;
/// Divisor isolating the first digit of a 13-digit GTIN.
const GTIN_13_FIRST_DIGIT: u64 = 1_000_000_000_000;
/// Divisors isolating the 7-digit company prefix after the country digit.
const GTIN_14_COMPANY: u64 = 1_000_000;
const GTIN_13_COMPANY: u64 = 100_000;

/// Approved GS1 company prefixes.
const APPROVED_COMPANY_PREFIXES: [u64; 2] = [4_026_704, 5_060_112];

/// Recompute the check digit of a GTIN value (the value's own final digit
/// is excluded from the weighted sum).
pub fn check_digit(value: u64) -> u64 {
    let mut payload = value / 10;
    let mut sum = 0;
    while payload > 0 {
        sum += 3 * (payload % 10);
        payload /= 10;
        sum += payload % 10;
        payload /= 10;
    }
    if sum % 10 == 0 { 0 } else { 10 - sum % 10 }
}

/// Validate one GTIN-carrying cell, returning diagnostics.
///
/// `report_nonnumeric` matches the per-column behavior: BARCODETEXT and GTIN
/// report non-numeric values, BARCODE1 and GS1 silently skip validation.
pub fn validate_gtin(column: &str, value: &str, record: usize, report_nonnumeric: bool) -> Vec<Issue> {
    let mut issues = Vec::new();

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        if report_nonnumeric {
            push(&mut issues, column, record, "BC004", format!("non-numeric GTIN \"{value}\""));
        }
        return issues;
    }

    let Ok(numeric) = value.parse::<u64>() else {
        push(
            &mut issues,
            column,
            record,
            "BC002",
            format!("invalid GTIN check digit or length \"{value}\""),
        );
        return issues;
    };

    let (country_prefix, company_prefix) = match value.len() {
        14 => {
            if numeric % 10 != check_digit(numeric) {
                push(
                    &mut issues,
                    column,
                    record,
                    "BC001",
                    format!("invalid GTIN check digit \"{value}\""),
                );
            }
            let country = numeric / GTIN_14_FIRST_DIGIT;
            let company = (numeric - country * GTIN_14_FIRST_DIGIT) / GTIN_14_COMPANY;
            (country, company)
        }
        13 => {
            let country = numeric / GTIN_13_FIRST_DIGIT;
            let company = (numeric - country * GTIN_13_FIRST_DIGIT) / GTIN_13_COMPANY;
            (country, company)
        }
        _ => {
            push(
                &mut issues,
                column,
                record,
                "BC002",
                format!("invalid GTIN check digit or length \"{value}\""),
            );
            return issues;
        }
    };

    // Two separate conditions, OR-combined. The all-zero placeholder value
    // suppresses only the company half.
    let country_out_of_range = country_prefix > 4;
    let company_unapproved = numeric != 0 && !APPROVED_COMPANY_PREFIXES.contains(&company_prefix);
    if country_out_of_range || company_unapproved {
        push(
            &mut issues,
            column,
            record,
            "BC003",
            format!("invalid GTIN prefix \"{company_prefix}\""),
        );
    }

    issues
}

fn push(issues: &mut Vec<Issue>, column: &str, record: usize, code: &str, message: String) {
    warn!(column, record, "{message}");
    issues.push(Issue::warning(code, message).with_record(record).with_column(column));
}
