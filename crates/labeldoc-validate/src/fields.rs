//! Revision and release-date gates for characteristic emission.

use regex::Regex;

/// A revision is `R` followed by a number 0-99 (`R0`, `R7`, `R42`).
pub fn revision_is_valid(value: &str) -> bool {
    Regex::new(r"^R[0-9]{1,2}$")
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// A release date is `<year>-<month>` with year after 2019 and a real month.
pub fn release_date_is_valid(value: &str) -> bool {
    let Some(captures) = Regex::new(r"^([0-9]{1,9})-([0-9]{1,2})$")
        .ok()
        .and_then(|re| re.captures(value))
    else {
        return false;
    };
    let year: i64 = captures[1].parse().unwrap_or(0);
    let month: i64 = captures[2].parse().unwrap_or(0);
    year > 2019 && (1..=12).contains(&month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revision_accepts_r_zero_to_ninety_nine() {
        assert!(revision_is_valid("R0"));
        assert!(revision_is_valid("R7"));
        assert!(revision_is_valid("R99"));
        assert!(revision_is_valid("R04"));
    }

    #[test]
    fn revision_rejects_everything_else() {
        assert!(!revision_is_valid(""));
        assert!(!revision_is_valid("R"));
        assert!(!revision_is_valid("R100"));
        assert!(!revision_is_valid("7"));
        assert!(!revision_is_valid("rev7"));
        assert!(!revision_is_valid("R5x"));
    }

    #[test]
    fn release_accepts_recent_year_month() {
        assert!(release_date_is_valid("2020-1"));
        assert!(release_date_is_valid("2024-12"));
        assert!(release_date_is_valid("2021-06"));
    }

    #[test]
    fn release_rejects_old_years_and_bad_months() {
        assert!(!release_date_is_valid("2019-06"));
        assert!(!release_date_is_valid("2024-0"));
        assert!(!release_date_is_valid("2024-13"));
        assert!(!release_date_is_valid("2024"));
        assert!(!release_date_is_valid("2024-06-01"));
        assert!(!release_date_is_valid("june 2024"));
    }
}
