//! Deterministic, filesystem-safe filenames for saved budgets.

use crate::model::BudgetSummary;

/// chrono format string for the timestamp component, e.g. `20250514T153045Z`.
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Build the output filename for a budget:
/// `<sanitized_name>_<id>_<YYYYMMDDThhmmssZ>.json`.
///
/// The timestamp has one-second resolution, so re-fetching the same budget within the same
/// second produces the same name and overwrites the previous file.
pub(crate) fn build_filename(budget: &BudgetSummary) -> String {
    let safe = sanitize_file_name(&budget.name);
    let ts = budget.last_modified_on.format(TIMESTAMP_FORMAT);
    format!("{safe}_{}_{ts}.json", budget.id)
}

/// Make a budget name safe to use as a filename component.
///
/// Spaces and forward slashes become underscores; every remaining character that is not a
/// Unicode letter, digit, `_`, `-`, `+`, `(`, `)` or `.` is dropped. Total over all input and
/// idempotent, but not injective: distinct names can collapse to the same output.
pub(crate) fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| if c == ' ' || c == '/' { '_' } else { c })
        .filter(|&c| {
            matches!(c, '_' | '-' | '+' | '(' | ')' | '.') || c.is_alphabetic() || c.is_numeric()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn sanitize_table() {
        let cases = [
            ("My Budget/Name", "My_Budget_Name"),
            ("Budget:Special*Chars?", "BudgetSpecialChars"),
            ("  Leading and Trailing  ", "__Leading_and_Trailing__"),
            ("Complex-Name_123+()", "Complex-Name_123+()"),
        ];
        for (input, want) in cases {
            assert_eq!(sanitize_file_name(input), want, "input {input:?}");
        }
    }

    #[test]
    fn sanitize_is_idempotent() {
        let inputs = [
            "My Budget/Name",
            "Budget:Special*Chars?",
            "über Büdget",
            "semi;colon\"quote'tick",
            "",
        ];
        for input in inputs {
            let once = sanitize_file_name(input);
            assert_eq!(sanitize_file_name(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn sanitize_keeps_unicode_letters() {
        assert_eq!(sanitize_file_name("über Büdget"), "über_Büdget");
    }

    #[test]
    fn build_filename_format() {
        let budget = BudgetSummary {
            id: "abc123".to_string(),
            name: "My Budget".to_string(),
            last_modified_on: Utc.with_ymd_and_hms(2025, 5, 14, 15, 30, 45).unwrap(),
        };
        assert_eq!(
            build_filename(&budget),
            "My_Budget_abc123_20250514T153045Z.json"
        );
    }
}
