//! Conformance validators.
//!
//! `oslc_core` holds the OSLC Core groups (discovery, fetch, creation,
//! query); `domains` holds one validator per OSLC domain specification.
//! Every validator returns its own [`ConformanceReport`]; the runner in
//! the crate root concatenates them.

pub mod domains;
pub mod oslc_core;

use anyhow::Result;

use crate::http::OslcResponse;
use crate::report::{ConformanceReport, TestResult};
use crate::shape::Violation;

/// Runs a fallible step whose value later checks depend on. An `Err` is
/// recorded as a failure and yields `None`.
pub(crate) fn attempt<T>(
    report: &mut ConformanceReport,
    validator: &str,
    step: impl FnOnce() -> Result<T>,
) -> Option<T> {
    match step() {
        Ok(value) => Some(value),
        Err(err) => {
            report.record(validator, || Err(err));
            None
        }
    }
}

/// Fails unless the response status is one of `expected`.
pub(crate) fn expect_status(
    validator: &str,
    what: &str,
    response: &OslcResponse,
    expected: &[u16],
) -> TestResult {
    if expected.contains(&response.status) {
        TestResult::pass(validator, format!("{} returned {}", what, response.status))
    } else {
        TestResult::fail(
            validator,
            format!(
                "{} returned {} (expected {})",
                what,
                response.status,
                join_statuses(expected)
            ),
        )
    }
}

/// Warns unless the response status is one of `expected`.
pub(crate) fn prefer_status(
    validator: &str,
    what: &str,
    response: &OslcResponse,
    expected: &[u16],
) -> TestResult {
    let result = expect_status(validator, what, response, expected);
    if result.is_failure() {
        TestResult::warn(validator, result.message)
    } else {
        result
    }
}

/// Turns shape violations into one result.
pub(crate) fn shape_result(validator: &str, subject: &str, violations: Vec<Violation>) -> TestResult {
    if violations.is_empty() {
        TestResult::pass(validator, format!("{} satisfies its resource shape", subject))
    } else {
        TestResult::fail_with_details(
            validator,
            format!("{} violates {} shape constraint(s)", subject, violations.len()),
            violations.iter().map(ToString::to_string).collect(),
        )
    }
}

fn join_statuses(statuses: &[u16]) -> String {
    statuses
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(" or ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;

    fn response(status: u16) -> OslcResponse {
        OslcResponse {
            status,
            url: "http://example.com/r".to_string(),
            headers: Default::default(),
            body: Vec::new(),
        }
    }

    #[test]
    fn attempt_records_only_failures() {
        let mut report = ConformanceReport::new();
        let ok = attempt(&mut report, "core/fetch", || Ok(7));
        assert_eq!(ok, Some(7));
        assert!(report.results.is_empty());

        let failed: Option<u8> = attempt(&mut report, "core/fetch", || anyhow::bail!("boom"));
        assert_eq!(failed, None);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].message, "boom");
    }

    #[test]
    fn status_helpers_grade_responses() {
        let created = expect_status("core/creation", "POST", &response(201), &[201]);
        assert_eq!(created.severity, Severity::Pass);

        let wrong = expect_status("core/creation", "PUT", &response(500), &[200, 204]);
        assert_eq!(wrong.severity, Severity::Failure);
        assert_eq!(wrong.message, "PUT returned 500 (expected 200 or 204)");

        let soft = prefer_status("core/fetch", "GET bogus type", &response(200), &[406]);
        assert_eq!(soft.severity, Severity::Warning);
        assert_eq!(soft.message, "GET bogus type returned 200 (expected 406)");
    }
}
