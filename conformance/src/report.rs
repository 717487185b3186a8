//! Conformance report types: results, severity levels, and report aggregation.

use serde::Serialize;

/// Severity level of a conformance check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The server missed optional ("SHOULD") behavior (non-blocking).
    Warning,
    /// The server violated required ("MUST") behavior (blocks conformance).
    Failure,
    /// The check could not run (missing configuration or capability).
    Skipped,
}

impl Severity {
    /// Returns the tag printed in text reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
            Severity::Skipped => "SKIP",
        }
    }
}

/// A single conformance check result.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Identifier of the validator that produced this result (e.g., `core/catalog`).
    pub validator: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    /// Creates a passing result.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(validator, message, Severity::Pass)
    }

    /// Creates a failure result.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(validator, message, Severity::Failure)
    }

    /// Creates a failure result with additional detail lines.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// Creates a warning result.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(validator, message, Severity::Warning)
    }

    /// Creates a skipped result.
    pub fn skip(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(validator, message, Severity::Skipped)
    }

    fn with_severity(
        validator: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated conformance report from all validators.
#[derive(Debug, Serialize)]
pub struct ConformanceReport {
    /// All individual test results across all validators.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Extends this report with results from another report.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Runs one fallible check and records its outcome.
    ///
    /// An `Err` from the check becomes a failure of that check alone; the
    /// remaining checks of the validator still run.
    pub fn record<F>(&mut self, validator: &str, check: F)
    where
        F: FnOnce() -> anyhow::Result<TestResult>,
    {
        match check() {
            Ok(result) => self.push(result),
            Err(err) => {
                tracing::debug!(validator, error = %err, "check aborted");
                self.push(TestResult::fail_with_details(
                    validator,
                    format!("{:#}", err),
                    err.chain().skip(1).map(ToString::to_string).collect(),
                ));
            }
        }
    }

    /// Returns the count of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns the count of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Returns the count of passed checks.
    pub fn pass_count(&self) -> usize {
        self.count(Severity::Pass)
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

impl Default for ConformanceReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_turns_errors_into_failures() {
        let mut report = ConformanceReport::new();
        report.record("core/fetch", || Ok(TestResult::pass("core/fetch", "ok")));
        report.record("core/fetch", || {
            Err(anyhow::anyhow!("connection refused")).map_err(|e| e.context("GET failed"))
        });

        assert_eq!(report.count(Severity::Pass), 1);
        assert_eq!(report.failure_count(), 1);
        let failure = &report.results[1];
        assert_eq!(failure.message, "GET failed: connection refused");
        assert_eq!(failure.details, vec!["connection refused".to_string()]);
        assert!(!report.all_passed());
    }

    #[test]
    fn warnings_and_skips_do_not_fail() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::warn("core/fetch", "no ETag"));
        report.push(TestResult::skip("domains/trs", "no TRS configured"));
        assert!(report.all_passed());
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Skipped), 1);
    }

    #[test]
    fn serializes_severity_lowercase() {
        let result = TestResult::fail("core/catalog", "bad");
        let json = serde_json::to_value(&result).unwrap_or_default();
        assert_eq!(json["severity"], "failure");
        assert!(json.get("details").is_none());
    }
}
