//! Generic driver that executes a `TestSuite` using a pluggable engine.

use crate::suites::kat::error::Result;
use crate::suites::kat::model::{TestCase, TestGroup, TestSuite};
use tracing::{info, warn};

/// Trait every field back-end must implement.
pub trait KatEngine {
    /// Execute one test case and return `Ok(())` on success.
    fn run(&self, group: &TestGroup, case: &TestCase) -> Result<()>;
}

/// Outcome counts for one suite run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    /// Cases marked `invalid` that were correctly rejected
    pub rejected: usize,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    pub fn run_suite(&self, suite: &TestSuite) -> std::result::Result<Summary, String> {
        let mut summary = Summary::default();

        for group in &suite.groups {
            info!(
                group = group.group_id,
                algorithm = %group.algorithm,
                operation = %group.operation,
                "running group"
            );

            for case in &group.tests {
                let res = self.engine.run(group, case);
                match (res, case.expected_result.as_str()) {
                    (Ok(()), "valid") => summary.passed += 1,
                    (Err(_), "invalid") => {
                        summary.passed += 1;
                        summary.rejected += 1;
                    }
                    (Ok(()), expected) => {
                        summary.failed += 1;
                        warn!(case = case.test_id, expected, "case succeeded unexpectedly");
                    }
                    (Err(e), _) => {
                        summary.failed += 1;
                        warn!(case = case.test_id, error = %e, "case failed");
                    }
                }
            }
        }

        info!(passed = summary.passed, failed = summary.failed, "suite finished");
        if summary.failed > 0 {
            Err(format!("{} tests failed", summary.failed))
        } else {
            Ok(summary)
        }
    }
}
