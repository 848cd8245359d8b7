//! Live run status published to displays.
//!
//! A [`StatusSnapshot`] mirrors the input suite index for index: one
//! [`TestStatus`] per test case and one [`AssertionStatus`] per assertion.
//! The transition methods keep the counters consistent with the colors.

use serde::{Deserialize, Serialize};

use super::{TestCase, Verdict};

/// Display state of a test or an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    /// Not started yet.
    #[default]
    Pending,
    /// Request in flight (tests only).
    Running,
    /// Passed.
    Pass,
    /// Failed.
    Fail,
}

impl StatusColor {
    /// Conventional color name for this state.
    #[must_use]
    pub const fn color_name(self) -> &'static str {
        match self {
            Self::Pending => "blue",
            Self::Running => "yellow",
            Self::Pass => "green",
            Self::Fail => "red",
        }
    }

    /// Returns true for `Pass` and `Fail`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Pass | Self::Fail)
    }
}

/// Status of one assertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionStatus {
    /// Assertion title.
    pub title: String,
    /// Current color.
    pub color: StatusColor,
    /// Failure message, empty unless failed.
    #[serde(default)]
    pub failure_message: String,
}

impl AssertionStatus {
    /// Creates a pending assertion status.
    #[must_use]
    pub fn pending(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: StatusColor::Pending,
            failure_message: String::new(),
        }
    }

    /// Records a verdict.
    pub fn resolve(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Pass => {
                self.color = StatusColor::Pass;
                self.failure_message.clear();
            }
            Verdict::Fail(message) => {
                self.color = StatusColor::Fail;
                self.failure_message = message;
            }
        }
    }
}

/// Status of one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestStatus {
    /// Test title.
    pub title: String,
    /// Current color.
    pub color: StatusColor,
    /// Assertion statuses, in assertion order.
    pub assertions: Vec<AssertionStatus>,
}

impl TestStatus {
    /// Creates a pending status mirroring a test case.
    #[must_use]
    pub fn pending(test: &TestCase) -> Self {
        Self {
            title: test.title.clone(),
            color: StatusColor::Pending,
            assertions: test
                .assertions
                .iter()
                .map(|a| AssertionStatus::pending(&a.title))
                .collect(),
        }
    }

    /// True when every assertion passed. Vacuously true with no assertions.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.assertions.iter().all(|a| a.color == StatusColor::Pass)
    }
}

/// Aggregate counters for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests that passed.
    pub passed: usize,
    /// Tests that failed.
    pub failed: usize,
    /// Tests not finished yet.
    pub remaining: usize,
}

impl RunSummary {
    /// Counters for a run of `total` tests.
    #[must_use]
    pub const fn new(total: usize) -> Self {
        Self {
            passed: 0,
            failed: 0,
            remaining: total,
        }
    }

    /// Total tests in the run.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.passed + self.failed + self.remaining
    }

    /// Returns true once no tests remain.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Moves one test from remaining to passed or failed.
    pub const fn record(&mut self, passed: bool) {
        self.remaining = self.remaining.saturating_sub(1);
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Full rendering-relevant state of a run at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Test statuses, in suite order.
    pub tests: Vec<TestStatus>,
    /// Aggregate counters.
    pub summary: RunSummary,
}

impl StatusSnapshot {
    /// All tests and assertions pending.
    #[must_use]
    pub fn pending(tests: &[TestCase]) -> Self {
        Self {
            tests: tests.iter().map(TestStatus::pending).collect(),
            summary: RunSummary::new(tests.len()),
        }
    }

    /// Marks test `index` as running.
    pub fn start_test(&mut self, index: usize) {
        if let Some(test) = self.tests.get_mut(index) {
            test.color = StatusColor::Running;
        }
    }

    /// Records the verdict of assertion `assertion` of test `test`.
    pub fn resolve_assertion(&mut self, test: usize, assertion: usize, verdict: Verdict) {
        if let Some(status) = self
            .tests
            .get_mut(test)
            .and_then(|t| t.assertions.get_mut(assertion))
        {
            status.resolve(verdict);
        }
    }

    /// Fails test `index` and every one of its assertions with `message`.
    ///
    /// Used when no response could be obtained; the test fails even when it
    /// declares no assertions.
    pub fn fail_test(&mut self, index: usize, message: &str) -> StatusColor {
        let Some(test) = self.tests.get_mut(index) else {
            return StatusColor::Pending;
        };
        if test.color.is_terminal() {
            return test.color;
        }

        for assertion in &mut test.assertions {
            assertion.resolve(Verdict::Fail(message.to_string()));
        }
        test.color = StatusColor::Fail;
        self.summary.record(false);
        test.color
    }

    /// Settles test `index` from its assertions and updates the counters.
    ///
    /// Returns the final color. A test that already reached a terminal
    /// color is left untouched so counters move once per test.
    pub fn finish_test(&mut self, index: usize) -> StatusColor {
        let Some(test) = self.tests.get_mut(index) else {
            return StatusColor::Pending;
        };
        if test.color.is_terminal() {
            return test.color;
        }

        let passed = test.all_passed();
        test.color = if passed {
            StatusColor::Pass
        } else {
            StatusColor::Fail
        };
        self.summary.record(passed);
        test.color
    }
}
