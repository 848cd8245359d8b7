//! Status displays.
//!
//! Turns status snapshots into colored text lines, and provides the
//! terminal sink plus a channel sink that hands snapshots to a dedicated
//! render task.

mod channel;
mod terminal;

pub use channel::{ChannelSink, spawn_renderer};
pub use terminal::{DisplayMode, TerminalDisplay};

use console::{measure_text_width, style};
use probe_domain::{AssertionStatus, RunSummary, StatusColor, StatusSnapshot, TestStatus};

/// Indent applied to assertion lines.
const ASSERTION_INDENT: &str = "     ";

/// Separator between the test list and the counters.
const SEPARATOR: &str = "============================================";

/// One line of output and the color it is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Unstyled text.
    pub text: String,
    /// Color, if any.
    pub color: Option<StatusColor>,
}

impl RenderedLine {
    fn new(text: impl Into<String>, color: Option<StatusColor>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    /// Returns the text with terminal styling applied.
    #[must_use]
    pub fn styled(&self) -> String {
        let text = style(&self.text);
        match self.color {
            None => text,
            Some(StatusColor::Pending) => text.blue(),
            Some(StatusColor::Running) => text.yellow(),
            Some(StatusColor::Pass) => text.green(),
            Some(StatusColor::Fail) => text.red(),
        }
        .to_string()
    }
}

/// Lines for one test and its assertions.
#[must_use]
pub fn test_lines(test: &TestStatus) -> Vec<RenderedLine> {
    std::iter::once(RenderedLine::new(&test.title, Some(test.color)))
        .chain(test.assertions.iter().map(assertion_line))
        .collect()
}

fn assertion_line(assertion: &AssertionStatus) -> RenderedLine {
    let text = if assertion.failure_message.is_empty() {
        format!("{ASSERTION_INDENT}{}", assertion.title)
    } else {
        format!(
            "{ASSERTION_INDENT}{} - {}",
            assertion.title, assertion.failure_message
        )
    };
    RenderedLine::new(text, Some(assertion.color))
}

/// Separator and counter lines.
#[must_use]
pub fn summary_lines(summary: &RunSummary) -> Vec<RenderedLine> {
    vec![
        RenderedLine::new(SEPARATOR, None),
        RenderedLine::new(
            format!("Tests Passed: {}", summary.passed),
            Some(StatusColor::Pass),
        ),
        RenderedLine::new(
            format!("Tests Failed: {}", summary.failed),
            Some(StatusColor::Fail),
        ),
        RenderedLine::new(
            format!("Tests Left: {}", summary.remaining),
            Some(StatusColor::Pending),
        ),
    ]
}

/// Every line of a snapshot, in display order.
#[must_use]
pub fn render_snapshot(snapshot: &StatusSnapshot) -> Vec<RenderedLine> {
    snapshot
        .tests
        .iter()
        .flat_map(test_lines)
        .chain(summary_lines(&snapshot.summary))
        .collect()
}

/// Terminal rows the lines occupy once long lines wrap at `width` columns.
#[must_use]
pub fn physical_rows(lines: &[RenderedLine], width: usize) -> usize {
    if width == 0 {
        return lines.len();
    }
    lines
        .iter()
        .map(|line| measure_text_width(&line.text).div_ceil(width).max(1))
        .sum()
}
