//! Terminal status sink.

use std::io;
use std::sync::Mutex;

use console::Term;
use probe_application::ports::StatusSink;
use probe_domain::StatusSnapshot;
use tracing::warn;

use super::{RenderedLine, physical_rows, render_snapshot, summary_lines, test_lines};

/// How the terminal display draws snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Redraw the whole status block on every snapshot.
    Live,
    /// Append each test once it settles, then the counters at the end.
    Plain,
}

#[derive(Debug, Default)]
struct DrawState {
    /// Lines drawn by the last live redraw.
    frame: Vec<RenderedLine>,
    /// Tests already printed in plain mode.
    printed: usize,
    /// Whether the plain-mode summary was printed.
    summary_printed: bool,
}

/// Renders run status to a terminal.
#[derive(Debug)]
pub struct TerminalDisplay {
    term: Term,
    mode: DisplayMode,
    state: Mutex<DrawState>,
}

impl TerminalDisplay {
    /// Creates a display on the given terminal.
    #[must_use]
    pub fn new(term: Term, mode: DisplayMode) -> Self {
        Self {
            term,
            mode,
            state: Mutex::new(DrawState::default()),
        }
    }

    /// Display on stdout; live when stdout is a terminal, plain otherwise.
    #[must_use]
    pub fn stdout() -> Self {
        let term = Term::stdout();
        let mode = if term.is_term() {
            DisplayMode::Live
        } else {
            DisplayMode::Plain
        };
        Self::new(term, mode)
    }

    /// Display on stdout that never redraws.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(Term::stdout(), DisplayMode::Plain)
    }

    /// Returns the drawing mode.
    #[must_use]
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Terminal width in columns.
    fn width(&self) -> usize {
        usize::from(self.term.size().1)
    }

    fn write_lines(&self, lines: &[RenderedLine]) -> io::Result<()> {
        for line in lines {
            self.term.write_line(&line.styled())?;
        }
        Ok(())
    }

    fn redraw(&self, state: &mut DrawState, snapshot: &StatusSnapshot) -> io::Result<()> {
        let lines = render_snapshot(snapshot);
        // Measured at the current width so wrapped lines are cleared too
        let rows = physical_rows(&state.frame, self.width());
        if rows > 0 {
            self.term.clear_last_lines(rows)?;
        }
        self.write_lines(&lines)?;
        state.frame = lines;
        self.term.flush()
    }

    fn append(&self, state: &mut DrawState, snapshot: &StatusSnapshot) -> io::Result<()> {
        let settled = snapshot
            .tests
            .iter()
            .skip(state.printed)
            .take_while(|test| test.color.is_terminal());
        for test in settled {
            self.write_lines(&test_lines(test))?;
            state.printed += 1;
        }

        if snapshot.summary.is_complete() && !state.summary_printed {
            self.write_lines(&summary_lines(&snapshot.summary))?;
            state.summary_printed = true;
        }
        self.term.flush()
    }
}

impl StatusSink for TerminalDisplay {
    fn publish(&self, snapshot: &StatusSnapshot) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };

        let result = match self.mode {
            DisplayMode::Live => self.redraw(&mut state, snapshot),
            DisplayMode::Plain => self.append(&mut state, snapshot),
        };
        if let Err(error) = result {
            warn!(%error, "failed to draw status");
        }
    }
}
