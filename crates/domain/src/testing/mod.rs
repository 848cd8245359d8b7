//! Declarative HTTP tests, their evaluation, and run status.

mod assertion;
mod case;
mod status;
pub mod value;

pub use assertion::{
    AssertionKind, AssertionSpec, Comparator, INVALID_COMPARATOR_MESSAGE, INVALID_KIND_MESSAGE,
    Verdict, evaluate,
};
pub use case::{TestCase, TestSuite};
pub use status::{AssertionStatus, RunSummary, StatusColor, StatusSnapshot, TestStatus};
