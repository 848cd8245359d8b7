//! Probe Domain - Core test runner types
//!
//! This crate defines the data model for the Probe HTTP test runner and the
//! assertion evaluator. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod request;
pub mod response;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use request::{Header, Headers, HttpMethod, RequestOptions};
pub use response::ResponseSnapshot;
pub use testing::{
    AssertionKind, AssertionSpec, AssertionStatus, Comparator, RunSummary, StatusColor,
    StatusSnapshot, TestCase, TestStatus, TestSuite, Verdict, evaluate,
};
