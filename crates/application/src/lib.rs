//! Probe Application - Test execution engine and ports
//!
//! This crate defines the application layer with:
//! - Port traits for the HTTP transport and the status display
//! - The sequential test execution engine
//! - Application-level error handling

pub mod error;
pub mod ports;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpResponse, HttpTransport, MemorySink, StatusSink, TransportError};
pub use run_tests::{RunReport, TestEngine, run_tests};
