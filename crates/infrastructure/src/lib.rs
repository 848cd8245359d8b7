//! Probe Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer: the reqwest transport and the terminal display, plus
//! loading suites from files.

pub mod adapters;
pub mod display;
pub mod loader;

pub use adapters::{DEFAULT_USER_AGENT, ReqwestTransport};
pub use display::{
    ChannelSink, DisplayMode, TerminalDisplay, physical_rows, render_snapshot, spawn_renderer,
};
pub use loader::{LoaderError, SuiteFormat, load_suite, parse_suite};
