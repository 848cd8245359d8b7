//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the execution engine and external
//! systems. Adapters in the infrastructure layer implement them.

mod http_transport;
mod status_sink;

pub use http_transport::{HttpResponse, HttpTransport, TransportError};
pub use status_sink::{MemorySink, StatusSink};
