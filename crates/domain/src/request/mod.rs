//! Request configuration handed to the transport.

mod method;
mod options;

pub use method::HttpMethod;
pub use options::{Header, Headers, RequestOptions};
