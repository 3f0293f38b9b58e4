//! Transport layer for the Census client.

pub mod http;

pub use http::HttpTransport;
