//! HTTP plumbing between the API operations and a node
//!
//! Every API call goes through the [`Transport`] trait: open a connection
//! for one request path, send/read once, close. The shipped implementation
//! is [`HttpTransport`] on top of a blocking `reqwest` client.

pub mod http;

pub use http::{HttpContext, HttpResponse, HttpTransport, Transport, CONTENT_TYPE_JSON};
