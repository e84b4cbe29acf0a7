//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network — the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the core deterministic and easy to
//! test against canned response bodies.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! whatever HTTP executor the caller prefers without lifetime concerns.

/// HTTP method for a request.
///
/// The Trakt API only ever uses these three: comment updates go over POST,
/// not PUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `build_*` methods on the service handles. The caller is
/// responsible for executing this request against the network and returning
/// the corresponding `HttpResponse`. `path` is the full URL including the
/// base URL and any query string; `headers` already carry the Trakt API
/// headers and, when a token is set, the bearer credential.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to the matching `parse_*` method for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
