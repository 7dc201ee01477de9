//! HTTP/1.0 wire format.
//!
//! The client speaks a deliberately small subset of the protocol:
//!
//! - **`request`**: formats the single GET request sent upstream
//! - **`parser`**: locates the header/body delimiter and extracts the
//!   status line and Content-Length from raw response bytes
//!
//! Chunked transfer encoding, redirects, and responses without a
//! Content-Length header are out of scope.

pub mod parser;
pub mod request;
