use thiserror::Error;

use crate::target::RequestTarget;

/// Upper bound on the formatted request.
pub const MAX_REQUEST_SIZE: usize = 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    /// The formatted request would not fit the request buffer.
    #[error("formatted request is {0} bytes, limit is 1024")]
    TooLarge(usize),
}

/// Formats the HTTP/1.0 GET request for a target.
///
/// Produces exactly `GET <path> HTTP/1.0\r\nHost: <host>:<port>\r\n\r\n` —
/// no User-Agent, Accept, or Connection headers. Requests longer than
/// [`MAX_REQUEST_SIZE`] are rejected rather than truncated.
pub fn build_get_request(target: &RequestTarget) -> Result<Vec<u8>, RequestError> {
    let request = format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\n\r\n",
        target.path,
        target.host_header()
    );

    if request.len() > MAX_REQUEST_SIZE {
        return Err(RequestError::TooLarge(request.len()));
    }

    Ok(request.into_bytes())
}
