use thiserror::Error;

/// Byte sequence terminating the header block.
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed status line")]
    InvalidStatusLine,
    #[error("response has no Content-Length header")]
    MissingContentLength,
    #[error("invalid Content-Length value")]
    InvalidContentLength,
}

/// Parsed first line of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Numeric status code.
    pub code: u16,
    /// The full line as received, without the trailing CRLF.
    pub text: String,
}

/// Offset of the `\r\n\r\n` delimiter in `buf`, if present.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}

/// Parses the status line from the start of the header bytes.
///
/// Requires an `HTTP/`-prefixed version token followed by a numeric code.
/// The reason phrase is kept only as part of [`StatusLine::text`].
pub fn parse_status_line(header: &[u8]) -> Result<StatusLine, ParseError> {
    let line_end = header
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(header.len());
    let text = String::from_utf8_lossy(&header[..line_end]).into_owned();

    let mut parts = text.split_whitespace();
    let version = parts.next().ok_or(ParseError::InvalidStatusLine)?;
    if !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidStatusLine);
    }
    let code = parts
        .next()
        .and_then(|c| c.parse::<u16>().ok())
        .ok_or(ParseError::InvalidStatusLine)?;

    Ok(StatusLine { code, text })
}

/// Extracts the Content-Length value from the header bytes.
///
/// The scan is case-sensitive on the exact token `Content-Length:`;
/// responses that spell the header differently or omit it are reported
/// as missing.
pub fn content_length(header: &[u8]) -> Result<u64, ParseError> {
    const TOKEN: &[u8] = b"Content-Length:";

    let start = header
        .windows(TOKEN.len())
        .position(|w| w == TOKEN)
        .ok_or(ParseError::MissingContentLength)?
        + TOKEN.len();

    let rest = &header[start..];
    let line_end = rest
        .windows(2)
        .position(|w| w == b"\r\n")
        .unwrap_or(rest.len());

    std::str::from_utf8(&rest[..line_end])
        .map_err(|_| ParseError::InvalidContentLength)?
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidContentLength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_delimiter_between_headers_and_body() {
        let raw = b"HTTP/1.0 200 OK\r\nContent-Length: 5\r\n\r\nhello";

        let end = find_headers_end(raw).unwrap();

        assert_eq!(&raw[end..end + 4], b"\r\n\r\n");
        assert_eq!(&raw[end + 4..], b"hello");
    }
}
