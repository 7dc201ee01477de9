//! The download pipeline.
//!
//! One strictly sequential pass per invocation: resolve the host, connect,
//! send the GET request, accumulate the response headers, then stream the
//! body to the destination file. No retries, no concurrency, no timeouts
//! beyond OS socket defaults.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, lookup_host};
use tracing::{debug, info, warn};

use crate::http::parser;
use crate::http::request::build_get_request;
use crate::target::RequestTarget;

/// Size of each socket read.
const READ_CHUNK_SIZE: usize = 4096;

/// Cap on accumulated bytes while searching for the header delimiter.
const MAX_HEADER_SIZE: usize = 8192;

/// Length of the `\r\n\r\n` header/body delimiter.
const HEADER_DELIMITER_LEN: usize = 4;

/// Result of a completed pipeline run.
#[derive(Debug)]
pub enum Outcome {
    /// A 200 response whose body was written to `file`. `bytes_written`
    /// may be smaller than `declared_length` when the server closed the
    /// connection early; the partial file is kept.
    Saved {
        file: PathBuf,
        bytes_written: u64,
        declared_length: u64,
    },
    /// Any non-200 response. No file is created.
    NotOk { code: u16, status_line: String },
}

/// Downloads `target` into the file at `dest`.
///
/// The destination is created (truncating any existing file) only after
/// the response carries a 200 status and a Content-Length header, so no
/// file appears on the error or non-200 paths.
pub async fn fetch(target: &RequestTarget, dest: &Path) -> Result<Outcome> {
    let addr = resolve(target).await?;
    debug!(host = %target.host, addr = %addr, "Resolved host");

    let mut stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("failed to connect to {addr}"))?;
    debug!(addr = %addr, "Connected");

    let request = build_get_request(target)?;
    stream
        .write_all(&request)
        .await
        .context("failed to send request")?;
    stream.flush().await.context("failed to send request")?;
    debug!(bytes = request.len(), "Request sent");

    let (header_buf, headers_end) = read_headers(&mut stream).await?;
    let header = &header_buf[..headers_end];

    let status = parser::parse_status_line(header)?;
    if status.code != 200 {
        info!(code = status.code, "Server returned non-200 status");
        return Ok(Outcome::NotOk {
            code: status.code,
            status_line: status.text,
        });
    }

    let declared_length = parser::content_length(header)?;
    debug!(declared_length, "Parsed response headers");

    let mut file = File::create(dest)
        .await
        .with_context(|| format!("failed to create {}", dest.display()))?;

    let preread = &header_buf[headers_end + HEADER_DELIMITER_LEN..];
    let bytes_written = transfer_body(&mut stream, &mut file, preread, declared_length).await?;
    file.flush().await.context("failed to flush output file")?;

    if bytes_written < declared_length {
        warn!(
            bytes_written,
            declared_length, "Connection closed before full body received, keeping partial file"
        );
    } else {
        info!(bytes_written, file = %dest.display(), "Download complete");
    }

    Ok(Outcome::Saved {
        file: dest.to_path_buf(),
        bytes_written,
        declared_length,
    })
}

/// Resolves the target host to its first IPv4 address.
///
/// IPv6 results are skipped; no fallback, no retry.
async fn resolve(target: &RequestTarget) -> Result<SocketAddr> {
    let mut addrs = lookup_host((target.host.as_str(), target.port))
        .await
        .with_context(|| format!("failed to resolve {}", target.host))?;

    addrs
        .find(SocketAddr::is_ipv4)
        .with_context(|| format!("no IPv4 address for {}", target.host))
}

/// Reads from the socket until the header delimiter appears.
///
/// Returns the accumulator (headers plus any preread body bytes from the
/// final read) and the delimiter offset. Fails if the connection closes
/// first or the accumulator would exceed [`MAX_HEADER_SIZE`].
async fn read_headers(stream: &mut TcpStream) -> Result<(BytesMut, usize)> {
    let mut buf = BytesMut::with_capacity(MAX_HEADER_SIZE);
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        if let Some(pos) = parser::find_headers_end(&buf) {
            return Ok((buf, pos));
        }

        let n = stream
            .read(&mut chunk)
            .await
            .context("failed to read response headers")?;
        if n == 0 {
            bail!("connection closed before end of response headers");
        }
        if buf.len() + n > MAX_HEADER_SIZE {
            bail!("response headers exceed {MAX_HEADER_SIZE} bytes");
        }

        buf.extend_from_slice(&chunk[..n]);
    }
}

/// Streams the response body into `file`, returning the bytes written.
///
/// `preread` holds body bytes that arrived bundled with the headers; they
/// are written first, capped at the declared length so split and
/// single-read deliveries produce identical files. A connection close or
/// read error mid-body is a soft stop: the partial file stays in place
/// and the caller reports the shortfall. Write failures are fatal.
async fn transfer_body(
    stream: &mut TcpStream,
    file: &mut File,
    preread: &[u8],
    declared_length: u64,
) -> Result<u64> {
    let head = &preread[..preread.len().min(declared_length as usize)];
    file.write_all(head)
        .await
        .context("failed to write to output file")?;
    let mut written = head.len() as u64;

    let mut chunk = [0u8; READ_CHUNK_SIZE];
    while written < declared_length {
        let remaining = declared_length - written;
        let to_read = remaining.min(READ_CHUNK_SIZE as u64) as usize;

        let n = match stream.read(&mut chunk[..to_read]).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "Read failed mid-body, keeping partial file");
                break;
            }
        };

        file.write_all(&chunk[..n])
            .await
            .context("failed to write to output file")?;
        written += n as u64;
    }

    Ok(written)
}
