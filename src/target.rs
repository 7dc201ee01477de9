use thiserror::Error;

/// Errors produced while validating the raw command-line target.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    /// Port is non-numeric, zero, or above 65535.
    #[error("invalid port: {0:?}")]
    InvalidPort(String),
    /// Request path must be absolute.
    #[error("path must start with '/': {0:?}")]
    RelativePath(String),
}

/// A validated download target.
///
/// Built once at startup and never mutated afterwards. Host and path are
/// passed through as-is: no escaping, no percent-decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl RequestTarget {
    /// Validates host, port string, and path into a target.
    pub fn new(host: &str, port: &str, path: &str) -> Result<Self, TargetError> {
        let port: u16 = port
            .parse()
            .map_err(|_| TargetError::InvalidPort(port.to_string()))?;
        if port == 0 {
            return Err(TargetError::InvalidPort("0".to_string()));
        }
        if !path.starts_with('/') {
            return Err(TargetError::RelativePath(path.to_string()));
        }
        Ok(Self {
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }

    /// Name of the local output file: the final path segment, or
    /// `index.html` when the path is `/` or ends with `/`.
    ///
    /// The name is used verbatim in the current working directory; no
    /// directory traversal sanitization is applied.
    pub fn output_filename(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((_, name)) if !name.is_empty() => name,
            _ => "index.html",
        }
    }

    /// Value for the `Host` request header.
    pub fn host_header(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_falls_back_to_index_html_for_root() {
        let target = RequestTarget::new("example.com", "80", "/").unwrap();
        assert_eq!(target.output_filename(), "index.html");
    }
}
