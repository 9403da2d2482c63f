//! Error types for the HTTP server.

use std::net::AddrParseError;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Host and port do not form a socket address.
    #[error("Invalid server address: {0}")]
    Address(#[from] AddrParseError),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_address_error_message() {
        let err: ServerError = SocketAddr::from_str("not a host:7979").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid server address"));
    }
}
