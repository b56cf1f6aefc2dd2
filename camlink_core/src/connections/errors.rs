use std::fmt::{self, Display};

/// A central error enum for connection-attempt failures.
///
/// The variants keep the failure classified for callers and tests; the
/// `Display` output is the flat human-readable string that ends up in the
/// event log.
#[derive(Debug)]
pub enum ConnectError {
    /// The target could not be reached: resolution failure, refused,
    /// unreachable, or the attempt deadline expired.
    Dial(std::io::Error),
    /// The server rejected the supplied credentials.
    Auth(String),
    /// Handshake, host-key trust, or channel negotiation failed.
    Protocol(String),
}

/// Convert from std::io::Error.
/// Socket-level failures are dial errors by definition.
impl From<std::io::Error> for ConnectError {
    fn from(err: std::io::Error) -> ConnectError {
        ConnectError::Dial(err)
    }
}

/// Convert from ssh2::Error.
/// Authentication errors are mapped explicitly at the call site; anything
/// that reaches this blanket conversion is a protocol-level failure.
impl From<ssh2::Error> for ConnectError {
    fn from(err: ssh2::Error) -> Self {
        ConnectError::Protocol(err.to_string())
    }
}

impl Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::Dial(e) => write!(f, "dial error: {}", e),
            ConnectError::Auth(msg) => write!(f, "authentication error: {}", msg),
            ConnectError::Protocol(msg) => write!(f, "protocol error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectError {}
