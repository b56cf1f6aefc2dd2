use std::time::Duration;

use async_trait::async_trait;

use super::errors::ConnectError;

/// Per-attempt connection parameters.
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    /// Remote shell port. The protocol's standard port, 22, unless the
    /// device is configured otherwise.
    pub port: u16,
    /// Bounds the TCP dial and each socket read/write inside the attempt.
    pub timeout: Duration,
    /// Check the server's host key against the user's OpenSSH
    /// `known_hosts` file. Turning this off accepts any remote identity;
    /// callers must opt into that explicitly.
    pub verify_host_key: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            port: 22,
            timeout: Duration::from_secs(5),
            verify_host_key: true,
        }
    }
}

/// A trait representing one attemptable connection to a remote device.
///
/// `connect` establishes an authenticated session and releases it before
/// returning; no session handle escapes the implementation. Exactly one
/// attempt per call, no retries.
#[async_trait]
pub trait Connection: Send {
    /// Target address or hostname, for log lines.
    fn host(&self) -> &str;
    /// Authentication principal, for log lines.
    fn username(&self) -> &str;

    async fn connect(&mut self) -> Result<(), ConnectError>;
}
