use std::time::Duration;

use log::{error, info};
use tokio::time::timeout;

use crate::connections::{ConnectError, ConnectOptions, Connection, SshConnection};
use crate::logbook::LogBook;
use crate::storage::settings::DeviceSettings;

/// The tagged result of one connection attempt.
///
/// Both arms carry the target so the log line names the device and the
/// principal regardless of how the attempt ended. Produced fresh per
/// attempt and not retained beyond being logged.
#[derive(Debug)]
pub enum ConnectionOutcome {
    Connected {
        host: String,
        username: String,
    },
    Failed {
        host: String,
        username: String,
        error: ConnectError,
    },
}

impl ConnectionOutcome {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionOutcome::Connected { .. })
    }

    /// The human-readable event text recorded for this attempt.
    pub fn log_line(&self) -> String {
        match self {
            ConnectionOutcome::Connected { host, username } => format!(
                "Connected successfully to: {} with username: {}",
                host, username
            ),
            ConnectionOutcome::Failed {
                host,
                username,
                error,
            } => format!("Connection to {} as {} failed: {}", host, username, error),
        }
    }
}

/// Runs one authenticated session attempt at a time and records each
/// outcome in the shared [`LogBook`].
///
/// The manager keeps no state between attempts: every `connect` starts
/// from idle, dials, and ends in either `Connected` or `Failed`. The
/// attempt deadline doubles as the cancellation point for transports
/// that would otherwise block.
pub struct SessionManager {
    log: LogBook,
    attempt_timeout: Duration,
}

impl SessionManager {
    pub fn new(log: LogBook) -> Self {
        Self {
            log,
            attempt_timeout: Duration::from_secs(5),
        }
    }

    /// Override the whole-attempt deadline.
    pub fn with_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// Attempt exactly one connection. Takes ownership of the
    /// not-yet-connected transport, bounds it by the attempt deadline,
    /// appends exactly one log entry, and returns the outcome by value.
    pub async fn connect(&self, mut conn: Box<dyn Connection + Send>) -> ConnectionOutcome {
        let host = conn.host().to_string();
        let username = conn.username().to_string();

        let result = match timeout(self.attempt_timeout, conn.connect()).await {
            Ok(result) => result,
            Err(_) => Err(ConnectError::Dial(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                format!(
                    "connection attempt to {} timed out after {:?}",
                    host, self.attempt_timeout
                ),
            ))),
        };

        let outcome = match result {
            Ok(()) => {
                info!("Connected successfully to: {} with username: {}", host, username);
                ConnectionOutcome::Connected { host, username }
            }
            Err(error) => {
                error!("Connection to {} failed: {}", host, error);
                ConnectionOutcome::Failed {
                    host,
                    username,
                    error,
                }
            }
        };

        self.log.append(&outcome.log_line());
        outcome
    }

    /// Convenience: build the SSH transport from a settings record and
    /// attempt it.
    pub async fn connect_ssh(
        &self,
        record: &DeviceSettings,
        opts: &ConnectOptions,
    ) -> ConnectionOutcome {
        let conn = SshConnection::from_record(record, opts);
        self.connect(Box::new(conn)).await
    }

    pub fn log(&self) -> &LogBook {
        &self.log
    }
}
