use crate::connections::{
    connection::{ConnectOptions, Connection},
    errors::ConnectError,
};
use async_trait::async_trait;
use directories::BaseDirs;
use log::{debug, info};
use ssh2::{CheckResult, KnownHostFileKind, Session};

use std::net::{TcpStream, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

/// A one-shot password-authenticated SSH connection attempt.
///
/// `connect` dials, handshakes, optionally verifies the host key,
/// authenticates, and releases the session before returning. The whole
/// blocking sequence runs on the tokio blocking pool so the async caller
/// is never stalled.
pub struct SshConnection {
    host: String,
    port: u16,
    username: String,
    password: String,
    timeout: Duration,
    verify_host_key: bool,
}

impl SshConnection {
    pub fn new(host: String, port: u16, username: String, password: String) -> Self {
        let defaults = ConnectOptions::default();
        Self {
            host,
            port,
            username,
            password,
            timeout: defaults.timeout,
            verify_host_key: defaults.verify_host_key,
        }
    }

    /// Build an attempt from a settings record plus per-attempt options.
    pub fn from_record(
        record: &crate::storage::settings::DeviceSettings,
        opts: &ConnectOptions,
    ) -> Self {
        Self {
            host: record.ip.clone(),
            port: opts.port,
            username: record.username.clone(),
            password: record.password.clone(),
            timeout: opts.timeout,
            verify_host_key: opts.verify_host_key,
        }
    }

    /// Accept any remote identity. Insecure; callers opt in explicitly.
    pub fn accept_any_host_key(mut self) -> Self {
        self.verify_host_key = false;
        self
    }
}

fn known_hosts_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".ssh").join("known_hosts"))
}

/// Check the server key presented during the handshake against the
/// user's OpenSSH `known_hosts`. Unknown and mismatched keys both fail:
/// trusting a first-seen key is the caller's decision, not ours.
fn verify_host_key(session: &Session, host: &str, port: u16) -> Result<(), ConnectError> {
    let (key, _key_type) = session.host_key().ok_or_else(|| {
        ConnectError::Protocol(format!("server {} presented no host key", host))
    })?;

    let mut known = session.known_hosts()?;
    let path = known_hosts_path().ok_or_else(|| {
        ConnectError::Protocol("cannot verify host key: no home directory".into())
    })?;
    known.read_file(&path, KnownHostFileKind::OpenSSH).map_err(|e| {
        ConnectError::Protocol(format!(
            "cannot verify host key: failed to read {}: {}",
            path.display(),
            e
        ))
    })?;

    match known.check_port(host, port, key) {
        CheckResult::Match => Ok(()),
        CheckResult::Mismatch => Err(ConnectError::Protocol(format!(
            "host key mismatch for {}: key differs from known_hosts entry",
            host
        ))),
        CheckResult::NotFound => Err(ConnectError::Protocol(format!(
            "host key verification failed: {} not present in {}",
            host,
            path.display()
        ))),
        CheckResult::Failure => Err(ConnectError::Protocol(format!(
            "host key verification failed for {}",
            host
        ))),
    }
}

/// The blocking dial → handshake → auth → release sequence.
fn open_and_release(
    host: String,
    port: u16,
    username: String,
    password: String,
    timeout: Duration,
    verify: bool,
) -> Result<(), ConnectError> {
    let addr = (host.as_str(), port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| {
            ConnectError::Dial(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no address resolved for {}", host),
            ))
        })?;

    let tcp = TcpStream::connect_timeout(&addr, timeout)?;
    tcp.set_read_timeout(Some(timeout)).ok();
    tcp.set_write_timeout(Some(timeout)).ok();

    let mut session = Session::new()?;
    session.set_tcp_stream(tcp);
    session.handshake()?;

    if verify {
        verify_host_key(&session, &host, port)?;
    } else {
        debug!("host key verification disabled for {}", host);
    }

    session
        .userauth_password(&username, &password)
        .map_err(|e| ConnectError::Auth(e.to_string()))?;
    if !session.authenticated() {
        return Err(ConnectError::Auth(format!(
            "server rejected credentials for {}",
            username
        )));
    }

    // Establishing and then releasing the session is the entire contract;
    // the handle never outlives this attempt.
    session.disconnect(None, "session check complete", None).ok();
    info!("SSH session to {}:{} established and released", host, port);
    Ok(())
}

#[async_trait]
impl Connection for SshConnection {
    fn host(&self) -> &str {
        &self.host
    }

    fn username(&self) -> &str {
        &self.username
    }

    async fn connect(&mut self) -> Result<(), ConnectError> {
        let host = self.host.clone();
        let port = self.port;
        let username = self.username.clone();
        let password = self.password.clone();
        let timeout = self.timeout;
        let verify = self.verify_host_key;

        info!("Connecting to SSH server at {}:{}", host, port);

        tokio::task::spawn_blocking(move || {
            open_and_release(host, port, username, password, timeout, verify)
        })
        .await
        .map_err(|e| ConnectError::Protocol(format!("connect task failed: {}", e)))?
    }
}
