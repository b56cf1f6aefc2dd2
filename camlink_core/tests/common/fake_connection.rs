//! A deterministic **in-process stand-in** for any type that implements
//! `camlink_core::connections::connection::Connection`.
//!
//! It lets integration tests exercise the real manager machinery (the
//! attempt deadline, outcome classification, log append) without opening
//! a TCP socket or talking to a real sshd.

use async_trait::async_trait;
use camlink_core::connections::{connection::Connection, errors::ConnectError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// What the fake should do when the manager drives it.
pub enum FakeBehavior {
    /// Report a successfully established-and-released session.
    Succeed,
    /// Report rejected credentials with the given server message.
    RejectAuth(String),
    /// Never complete; the manager's deadline has to cut the attempt off.
    Hang,
}

pub struct FakeConnection {
    host: String,
    username: String,
    behavior: FakeBehavior,
    /// How many times the manager drove `connect`, kept for assertions.
    pub attempts: Arc<AtomicUsize>,
}

impl FakeConnection {
    pub fn new(host: &str, username: &str, behavior: FakeBehavior) -> Self {
        Self {
            host: host.to_string(),
            username: username.to_string(),
            behavior,
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Clone of the attempt counter, usable after the fake is boxed and
    /// handed to the manager.
    pub fn attempt_counter(&self) -> Arc<AtomicUsize> {
        self.attempts.clone()
    }
}

#[async_trait]
impl Connection for FakeConnection {
    fn host(&self) -> &str {
        &self.host
    }

    fn username(&self) -> &str {
        &self.username
    }

    async fn connect(&mut self) -> Result<(), ConnectError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            FakeBehavior::Succeed => Ok(()),
            FakeBehavior::RejectAuth(msg) => Err(ConnectError::Auth(msg.clone())),
            FakeBehavior::Hang => {
                // Far past any deadline a test would configure.
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(())
            }
        }
    }
}
