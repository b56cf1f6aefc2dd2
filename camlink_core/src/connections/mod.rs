pub mod connection;
pub mod errors;
pub mod ssh;

pub use connection::{ConnectOptions, Connection};
pub use errors::ConnectError;
pub use ssh::SshConnection;
