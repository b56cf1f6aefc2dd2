pub mod ssh_connection;

pub use ssh_connection::SshConnection;
