use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::info;

use camlink_core::connections::ConnectOptions;
use camlink_core::{LogBook, SessionManager, SettingsStore};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "camlink", version, about = "Check SSH reachability of a remote device")]
pub struct Args {
    /// Settings document holding ip/username/password
    #[arg(long, default_value = "settings.json")]
    pub settings: PathBuf,

    /// Override the device address from the settings document
    #[arg(long)]
    pub host: Option<String>,

    /// Override the username from the settings document
    #[arg(long)]
    pub username: Option<String>,

    /// Override the password from the settings document
    #[arg(long)]
    pub password: Option<String>,

    /// Remote shell port
    #[arg(long, default_value_t = 22)]
    pub port: u16,

    /// Attempt deadline in seconds
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// Accept any host key instead of checking known_hosts. Insecure.
    #[arg(long)]
    pub insecure_accept_host_key: bool,

    /// Write the event log to this file after the attempt
    #[arg(long)]
    pub save_log: Option<PathBuf>,
}

/// Run one connection attempt and report it. Returns whether the
/// attempt succeeded; errors are reserved for the shell's own failures
/// (a bad settings document, an unwritable log destination).
pub async fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let store = SettingsStore::new(&args.settings);
    let mut record = store.load_or_default();

    // The shell's raw field overwrites; the record itself stays a value.
    if let Some(host) = args.host {
        record.ip = host;
    }
    if let Some(username) = args.username {
        record.username = username;
    }
    if let Some(password) = args.password {
        record.password = password;
    }

    let timeout = Duration::from_secs(args.timeout_secs);
    let opts = ConnectOptions {
        port: args.port,
        timeout,
        verify_host_key: !args.insecure_accept_host_key,
    };

    let book = LogBook::new();
    let manager = SessionManager::new(book.clone()).with_timeout(timeout);
    let outcome = manager.connect_ssh(&record, &opts).await;

    println!("{}", book.contents());

    match args.save_log {
        Some(path) => book.save_to(&path)?,
        None => info!("no log destination chosen, skipping export"),
    }

    Ok(outcome.is_connected())
}
