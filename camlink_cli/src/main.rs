mod shell;

use clap::Parser;

use camlink_core::utils::logging::init_logging;
use shell::Args;

#[tokio::main]
async fn main() {
    init_logging();
    let args = Args::parse();
    match shell::run(args).await {
        Ok(connected) => {
            if !connected {
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("camlink error: {e}");
            std::process::exit(1);
        }
    }
}
