use taskflow::{commands::Cli, libs::messages::macros::is_debug_mode, msg_error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskflow=debug")))
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(error) = Cli::menu().await {
        msg_error!(format!("{:#}", error));
        std::process::exit(1);
    }
}
