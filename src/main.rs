//! guess-number binary entry point.

use std::process::ExitCode;
use std::sync::Arc;

use guess_number::api::{serve_with_state, AppState};
use guess_number::cli::{self, parse_args};
use guess_number::config::Config;
use guess_number::{logging, SessionStore};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'guess-number --help' for more information.");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(Some(config.log_filter()));

    info!("guess-number v{}", env!("CARGO_PKG_VERSION"));

    let server_config = match config.to_server_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = Arc::new(SessionStore::new());
    info!("Session store initialized");

    if let Err(e) = serve_with_state(server_config, AppState::with_store(store)).await {
        error!("server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
