mod application;
mod cli;
mod config;
mod domain;
mod errors;
mod handlers;
mod utils;

use std::process::ExitCode;

use errors::PrefixRenameError;
use handlers::run;
use utils::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(std::env::args_os(), &mut std::io::stderr()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) if e.is_informational() => {
            if let PrefixRenameError::InvalidArguments(help) = e {
                let _ = help.print();
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Prefix rename failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
