pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

use cli::output::print_error;
use config::RuntimeConfig;
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig::new(cli_args.url, cli_args.verbose);
    logging::init(&config);

    let result = dispatch(cli_args.command, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(error_type = err.error_type(), "command failed");
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(command: cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    match command {
        cli::Commands::Power(cmd) => cli::power::handle(&cmd, config).await,
        cli::Commands::Brightness(cmd) => cli::brightness::handle(&cmd, config).await,
    }
}
