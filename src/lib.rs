pub mod api;
pub mod cli;
pub mod config;
pub mod duration;
pub mod error;
pub mod models;

use tracing_subscriber::EnvFilter;

use api::device_client::TapoDeviceClient;
use cli::output::print_error;
use cli::power::PowerAction;
use config::RuntimeConfig;
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    init_tracing(cli_args.verbose);

    let config = RuntimeConfig {
        output_mode: cli_args.command.output_mode(),
        verbose: cli_args.verbose,
    };

    let result = dispatch(cli_args.command, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            print_error(&err, config.output_mode);
            err.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays clean for JSON output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tapoctl=debug,tapo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn dispatch(command: cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    let client = TapoDeviceClient::connect(&command.device().target()).await?;

    match command {
        cli::Commands::On(_) => cli::power::handle(&client, PowerAction::On).await,
        cli::Commands::Off(_) => cli::power::handle(&client, PowerAction::Off).await,
        cli::Commands::Info(_) => cli::info::handle(&client, config).await,
        cli::Commands::Energy(args) => cli::energy::handle(&client, &args.labels(), config).await,
    }
}
