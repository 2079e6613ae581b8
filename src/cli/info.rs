use clap::Args;

use crate::api::device_client::PlugClient;
use crate::cli::output::{print_json, print_text};
use crate::cli::DeviceArgs;
use crate::config::{OutputMode, RuntimeConfig};
use crate::error::AppError;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Produce JSON output
    #[arg(long)]
    pub json: bool,
}

pub async fn handle<C: PlugClient + ?Sized>(
    client: &C,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let info = client.device_info().await?;
    match config.output_mode {
        OutputMode::Text => print_text(&info.render_text()),
        _ => print_json(&info.raw),
    }
    Ok(())
}
