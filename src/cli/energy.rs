use clap::Args;

use crate::api::device_client::PlugClient;
use crate::cli::output::{print_json, print_text};
use crate::cli::{parse_label, DeviceArgs};
use crate::config::{Labels, OutputMode, RuntimeConfig};
use crate::error::AppError;

#[derive(Args)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Produce JSON output
    #[arg(long, conflicts_with = "choria")]
    pub json: bool,

    /// Produce Choria Metric output
    #[arg(long)]
    pub choria: bool,

    /// Labels to apply to Choria Metric output
    #[arg(long = "label", value_name = "KEY=VALUE", value_parser = parse_label)]
    pub labels: Vec<(String, String)>,
}

impl EnergyArgs {
    pub fn labels(&self) -> Labels {
        self.labels.iter().cloned().collect()
    }
}

pub async fn handle<C: PlugClient + ?Sized>(
    client: &C,
    labels: &Labels,
    config: &RuntimeConfig,
) -> Result<(), AppError> {
    let usage = client.energy_usage().await?;
    match config.output_mode {
        OutputMode::Json => print_json(&usage.raw),
        OutputMode::Choria => print_json(&usage.choria_metrics(labels)),
        OutputMode::Text => print_text(&usage.render_text()?),
    }
    Ok(())
}
