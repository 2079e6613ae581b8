pub mod energy;
pub mod info;
pub mod output;
pub mod power;

use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};

use crate::config::{DeviceTarget, OutputMode};

#[derive(Parser)]
#[command(name = "tapoctl", version, about = "Controls TP-Link Tapo Smart Plugs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (log device requests/responses to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Connection arguments shared by every command.
#[derive(Args, Clone)]
pub struct DeviceArgs {
    /// Device IP address
    #[arg(env = "TAPO_ADDRESS")]
    pub address: IpAddr,

    /// Device username
    #[arg(env = "TAPO_USER")]
    pub username: String,

    /// Device password
    #[arg(env = "TAPO_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl DeviceArgs {
    pub fn target(&self) -> DeviceTarget {
        DeviceTarget {
            address: self.address,
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Turns the device on
    On(DeviceArgs),

    /// Turns the device off
    Off(DeviceArgs),

    /// Shows device information
    Info(info::InfoArgs),

    /// Retrieves device energy usage statistics
    Energy(energy::EnergyArgs),
}

impl Commands {
    pub fn device(&self) -> &DeviceArgs {
        match self {
            Commands::On(device) | Commands::Off(device) => device,
            Commands::Info(args) => &args.device,
            Commands::Energy(args) => &args.device,
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        match self {
            Commands::On(_) | Commands::Off(_) => OutputMode::Text,
            Commands::Info(args) => OutputMode::from_flags(args.json, false),
            Commands::Energy(args) => OutputMode::from_flags(args.json, args.choria),
        }
    }
}

/// Parse a `key=value` label.
pub fn parse_label(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("label key is empty in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
