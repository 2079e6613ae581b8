use async_trait::async_trait;
use tapo::responses::EnergyUsageResult;
use tapo::{ApiClient, PlugEnergyMonitoringHandler};

use crate::config::DeviceTarget;
use crate::error::AppError;
use crate::models::device_info::DeviceInfo;
use crate::models::energy::EnergyUsage;

const SECONDS_PER_MINUTE: i64 = 60;

/// Converts a typed energy report into [`EnergyUsage`].
///
/// The device counts runtime in minutes; `EnergyUsage` holds seconds.
pub fn energy_from_result(result: &EnergyUsageResult) -> Result<EnergyUsage, AppError> {
    let mut usage = EnergyUsage::from_json(serde_json::to_value(result)?);
    usage.today_runtime = usage.today_runtime.saturating_mul(SECONDS_PER_MINUTE);
    usage.month_runtime = usage.month_runtime.saturating_mul(SECONDS_PER_MINUTE);
    Ok(usage)
}

/// Operations the command handlers need from a plug.
#[async_trait]
pub trait PlugClient: Send + Sync {
    async fn power_on(&self) -> Result<(), AppError>;

    async fn power_off(&self) -> Result<(), AppError>;

    async fn device_info(&self) -> Result<DeviceInfo, AppError>;

    async fn energy_usage(&self) -> Result<EnergyUsage, AppError>;
}

/// A plug reached over the local network through the `tapo` crate.
pub struct TapoDeviceClient {
    handler: PlugEnergyMonitoringHandler,
    address: String,
}

impl TapoDeviceClient {
    /// Perform the handshake with the plug at `target`.
    pub async fn connect(target: &DeviceTarget) -> Result<Self, AppError> {
        let address = target.address.to_string();
        tracing::debug!(%address, username = %target.username, "connecting to device");

        let handler = ApiClient::new(target.username.clone(), target.password.clone())
            .p110(address.clone())
            .await?;

        tracing::debug!(%address, "session established");
        Ok(Self { handler, address })
    }
}

#[async_trait]
impl PlugClient for TapoDeviceClient {
    async fn power_on(&self) -> Result<(), AppError> {
        tracing::debug!(address = %self.address, "set_device_info device_on=true");
        self.handler.on().await?;
        Ok(())
    }

    async fn power_off(&self) -> Result<(), AppError> {
        tracing::debug!(address = %self.address, "set_device_info device_on=false");
        self.handler.off().await?;
        Ok(())
    }

    async fn device_info(&self) -> Result<DeviceInfo, AppError> {
        let data = self.handler.get_device_info_json().await?;
        tracing::debug!(address = %self.address, response = %data, "get_device_info");
        Ok(DeviceInfo::from_json(data))
    }

    async fn energy_usage(&self) -> Result<EnergyUsage, AppError> {
        let result = self.handler.get_energy_usage().await?;
        let usage = energy_from_result(&result)?;
        tracing::debug!(address = %self.address, response = %usage.raw, "get_energy_usage");
        Ok(usage)
    }
}
