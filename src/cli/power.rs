use crate::api::device_client::PlugClient;
use crate::cli::output::print_text;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    On,
    Off,
}

impl PowerAction {
    fn label(self) -> &'static str {
        match self {
            PowerAction::On => "on",
            PowerAction::Off => "off",
        }
    }
}

/// Switch the plug and confirm the new state by reading it back.
pub async fn switch<C: PlugClient + ?Sized>(
    client: &C,
    action: PowerAction,
) -> Result<(), AppError> {
    match action {
        PowerAction::On => client.power_on().await?,
        PowerAction::Off => client.power_off().await?,
    }

    let info = client.device_info().await?;
    let wanted = action == PowerAction::On;
    if info.device_on != wanted {
        tracing::warn!(
            requested = action.label(),
            reported = info.power_state(),
            "device did not change state"
        );
        return Err(AppError::PowerStateMismatch(action.label()));
    }
    Ok(())
}

pub async fn handle<C: PlugClient + ?Sized>(
    client: &C,
    action: PowerAction,
) -> Result<(), AppError> {
    switch(client, action).await?;
    print_text(&format!("Powered {}", action.label()));
    Ok(())
}
