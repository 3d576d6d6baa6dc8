use clap::Subcommand;
use tracing::debug;

use crate::api::client::OpenHabClient;
use crate::cli::brightness::relative_level;
use crate::cli::output::print_line;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::brightness::relative_to_absolute;
use crate::models::event::{LightCommand, LightEvent};
use crate::models::power::PowerState;

#[derive(Subcommand)]
pub enum PowerCommand {
    /// Print the power state of a zigbee light event
    In {
        /// JSON payload: { "state": "ON/OFF", "brightness": 0-255 }
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        payload: Vec<String>,
    },

    /// Build a zigbee light event from the openHAB brightness item
    Out {
        /// ON/1 or OFF/0
        value: String,
    },
}

pub async fn handle(cmd: &PowerCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        PowerCommand::In { payload } => {
            let event = LightEvent::decode(&super::join_payload(payload))?;
            print_line(&event.state)
        }
        PowerCommand::Out { value } => {
            let command = power_out(value, config).await?;
            print_line(command)
        }
    }
}

async fn power_out(value: &str, config: &RuntimeConfig) -> Result<LightCommand, AppError> {
    let client = OpenHabClient::new(config)?;
    let item = client.get_item(&config.item_name).await?;
    if item.is_unknown() {
        debug!("Item {} has state {}, using 0", config.item_name, item.state);
    }

    let level = relative_level(item.brightness_level()?);
    Ok(LightCommand::new(
        PowerState::from_command(value),
        relative_to_absolute(level),
    ))
}
