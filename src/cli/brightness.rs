use clap::Subcommand;
use tracing::warn;

use crate::cli::output::print_line;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::brightness::{
    absolute_to_relative, clamp_absolute, clamp_relative, relative_to_absolute,
};
use crate::models::event::{LightCommand, LightEvent};
use crate::models::power::PowerState;

#[derive(Subcommand)]
pub enum BrightnessCommand {
    /// Print the brightness of a zigbee light event as a percentage
    In {
        /// JSON payload: { "state": "ON/OFF", "brightness": 0-255 }
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        payload: Vec<String>,
    },

    /// Build a zigbee light event from a brightness percentage
    Out {
        /// Brightness level (0-100)
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
}

pub async fn handle(cmd: &BrightnessCommand, _config: &RuntimeConfig) -> Result<(), AppError> {
    match cmd {
        BrightnessCommand::In { payload } => {
            let event = LightEvent::decode(&super::join_payload(payload))?;
            print_line(absolute_to_relative(absolute_level(event.brightness)))
        }
        BrightnessCommand::Out { level } => print_line(brightness_out(*level)),
    }
}

fn brightness_out(level: i64) -> LightCommand {
    let rel = relative_level(level);
    LightCommand::new(PowerState::from_relative_level(rel), relative_to_absolute(rel))
}

/// Clamp a percentage to 0-100, warning when it was out of range.
pub(crate) fn relative_level(level: i64) -> i64 {
    let clamped = clamp_relative(level);
    if clamped != level {
        warn!("Brightness {} is outside 0-100, using {}", level, clamped);
    }
    clamped
}

/// Clamp a byte-scale level to 0-255, warning when it was out of range.
pub(crate) fn absolute_level(level: i64) -> i64 {
    let clamped = clamp_absolute(level);
    if clamped != level {
        warn!("Brightness {} is outside 0-255, using {}", level, clamped);
    }
    clamped
}
