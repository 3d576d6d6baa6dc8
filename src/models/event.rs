use std::fmt;

use serde::{Deserialize, Deserializer};

use super::power::PowerState;
use crate::error::AppError;

/// Inbound event from the zigbee light pipeline, e.g.
/// `{"state": "ON", "brightness": 200}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LightEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brightness: i64,
}

impl LightEvent {
    /// Decode a payload as handed over by the shell pipeline.
    ///
    /// Single quotes are stripped first since the pipeline wraps the JSON in
    /// them. When that leaves invalid JSON and the payload had single quotes,
    /// they are read as double quotes instead, so `{'state': 'ON'}` works too.
    pub fn decode(payload: &str) -> Result<Self, AppError> {
        let stripped = payload.replace('\'', "");

        match serde_json::from_str(&stripped) {
            Ok(event) => Ok(event),
            Err(source) => {
                if payload.contains('\'') {
                    if let Ok(event) = serde_json::from_str(&payload.replace('\'', "\"")) {
                        return Ok(event);
                    }
                }
                Err(AppError::InvalidPayload {
                    payload: stripped,
                    source,
                })
            }
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Outbound light command printed by the `out` directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightCommand {
    pub state: PowerState,
    pub brightness: i64,
}

impl LightCommand {
    pub fn new(state: PowerState, brightness: i64) -> Self {
        Self { state, brightness }
    }
}

impl fmt::Display for LightCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"{{"state": "{}", "brightness": {}}}"#,
            self.state, self.brightness
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_double_quoted() {
        let event = LightEvent::decode(r#"{"state": "ON", "brightness": 200}"#).unwrap();
        assert_eq!(event.state, "ON");
        assert_eq!(event.brightness, 200);
    }

    #[test]
    fn test_decode_single_quoted_matches_double_quoted() {
        let single = LightEvent::decode("{'state': 'ON', 'brightness': 200}").unwrap();
        let double = LightEvent::decode(r#"{"state": "ON", "brightness": 200}"#).unwrap();
        assert_eq!(single, double);
    }

    #[test]
    fn test_decode_shell_wrapped() {
        let event = LightEvent::decode(r#"'{"state": "OFF", "brightness": 3}'"#).unwrap();
        assert_eq!(event.state, "OFF");
        assert_eq!(event.brightness, 3);
    }

    #[test]
    fn test_decode_defaults_and_unknown_fields() {
        let event = LightEvent::decode(r#"{"linkquality": 81}"#).unwrap();
        assert_eq!(event, LightEvent::default());

        let event = LightEvent::decode(r#"{"state": null, "brightness": 12}"#).unwrap();
        assert_eq!(event.state, "");
        assert_eq!(event.brightness, 12);
    }

    #[test]
    fn test_decode_malformed_keeps_payload() {
        let err = LightEvent::decode("{not json}").unwrap_err();
        match err {
            AppError::InvalidPayload { payload, .. } => assert_eq!(payload, "{not json}"),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = LightEvent::decode("'{broken'").unwrap_err();
        match err {
            AppError::InvalidPayload { payload, .. } => assert_eq!(payload, "{broken"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_command_display() {
        let cmd = LightCommand::new(PowerState::Off, 7);
        assert_eq!(cmd.to_string(), r#"{"state": "OFF", "brightness": 7}"#);

        let cmd = LightCommand::new(PowerState::On, 127);
        assert_eq!(cmd.to_string(), r#"{"state": "ON", "brightness": 127}"#);
    }
}
