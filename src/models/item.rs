use serde::Deserialize;

use crate::error::AppError;

/// States openHAB reports for an item that has no known value.
const UNKNOWN_STATES: [&str; 2] = ["NULL", "UNDEF"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateDescription {
    pub step: Option<f64>,
    pub pattern: Option<String>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub options: Vec<serde_json::Value>,
}

/// An item as returned by `GET /items/{name}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub link: Option<String>,
    #[serde(default)]
    pub state: String,
    pub state_description: Option<StateDescription>,
    #[serde(default)]
    pub editable: bool,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub name: String,
    pub label: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub group_names: Vec<String>,
}

impl Item {
    pub fn is_unknown(&self) -> bool {
        UNKNOWN_STATES.contains(&self.state.as_str())
    }

    /// Relative brightness (0-100) held by a dimmer item.
    ///
    /// Unknown states count as 0. Dimmer states can carry a fraction
    /// (`"33.33"`), which is floored.
    pub fn brightness_level(&self) -> Result<i64, AppError> {
        if self.is_unknown() {
            return Ok(0);
        }

        let state = self.state.trim();
        if let Ok(level) = state.parse::<i64>() {
            return Ok(level);
        }

        match state.parse::<f64>() {
            Ok(level) if level.is_finite() => Ok(level.floor() as i64),
            _ => Err(AppError::UnexpectedState {
                item: self.name.clone(),
                state: self.state.clone(),
            }),
        }
    }
}
