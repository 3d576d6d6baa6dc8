use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    /// Interpret a free-text power command. Only `ON` and `1` switch on;
    /// anything else is treated as off.
    pub fn from_command(value: &str) -> Self {
        match value {
            "ON" | "1" => PowerState::On,
            _ => PowerState::Off,
        }
    }

    /// Power state implied by a relative (0-100) brightness level.
    pub fn from_relative_level(rel: i64) -> Self {
        if rel <= super::brightness::OFF_THRESHOLD {
            PowerState::Off
        } else {
            PowerState::On
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "ON",
            PowerState::Off => "OFF",
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command() {
        assert_eq!(PowerState::from_command("ON"), PowerState::On);
        assert_eq!(PowerState::from_command("1"), PowerState::On);
        assert_eq!(PowerState::from_command("OFF"), PowerState::Off);
        assert_eq!(PowerState::from_command("0"), PowerState::Off);
        // case sensitive, like the pipeline that sends it
        assert_eq!(PowerState::from_command("on"), PowerState::Off);
    }

    #[test]
    fn test_from_relative_level() {
        assert_eq!(PowerState::from_relative_level(0), PowerState::Off);
        assert_eq!(PowerState::from_relative_level(3), PowerState::Off);
        assert_eq!(PowerState::from_relative_level(5), PowerState::Off);
        assert_eq!(PowerState::from_relative_level(6), PowerState::On);
        assert_eq!(PowerState::from_relative_level(100), PowerState::On);
    }

    #[test]
    fn test_display() {
        assert_eq!(PowerState::On.to_string(), "ON");
        assert_eq!(PowerState::Off.to_string(), "OFF");
    }
}
