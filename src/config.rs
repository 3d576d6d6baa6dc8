use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/rest";

/// openHAB item holding the relative brightness of the bedroom lamp.
pub const DEFAULT_BRIGHTNESS_ITEM: &str = "Innr_RF264_1_Brightness";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub base_url: String,
    pub item_name: String,
    pub timeout: Duration,
    pub verbose: bool,
}

impl RuntimeConfig {
    pub fn new(base_url: impl Into<String>, verbose: bool) -> Self {
        Self {
            base_url: base_url.into(),
            item_name: DEFAULT_BRIGHTNESS_ITEM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RuntimeConfig::new(DEFAULT_BASE_URL, false);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.item_name, "Innr_RF264_1_Brightness");
        assert!(!config.verbose);
    }
}
