//! Display configuration supplied by the app.
//!
//! Passed across the JNI boundary as JSON. Every field has a default so
//! the app can send `{}` and get the stock heads-up display.

use serde::{Deserialize, Serialize};

use crate::error::HudError;

/// Clock style for the arrival time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    #[default]
    TwelveHours,
    TwentyFourHours,
}

impl TimeFormat {
    /// Maps the device's `DateFormat.is24HourFormat` flag.
    pub fn from_device_flag(twenty_four_hours: bool) -> Self {
        if twenty_four_hours {
            TimeFormat::TwentyFourHours
        } else {
            TimeFormat::TwelveHours
        }
    }

    pub(crate) fn pattern(self) -> &'static str {
        match self {
            TimeFormat::TwelveHours => "%I:%M %P",
            TimeFormat::TwentyFourHours => "%H:%M",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub time_format: TimeFormat,
}

impl HudConfig {
    pub fn from_json(json: &str) -> Result<Self, HudError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = HudConfig::from_json("{}").unwrap();
        assert_eq!(config.time_format, TimeFormat::TwelveHours);
    }

    #[test]
    fn parses_twenty_four_hours() {
        let config = HudConfig::from_json(r#"{"time_format":"twenty_four_hours"}"#).unwrap();
        assert_eq!(config.time_format, TimeFormat::TwentyFourHours);
    }

    #[test]
    fn rejects_unknown_format() {
        let result = HudConfig::from_json(r#"{"time_format":"sundial"}"#);
        assert!(matches!(result, Err(HudError::Json(_))));
    }

    #[test]
    fn device_flag() {
        assert_eq!(TimeFormat::from_device_flag(true), TimeFormat::TwentyFourHours);
        assert_eq!(TimeFormat::from_device_flag(false), TimeFormat::TwelveHours);
    }
}
