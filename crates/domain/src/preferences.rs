//! Tracker settings and per-browser UI preferences.

use serde::{Deserialize, Serialize};

/// Feature flags edited in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub heartbeat_enabled: bool,
    pub daily_summary_enabled: bool,
    pub tracker_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            heartbeat_enabled: true,
            daily_summary_enabled: true,
            tracker_enabled: true,
        }
    }
}

/// Colour scheme of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Body of the fire-and-forget `POST /api/theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PreferenceUpdate {
    Theme { theme: Theme },
    Notifications { notifications_enabled: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_enable_every_feature_by_default() {
        let settings = Settings::default();
        assert!(settings.heartbeat_enabled);
        assert!(settings.daily_summary_enabled);
        assert!(settings.tracker_enabled);
    }

    #[test]
    fn should_fill_missing_settings_with_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"tracker_enabled": false}"#).unwrap();
        assert!(!settings.tracker_enabled);
        assert!(settings.heartbeat_enabled);
    }

    #[test]
    fn should_toggle_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn should_serialize_theme_update() {
        let json = serde_json::to_value(PreferenceUpdate::Theme {
            theme: Theme::Light,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"theme": "light"}));
    }

    #[test]
    fn should_serialize_notification_update() {
        let json = serde_json::to_value(PreferenceUpdate::Notifications {
            notifications_enabled: true,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"notifications_enabled": true}));
    }
}
