//! Events published on the tracked site, as listed by the dashboard.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::search::Searchable;

/// A listed event: either one already seen (from the page bootstrap) or one
/// currently live on the site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventItem {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    pub title: String,
    pub date: String,
    pub link: String,
}

impl Searchable for EventItem {
    fn search_title(&self) -> &str {
        &self.title
    }
}

/// Body of `GET /api/live-events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LiveEventsResponse {
    pub success: bool,
    pub events: Vec<EventItem>,
    pub message: Option<String>,
}

/// Accept ids sent as numbers or strings.
pub(crate) fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}
