use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client configuration persisted by the backend.
///
/// Keys the client does not know about are kept in `extra` so that a
/// read-modify-write cycle never drops them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub mumu_region: Option<CaptureRegion>,
    #[serde(default)]
    pub active_deck_id: Option<i64>,
    #[serde(default)]
    pub active_season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Screen region of the emulator window, in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
