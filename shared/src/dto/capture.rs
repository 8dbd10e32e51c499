use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::config::CaptureRegion;

/// Test capture of the configured region
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureFrame {
    pub image_b64: String,
    pub width: u32,
    pub height: u32,
}

/// Current state of the capture pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureStatus {
    pub mumu_detected: bool,
    pub state: String,
    pub region_configured: bool,
}

/// Outcome of an interactive region selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionSelection {
    pub region: CaptureRegion,
}

/// Screen states the detector can be calibrated on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationState {
    PreQueue,
    InCombat,
    EndScreen,
}

impl CalibrationState {
    pub const ALL: [CalibrationState; 3] = [
        CalibrationState::PreQueue,
        CalibrationState::InCombat,
        CalibrationState::EndScreen,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CalibrationState::PreQueue => "pre_queue",
            CalibrationState::InCombat => "in_combat",
            CalibrationState::EndScreen => "end_screen",
        }
    }
}

impl fmt::Display for CalibrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalibrationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalibrationState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| format!("Unknown calibration state '{}'", s))
    }
}

/// Which screen states have a stored reference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CalibrationStatus {
    pub pre_queue: bool,
    pub in_combat: bool,
    pub end_screen: bool,
}

impl CalibrationStatus {
    pub fn is_calibrated(&self, state: CalibrationState) -> bool {
        match state {
            CalibrationState::PreQueue => self.pre_queue,
            CalibrationState::InCombat => self.in_combat,
            CalibrationState::EndScreen => self.end_screen,
        }
    }

    pub fn is_complete(&self) -> bool {
        CalibrationState::ALL.into_iter().all(|s| self.is_calibrated(s))
    }
}

/// Result of a CSV export
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportResult {
    pub path: String,
}
