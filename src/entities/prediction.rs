use serde::{Deserialize, Serialize};

use crate::entities::location::parse_degrees;
use crate::error::Error;

pub const NO_VEHICLE_MESSAGE: &str = "No suitable vehicle found - location is too far";
pub const PREDICTION_FAILED_MESSAGE: &str = "Prediction failed";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PredictionForm {
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
    #[serde(default)]
    pub time_slot: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub time_slot: String,
}

impl TryFrom<&PredictionForm> for PredictionRequest {
    type Error = Error;

    fn try_from(form: &PredictionForm) -> Result<Self, Self::Error> {
        Ok(Self {
            latitude: parse_degrees("latitude", &form.latitude)?,
            longitude: parse_degrees("longitude", &form.longitude)?,
            time_slot: form.time_slot.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

impl PredictionResult {
    pub fn vehicle(&self) -> Option<&str> {
        self.vehicle_type.as_deref().filter(|v| !v.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum PredictionState {
    Idle,
    Pending {
        generation: u64,
    },
    Success {
        generation: u64,
        result: PredictionResult,
    },
    Failed {
        generation: u64,
        message: String,
    },
}

impl Default for PredictionState {
    fn default() -> Self {
        Self::Idle
    }
}

impl PredictionState {
    pub fn name(&self) -> String {
        match self {
            Self::Idle => "idle".into(),
            Self::Pending { generation: _ } => "pending".into(),
            Self::Success {
                generation: _,
                result: _,
            } => "success".into(),
            Self::Failed {
                generation: _,
                message: _,
            } => "failed".into(),
        }
    }

    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Pending { generation }
            | Self::Success { generation, .. }
            | Self::Failed { generation, .. } => Some(*generation),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Success { result, .. } => Some(match result.vehicle() {
                Some(vehicle) => format!("Recommended Vehicle: {}", vehicle),
                None => NO_VEHICLE_MESSAGE.into(),
            }),
            Self::Failed { message, .. } => Some(format!("Error: {}", message)),
            _ => None,
        }
    }
}
