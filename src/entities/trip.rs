use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "TRIP_ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar>,
    #[serde(rename = "Shipments", default, skip_serializing_if = "Option::is_none")]
    pub shipments: Option<Shipments>,
    #[serde(rename = "TIME_SLOT", default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<Scalar>,
    #[serde(rename = "TRIP_TIME", default, skip_serializing_if = "Option::is_none")]
    pub trip_time: Option<Scalar>,
    #[serde(rename = "Latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Scalar>,
    #[serde(rename = "Longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Scalar>,
    #[serde(rename = "Vehicle_Type", default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(rename = "MST_DIST", default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Scalar>,
    #[serde(rename = "CAPACITY_UTI", default, skip_serializing_if = "Option::is_none")]
    pub capacity_utilization: Option<Scalar>,
    #[serde(rename = "TIME_UTI", default, skip_serializing_if = "Option::is_none")]
    pub time_utilization: Option<Scalar>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Shipments {
    List(Vec<Scalar>),
    Joined(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // floats print shortest-form, so 19.0 renders as 19
            Self::Number(n) => match n.as_f64() {
                Some(value) if n.is_f64() => write!(f, "{}", value),
                _ => write!(f, "{}", n),
            },
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Shipments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined(s) => f.write_str(s),
            Self::List(ids) => {
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", id)?;
                }
                Ok(())
            }
        }
    }
}

impl Trip {
    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    pub fn destination(&self) -> Option<(&Scalar, &Scalar)> {
        match (&self.latitude, &self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// Reply of the optimize-routes endpoint. The documented shape wraps the
/// list; the optimizer service itself answers with the bare array.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum TripsEnvelope {
    Wrapped { trips: Vec<Trip> },
    Bare(Vec<Trip>),
}

impl From<TripsEnvelope> for Vec<Trip> {
    fn from(envelope: TripsEnvelope) -> Self {
        match envelope {
            TripsEnvelope::Wrapped { trips } => trips,
            TripsEnvelope::Bare(trips) => trips,
        }
    }
}
