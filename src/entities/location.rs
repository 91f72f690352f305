use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| invalid_input_error(format!("expected `lat,lon`, got `{}`", s)))?;

        Ok(Self {
            latitude: parse_degrees("latitude", lat)?,
            longitude: parse_degrees("longitude", lon)?,
        })
    }
}

pub fn parse_degrees(field: &str, input: &str) -> Result<f64, Error> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid_input_error(format!("{} must be a number", field))),
    }
}
