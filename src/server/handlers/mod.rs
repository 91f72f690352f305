pub mod map;
pub mod page;
pub mod predictions;
pub mod trips;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub vehicle_type: Option<String>,
}
