use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{PredictionRequest, PredictionResult, Trip};
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn optimize_routes(&self) -> Result<Vec<Trip>, Error>;
}

#[async_trait]
pub trait PredictionAPI {
    async fn predict_vehicle(&self, request: PredictionRequest) -> Result<PredictionResult, Error>;
}

pub trait API: TripAPI + PredictionAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
