use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::{
    api::{PredictionAPI, TripAPI, API},
    entities::{PredictionRequest, PredictionResult, Trip, TripsEnvelope, PREDICTION_FAILED_MESSAGE},
    error::{upstream_error, Error},
};

#[derive(Clone, Debug)]
pub struct Backend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl Backend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TripAPI for Backend {
    #[tracing::instrument(skip(self))]
    async fn optimize_routes(&self) -> Result<Vec<Trip>, Error> {
        let res = self
            .client
            .post(self.url("/api/optimize-routes"))
            .json(&json!({}))
            .send()
            .await?;

        let status = res.status();

        if !status.is_success() {
            return Err(upstream_error(format!(
                "optimize-routes returned {}",
                status.as_u16()
            )));
        }

        let data: TripsEnvelope = res.json().await?;

        Ok(data.into())
    }
}

#[async_trait]
impl PredictionAPI for Backend {
    #[tracing::instrument(skip(self))]
    async fn predict_vehicle(&self, request: PredictionRequest) -> Result<PredictionResult, Error> {
        let res = self
            .client
            .post(self.url("/api/predict-vehicle"))
            .json(&request)
            .send()
            .await?;

        if !res.status().is_success() {
            // an undecodable body surfaces the decode error itself
            let body: ErrorBody = res.json().await?;
            let message = body
                .error
                .unwrap_or_else(|| PREDICTION_FAILED_MESSAGE.to_string());

            return Err(upstream_error(message));
        }

        Ok(res.json().await?)
    }
}

impl API for Backend {}
