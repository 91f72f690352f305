use axum::extract::{Extension, Json, Query};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::FilterParams;
use crate::error::Error;
use crate::server::SharedBrowser;
use crate::view::render::TripRow;

#[derive(Debug, Serialize)]
pub struct ReloadSummary {
    trips: usize,
    loaded_at: Option<DateTime<Utc>>,
}

pub async fn list(
    Extension(browser): Extension<SharedBrowser>,
    Query(params): Query<FilterParams>,
) -> Json<Vec<TripRow>> {
    if let Some(text) = params.vehicle_type {
        browser.set_vehicle_filter(&text).await;
    }

    browser.rows().await.into()
}

pub async fn reload(Extension(browser): Extension<SharedBrowser>) -> Result<Json<ReloadSummary>, Error> {
    let trips = browser.load().await?;
    let loaded_at = browser.loaded_at().await;

    Ok(ReloadSummary { trips, loaded_at }.into())
}
