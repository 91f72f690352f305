use axum::extract::{Extension, Query};
use axum::response::Html;

use super::FilterParams;
use crate::server::SharedBrowser;

pub async fn show(
    Extension(browser): Extension<SharedBrowser>,
    Query(params): Query<FilterParams>,
) -> Html<String> {
    if let Some(text) = params.vehicle_type {
        browser.set_vehicle_filter(&text).await;
    }

    Html(browser.render_page().await)
}
