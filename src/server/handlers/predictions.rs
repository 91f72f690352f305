use axum::extract::{Extension, Form, Json};
use axum::response::Redirect;
use serde::Serialize;

use crate::entities::{PredictionForm, PredictionState};
use crate::server::SharedBrowser;

#[derive(Debug, Serialize)]
pub struct PredictionView {
    state: PredictionState,
    message: Option<String>,
}

impl From<PredictionState> for PredictionView {
    fn from(state: PredictionState) -> Self {
        Self {
            message: state.message(),
            state,
        }
    }
}

pub async fn current(Extension(browser): Extension<SharedBrowser>) -> Json<PredictionView> {
    Json(browser.prediction().await.into())
}

pub async fn submit(
    Extension(browser): Extension<SharedBrowser>,
    Json(form): Json<PredictionForm>,
) -> Json<PredictionView> {
    Json(browser.submit_prediction(form).await.into())
}

pub async fn submit_form(
    Extension(browser): Extension<SharedBrowser>,
    Form(form): Form<PredictionForm>,
) -> Redirect {
    browser.submit_prediction(form).await;

    Redirect::to("/")
}
