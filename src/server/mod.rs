mod handlers;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::error::{unexpected_error, Error};
use crate::server::handlers::{map, page, predictions, trips};
use crate::view::TripBrowser;

pub type SharedBrowser = Arc<TripBrowser>;

#[derive(Clone, Debug)]
pub struct MapDocument(pub PathBuf);

pub fn router(browser: SharedBrowser, map_document: PathBuf) -> Router {
    Router::new()
        .route("/", get(page::show))
        .route("/trips", get(trips::list))
        .route("/trips/reload", post(trips::reload))
        .route(
            "/predictions",
            get(predictions::current).post(predictions::submit),
        )
        .route("/predict", post(predictions::submit_form))
        .route("/map", get(map::show))
        .layer(Extension(browser))
        .layer(Extension(MapDocument(map_document)))
}

pub async fn serve(browser: TripBrowser, addr: SocketAddr, map_document: PathBuf) -> Result<(), Error> {
    let app = router(Arc::new(browser), map_document);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(unexpected_error)
}
