use axum::extract::Extension;
use axum::response::Html;

use crate::error::{not_found_error, Error};
use crate::server::MapDocument;

pub async fn show(Extension(MapDocument(path)): Extension<MapDocument>) -> Result<Html<String>, Error> {
    match tokio::fs::read_to_string(&path).await {
        Ok(document) => Ok(Html(document)),
        Err(err) => {
            tracing::warn!("map document {} unavailable: {}", path.display(), err);
            Err(not_found_error("map document not found"))
        }
    }
}
