use std::sync::Arc;

use routeview::config::Config;
use routeview::error::Error;
use routeview::external::backend::Backend;
use routeview::server::serve;
use routeview::view::{TripBrowser, ViewSettings};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt::init();

    let backend = Backend::new(config.backend_url.clone());
    let browser = TripBrowser::mount(Arc::new(backend), ViewSettings::from(&config)).await;

    serve(browser, config.listen_addr, config.map_document).await
}
