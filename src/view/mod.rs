mod filter;
mod loader;
mod prediction;
pub mod render;

use std::sync::atomic::AtomicU64;

use tokio::sync::{Mutex, RwLock};

use crate::{api::DynAPI, config::Config, entities::Coordinates, entities::PredictionState};

pub use filter::{by_vehicle_type, FilterState};
pub use loader::LoaderState;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewSettings {
    pub maps_host: String,
    pub origin: Coordinates,
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        Self {
            maps_host: config.maps_host.clone(),
            origin: config.origin,
        }
    }
}

/// The trip browser screen. Each state slice has exactly one writer:
/// `load` owns `loader`, the filter recompute owns `filter`, and
/// `submit_prediction` owns `prediction`.
pub struct TripBrowser {
    api: DynAPI,
    settings: ViewSettings,
    loader: RwLock<LoaderState>,
    filter: RwLock<FilterState>,
    prediction: Mutex<PredictionState>,
    generation: AtomicU64,
}

impl TripBrowser {
    pub fn new(api: DynAPI, settings: ViewSettings) -> Self {
        Self {
            api,
            settings,
            loader: RwLock::new(LoaderState::default()),
            filter: RwLock::new(FilterState::default()),
            prediction: Mutex::new(PredictionState::Idle),
            generation: AtomicU64::new(0),
        }
    }

    /// A failed initial load is logged and leaves the view empty.
    #[tracing::instrument(name = "TripBrowser::mount", skip_all)]
    pub async fn mount(api: DynAPI, settings: ViewSettings) -> Self {
        let browser = Self::new(api, settings);

        if let Err(err) = browser.load().await {
            tracing::error!(code = err.code, "failed to fetch optimized routes: {}", err.message);
        }

        browser
    }
}
