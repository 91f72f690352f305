use chrono::{DateTime, Utc};

use super::TripBrowser;

use crate::{entities::Trip, error::Error};

#[derive(Clone, Debug, Default)]
pub struct LoaderState {
    pub trips: Vec<Trip>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl TripBrowser {
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) -> Result<usize, Error> {
        let trips = self.api.optimize_routes().await?;
        let count = trips.len();

        let mut loader = self.loader.write().await;
        loader.trips = trips;
        loader.loaded_at = Some(Utc::now());

        // loader before filter, always
        let mut filter = self.filter.write().await;
        filter.recompute(&loader.trips);

        tracing::info!(count, "loaded optimized routes");

        Ok(count)
    }

    pub async fn trips(&self) -> Vec<Trip> {
        self.loader.read().await.trips.clone()
    }

    pub async fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loader.read().await.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_test::block_on;

    use crate::entities::Coordinates;
    use crate::error::upstream_error;
    use crate::view::stub::{trip, StubAPI};
    use crate::view::{TripBrowser, ViewSettings};

    fn settings() -> ViewSettings {
        ViewSettings {
            maps_host: "www.google.com".into(),
            origin: Coordinates {
                latitude: 19.075887,
                longitude: 72.877911,
            },
        }
    }

    #[test]
    fn mount_keeps_server_order() {
        let trips = vec![trip(3, Some("Truck")), trip(1, Some("3W")), trip(2, None)];
        let api = StubAPI::with_trips(vec![Ok(trips.clone())]);

        let browser = block_on(TripBrowser::mount(Arc::new(api), settings()));

        assert_eq!(block_on(browser.trips()), trips);
        assert_eq!(block_on(browser.displayed()), trips);
        assert!(block_on(browser.loaded_at()).is_some());
    }

    #[test]
    fn failed_mount_leaves_view_empty() {
        let api = StubAPI::with_trips(vec![Err(upstream_error("optimize-routes returned 500"))]);

        let browser = block_on(TripBrowser::mount(Arc::new(api), settings()));

        assert!(block_on(browser.trips()).is_empty());
        assert!(block_on(browser.displayed()).is_empty());
        assert!(block_on(browser.loaded_at()).is_none());
    }

    #[test]
    fn failed_reload_keeps_prior_list() {
        let first = vec![trip(1, Some("Van"))];
        let api = StubAPI::with_trips(vec![Ok(first.clone()), Err(upstream_error("down"))]);
        let browser = block_on(TripBrowser::mount(Arc::new(api), settings()));

        let err = block_on(browser.load()).unwrap_err();

        assert_eq!(err.code, 4);
        assert_eq!(block_on(browser.trips()), first);
    }

    #[test]
    fn reload_reapplies_filter() {
        let api = StubAPI::with_trips(vec![
            Ok(vec![trip(1, Some("Van"))]),
            Ok(vec![trip(2, Some("Truck")), trip(3, Some("van"))]),
        ]);
        let browser = block_on(TripBrowser::mount(Arc::new(api), settings()));
        block_on(browser.set_vehicle_filter("VAN"));

        assert_eq!(block_on(browser.load()).unwrap(), 2);

        assert_eq!(block_on(browser.displayed()), vec![trip(3, Some("van"))]);
    }
}
