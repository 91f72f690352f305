use super::TripBrowser;

use crate::entities::Trip;

#[derive(Clone, Debug, Default)]
pub struct FilterState {
    pub text: String,
    pub displayed: Vec<Trip>,
}

impl FilterState {
    pub(super) fn recompute(&mut self, canonical: &[Trip]) {
        self.displayed = by_vehicle_type(canonical, &self.text);
    }
}

/// Empty text keeps everything; a trip with no vehicle type never matches otherwise.
pub fn by_vehicle_type(trips: &[Trip], text: &str) -> Vec<Trip> {
    if text.is_empty() {
        return trips.to_vec();
    }

    let needle = text.trim().to_lowercase();

    trips
        .iter()
        .filter(|trip| match trip.vehicle_type() {
            Some(vehicle_type) => vehicle_type.trim().to_lowercase().contains(&needle),
            None => false,
        })
        .cloned()
        .collect()
}

impl TripBrowser {
    #[tracing::instrument(skip(self))]
    pub async fn set_vehicle_filter(&self, text: &str) {
        let loader = self.loader.read().await;
        let mut filter = self.filter.write().await;

        filter.text = text.to_string();
        filter.recompute(&loader.trips);

        tracing::debug!(shown = filter.displayed.len(), "filter applied");
    }

    pub async fn filter_text(&self) -> String {
        self.filter.read().await.text.clone()
    }

    pub async fn displayed(&self) -> Vec<Trip> {
        self.filter.read().await.displayed.clone()
    }
}
