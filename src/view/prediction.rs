use std::sync::atomic::Ordering;

use super::TripBrowser;

use crate::entities::{PredictionForm, PredictionRequest, PredictionState};

impl TripBrowser {
    /// Submits the form and returns the state left behind. A response that
    /// arrives after a newer submission has started is dropped.
    #[tracing::instrument(skip(self))]
    pub async fn submit_prediction(&self, form: PredictionForm) -> PredictionState {
        // numbered under the lock so generations follow the order of Pending writes
        let generation = {
            let mut state = self.prediction.lock().await;
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = PredictionState::Pending { generation };
            generation
        };

        let outcome = match PredictionRequest::try_from(&form) {
            Ok(request) => self.api.predict_vehicle(request).await,
            Err(err) => Err(err),
        };

        let next = match outcome {
            Ok(result) => PredictionState::Success { generation, result },
            Err(err) => PredictionState::Failed {
                generation,
                message: err.message,
            },
        };

        let mut state = self.prediction.lock().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "discarding superseded prediction");
            return state.clone();
        }

        *state = next;
        state.clone()
    }

    pub async fn prediction(&self) -> PredictionState {
        self.prediction.lock().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use tokio_test::block_on;

    use crate::entities::{
        Coordinates, PredictionForm, PredictionResult, PredictionState, NO_VEHICLE_MESSAGE,
    };
    use crate::error::upstream_error;
    use crate::view::stub::StubAPI;
    use crate::view::{TripBrowser, ViewSettings};

    fn browser(api: StubAPI) -> (Arc<StubAPI>, TripBrowser) {
        let api = Arc::new(api);
        let settings = ViewSettings {
            maps_host: "www.google.com".into(),
            origin: Coordinates {
                latitude: 19.075887,
                longitude: 72.877911,
            },
        };
        (api.clone(), TripBrowser::new(api, settings))
    }

    fn form(latitude: &str) -> PredictionForm {
        PredictionForm {
            latitude: latitude.into(),
            longitude: "72.85".into(),
            time_slot: "9-12".into(),
        }
    }

    #[test]
    fn starts_idle() {
        let (_, browser) = browser(StubAPI::with_trips(vec![]));
        assert_eq!(block_on(browser.prediction()), PredictionState::Idle);
    }

    #[test]
    fn success_is_recorded() {
        let mut api = StubAPI::with_trips(vec![]);
        api.prediction = Ok(PredictionResult {
            vehicle_type: Some("Van".into()),
        });
        let (_, browser) = browser(api);

        let state = block_on(browser.submit_prediction(form("19.05")));

        assert_eq!(state.message().as_deref(), Some("Recommended Vehicle: Van"));
        assert_eq!(block_on(browser.prediction()), state);
    }

    #[test]
    fn empty_success_is_not_found() {
        let (_, browser) = browser(StubAPI::with_trips(vec![]));

        let state = block_on(browser.submit_prediction(form("19.05")));

        assert_eq!(state.name(), "success");
        assert_eq!(state.message().as_deref(), Some(NO_VEHICLE_MESSAGE));
    }

    #[test]
    fn failure_replaces_previous_result() {
        let mut api = StubAPI::with_trips(vec![]);
        api.prediction = Err(upstream_error("out of range"));
        let (_, browser) = browser(api);

        let state = block_on(browser.submit_prediction(form("19.05")));

        assert_eq!(
            state,
            PredictionState::Failed {
                generation: 1,
                message: "out of range".into(),
            }
        );
    }

    #[test]
    fn invalid_input_is_not_sent() {
        let (api, browser) = browser(StubAPI::with_trips(vec![]));

        let state = block_on(browser.submit_prediction(form("north")));

        assert_eq!(state.message().as_deref(), Some("Error: latitude must be a number"));
        assert_eq!(api.predict_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submissions_settle_on_newest() {
        let mut api = StubAPI::with_trips(vec![]);
        api.prediction = Ok(PredictionResult {
            vehicle_type: Some("Van".into()),
        });
        let (_, browser) = browser(api);
        let browser = Arc::new(browser);

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let browser = browser.clone();
                tokio::spawn(async move { browser.submit_prediction(form("19.05")).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let state = browser.prediction().await;
        assert_eq!(state.name(), "success");
        assert_eq!(state.generation(), Some(32));
    }

    #[test]
    fn generations_increase() {
        let (_, browser) = browser(StubAPI::with_trips(vec![]));

        block_on(browser.submit_prediction(form("19.05")));
        let state = block_on(browser.submit_prediction(form("19.06")));

        assert_eq!(state.generation(), Some(2));
    }
}
