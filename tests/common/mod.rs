#![allow(dead_code)]

use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;

use axum::Router;
use serde_json::{json, Value};

use routeview::entities::Coordinates;
use routeview::external::backend::Backend;
use routeview::view::{TripBrowser, ViewSettings};

/// Serves `app` on an ephemeral local port for the rest of the test.
pub fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(server);

    addr
}

pub fn settings() -> ViewSettings {
    ViewSettings {
        maps_host: "www.google.com".into(),
        origin: Coordinates {
            latitude: 19.075887,
            longitude: 72.877911,
        },
    }
}

pub async fn mount(backend: SocketAddr) -> TripBrowser {
    let api = Backend::new(format!("http://{}", backend));
    TripBrowser::mount(Arc::new(api), settings()).await
}

pub fn optimizer_rows() -> Value {
    json!([
        {
            "TRIP_ID": "T_1",
            "Shipments": "S1, S4",
            "TIME_SLOT": "09:00:00 - 12:00:00",
            "TRIP_TIME": 30.0,
            "Latitude": 19.1,
            "Longitude": 72.9,
            "Vehicle_Type": "3W",
            "MST_DIST": 6.0,
            "CAPACITY_UTI": 0.8,
            "TIME_UTI": 0.25
        },
        {
            "TRIP_ID": "T_2",
            "Shipments": ["S2"],
            "TIME_SLOT": "12:00:00 - 15:00:00",
            "TRIP_TIME": 48.5,
            "Latitude": "19.2",
            "Longitude": "72.8",
            "Vehicle_Type": " Truck ",
            "MST_DIST": 9.7,
            "CAPACITY_UTI": 0.6,
            "TIME_UTI": 0.4
        },
        {
            "TRIP_ID": "T_3",
            "Shipments": "S3",
            "Latitude": 19.0,
            "Longitude": 72.85
        }
    ])
}

pub fn ids(trips: &[routeview::entities::Trip]) -> Vec<String> {
    trips
        .iter()
        .map(|t| t.id.as_ref().map(|id| id.to_string()).unwrap_or_default())
        .collect()
}
