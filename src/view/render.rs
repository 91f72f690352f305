use std::fmt::{Display, Write};

use serde::Serialize;

use super::{TripBrowser, ViewSettings};

use crate::entities::{PredictionState, Trip};
use crate::external::google_maps::directions_url;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TripRow {
    pub trip_id: String,
    pub shipment_ids: String,
    pub time_slot: String,
    pub trip_time: String,
    pub from: String,
    pub to: String,
    pub vehicle_type: String,
    pub distance: String,
    pub capacity_utilization: String,
    pub time_utilization: String,
    pub map_link: Option<String>,
}

fn cell<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

impl TripRow {
    pub fn new(trip: &Trip, settings: &ViewSettings) -> Self {
        let origin = settings.origin;
        let destination = trip.destination();

        Self {
            trip_id: cell(&trip.id),
            shipment_ids: cell(&trip.shipments),
            time_slot: cell(&trip.time_slot),
            trip_time: cell(&trip.trip_time),
            from: origin.to_string(),
            to: destination
                .map(|(lat, lon)| format!("{},{}", lat, lon))
                .unwrap_or_default(),
            vehicle_type: cell(&trip.vehicle_type),
            distance: cell(&trip.distance),
            capacity_utilization: cell(&trip.capacity_utilization),
            time_utilization: cell(&trip.time_utilization),
            map_link: destination.map(|(lat, lon)| {
                directions_url(
                    &settings.maps_host,
                    origin.latitude,
                    origin.longitude,
                    lat,
                    lon,
                )
            }),
        }
    }
}

pub fn rows(trips: &[Trip], settings: &ViewSettings) -> Vec<TripRow> {
    trips.iter().map(|trip| TripRow::new(trip, settings)).collect()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const COLUMNS: [&str; 11] = [
    "Trip ID",
    "Shipment IDs",
    "TIME SLOT",
    "TRIP_TIME",
    "FROM(STORE)",
    "TO (Lat, Long)",
    "Vehicle Type",
    "Distance (km)",
    "Capacity Utilization",
    "Time Utilization",
    "Map",
];

pub fn page(rows: &[TripRow], filter_text: &str, prediction: &PredictionState) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Optimized Routes</title></head>\n<body>\n");
    html.push_str("<div class=\"optimized-routes-container\">\n<h1>Optimized Routes</h1>\n");

    html.push_str("<div class=\"prediction-section\">\n<h2>New Shipment Prediction</h2>\n");
    html.push_str("<form class=\"input-group\" method=\"post\" action=\"/predict\">\n");
    html.push_str("<input type=\"number\" name=\"latitude\" placeholder=\"Latitude\" step=\"0.000001\">\n");
    html.push_str("<input type=\"number\" name=\"longitude\" placeholder=\"Longitude\" step=\"0.000001\">\n");
    html.push_str("<input type=\"text\" name=\"time_slot\" placeholder=\"Time Slot (e.g., 9-12)\">\n");
    html.push_str("<button type=\"submit\">Predict Vehicle</button>\n</form>\n");

    match prediction {
        PredictionState::Failed { .. } => {
            let message = prediction.message().unwrap_or_default();
            let _ = writeln!(html, "<div class=\"error-message\">{}</div>", escape(&message));
        }
        PredictionState::Success { result, .. } => {
            let message = prediction.message().unwrap_or_default();
            html.push_str("<div class=\"prediction-result\">\n");
            if result.vehicle().is_some() {
                let _ = writeln!(html, "<h3>{}</h3>", escape(&message));
                html.push_str("<p>This vehicle can handle your shipment within the specified time window</p>\n");
            } else {
                let _ = writeln!(html, "<h3 class=\"warning\">{}</h3>", escape(&message));
            }
            html.push_str("</div>\n");
        }
        _ => {}
    }
    html.push_str("</div>\n");

    html.push_str("<form class=\"input-form\" method=\"get\" action=\"/\">\n<h1>FILTER</h1>\n");
    html.push_str("<label for=\"vehicle-type\">Vehicle Type:</label>\n");
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"vehicle-type\" name=\"vehicle_type\" value=\"{}\" placeholder=\"Enter Vehicle Type\">",
        escape(filter_text)
    );
    html.push_str("</form>\n");

    html.push_str("<h2>Trip Details</h2>\n<table class=\"trip-details-table\">\n<thead><tr>");
    for column in COLUMNS {
        let _ = write!(html, "<th>{}</th>", column);
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row in rows {
        html.push_str("<tr>");
        for value in [
            &row.trip_id,
            &row.shipment_ids,
            &row.time_slot,
            &row.trip_time,
            &row.from,
            &row.to,
            &row.vehicle_type,
            &row.distance,
            &row.capacity_utilization,
            &row.time_utilization,
        ] {
            let _ = write!(html, "<td>{}</td>", escape(value));
        }
        match &row.map_link {
            Some(link) => {
                let _ = write!(
                    html,
                    "<td><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Map</a></td>",
                    escape(link)
                );
            }
            None => html.push_str("<td></td>"),
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");

    html.push_str("<h2>Optimized Routes Map</h2>\n<div class=\"map-container\">\n");
    html.push_str("<iframe src=\"/map\" title=\"Optimized Routes Map\" width=\"100%\" height=\"600px\"></iframe>\n");
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

impl TripBrowser {
    pub async fn rows(&self) -> Vec<TripRow> {
        rows(&self.displayed().await, &self.settings)
    }

    pub async fn render_page(&self) -> String {
        page(
            &self.rows().await,
            &self.filter_text().await,
            &self.prediction().await,
        )
    }
}
