use std::fmt::Display;

pub const DEFAULT_MAPS_HOST: &str = "www.google.com";

/// Coordinates are written as given, with no escaping.
pub fn directions_url(
    host: &str,
    origin_lat: impl Display,
    origin_lon: impl Display,
    dest_lat: impl Display,
    dest_lon: impl Display,
) -> String {
    format!(
        "https://{}/maps/dir/{},{}/{},{}",
        host, origin_lat, origin_lon, dest_lat, dest_lon
    )
}
