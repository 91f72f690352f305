use std::env::{self, VarError};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::entities::Coordinates;
use crate::error::{invalid_input_error, Error};
use crate::external::google_maps::DEFAULT_MAPS_HOST;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5001";
pub const DEFAULT_ORIGIN: &str = "19.075887,72.877911";
pub const DEFAULT_MAP_DOCUMENT: &str = "shipments_map.html";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub backend_url: String,
    pub maps_host: String,
    pub origin: Coordinates,
    pub map_document: PathBuf,
    pub listen_addr: SocketAddr,
}

impl Config {
    /// Reads `ROUTEVIEW_*` variables, loading a `.env` file first if present.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_vars(|key| env::var(key))
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let var = |key: &str, default: &str| -> Result<String, Error> {
            match lookup(key) {
                Ok(value) => Ok(value),
                Err(VarError::NotPresent) => Ok(default.to_string()),
                Err(err) => Err(err.into()),
            }
        };

        let backend_url = var("ROUTEVIEW_BACKEND_URL", DEFAULT_BACKEND_URL)?;
        let maps_host = var("ROUTEVIEW_MAPS_HOST", DEFAULT_MAPS_HOST)?;
        let origin: Coordinates = var("ROUTEVIEW_ORIGIN", DEFAULT_ORIGIN)?.parse()?;
        let map_document: PathBuf = var("ROUTEVIEW_MAP_DOCUMENT", DEFAULT_MAP_DOCUMENT)?.into();

        let listen = var("ROUTEVIEW_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let listen_addr: SocketAddr = listen
            .parse()
            .map_err(|_| invalid_input_error(format!("invalid listen address `{}`", listen)))?;

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            maps_host,
            origin,
            map_document,
            listen_addr,
        })
    }
}
