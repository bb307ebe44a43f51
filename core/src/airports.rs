//! Client for the Airports API (`airports`, v1).

use crate::error::FlexError;
use crate::resolve::parse_records;
use crate::transport::Transport;
use crate::types::Airport;

const API_NAME: &str = "airports";
const API_VERSION: &str = "v1";

/// Looks up airport records by activity, by code, or by geographic radius.
/// Responses carry no code references, so records come back as-is.
#[derive(Debug, Clone)]
pub struct AirportsClient<T> {
    transport: T,
}

impl<T: Transport> AirportsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// All airports currently in service.
    pub fn active(&self) -> Result<Vec<Airport>, FlexError> {
        self.fetch("active".to_string())
    }

    pub fn by_iata(&self, iata_code: &str) -> Result<Vec<Airport>, FlexError> {
        self.fetch(format!("iata/{iata_code}"))
    }

    pub fn by_icao(&self, icao_code: &str) -> Result<Vec<Airport>, FlexError> {
        self.fetch(format!("icao/{icao_code}"))
    }

    /// Airports within `radius_miles` of the given point.
    pub fn within_radius(
        &self,
        longitude: f64,
        latitude: f64,
        radius_miles: u32,
    ) -> Result<Vec<Airport>, FlexError> {
        self.fetch(format!("withinRadius/{longitude}/{latitude}/{radius_miles}"))
    }

    fn fetch(&self, endpoint: String) -> Result<Vec<Airport>, FlexError> {
        let response = self
            .transport
            .send_request(API_NAME, API_VERSION, &endpoint, &[])?;
        parse_records(response, "airports")
    }
}
