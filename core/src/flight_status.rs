//! Client for flight lookups on the Flight Status API (`flightstatus`, v2).

use chrono::NaiveDate;

use crate::datetime::date_segments;
use crate::error::FlexError;
use crate::resolve::parse_statuses;
use crate::transport::{to_owned_query, with_utc_default, Config, QueryParams, Transport};
use crate::types::FlightStatus;

const API_NAME: &str = "flightstatus";
const API_VERSION: &str = "v2";

/// Looks up flight statuses by FlightStats flight ID or by carrier, flight
/// number, and date. Date-based lookups default the `utc` query parameter
/// from [`Config::use_utc_time`] when the caller does not set one.
#[derive(Debug, Clone)]
pub struct FlightStatusClient<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> FlightStatusClient<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Status of the flight with the given FlightStats flight ID. The
    /// caller's query parameters are sent untouched.
    pub fn by_flight_id(
        &self,
        flight_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        self.fetch(format!("flight/status/{flight_id}"), to_owned_query(query))
    }

    /// Statuses of a carrier's flight arriving on the given date.
    pub fn by_arrival_date(
        &self,
        carrier: &str,
        flight_number: u32,
        date: NaiveDate,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        self.by_date(carrier, flight_number, "arr", date, query)
    }

    /// Statuses of a carrier's flight departing on the given date.
    pub fn by_departure_date(
        &self,
        carrier: &str,
        flight_number: u32,
        date: NaiveDate,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        self.by_date(carrier, flight_number, "dep", date, query)
    }

    fn by_date(
        &self,
        carrier: &str,
        flight_number: u32,
        direction: &str,
        date: NaiveDate,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        let endpoint = format!(
            "flight/status/{carrier}/{flight_number}/{direction}/{}",
            date_segments(date)
        );
        let query = with_utc_default(to_owned_query(query), &self.config);
        self.fetch(endpoint, query)
    }

    fn fetch(&self, endpoint: String, query: QueryParams) -> Result<Vec<FlightStatus>, FlexError> {
        let response = self
            .transport
            .send_request(API_NAME, API_VERSION, &endpoint, &query)?;
        parse_statuses(response)
    }
}
