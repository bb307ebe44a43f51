//! Client for airport lookups on the Flight Status API (`flightstatus`, v2).

use chrono::NaiveDate;

use crate::datetime::date_segments;
use crate::error::FlexError;
use crate::resolve::parse_statuses;
use crate::transport::{to_owned_query, with_utc_default, Config, Transport};
use crate::types::FlightStatus;

const API_NAME: &str = "flightstatus";
const API_VERSION: &str = "v2";

/// Looks up the statuses of all flights arriving at or departing from an
/// airport during one hour of a given date. Defaults the `utc` query
/// parameter from [`Config::use_utc_time`] when the caller does not set one.
#[derive(Debug, Clone)]
pub struct AirportStatusClient<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> AirportStatusClient<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    /// Flights arriving at `airport` during `hour_of_day` (0-23) on `date`.
    pub fn by_arrival_date(
        &self,
        airport: &str,
        date: NaiveDate,
        hour_of_day: u8,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        self.by_date(airport, "arr", date, hour_of_day, query)
    }

    /// Flights departing from `airport` during `hour_of_day` (0-23) on `date`.
    pub fn by_departure_date(
        &self,
        airport: &str,
        date: NaiveDate,
        hour_of_day: u8,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        self.by_date(airport, "dep", date, hour_of_day, query)
    }

    fn by_date(
        &self,
        airport: &str,
        direction: &str,
        date: NaiveDate,
        hour_of_day: u8,
        query: &[(&str, &str)],
    ) -> Result<Vec<FlightStatus>, FlexError> {
        let endpoint = format!(
            "airport/status/{airport}/{direction}/{}/{hour_of_day}",
            date_segments(date)
        );
        let query = with_utc_default(to_owned_query(query), &self.config);
        let response = self
            .transport
            .send_request(API_NAME, API_VERSION, &endpoint, &query)?;
        parse_statuses(response)
    }
}
