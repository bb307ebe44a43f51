//! Client for the Schedules API (`schedules`, v1).
//!
//! Schedule records carry local departure/arrival times with no offset; the
//! resolver pairs each with its UTC equivalent using the corresponding
//! airport's time zone from the appendix.

use chrono::NaiveDate;

use crate::datetime::date_segments;
use crate::error::FlexError;
use crate::resolve::parse_schedules;
use crate::transport::{to_owned_query, QueryParams, Transport};
use crate::types::ScheduledFlight;

const API_NAME: &str = "schedules";
const API_VERSION: &str = "v1";

/// Looks up scheduled (future) flights by carrier and flight number or by
/// route.
#[derive(Debug, Clone)]
pub struct SchedulesClient<T> {
    transport: T,
}

impl<T: Transport> SchedulesClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// A carrier's scheduled flight arriving on the given date.
    pub fn by_flight_arriving(
        &self,
        carrier: &str,
        flight_number: u32,
        date: NaiveDate,
        query: &[(&str, &str)],
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        self.by_flight(carrier, flight_number, "arriving", date, query)
    }

    /// A carrier's scheduled flight departing on the given date.
    pub fn by_flight_departing(
        &self,
        carrier: &str,
        flight_number: u32,
        date: NaiveDate,
        query: &[(&str, &str)],
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        self.by_flight(carrier, flight_number, "departing", date, query)
    }

    /// All scheduled flights from `origin` to `destination` departing on the
    /// given date. Route endpoints take ICAO airport codes.
    pub fn by_route_departing(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        self.by_route(origin, destination, "departing", date)
    }

    /// All scheduled flights from `origin` to `destination` arriving on the
    /// given date. Route endpoints take ICAO airport codes.
    pub fn by_route_arriving(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        self.by_route(origin, destination, "arriving", date)
    }

    fn by_flight(
        &self,
        carrier: &str,
        flight_number: u32,
        direction: &str,
        date: NaiveDate,
        query: &[(&str, &str)],
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        let endpoint = format!(
            "flight/{carrier}/{flight_number}/{direction}/{}",
            date_segments(date)
        );
        self.fetch(endpoint, to_owned_query(query))
    }

    fn by_route(
        &self,
        origin: &str,
        destination: &str,
        direction: &str,
        date: NaiveDate,
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        let endpoint = format!(
            "from/{origin}/to/{destination}/{direction}/{}",
            date_segments(date)
        );
        let query = vec![("codeType".to_string(), "ICAO".to_string())];
        self.fetch(endpoint, query)
    }

    fn fetch(
        &self,
        endpoint: String,
        query: QueryParams,
    ) -> Result<Vec<ScheduledFlight>, FlexError> {
        let response = self
            .transport
            .send_request(API_NAME, API_VERSION, &endpoint, &query)?;
        parse_schedules(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::RecordingTransport;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn schedule_response() -> serde_json::Value {
        json!({
            "scheduledFlights": [{
                "carrierFsCode": "AA",
                "flightNumber": "100",
                "departureAirportFsCode": "JFK",
                "arrivalAirportFsCode": "LAX",
                "departureTime": "2024-03-01T09:00:00.000",
                "arrivalTime": "2024-03-01T12:15:00.000",
                "stops": 0
            }],
            "appendix": {
                "airlines": [{ "fs": "AA", "name": "American Airlines" }],
                "airports": [
                    { "fs": "JFK", "timeZoneRegionName": "America/New_York" },
                    { "fs": "LAX", "timeZoneRegionName": "America/Los_Angeles" }
                ]
            }
        })
    }

    #[test]
    fn flight_lookup_builds_endpoint_with_no_extra_params() {
        let transport = RecordingTransport::replying(schedule_response());
        let client = SchedulesClient::new(&transport);
        client.by_flight_departing("AA", 100, date(), &[]).unwrap();

        let request = transport.only_request();
        assert_eq!(request.api_name, "schedules");
        assert_eq!(request.api_version, "v1");
        assert_eq!(request.endpoint, "flight/AA/100/departing/2024/3/1");
        assert!(request.query.is_empty());
    }

    #[test]
    fn arriving_lookup_builds_endpoint() {
        let transport = RecordingTransport::replying(json!({ "scheduledFlights": [] }));
        let client = SchedulesClient::new(&transport);
        client.by_flight_arriving("DL", 2, date(), &[]).unwrap();

        assert_eq!(
            transport.only_request().endpoint,
            "flight/DL/2/arriving/2024/3/1"
        );
    }

    #[test]
    fn route_lookups_send_icao_code_type() {
        let transport = RecordingTransport::replying(json!({ "scheduledFlights": [] }));
        let client = SchedulesClient::new(&transport);
        client.by_route_departing("KJFK", "KLAX", date()).unwrap();
        client.by_route_arriving("KJFK", "KLAX", date()).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].endpoint, "from/KJFK/to/KLAX/departing/2024/3/1");
        assert_eq!(requests[1].endpoint, "from/KJFK/to/KLAX/arriving/2024/3/1");
        for request in requests.iter() {
            assert_eq!(
                request.query,
                vec![("codeType".to_string(), "ICAO".to_string())]
            );
        }
    }

    #[test]
    fn enriches_flights_and_normalizes_times() {
        let transport = RecordingTransport::replying(schedule_response());
        let client = SchedulesClient::new(&transport);
        let flights = client.by_flight_departing("AA", 100, date(), &[]).unwrap();

        assert_eq!(flights.len(), 1);
        let flight = &flights[0];
        assert_eq!(flight.carrier.fs, "AA");
        assert_eq!(flight.departure_airport.fs, "JFK");
        assert_eq!(flight.arrival_airport.fs, "LAX");
        assert_eq!(flight.departure_date.date_local, "2024-03-01T09:00:00.000");
        assert_eq!(flight.departure_date.date_utc, "2024-03-01T14:00:00+00:00");
        assert_eq!(flight.arrival_date.date_utc, "2024-03-01T20:15:00+00:00");
        assert_eq!(flight.raw["stops"], 0);
    }

    #[test]
    fn missing_primary_key_is_empty_not_error() {
        let transport = RecordingTransport::replying(json!({ "request": {} }));
        let client = SchedulesClient::new(&transport);
        assert!(client
            .by_route_departing("KJFK", "KLAX", date())
            .unwrap()
            .is_empty());
    }
}
