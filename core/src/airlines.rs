//! Client for the Airlines API (`airlines`, v1).

use crate::error::FlexError;
use crate::resolve::parse_records;
use crate::transport::Transport;
use crate::types::Airline;

const API_NAME: &str = "airlines";
const API_VERSION: &str = "v1";

/// Looks up airline records by activity or by code. Responses carry no code
/// references, so records come back as-is.
#[derive(Debug, Clone)]
pub struct AirlinesClient<T> {
    transport: T,
}

impl<T: Transport> AirlinesClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// All airlines currently in service.
    pub fn active(&self) -> Result<Vec<Airline>, FlexError> {
        self.fetch("active".to_string())
    }

    /// Airlines matching an IATA code (codes can be shared by several
    /// carriers over time).
    pub fn by_iata(&self, iata_code: &str) -> Result<Vec<Airline>, FlexError> {
        self.fetch(format!("iata/{iata_code}"))
    }

    /// Airlines matching an ICAO code.
    pub fn by_icao(&self, icao_code: &str) -> Result<Vec<Airline>, FlexError> {
        self.fetch(format!("icao/{icao_code}"))
    }

    fn fetch(&self, endpoint: String) -> Result<Vec<Airline>, FlexError> {
        let response = self
            .transport
            .send_request(API_NAME, API_VERSION, &endpoint, &[])?;
        parse_records(response, "airlines")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::testing::RecordingTransport;
    use serde_json::json;

    #[test]
    fn active_builds_correct_request() {
        let transport = RecordingTransport::replying(json!({ "airlines": [] }));
        let client = AirlinesClient::new(&transport);
        client.active().unwrap();

        let request = transport.only_request();
        assert_eq!(request.api_name, "airlines");
        assert_eq!(request.api_version, "v1");
        assert_eq!(request.endpoint, "active");
        assert!(request.query.is_empty());
    }

    #[test]
    fn code_lookups_build_correct_endpoints() {
        let transport = RecordingTransport::replying(json!({ "airlines": [] }));
        let client = AirlinesClient::new(&transport);
        client.by_iata("AA").unwrap();
        client.by_icao("AAL").unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].endpoint, "iata/AA");
        assert_eq!(requests[1].endpoint, "icao/AAL");
    }

    #[test]
    fn parses_airline_records() {
        let transport = RecordingTransport::replying(json!({
            "airlines": [
                { "fs": "AA", "iata": "AA", "name": "American Airlines" },
                { "fs": "DL", "iata": "DL", "name": "Delta Air Lines" }
            ]
        }));
        let client = AirlinesClient::new(&transport);
        let airlines = client.active().unwrap();

        assert_eq!(airlines.len(), 2);
        assert_eq!(airlines[0].fs, "AA");
        assert_eq!(airlines[1].extra["name"], "Delta Air Lines");
    }

    #[test]
    fn missing_primary_key_is_empty_not_error() {
        let transport = RecordingTransport::replying(json!({ "request": {} }));
        let client = AirlinesClient::new(&transport);
        assert!(client.by_iata("ZZ").unwrap().is_empty());
    }
}
