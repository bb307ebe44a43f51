//! Domain types for Flex API responses.
//!
//! # Design
//! The upstream payloads are wide and loosely specified, so every typed
//! struct keeps the fields the resolver actually reads and carries the rest
//! in a `#[serde(flatten)]` map. Enriched records re-serialize to the same
//! JSON shape the PHP-era consumers of this API expect: the original flat
//! fields plus the embedded `carrier`/`departureAirport`/`arrivalAirport`/
//! `equipment` objects.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An airline record from the response appendix, keyed by its FS code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Airline {
    pub fs: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An airport record from the response appendix, keyed by its FS code.
///
/// `timeZoneRegionName` is the IANA zone used to normalize schedule
/// timestamps to UTC.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Airport {
    pub fs: String,
    #[serde(
        rename = "timeZoneRegionName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub time_zone_region_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An equipment (airframe) record from the response appendix, keyed by its
/// IATA code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    pub iata: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The side-table section of a Flex response. Any of the lists may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Appendix {
    #[serde(default)]
    pub airlines: Vec<Airline>,
    #[serde(default)]
    pub airports: Vec<Airport>,
    #[serde(default)]
    pub equipments: Vec<Equipment>,
}

/// A schedule timestamp in the airport's local zone and in UTC.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightTimes {
    pub date_local: String,
    pub date_utc: String,
}

/// A flight-status record with its code references resolved.
///
/// `raw` holds the complete upstream record (including the original
/// `*FsCode` fields), flattened back into place on serialization.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatus {
    pub carrier: Airline,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub equipment: Option<Equipment>,
    #[serde(flatten)]
    pub raw: Map<String, Value>,
}

/// A scheduled-flight record with resolved references and UTC-normalized
/// departure/arrival times.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledFlight {
    pub carrier: Airline,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub departure_date: FlightTimes,
    pub arrival_date: FlightTimes,
    #[serde(flatten)]
    pub raw: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn airline_keeps_unknown_fields() {
        let airline: Airline = serde_json::from_value(json!({
            "fs": "AA",
            "iata": "AA",
            "name": "American Airlines",
            "active": true
        }))
        .unwrap();
        assert_eq!(airline.fs, "AA");
        assert_eq!(airline.extra["name"], "American Airlines");

        let back = serde_json::to_value(&airline).unwrap();
        assert_eq!(back["active"], true);
    }

    #[test]
    fn airport_parses_time_zone_region_name() {
        let airport: Airport = serde_json::from_value(json!({
            "fs": "JFK",
            "timeZoneRegionName": "America/New_York",
            "city": "New York"
        }))
        .unwrap();
        assert_eq!(
            airport.time_zone_region_name.as_deref(),
            Some("America/New_York")
        );
        assert_eq!(airport.extra["city"], "New York");
    }

    #[test]
    fn airport_without_zone_serializes_without_null() {
        let airport: Airport = serde_json::from_value(json!({ "fs": "XXX" })).unwrap();
        let back = serde_json::to_value(&airport).unwrap();
        assert!(back.get("timeZoneRegionName").is_none());
    }

    #[test]
    fn appendix_lists_default_to_empty() {
        let appendix: Appendix = serde_json::from_value(json!({
            "airlines": [{ "fs": "AA" }]
        }))
        .unwrap();
        assert_eq!(appendix.airlines.len(), 1);
        assert!(appendix.airports.is_empty());
        assert!(appendix.equipments.is_empty());
    }

    #[test]
    fn flight_times_serialize_camel_case() {
        let times = FlightTimes {
            date_local: "2024-03-01T09:00:00.000".to_string(),
            date_utc: "2024-03-01T14:00:00+00:00".to_string(),
        };
        let value = serde_json::to_value(&times).unwrap();
        assert_eq!(value["dateLocal"], "2024-03-01T09:00:00.000");
        assert_eq!(value["dateUtc"], "2024-03-01T14:00:00+00:00");
    }
}
