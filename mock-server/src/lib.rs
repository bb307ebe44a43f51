//! A mock FlightStats Flex API server.
//!
//! Serves canned responses for a representative slice of the airlines,
//! schedules, and flight-status endpoints, mirroring the upstream URL shape
//! `/{api}/rest/{version}/json/{endpoint}`. Every enrichable response
//! carries an appendix whose airline/airport/equipment codes match the code
//! references in the primary records, so client integration tests can
//! exercise the full resolution path over real HTTP.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub fn app() -> Router {
    Router::new()
        .route("/airlines/rest/v1/json/active", get(active_airlines))
        .route("/airlines/rest/v1/json/iata/{code}", get(airlines_by_iata))
        .route(
            "/schedules/rest/v1/json/flight/{carrier}/{flight}/departing/{year}/{month}/{day}",
            get(schedules_departing),
        )
        .route(
            "/flightstatus/rest/v2/json/flight/status/{carrier}/{flight}/dep/{year}/{month}/{day}",
            get(flight_status_departing),
        )
        .route(
            "/flightstatus/rest/v2/json/airport/status/{airport}/arr/{year}/{month}/{day}/{hour}",
            get(airport_status_arriving),
        )
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn airline(fs: &str, name: &str) -> Value {
    json!({ "fs": fs, "iata": fs, "name": name, "active": true })
}

fn airport(fs: &str, city: &str, zone: &str) -> Value {
    json!({ "fs": fs, "iata": fs, "city": city, "timeZoneRegionName": zone })
}

fn appendix() -> Value {
    json!({
        "airlines": [
            airline("AA", "American Airlines"),
            airline("DL", "Delta Air Lines")
        ],
        "airports": [
            airport("JFK", "New York", "America/New_York"),
            airport("LAX", "Los Angeles", "America/Los_Angeles")
        ],
        "equipments": [
            { "iata": "77W", "name": "Boeing 777-300ER" },
            { "iata": "738", "name": "Boeing 737-800" }
        ]
    })
}

async fn active_airlines() -> Json<Value> {
    Json(json!({
        "airlines": [
            airline("AA", "American Airlines"),
            airline("DL", "Delta Air Lines")
        ]
    }))
}

async fn airlines_by_iata(Path(code): Path<String>) -> Json<Value> {
    let airlines = match code.as_str() {
        "AA" => vec![airline("AA", "American Airlines")],
        "DL" => vec![airline("DL", "Delta Air Lines")],
        _ => Vec::new(),
    };
    Json(json!({ "airlines": airlines }))
}

async fn schedules_departing(
    Path((carrier, flight, year, month, day)): Path<(String, u32, i32, u32, u32)>,
) -> Json<Value> {
    Json(json!({
        "scheduledFlights": [{
            "carrierFsCode": carrier,
            "flightNumber": flight.to_string(),
            "departureAirportFsCode": "JFK",
            "arrivalAirportFsCode": "LAX",
            "departureTime": format!("{year}-{month:02}-{day:02}T09:00:00.000"),
            "arrivalTime": format!("{year}-{month:02}-{day:02}T12:15:00.000"),
            "stops": 0
        }],
        "appendix": appendix()
    }))
}

/// Date-based status lookups require the `utc` query parameter; the real API
/// defaults it server-side, the mock insists on it so the client's
/// default-injection path is exercised.
fn require_utc(query: &HashMap<String, String>) -> Result<(), (StatusCode, &'static str)> {
    if query.contains_key("utc") {
        Ok(())
    } else {
        Err((StatusCode::BAD_REQUEST, "missing utc query parameter"))
    }
}

async fn flight_status_departing(
    Path((carrier, flight, year, month, day)): Path<(String, u32, i32, u32, u32)>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, &'static str)> {
    require_utc(&query)?;
    Ok(Json(json!({
        "flightStatuses": [{
            "flightId": 1190417483u64,
            "carrierFsCode": carrier,
            "flightNumber": flight.to_string(),
            "departureAirportFsCode": "JFK",
            "arrivalAirportFsCode": "LAX",
            "departureDate": {
                "dateLocal": format!("{year}-{month:02}-{day:02}T09:00:00.000")
            },
            "status": "S",
            "flightEquipment": {
                "scheduledEquipmentIataCode": "738",
                "actualEquipmentIataCode": "77W"
            }
        }],
        "appendix": appendix()
    })))
}

async fn airport_status_arriving(
    Path((airport_code, year, month, day, hour)): Path<(String, i32, u32, u32, u8)>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, &'static str)> {
    require_utc(&query)?;
    if airport_code != "JFK" {
        // Unknown airports produce a successfully-empty response upstream.
        return Ok(Json(json!({ "flightStatuses": [] })));
    }
    Ok(Json(json!({
        "flightStatuses": [{
            "flightId": 1190417484u64,
            "carrierFsCode": "DL",
            "flightNumber": "2",
            "departureAirportFsCode": "LAX",
            "arrivalAirportFsCode": "JFK",
            "arrivalDate": {
                "dateLocal": format!("{year}-{month:02}-{day:02}T{hour:02}:45:00.000")
            },
            "status": "A",
            "flightEquipment": {
                "scheduledEquipmentIataCode": "738"
            }
        }],
        "appendix": appendix()
    })))
}
