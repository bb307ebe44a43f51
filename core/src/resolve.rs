//! Reference resolution: appendix code tables and record enrichment.
//!
//! # Design
//! Every Flex response carries an appendix of full airline/airport/equipment
//! records referenced by short code from the primary array. Each call builds
//! its own [`CodeTables`] from that appendix, resolves every primary record
//! against them, and throws the tables away; nothing is cached or shared
//! between calls.
//!
//! Carrier and airport lookups must succeed — a miss means the response
//! contradicts itself, and surfaces as [`FlexError::LookupMiss`]. Equipment
//! is optional upstream, so an absent or unresolvable equipment code yields
//! `None` instead. When both the actual and the scheduled equipment codes
//! are present, the actual one is authoritative.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::datetime::to_utc;
use crate::error::FlexError;
use crate::types::{Airline, Airport, Appendix, Equipment, FlightStatus, FlightTimes, ScheduledFlight};

/// An appendix entry with a designated short-code key.
pub trait Keyed {
    fn code(&self) -> &str;
}

impl Keyed for Airline {
    fn code(&self) -> &str {
        &self.fs
    }
}

impl Keyed for Airport {
    fn code(&self) -> &str {
        &self.fs
    }
}

impl Keyed for Equipment {
    fn code(&self) -> &str {
        &self.iata
    }
}

/// Build a code-keyed table from an appendix list. An empty list yields an
/// empty table.
pub fn build_code_table<T: Keyed>(entries: Vec<T>) -> HashMap<String, T> {
    entries
        .into_iter()
        .map(|entry| (entry.code().to_string(), entry))
        .collect()
}

/// The per-response lookup tables built from an [`Appendix`].
#[derive(Debug, Default)]
pub struct CodeTables {
    airlines: HashMap<String, Airline>,
    airports: HashMap<String, Airport>,
    equipments: HashMap<String, Equipment>,
}

impl From<Appendix> for CodeTables {
    fn from(appendix: Appendix) -> Self {
        Self {
            airlines: build_code_table(appendix.airlines),
            airports: build_code_table(appendix.airports),
            equipments: build_code_table(appendix.equipments),
        }
    }
}

impl CodeTables {
    fn airline(&self, code: &str) -> Result<&Airline, FlexError> {
        self.airlines.get(code).ok_or_else(|| FlexError::LookupMiss {
            table: "airline",
            code: code.to_string(),
        })
    }

    fn airport(&self, code: &str) -> Result<&Airport, FlexError> {
        self.airports.get(code).ok_or_else(|| FlexError::LookupMiss {
            table: "airport",
            code: code.to_string(),
        })
    }

    fn equipment(&self, code: &str) -> Option<&Equipment> {
        self.equipments.get(code)
    }
}

fn as_object(record: Value) -> Result<Map<String, Value>, FlexError> {
    match record {
        Value::Object(map) => Ok(map),
        other => Err(FlexError::Decode(format!(
            "expected a JSON object record, got {other}"
        ))),
    }
}

fn str_field<'a>(record: &'a Map<String, Value>, key: &str) -> Result<&'a str, FlexError> {
    record
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| FlexError::Decode(format!("record is missing string field {key:?}")))
}

/// Pick the equipment record for a status record's `flightEquipment` block.
/// The actual code wins over the scheduled one; no code, or a code with no
/// appendix entry, yields `None`.
fn resolve_equipment(record: &Map<String, Value>, tables: &CodeTables) -> Option<Equipment> {
    let flight_equipment = record.get("flightEquipment")?.as_object()?;
    let code = flight_equipment
        .get("actualEquipmentIataCode")
        .and_then(Value::as_str)
        .or_else(|| {
            flight_equipment
                .get("scheduledEquipmentIataCode")
                .and_then(Value::as_str)
        })?;
    tables.equipment(code).cloned()
}

/// Resolve one raw flight-status record into a [`FlightStatus`].
pub fn resolve_status(record: Value, tables: &CodeTables) -> Result<FlightStatus, FlexError> {
    let raw = as_object(record)?;

    let carrier = tables.airline(str_field(&raw, "carrierFsCode")?)?.clone();
    let departure_airport = tables
        .airport(str_field(&raw, "departureAirportFsCode")?)?
        .clone();
    let arrival_airport = tables
        .airport(str_field(&raw, "arrivalAirportFsCode")?)?
        .clone();
    let equipment = resolve_equipment(&raw, tables);

    Ok(FlightStatus {
        carrier,
        departure_airport,
        arrival_airport,
        equipment,
        raw,
    })
}

/// Resolve one raw scheduled-flight record into a [`ScheduledFlight`],
/// normalizing its departure and arrival times through the corresponding
/// airport's time zone.
pub fn resolve_scheduled(record: Value, tables: &CodeTables) -> Result<ScheduledFlight, FlexError> {
    let raw = as_object(record)?;

    let carrier = tables.airline(str_field(&raw, "carrierFsCode")?)?.clone();
    let departure_airport = tables
        .airport(str_field(&raw, "departureAirportFsCode")?)?
        .clone();
    let arrival_airport = tables
        .airport(str_field(&raw, "arrivalAirportFsCode")?)?
        .clone();

    let departure_date = local_utc_pair(&raw, "departureTime", &departure_airport)?;
    let arrival_date = local_utc_pair(&raw, "arrivalTime", &arrival_airport)?;

    Ok(ScheduledFlight {
        carrier,
        departure_airport,
        arrival_airport,
        departure_date,
        arrival_date,
        raw,
    })
}

fn local_utc_pair(
    record: &Map<String, Value>,
    key: &str,
    airport: &Airport,
) -> Result<FlightTimes, FlexError> {
    let local = str_field(record, key)?;
    let zone = airport.time_zone_region_name.as_deref().ok_or_else(|| {
        FlexError::Decode(format!(
            "airport {:?} has no timeZoneRegionName for {key}",
            airport.fs
        ))
    })?;
    Ok(FlightTimes {
        date_local: local.to_string(),
        date_utc: to_utc(local, zone)?,
    })
}

/// Pull the primary array out of a response. A missing or empty key is a
/// successfully-empty result, never an error.
fn primary_array(response: &Value, key: &str) -> Option<Vec<Value>> {
    match response.get(key).and_then(Value::as_array) {
        Some(list) if !list.is_empty() => Some(list.clone()),
        _ => None,
    }
}

fn tables_for(response: &Value) -> Result<CodeTables, FlexError> {
    let appendix = match response.get("appendix") {
        Some(value) => serde_json::from_value::<Appendix>(value.clone())
            .map_err(|e| FlexError::Decode(format!("bad appendix: {e}")))?,
        None => Appendix::default(),
    };
    Ok(CodeTables::from(appendix))
}

/// Shape a flight-status response (`flightStatuses` primary key), preserving
/// the upstream ordering.
pub(crate) fn parse_statuses(response: Value) -> Result<Vec<FlightStatus>, FlexError> {
    let Some(statuses) = primary_array(&response, "flightStatuses") else {
        return Ok(Vec::new());
    };
    let tables = tables_for(&response)?;
    statuses
        .into_iter()
        .map(|record| resolve_status(record, &tables))
        .collect()
}

/// Shape a schedules response (`scheduledFlights` primary key), preserving
/// the upstream ordering.
pub(crate) fn parse_schedules(response: Value) -> Result<Vec<ScheduledFlight>, FlexError> {
    let Some(flights) = primary_array(&response, "scheduledFlights") else {
        return Ok(Vec::new());
    };
    let tables = tables_for(&response)?;
    flights
        .into_iter()
        .map(|record| resolve_scheduled(record, &tables))
        .collect()
}

/// Shape an airlines/airports response: the primary array deserialized
/// as-is, with no reference resolution.
pub(crate) fn parse_records<T: serde::de::DeserializeOwned>(
    response: Value,
    key: &str,
) -> Result<Vec<T>, FlexError> {
    let Some(records) = primary_array(&response, key) else {
        return Ok(Vec::new());
    };
    records
        .into_iter()
        .map(|record| {
            serde_json::from_value(record)
                .map_err(|e| FlexError::Decode(format!("bad {key} record: {e}")))
        })
        .collect()
}
