//! Client core for the FlightStats Flex REST APIs.
//!
//! # Overview
//! Wraps the airlines, airports, flight-status, airport-status, and
//! schedules lookups. Each client builds an endpoint path and query
//! parameters, hands them to a caller-supplied [`Transport`], and reshapes
//! the JSON payload: appendix lookup tables become code-keyed maps, code
//! references are resolved into embedded records, and schedule timestamps
//! gain a local/UTC pair.
//!
//! # Design
//! - The core performs no I/O; the [`Transport`] implementor owns the base
//!   URL, credentials, and the actual HTTP round-trip.
//! - Each call is one blocking request; lookup tables are built fresh per
//!   response and never cached.
//! - Errors propagate unmodified — no retries, no partial results.

pub mod airlines;
pub mod airport_status;
pub mod airports;
pub mod datetime;
pub mod error;
pub mod flight_status;
pub mod resolve;
pub mod schedules;
pub mod transport;
pub mod types;

pub use airlines::AirlinesClient;
pub use airport_status::AirportStatusClient;
pub use airports::AirportsClient;
pub use datetime::to_utc;
pub use error::FlexError;
pub use flight_status::FlightStatusClient;
pub use resolve::{build_code_table, CodeTables, Keyed};
pub use schedules::SchedulesClient;
pub use transport::{Config, QueryParams, Transport};
pub use types::{
    Airline, Airport, Appendix, Equipment, FlightStatus, FlightTimes, ScheduledFlight,
};
