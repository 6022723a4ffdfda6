//! Shared type definitions for the Aegis strategic map layer.
//!
//! This crate is the single source of truth for the types used across the
//! Aegis workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the map interface.
//!
//! # Modules
//!
//! - [`ids`] -- Grid coordinates and the canonical `A1`..`X40` sector ids
//! - [`enums`] -- Terrain, travel method, control, weather and time-of-day enums
//! - [`structs`] -- Sector records, patches, queries and clock snapshots

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    Climate, ControlState, DayPeriod, TerrainType, TimeOfDay, TravelMethod, WeatherState,
};
pub use ids::{
    GRID_COLS, GRID_ROWS, GridCoordinate, GridError, SECTOR_COUNT, SectorId, SectorIdError,
};
pub use structs::{City, ClockSnapshot, LatLng, SectorPatch, SectorQuery, SectorRecord};
