//! Geography, sector data and travel for the Aegis strategic map.
//!
//! This crate models the world map: a fixed grid of sectors, each with a
//! static geographic profile, optional curated or runtime data layered on
//! top, and the travel-time estimates between them.
//!
//! # Modules
//!
//! - [`geography`] -- Deterministic region classifier over the 24 x 40 grid.
//! - [`catalog`] -- [`SectorCatalog`]: default records plus the sparse
//!   override table, lookups, updates and search.
//! - [`curated`] -- Named sectors (capitals, major cities, conflict zones)
//!   seeded into a new catalog.
//! - [`travel`] -- Lattice distance, terrain speed modifiers, travel time
//!   and Moore-neighbourhood adjacency.
//! - [`error`] -- Error types for catalog operations.

pub mod catalog;
pub mod curated;
pub mod error;
pub mod geography;
mod regions;
pub mod travel;

// Re-export primary types at crate root.
pub use catalog::{SectorCatalog, generate_defaults};
pub use error::WorldError;
pub use geography::{GridCell, RegionProfile, classify, grid_cell, grid_cells};
pub use travel::{TravelEstimate, adjacency, distance_km, fastest_method, travel_time};
