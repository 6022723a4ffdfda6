//! Travel time estimates between sectors.
//!
//! Distance is Euclidean over the row/column lattice at [`KM_PER_SECTOR`]
//! per cell. Speed is the base speed scaled by the destination terrain's
//! modifier for the chosen method. Ground travel additionally speeds up
//! with infrastructure and slows down with city density, floored at half
//! speed.
//!
//! A terrain/method pair with modifier `0.0` is impassable and yields
//! [`TravelEstimate::Unreachable`]. That is an ordinary outcome, not an
//! error.

use aegis_types::{SectorId, SectorRecord, TerrainType, TravelMethod};
use serde::Serialize;

use crate::catalog::SectorCatalog;

/// Approximate width of one grid cell in kilometres.
pub const KM_PER_SECTOR: f64 = 500.0;

/// Base speed used when the caller has no preference.
pub const DEFAULT_BASE_SPEED_KMH: f64 = 100.0;

/// Ground speed bonus per infrastructure level.
const INFRASTRUCTURE_STEP: f64 = 1.0 / 20.0;

/// Ground speed penalty per city in the destination.
const CITY_PENALTY: f64 = 0.05;

/// Lowest the city penalty can push ground speed.
const CITY_FACTOR_FLOOR: f64 = 0.5;

/// Speed multiplier per terrain (rows, [`TerrainType::ordinal`]) and method
/// (columns: ground, air, sea, submarine).
const SPEED_MODIFIERS: [[f64; TravelMethod::COUNT]; TerrainType::COUNT] = [
    [0.0, 1.2, 1.0, 1.0], // ocean
    [0.3, 1.0, 0.4, 0.8], // ice
    [0.5, 1.0, 0.0, 0.0], // tundra
    [0.6, 0.9, 0.0, 0.0], // forest
    [1.0, 1.0, 0.0, 0.0], // plains
    [0.7, 1.0, 0.0, 0.0], // desert
    [0.3, 0.8, 0.0, 0.0], // mountains
    [0.4, 0.8, 0.0, 0.0], // jungle
    [0.3, 0.9, 0.5, 0.0], // swamp
    [0.8, 1.0, 0.0, 0.0], // urban
    [0.9, 1.0, 1.0, 0.9], // coastal
    [0.7, 1.0, 0.9, 0.8], // islands
];

/// Result of a travel time query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelEstimate {
    /// Journey time in hours.
    Hours(f64),
    /// The method cannot enter the destination terrain.
    Unreachable,
}

impl TravelEstimate {
    /// Hours, or positive infinity when unreachable.
    pub const fn hours(self) -> f64 {
        match self {
            Self::Hours(hours) => hours,
            Self::Unreachable => f64::INFINITY,
        }
    }

    /// Whether the journey is possible.
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Hours(_))
    }
}

/// Speed multiplier for `method` over `terrain`. Zero means impassable.
pub fn speed_modifier(terrain: TerrainType, method: TravelMethod) -> f64 {
    SPEED_MODIFIERS
        .get(terrain.ordinal())
        .and_then(|row| row.get(method.ordinal()))
        .copied()
        .unwrap_or(0.0)
}

/// Lattice distance between two sectors in kilometres.
pub fn distance_km(from: SectorId, to: SectorId) -> f64 {
    let (a, b) = (from.coordinate(), to.coordinate());
    let rows = f64::from(a.row()) - f64::from(b.row());
    let cols = f64::from(a.col()) - f64::from(b.col());
    rows.hypot(cols) * KM_PER_SECTOR
}

/// Hours to travel from `from` to `to` by `method` at `base_speed_kmh`.
///
/// Returns [`TravelEstimate::Unreachable`] when the destination terrain is
/// impassable for `method`, or when the base speed is not a positive finite
/// number.
pub fn travel_time(
    from: &SectorRecord,
    to: &SectorRecord,
    method: TravelMethod,
    base_speed_kmh: f64,
) -> TravelEstimate {
    let modifier = speed_modifier(to.terrain, method);
    if modifier <= 0.0 || !base_speed_kmh.is_finite() || base_speed_kmh <= 0.0 {
        return TravelEstimate::Unreachable;
    }

    let (infrastructure, city_factor) = if method == TravelMethod::Ground {
        let cities = f64::from(u32::try_from(to.cities.len()).unwrap_or(u32::MAX));
        (
            1.0 + f64::from(to.infrastructure) * INFRASTRUCTURE_STEP,
            (1.0 - cities * CITY_PENALTY).max(CITY_FACTOR_FLOOR),
        )
    } else {
        (1.0, 1.0)
    };

    let speed = base_speed_kmh * modifier * infrastructure * city_factor;
    TravelEstimate::Hours(distance_km(from.id, to.id) / speed)
}

/// [`travel_time`] between two sector ids, resolved through `catalog`.
pub fn travel_time_between(
    catalog: &SectorCatalog,
    from: SectorId,
    to: SectorId,
    method: TravelMethod,
    base_speed_kmh: f64,
) -> TravelEstimate {
    travel_time(
        &catalog.get_sector(from),
        &catalog.get_sector(to),
        method,
        base_speed_kmh,
    )
}

/// The quickest feasible method and its time in hours, or `None` if no
/// method can reach `to`.
pub fn fastest_method(
    from: &SectorRecord,
    to: &SectorRecord,
    base_speed_kmh: f64,
) -> Option<(TravelMethod, f64)> {
    TravelMethod::ALL
        .into_iter()
        .filter_map(|method| match travel_time(from, to, method, base_speed_kmh) {
            TravelEstimate::Hours(hours) => Some((method, hours)),
            TravelEstimate::Unreachable => None,
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
}

/// The up to eight sectors touching `id`, row-major, clipped to the grid.
pub fn adjacency(id: SectorId) -> Vec<SectorId> {
    let origin = id.coordinate();
    (-1_i8..=1)
        .flat_map(|dr| (-1_i8..=1).map(move |dc| (dr, dc)))
        .filter(|&offset| offset != (0, 0))
        .filter_map(|(dr, dc)| origin.offset(dr, dc))
        .map(SectorId::from_coordinate)
        .collect()
}
