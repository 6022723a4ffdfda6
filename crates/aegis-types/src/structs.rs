//! Core entity structs for the strategic map layer.
//!
//! [`SectorRecord`] is the enriched per-sector entity shown in the sector
//! info panel. [`SectorPatch`] is its partial form: every field optional,
//! used both for curated override data and for runtime updates.
//! [`SectorQuery`] filters records, and [`ClockSnapshot`] is the derived
//! view of the world clock handed to the top bar.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::enums::{ControlState, DayPeriod, TerrainType, TimeOfDay, WeatherState};
use crate::ids::SectorId;

// ---------------------------------------------------------------------------
// City
// ---------------------------------------------------------------------------

/// Geographic position of a city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// A city inside a sector. Owned by exactly one [`SectorRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct City {
    /// Display name.
    pub name: String,
    /// Population in millions.
    pub population: f64,
    /// National or regional capital.
    #[serde(default)]
    pub is_capital: bool,
    /// Hosts a military or hero base.
    #[serde(default)]
    pub has_base: bool,
    /// Has an airport.
    #[serde(default)]
    pub has_airport: bool,
    /// Has a seaport.
    #[serde(default)]
    pub has_port: bool,
    /// Local threat level (0--10).
    pub threat_level: u8,
    /// Optional real-world position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LatLng>,
}

impl City {
    /// A plain city with no capital, base, airport or port flags.
    pub fn new(name: impl Into<String>, population: f64, threat_level: u8) -> Self {
        Self {
            name: name.into(),
            population,
            is_capital: false,
            has_base: false,
            has_airport: false,
            has_port: false,
            threat_level,
            coordinates: None,
        }
    }

    /// Mark the city as a capital.
    #[must_use]
    pub const fn capital(mut self) -> Self {
        self.is_capital = true;
        self
    }

    /// Mark the city as hosting a base.
    #[must_use]
    pub const fn base(mut self) -> Self {
        self.has_base = true;
        self
    }

    /// Mark the city as having an airport.
    #[must_use]
    pub const fn airport(mut self) -> Self {
        self.has_airport = true;
        self
    }

    /// Mark the city as having a seaport.
    #[must_use]
    pub const fn port(mut self) -> Self {
        self.has_port = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Sector record
// ---------------------------------------------------------------------------

/// Full data for one sector of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SectorRecord {
    /// Canonical identity, e.g. `F15`.
    #[ts(type = "string")]
    pub id: SectorId,
    /// Row letter (`A`--`X`).
    pub row: char,
    /// One-based column number (1--40).
    pub col: u8,
    /// Display name. `"Sector <id>"` unless curated.
    pub name: String,
    /// Geographic region.
    pub region: String,
    /// Primary country, if the sector has one.
    pub country: Option<String>,
    /// All countries touching the sector.
    pub countries: Vec<String>,
    /// Dominant terrain.
    pub terrain: TerrainType,
    /// Secondary terrain, if mixed.
    pub secondary_terrain: Option<TerrainType>,
    /// Cities inside the sector.
    pub cities: Vec<City>,
    /// Total population in millions.
    pub population: f64,
    /// Threat level (0--10).
    pub threat_level: u8,
    /// Allied presence (0--10).
    pub ally_presence: u8,
    /// Resource availability (0--10).
    pub resource_level: u8,
    /// Infrastructure quality (0--10). Speeds up ground travel.
    pub infrastructure: u8,
    /// Current weather, if reported.
    pub weather: Option<WeatherState>,
    /// Notable features (headquarters, bases, resources).
    pub special_features: Vec<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Entry requires permission.
    pub is_restricted: bool,
    /// Which side holds the sector.
    pub controlled_by: ControlState,
}

impl SectorRecord {
    /// A zero-valued ocean record for `id` in the given region.
    pub fn empty(id: SectorId, region: impl Into<String>) -> Self {
        Self {
            id,
            row: id.row_letter(),
            col: id.column(),
            name: format!("Sector {id}"),
            region: region.into(),
            country: None,
            countries: Vec::new(),
            terrain: TerrainType::Ocean,
            secondary_terrain: None,
            cities: Vec::new(),
            population: 0.0,
            threat_level: 0,
            ally_presence: 0,
            resource_level: 0,
            infrastructure: 0,
            weather: None,
            special_features: Vec::new(),
            notes: None,
            is_restricted: false,
            controlled_by: ControlState::Neutral,
        }
    }

    /// Whether the record still carries the generated `"Sector <id>"` name.
    pub fn has_default_name(&self) -> bool {
        self.name == format!("Sector {}", self.id)
    }

    /// Short label for lists: the custom name, else the country, else the
    /// region.
    pub fn display_label(&self) -> String {
        if !self.has_default_name() {
            return self.name.clone();
        }
        if let Some(country) = &self.country {
            return country.clone();
        }
        if !self.countries.is_empty() {
            return self.countries.join(", ");
        }
        self.region.clone()
    }
}

// ---------------------------------------------------------------------------
// Sector patch
// ---------------------------------------------------------------------------

/// Partial sector data. Present fields replace the corresponding record
/// fields; absent fields leave them untouched.
///
/// The record's own optional fields (`country`, `secondary_terrain`,
/// `weather`, `notes`) are doubly optional here: `None` leaves the record
/// alone, `Some(None)` clears it. On the wire an explicit `null` clears and
/// a missing key leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, deny_unknown_fields)]
#[ts(export, export_to = "bindings/")]
pub struct SectorPatch {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Geographic region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Primary country. `Some(None)` clears it.
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub country: Option<Option<String>>,
    /// All countries touching the sector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    /// Dominant terrain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain: Option<TerrainType>,
    /// Secondary terrain. `Some(None)` clears it.
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub secondary_terrain: Option<Option<TerrainType>>,
    /// Cities inside the sector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<City>>,
    /// Total population in millions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<f64>,
    /// Threat level (0--10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<u8>,
    /// Allied presence (0--10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ally_presence: Option<u8>,
    /// Resource availability (0--10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_level: Option<u8>,
    /// Infrastructure quality (0--10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infrastructure: Option<u8>,
    /// Current weather. `Some(None)` clears it.
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub weather: Option<Option<WeatherState>>,
    /// Notable features.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_features: Option<Vec<String>>,
    /// Free-form notes. `Some(None)` clears it.
    #[serde(
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
    /// Entry requires permission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_restricted: Option<bool>,
    /// Which side holds the sector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controlled_by: Option<ControlState>,
}

impl SectorPatch {
    /// Fold `newer` into this patch. Fields present in `newer` win.
    pub fn merge(&mut self, newer: Self) {
        macro_rules! take_newer {
            ($($field:ident),+ $(,)?) => {
                $(
                    if newer.$field.is_some() {
                        self.$field = newer.$field;
                    }
                )+
            };
        }
        take_newer!(
            name,
            region,
            country,
            countries,
            terrain,
            secondary_terrain,
            cities,
            population,
            threat_level,
            ally_presence,
            resource_level,
            infrastructure,
            weather,
            special_features,
            notes,
            is_restricted,
            controlled_by,
        );
    }

    /// Write every present field onto `record`.
    pub fn apply_to(&self, record: &mut SectorRecord) {
        macro_rules! overwrite {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        record.$field = value.clone();
                    }
                )+
            };
        }
        overwrite!(
            name,
            region,
            countries,
            terrain,
            cities,
            population,
            threat_level,
            ally_presence,
            resource_level,
            infrastructure,
            special_features,
            is_restricted,
            controlled_by,
            country,
            secondary_terrain,
            weather,
            notes,
        );
    }

    /// The 0--10 level fields that are set, with their names.
    pub fn levels(&self) -> impl Iterator<Item = (&'static str, u8)> {
        [
            ("threat_level", self.threat_level),
            ("ally_presence", self.ally_presence),
            ("resource_level", self.resource_level),
            ("infrastructure", self.infrastructure),
        ]
        .into_iter()
        .filter_map(|(name, level)| level.map(|l| (name, l)))
    }
}

/// Deserialize a present key as `Some`, keeping an explicit `null` as
/// `Some(None)`. Missing keys fall back to the field default (`None`).
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Sector query
// ---------------------------------------------------------------------------

/// Search criteria over sector records. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct SectorQuery {
    /// Exact region name.
    pub region: Option<String>,
    /// Primary country or any listed country.
    pub country: Option<String>,
    /// Exact dominant terrain.
    pub terrain: Option<TerrainType>,
    /// Inclusive lower bound on threat level.
    pub min_threat_level: Option<u8>,
    /// Inclusive upper bound on threat level.
    pub max_threat_level: Option<u8>,
    /// Case-insensitive substring of any city name.
    pub has_city: Option<String>,
    /// Exact control state.
    pub controlled_by: Option<ControlState>,
}

impl SectorQuery {
    /// Whether `record` satisfies every set criterion.
    pub fn matches(&self, record: &SectorRecord) -> bool {
        if self.region.as_ref().is_some_and(|r| *r != record.region) {
            return false;
        }
        if let Some(country) = &self.country {
            let primary = record.country.as_ref() == Some(country);
            if !primary && !record.countries.contains(country) {
                return false;
            }
        }
        if self.terrain.is_some_and(|t| t != record.terrain) {
            return false;
        }
        if self.min_threat_level.is_some_and(|min| record.threat_level < min) {
            return false;
        }
        if self.max_threat_level.is_some_and(|max| record.threat_level > max) {
            return false;
        }
        if let Some(needle) = &self.has_city {
            let needle = needle.to_lowercase();
            if !record
                .cities
                .iter()
                .any(|c| c.name.to_lowercase().contains(&needle))
            {
                return false;
            }
        }
        self.controlled_by
            .is_none_or(|control| control == record.controlled_by)
    }
}

// ---------------------------------------------------------------------------
// Clock snapshot
// ---------------------------------------------------------------------------

/// Presentation view of the world clock, recomputed from clock state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ClockSnapshot {
    /// Year, starting at 1.
    pub year: u32,
    /// Day of year (1--365).
    pub day: u16,
    /// Weekday name, e.g. `"Monday"`.
    pub day_of_week: String,
    /// 12-hour time, e.g. `"8:05:30AM"`.
    pub time: String,
    /// Minutes since midnight (0--1439).
    pub minute_of_day: u16,
    /// Seconds into the current minute (0--59).
    pub second: u8,
    /// Lighting band.
    pub period: DayPeriod,
    /// Progress through the current lighting transition (0.0--1.0).
    pub period_progress: f64,
    /// Coarse time of day for the top bar.
    pub time_of_day: TimeOfDay,
    /// Whether the clock is paused.
    pub paused: bool,
    /// Speed multiplier (1, 2 or 4).
    pub speed: u8,
}
