//! Enumeration types for the strategic map layer.
//!
//! Terrain and travel method are closed sets: both expose an `ALL` table
//! and an ordinal so that lookup tables keyed by them can be plain
//! fixed-size arrays.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// Dominant terrain of a sector. Drives travel speed per transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TerrainType {
    /// Open water.
    Ocean,
    /// Ice sheets and pack ice.
    Ice,
    /// Frozen treeless plains.
    Tundra,
    /// Woodland and taiga.
    Forest,
    /// Grassland, steppe and farmland.
    Plains,
    /// Arid sand or rock.
    Desert,
    /// High ground.
    Mountains,
    /// Dense tropical growth.
    Jungle,
    /// Wetlands and river deltas.
    Swamp,
    /// Dense built-up area.
    Urban,
    /// Shoreline.
    Coastal,
    /// Archipelagos and island chains.
    Islands,
}

impl TerrainType {
    /// Number of terrain variants.
    pub const COUNT: usize = 12;

    /// Every terrain, in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Ocean,
        Self::Ice,
        Self::Tundra,
        Self::Forest,
        Self::Plains,
        Self::Desert,
        Self::Mountains,
        Self::Jungle,
        Self::Swamp,
        Self::Urban,
        Self::Coastal,
        Self::Islands,
    ];

    /// Zero-based ordinal, matching the position in [`Self::ALL`].
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Ocean => 0,
            Self::Ice => 1,
            Self::Tundra => 2,
            Self::Forest => 3,
            Self::Plains => 4,
            Self::Desert => 5,
            Self::Mountains => 6,
            Self::Jungle => 7,
            Self::Swamp => 8,
            Self::Urban => 9,
            Self::Coastal => 10,
            Self::Islands => 11,
        }
    }
}

// ---------------------------------------------------------------------------
// Travel
// ---------------------------------------------------------------------------

/// How an asset moves between sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TravelMethod {
    /// Road, rail or on foot.
    Ground,
    /// Aircraft.
    Air,
    /// Surface vessel.
    Sea,
    /// Submersible.
    Submarine,
}

impl TravelMethod {
    /// Number of travel methods.
    pub const COUNT: usize = 4;

    /// Every method, in ordinal order.
    pub const ALL: [Self; Self::COUNT] = [Self::Ground, Self::Air, Self::Sea, Self::Submarine];

    /// Zero-based ordinal, matching the position in [`Self::ALL`].
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Ground => 0,
            Self::Air => 1,
            Self::Sea => 2,
            Self::Submarine => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Sector state
// ---------------------------------------------------------------------------

/// Which side holds a sector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum ControlState {
    /// Held by friendly forces.
    Allies,
    /// Held by hostile forces.
    Enemies,
    /// Nobody's.
    #[default]
    Neutral,
    /// Actively fought over.
    Contested,
}

/// Weather currently reported for a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum WeatherState {
    /// No weather effects.
    Clear,
    /// Rainfall.
    Rain,
    /// Severe storm.
    Storm,
    /// Snowfall.
    Snow,
    /// Reduced visibility.
    Fog,
}

/// Broad climate classification of a geographic region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Climate {
    /// Ice caps and polar seas.
    Polar,
    /// Long cold winters, short summers.
    Subarctic,
    /// Mild seasons.
    Temperate,
    /// Hot summers, cold winters, far from the sea.
    Continental,
    /// Hot humid summers, mild winters.
    HumidSubtropical,
    /// Warm all year.
    Tropical,
    /// Warm, borderline tropical.
    Subtropical,
    /// Mixed climates across the region.
    Varied,
    /// Ocean-moderated.
    Maritime,
    /// Dry summers, wet winters.
    Mediterranean,
    /// Desert and semi-desert.
    Arid,
}

// ---------------------------------------------------------------------------
// Time of day
// ---------------------------------------------------------------------------

/// Five-band day/night classification used for the map lighting filter.
///
/// Bands over the 24-hour clock: deep night `[0, 5)`, dawn `[5, 7)`,
/// day `[7, 17)`, dusk `[17, 20)`, night `[20, 24)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum DayPeriod {
    /// Midnight until dawn.
    DeepNight,
    /// Sunrise.
    Dawn,
    /// Full daylight.
    Day,
    /// Sunset.
    Dusk,
    /// Evening until midnight.
    Night,
}

impl DayPeriod {
    /// Whether the map should render stars during this period.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::DeepNight | Self::Night)
    }
}

/// Coarse four-band time of day shown in the top bar.
///
/// Morning `[5, 12)`, noon `[12, 17)`, evening `[17, 21)`, night otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum TimeOfDay {
    /// 05:00 to 11:59.
    Morning,
    /// 12:00 to 16:59.
    Noon,
    /// 17:00 to 20:59.
    Evening,
    /// 21:00 to 04:59.
    Night,
}

impl TimeOfDay {
    /// Whether the top-bar indicator shows the moon.
    pub const fn is_night(self) -> bool {
        matches!(self, Self::Evening | Self::Night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_all_tables() {
        for (i, terrain) in TerrainType::ALL.iter().enumerate() {
            assert_eq!(terrain.ordinal(), i);
        }
        for (i, method) in TravelMethod::ALL.iter().enumerate() {
            assert_eq!(method.ordinal(), i);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&TerrainType::Mountains).ok();
        assert_eq!(json.as_deref(), Some("\"mountains\""));
        let json = serde_json::to_string(&TravelMethod::Submarine).ok();
        assert_eq!(json.as_deref(), Some("\"submarine\""));
        let json = serde_json::to_string(&DayPeriod::DeepNight).ok();
        assert_eq!(json.as_deref(), Some("\"deep_night\""));
    }

    #[test]
    fn control_state_defaults_to_neutral() {
        assert_eq!(ControlState::default(), ControlState::Neutral);
    }

    #[test]
    fn darkness_flags() {
        assert!(DayPeriod::DeepNight.is_dark());
        assert!(DayPeriod::Night.is_dark());
        assert!(!DayPeriod::Dusk.is_dark());
        assert!(TimeOfDay::Evening.is_night());
        assert!(!TimeOfDay::Noon.is_night());
    }
}
