//! Hand-curated named sectors seeded into a fresh catalog.
//!
//! Capitals, major population centres and conflict zones across every
//! continent. Each entry is a [`SectorPatch`] layered over the zero-valued
//! default of its sector, so only the fields that matter are filled in.

use aegis_types::{City, ControlState, SectorId, SectorPatch, TerrainType};

use crate::error::WorldError;

/// Threat, ally presence, resource and infrastructure levels, in that order.
type Levels = [u8; 4];

/// Helper to build the common part of a curated [`SectorPatch`].
fn named(
    name: &str,
    region: &str,
    terrain: TerrainType,
    population: f64,
    levels: Levels,
    controlled_by: ControlState,
) -> SectorPatch {
    let [threat, allies, resources, infrastructure] = levels;
    SectorPatch {
        name: Some(name.to_owned()),
        region: Some(region.to_owned()),
        terrain: Some(terrain),
        population: Some(population),
        threat_level: Some(threat),
        ally_presence: Some(allies),
        resource_level: Some(resources),
        infrastructure: Some(infrastructure),
        controlled_by: Some(controlled_by),
        ..SectorPatch::default()
    }
}

fn owned(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| (*s).to_owned()).collect())
}

/// The curated sector set, keyed by sector id.
///
/// # Errors
///
/// Returns [`WorldError::InvalidSectorId`] if a hard-coded id fails to
/// parse (should not happen with valid hard-coded data).
#[allow(clippy::too_many_lines)]
pub fn curated_sectors() -> Result<Vec<(SectorId, SectorPatch)>, WorldError> {
    let mut sectors = Vec::new();
    let mut add = |id: &str, patch: SectorPatch| -> Result<(), WorldError> {
        sectors.push((id.parse()?, patch));
        Ok(())
    };

    // ---------------------------------------------------------------
    // North America
    // ---------------------------------------------------------------

    add("D8", SectorPatch {
        country: Some(Some("USA".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Forest)),
        cities: Some(vec![
            City::new("Seattle", 3.5, 3).airport().port(),
            City::new("Portland", 2.5, 2).airport().port(),
        ]),
        ..named(
            "Pacific Northwest",
            "North America",
            TerrainType::Coastal,
            8.0,
            [3, 7, 6, 9],
            ControlState::Allies,
        )
    })?;

    add("E9", SectorPatch {
        country: Some(Some("USA".to_owned())),
        cities: Some(vec![
            City::new("San Francisco", 4.7, 4).airport().port(),
            City::new("Sacramento", 2.3, 2).airport().capital(),
        ]),
        ..named(
            "Northern California",
            "North America",
            TerrainType::Coastal,
            15.0,
            [4, 8, 7, 9],
            ControlState::Allies,
        )
    })?;

    add("F9", SectorPatch {
        country: Some(Some("USA".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Desert)),
        cities: Some(vec![
            City::new("Los Angeles", 13.0, 6).airport().port(),
            City::new("San Diego", 3.3, 3).airport().port().base(),
        ]),
        ..named(
            "Southern California",
            "North America",
            TerrainType::Coastal,
            25.0,
            [6, 7, 5, 9],
            ControlState::Allies,
        )
    })?;

    add("E12", SectorPatch {
        country: Some(Some("USA".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Plains)),
        cities: Some(vec![
            City::new("Chicago", 9.5, 5).airport().port(),
            City::new("Detroit", 4.3, 4).airport(),
        ]),
        ..named(
            "Great Lakes East",
            "North America",
            TerrainType::Urban,
            20.0,
            [5, 6, 7, 8],
            ControlState::Allies,
        )
    })?;

    add("E14", SectorPatch {
        country: Some(Some("USA".to_owned())),
        cities: Some(vec![
            City::new("New York City", 20.0, 8).airport().port(),
            City::new("Philadelphia", 6.0, 5).airport().port(),
            City::new("Boston", 4.9, 4).airport().port(),
        ]),
        special_features: owned(&["UN Headquarters", "Major Financial Center"]),
        ..named(
            "Northeast Corridor",
            "North America",
            TerrainType::Urban,
            45.0,
            [8, 9, 8, 10],
            ControlState::Allies,
        )
    })?;

    add("F14", SectorPatch {
        country: Some(Some("USA".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Coastal)),
        cities: Some(vec![
            City::new("Washington D.C.", 6.0, 7).airport().base().capital(),
            City::new("Baltimore", 2.8, 4).airport().port(),
        ]),
        special_features: owned(&["US Capital", "Pentagon", "Major Intelligence Hub"]),
        ..named(
            "Mid-Atlantic",
            "North America",
            TerrainType::Urban,
            12.0,
            [7, 10, 6, 10],
            ControlState::Allies,
        )
    })?;

    // ---------------------------------------------------------------
    // Europe
    // ---------------------------------------------------------------

    add("D21", SectorPatch {
        country: Some(Some("United Kingdom".to_owned())),
        cities: Some(vec![
            City::new("London", 9.0, 6).airport().port().capital(),
            City::new("Manchester", 2.8, 3).airport(),
            City::new("Birmingham", 2.6, 3).airport(),
        ]),
        ..named(
            "British Isles",
            "Europe",
            TerrainType::Islands,
            67.0,
            [6, 9, 6, 9],
            ControlState::Allies,
        )
    })?;

    add("E22", SectorPatch {
        countries: owned(&["France", "Belgium", "Netherlands"]),
        secondary_terrain: Some(Some(TerrainType::Plains)),
        cities: Some(vec![
            City::new("Paris", 12.0, 5).airport().capital(),
            City::new("Brussels", 2.1, 4).airport(),
            City::new("Amsterdam", 2.5, 3).airport().port(),
        ]),
        special_features: owned(&["NATO HQ", "EU Capital"]),
        ..named(
            "Western Europe",
            "Europe",
            TerrainType::Urban,
            85.0,
            [5, 8, 7, 10],
            ControlState::Allies,
        )
    })?;

    add("E24", SectorPatch {
        countries: owned(&["Germany", "Poland"]),
        secondary_terrain: Some(Some(TerrainType::Forest)),
        cities: Some(vec![
            City::new("Berlin", 3.6, 4).airport().capital(),
            City::new("Munich", 1.5, 3).airport(),
            City::new("Warsaw", 1.8, 4).airport().capital(),
        ]),
        ..named(
            "Central Europe",
            "Europe",
            TerrainType::Urban,
            120.0,
            [4, 8, 8, 9],
            ControlState::Allies,
        )
    })?;

    // ---------------------------------------------------------------
    // Asia
    // ---------------------------------------------------------------

    add("F30", SectorPatch {
        countries: owned(&["UAE", "Qatar", "Bahrain"]),
        secondary_terrain: Some(Some(TerrainType::Coastal)),
        cities: Some(vec![
            City::new("Dubai", 3.4, 4).airport().port(),
            City::new("Abu Dhabi", 1.5, 3).airport().base().capital(),
            City::new("Doha", 2.4, 3).airport().base().capital(),
        ]),
        special_features: owned(&["Major Oil Hub", "US Military Bases"]),
        ..named(
            "Middle East - Gulf",
            "Middle East",
            TerrainType::Desert,
            15.0,
            [5, 7, 10, 9],
            ControlState::Allies,
        )
    })?;

    add("G33", SectorPatch {
        country: Some(Some("India".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Plains)),
        cities: Some(vec![
            City::new("Mumbai", 21.0, 5).airport().port(),
            City::new("Delhi", 32.0, 6).airport().capital(),
        ]),
        ..named(
            "Indian Subcontinent",
            "South Asia",
            TerrainType::Urban,
            200.0,
            [6, 5, 6, 6],
            ControlState::Neutral,
        )
    })?;

    add("F37", SectorPatch {
        country: Some(Some("China".to_owned())),
        cities: Some(vec![
            City::new("Shanghai", 28.0, 7).airport().port(),
            City::new("Hangzhou", 12.0, 5).airport(),
        ]),
        ..named(
            "East China",
            "East Asia",
            TerrainType::Urban,
            150.0,
            [7, 2, 8, 9],
            ControlState::Contested,
        )
    })?;

    add("E38", SectorPatch {
        country: Some(Some("Japan".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Mountains)),
        cities: Some(vec![
            City::new("Tokyo", 37.0, 5).airport().port().capital(),
            City::new("Osaka", 19.0, 4).airport().port(),
        ]),
        special_features: owned(&["US Military Bases", "Major Tech Hub"]),
        ..named(
            "Japan",
            "East Asia",
            TerrainType::Islands,
            125.0,
            [5, 9, 5, 10],
            ControlState::Allies,
        )
    })?;

    // ---------------------------------------------------------------
    // Oceania
    // ---------------------------------------------------------------

    add("M36", SectorPatch {
        country: Some(Some("Australia".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Urban)),
        cities: Some(vec![
            City::new("Sydney", 5.3, 3).airport().port(),
            City::new("Melbourne", 5.0, 3).airport().port(),
            City::new("Brisbane", 2.5, 2).airport().port(),
        ]),
        ..named(
            "Eastern Australia",
            "Oceania",
            TerrainType::Coastal,
            20.0,
            [3, 8, 7, 9],
            ControlState::Allies,
        )
    })?;

    // ---------------------------------------------------------------
    // South America
    // ---------------------------------------------------------------

    add("J12", SectorPatch {
        country: Some(Some("Brazil".to_owned())),
        secondary_terrain: Some(Some(TerrainType::Jungle)),
        cities: Some(vec![
            City::new("São Paulo", 22.0, 6).airport(),
            City::new("Rio de Janeiro", 13.0, 7).airport().port(),
        ]),
        ..named(
            "Brazil - Southeast",
            "South America",
            TerrainType::Urban,
            80.0,
            [6, 4, 7, 7],
            ControlState::Neutral,
        )
    })?;

    // ---------------------------------------------------------------
    // Africa
    // ---------------------------------------------------------------

    add("H24", SectorPatch {
        countries: owned(&["Egypt", "Libya"]),
        cities: Some(vec![
            City::new("Cairo", 21.0, 6).airport().capital(),
            City::new("Alexandria", 5.2, 5).airport().port(),
        ]),
        ..named(
            "North Africa",
            "Africa",
            TerrainType::Desert,
            110.0,
            [6, 4, 5, 5],
            ControlState::Neutral,
        )
    })?;

    add("K26", SectorPatch {
        countries: owned(&["DRC", "Congo"]),
        cities: Some(vec![City::new("Kinshasa", 17.0, 7).airport().capital()]),
        special_features: owned(&["Rare Earth Minerals", "Active Conflict Zone"]),
        ..named(
            "Central Africa",
            "Africa",
            TerrainType::Jungle,
            100.0,
            [8, 2, 9, 2],
            ControlState::Contested,
        )
    })?;

    Ok(sectors)
}
