//! Static geography of the sector grid.
//!
//! [`classify`] maps every cell of the 24 x 40 grid to a [`RegionProfile`].
//! The map is cut into latitude bands of three rows each; inside a band,
//! ascending longitude cut-offs pick the profile, and anything east of the
//! last cut-off takes the band's oceanic fallback. The function is total
//! over [`GridCoordinate`] and never allocates.
//!
//! Cut-offs are compared in integer arithmetic (`col * 100 < pct * COLS`),
//! which agrees exactly with comparing `col / COLS < pct / 100`.

use aegis_types::{Climate, GRID_COLS, GridCoordinate, SectorId, SectorIdError, TerrainType};
use serde::Serialize;

use crate::regions::{BANDS, FAR_SOUTH, LatitudeBand, ROWS_PER_BAND};

/// Immutable geographic metadata shared by every cell of a region.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RegionProfile {
    /// Region display name, e.g. `"Eastern USA"`.
    pub name: &'static str,
    /// Finer-grained area within the region.
    pub sub_region: Option<&'static str>,
    /// Countries in the region. Empty for open ocean.
    pub countries: &'static [&'static str],
    /// Broad climate.
    pub climate: Climate,
    /// Free-text landscape description, e.g. `"Mountains/Coast"`.
    pub landscape: &'static str,
    /// Dominant terrain used for travel.
    pub terrain: TerrainType,
    /// Baseline threat indicator.
    pub threats: u8,
    /// Baseline allied presence indicator.
    pub allies: u8,
    /// Number of allied bases in the region.
    pub bases: u8,
}

impl RegionProfile {
    /// Whether the region is open water.
    pub fn is_oceanic(&self) -> bool {
        self.terrain == TerrainType::Ocean
    }
}

/// A grid cell paired with its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Canonical sector id of the cell.
    pub id: SectorId,
    /// Geography assigned to the cell.
    #[serde(flatten)]
    pub profile: &'static RegionProfile,
}

/// Region profile of the cell at `coordinate`.
pub fn classify(coordinate: GridCoordinate) -> &'static RegionProfile {
    let band = latitude_band(coordinate.row());
    let x = u16::from(coordinate.col()).saturating_mul(100);
    band.bounds
        .iter()
        .find(|(pct, _)| x < u16::from(*pct).saturating_mul(u16::from(GRID_COLS)))
        .map_or(band.fallback, |(_, profile)| *profile)
}

fn latitude_band(row: u8) -> &'static LatitudeBand {
    row.checked_div(ROWS_PER_BAND)
        .and_then(|index| BANDS.get(usize::from(index)))
        .unwrap_or(&FAR_SOUTH)
}

/// The classified cell at `coordinate`.
pub fn grid_cell(coordinate: GridCoordinate) -> GridCell {
    GridCell {
        id: SectorId::from_coordinate(coordinate),
        profile: classify(coordinate),
    }
}

/// Look up a classified cell by its sector id string.
pub fn grid_cell_by_id(id: &str) -> Result<GridCell, SectorIdError> {
    let id: SectorId = id.parse()?;
    Ok(grid_cell(id.coordinate()))
}

/// Every classified cell, row-major.
pub fn grid_cells() -> impl Iterator<Item = GridCell> {
    GridCoordinate::all().map(grid_cell)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aegis_types::SECTOR_COUNT;

    use super::*;

    fn region_of(id: &str) -> &'static str {
        grid_cell_by_id(id).unwrap().profile.name
    }

    #[test]
    fn every_cell_resolves_to_a_named_region() {
        let cells: Vec<GridCell> = grid_cells().collect();
        assert_eq!(cells.len(), SECTOR_COUNT);
        for cell in &cells {
            assert!(!cell.profile.name.is_empty(), "{} has no region", cell.id);
        }
    }

    #[test]
    fn classification_is_deterministic() {
        for coordinate in GridCoordinate::all() {
            assert!(core::ptr::eq(classify(coordinate), classify(coordinate)));
        }
    }

    #[test]
    fn corners_fall_into_polar_waters() {
        assert_eq!(region_of("A1"), "Arctic Ocean");
        assert_eq!(region_of("A40"), "Arctic Ocean");
        assert_eq!(region_of("X1"), "Southern Ocean");
        assert_eq!(region_of("X40"), "Southern Ocean");
    }

    #[test]
    fn known_cells_map_to_expected_regions() {
        assert_eq!(region_of("G9"), "Eastern USA");
        assert_eq!(region_of("E14"), "North Atlantic Ocean");
        assert_eq!(region_of("X36"), "Eastern Australia");
        assert_eq!(region_of("J17"), "Iberian Peninsula");
        assert_eq!(region_of("M24"), "Saudi Arabia");
    }

    #[test]
    fn cut_offs_are_exclusive() {
        // Column index 14 (F15) sits exactly on the 35% cut-off.
        assert_eq!(region_of("F14"), "North Atlantic Ocean");
        assert_eq!(region_of("F15"), "Greenland");
    }

    #[test]
    fn ocean_regions_have_no_countries() {
        for cell in grid_cells().filter(|c| c.profile.is_oceanic()) {
            assert!(cell.profile.countries.is_empty(), "{} lists countries", cell.id);
        }
    }

    #[test]
    fn sub_regions_are_carried() {
        let cell = grid_cell_by_id("R12").unwrap();
        assert_eq!(cell.profile.name, "Northern Brazil");
        assert_eq!(cell.profile.sub_region, Some("Amazon Basin"));
    }

    #[test]
    fn rejects_bad_ids() {
        assert!(grid_cell_by_id("Z1").is_err());
        assert!(grid_cell_by_id("").is_err());
    }
}
