//! The sector catalog: per-sector data for all 960 cells of the grid.
//!
//! A [`SectorCatalog`] owns two layers:
//!
//! - an immutable table of defaults, one record per cell, decorated with the
//!   region, countries and terrain that [`geography::classify`] assigns;
//! - a sparse, mutable table of [`SectorPatch`] overrides for the sectors
//!   that carry curated or runtime-updated data.
//!
//! Reading a sector that has an override merges the patch field by field
//! onto its geography-derived default, so a patch that only raises the
//! threat level keeps the cell's region and terrain. A patch that names a
//! country or a country list replaces the classified countries outright.
//! Only overridden sectors are surfaced by [`SectorCatalog::search`].
//!
//! [`geography::classify`]: crate::geography::classify

use std::collections::BTreeMap;
use std::path::Path;

use aegis_types::{SECTOR_COUNT, SectorId, SectorPatch, SectorQuery, SectorRecord};
use tracing::{debug, info};

use crate::curated::curated_sectors;
use crate::error::WorldError;
use crate::geography;

/// Region given to every record of the raw, un-enriched default table.
pub const UNASSIGNED_REGION: &str = "Unassigned";

/// Highest value accepted for the 0--10 level fields.
pub const MAX_LEVEL: u8 = 10;

/// Build the raw 960-entry default table.
///
/// Every record is zero-valued ocean under neutral control, named
/// `"Sector <id>"`, in region [`UNASSIGNED_REGION`]. No geography is applied.
pub fn generate_defaults() -> BTreeMap<SectorId, SectorRecord> {
    SectorId::all()
        .map(|id| (id, SectorRecord::empty(id, UNASSIGNED_REGION)))
        .collect()
}

/// Zero-valued record for `id` carrying the classified region, countries
/// and terrain.
pub fn geography_default(id: SectorId) -> SectorRecord {
    let profile = geography::classify(id.coordinate());
    let mut record = SectorRecord::empty(id, profile.name);
    record.countries = profile.countries.iter().map(|c| (*c).to_owned()).collect();
    record.terrain = profile.terrain;
    record
}

/// Default records plus the override table.
#[derive(Debug, Clone)]
pub struct SectorCatalog {
    /// Geography-derived defaults, indexed by row-major cell position.
    defaults: Vec<SectorRecord>,
    /// Sparse per-sector overrides.
    overrides: BTreeMap<SectorId, SectorPatch>,
}

impl SectorCatalog {
    /// A catalog with no overrides.
    pub fn new() -> Self {
        let mut defaults = Vec::with_capacity(SECTOR_COUNT);
        defaults.extend(SectorId::all().map(geography_default));
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// A catalog seeded with the curated named sectors.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::seed_curated`].
    pub fn with_curated() -> Result<Self, WorldError> {
        let mut catalog = Self::new();
        catalog.seed_curated()?;
        Ok(catalog)
    }

    /// Merge the curated named sectors into the override table.
    ///
    /// Returns the number of sectors seeded.
    pub fn seed_curated(&mut self) -> Result<usize, WorldError> {
        let sectors = curated_sectors()?;
        let count = sectors.len();
        for (id, patch) in sectors {
            self.update_sector(id, patch)?;
        }
        info!(count, "seeded curated sectors");
        Ok(count)
    }

    /// Full record for `id`.
    ///
    /// Never fails: absence of override data falls back to the default.
    pub fn get_sector(&self, id: SectorId) -> SectorRecord {
        if let Some(patch) = self.overrides.get(&id) {
            let mut record = self.default_record(id);
            if patch.country.is_some() || patch.countries.is_some() {
                record.countries.clear();
            }
            patch.apply_to(&mut record);
            return record;
        }
        self.default_record(id)
    }

    fn default_record(&self, id: SectorId) -> SectorRecord {
        self.defaults
            .get(id.coordinate().index())
            .cloned()
            .unwrap_or_else(|| geography_default(id))
    }

    /// Full record for a sector id string, or `None` if the id is malformed
    /// or outside the grid.
    pub fn get(&self, id: &str) -> Option<SectorRecord> {
        id.parse().ok().map(|id| self.get_sector(id))
    }

    /// Merge `patch` into the override for `id`, creating one if needed.
    ///
    /// Fields present in `patch` replace earlier override values; absent
    /// fields keep them.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::LevelOutOfRange`] or
    /// [`WorldError::InvalidPopulation`] if the patch carries an impossible
    /// value, and [`WorldError::CityLevelOutOfRange`] or
    /// [`WorldError::CityInvalidPopulation`] if one of its cities does. The
    /// override table is left untouched in that case.
    pub fn update_sector(&mut self, id: SectorId, patch: SectorPatch) -> Result<(), WorldError> {
        validate_patch(id, &patch)?;
        debug!(sector = %id, "updating sector override");
        self.overrides.entry(id).or_default().merge(patch);
        Ok(())
    }

    /// Whether `id` has curated or updated data.
    pub fn has_override(&self, id: SectorId) -> bool {
        self.overrides.contains_key(&id)
    }

    /// Ids with override data, row-major.
    pub fn overridden_ids(&self) -> impl Iterator<Item = SectorId> + '_ {
        self.overrides.keys().copied()
    }

    /// Number of sectors with override data.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Ids of overridden sectors matching `query`, in row-major order.
    ///
    /// Sectors that only carry default data never match, so a query such as
    /// "all ocean sectors" does not return the hundreds of blank cells.
    pub fn search(&self, query: &SectorQuery) -> Vec<SectorId> {
        self.overrides
            .keys()
            .copied()
            .filter(|id| query.matches(&self.get_sector(*id)))
            .collect()
    }

    /// Merge every patch from a YAML map of `SectorId -> SectorPatch`.
    ///
    /// The whole document is validated before anything is merged. Returns
    /// the number of sectors touched.
    pub fn apply_overrides_yaml(&mut self, yaml: &str) -> Result<usize, WorldError> {
        let patches: BTreeMap<SectorId, SectorPatch> = serde_yml::from_str(yaml)?;
        for (id, patch) in &patches {
            validate_patch(*id, patch)?;
        }
        let count = patches.len();
        for (id, patch) in patches {
            self.update_sector(id, patch)?;
        }
        Ok(count)
    }

    /// Read a YAML overrides file and merge it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::OverridesRead`] if the file cannot be read, and
    /// any error from [`Self::apply_overrides_yaml`].
    pub fn load_overrides_file(&mut self, path: &Path) -> Result<usize, WorldError> {
        let contents = std::fs::read_to_string(path).map_err(|source| WorldError::OverridesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.apply_overrides_yaml(&contents)?;
        info!(path = %path.display(), count, "loaded sector overrides");
        Ok(count)
    }
}

impl Default for SectorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_patch(id: SectorId, patch: &SectorPatch) -> Result<(), WorldError> {
    if let Some((field, value)) = patch.levels().find(|(_, level)| *level > MAX_LEVEL) {
        return Err(WorldError::LevelOutOfRange {
            sector: id,
            field,
            value,
        });
    }
    if let Some(value) = patch.population.filter(|p| !valid_population(*p)) {
        return Err(WorldError::InvalidPopulation { sector: id, value });
    }
    for city in patch.cities.iter().flatten() {
        if city.threat_level > MAX_LEVEL {
            return Err(WorldError::CityLevelOutOfRange {
                sector: id,
                city: city.name.clone(),
                value: city.threat_level,
            });
        }
        if !valid_population(city.population) {
            return Err(WorldError::CityInvalidPopulation {
                sector: id,
                city: city.name.clone(),
                value: city.population,
            });
        }
    }
    Ok(())
}

const fn valid_population(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aegis_types::{City, ControlState, TerrainType, TravelMethod};

    use super::*;
    use crate::travel::travel_time;

    fn id(s: &str) -> SectorId {
        s.parse().unwrap()
    }

    #[test]
    fn raw_defaults_cover_the_grid() {
        let table = generate_defaults();
        assert_eq!(table.len(), SECTOR_COUNT);
        let record = table.get(&id("F15")).unwrap();
        assert_eq!(record.name, "Sector F15");
        assert_eq!(record.region, UNASSIGNED_REGION);
        assert_eq!(record.terrain, TerrainType::Ocean);
        assert_eq!(record.controlled_by, ControlState::Neutral);
    }

    #[test]
    fn plain_sector_reads_geography() {
        let catalog = SectorCatalog::new();
        let record = catalog.get_sector(id("G9"));
        assert_eq!(record.region, "Eastern USA");
        assert_eq!(record.countries, vec!["USA".to_owned()]);
        assert_eq!(record.terrain, TerrainType::Urban);
        assert_eq!(record.threat_level, 0);
        assert!(!catalog.has_override(id("G9")));
    }

    #[test]
    fn override_fields_win_and_others_survive() {
        let mut catalog = SectorCatalog::new();
        catalog
            .update_sector(
                id("F15"),
                SectorPatch {
                    threat_level: Some(7),
                    ..SectorPatch::default()
                },
            )
            .unwrap();
        let record = catalog.get_sector(id("F15"));
        assert_eq!(record.threat_level, 7);
        assert!(record.population.abs() < f64::EPSILON);
        assert_eq!(record.name, "Sector F15");
        assert_eq!(record.region, geography_default(id("F15")).region);
    }

    #[test]
    fn threat_only_patch_keeps_geography() {
        let mut catalog = SectorCatalog::new();
        catalog
            .update_sector(
                id("G9"),
                SectorPatch {
                    threat_level: Some(6),
                    ..SectorPatch::default()
                },
            )
            .unwrap();
        let record = catalog.get_sector(id("G9"));
        assert_eq!(record.threat_level, 6);
        assert_eq!(record.region, "Eastern USA");
        assert_eq!(record.terrain, TerrainType::Urban);
        assert_eq!(record.countries, vec!["USA".to_owned()]);

        let from = catalog.get_sector(id("G10"));
        let estimate = travel_time(&from, &record, TravelMethod::Ground, 100.0);
        assert!(estimate.is_reachable());
    }

    #[test]
    fn patch_country_replaces_classified_countries() {
        let mut catalog = SectorCatalog::new();
        catalog
            .update_sector(
                id("G9"),
                SectorPatch {
                    country: Some(Some("Atlantis".to_owned())),
                    ..SectorPatch::default()
                },
            )
            .unwrap();
        let record = catalog.get_sector(id("G9"));
        assert_eq!(record.country.as_deref(), Some("Atlantis"));
        assert!(record.countries.is_empty());
    }

    #[test]
    fn updates_merge_into_existing_override() {
        let mut catalog = SectorCatalog::with_curated().unwrap();
        catalog
            .update_sector(
                id("E14"),
                SectorPatch {
                    cities: Some(vec![City::new("Gotham", 10.0, 9)]),
                    ..SectorPatch::default()
                },
            )
            .unwrap();
        let record = catalog.get_sector(id("E14"));
        assert_eq!(record.cities.len(), 1);
        assert_eq!(record.threat_level, 8);
        assert_eq!(record.name, "Northeast Corridor");
    }

    #[test]
    fn rejects_out_of_range_levels_without_mutating() {
        let mut catalog = SectorCatalog::new();
        let err = catalog
            .update_sector(
                id("A1"),
                SectorPatch {
                    infrastructure: Some(11),
                    ..SectorPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            WorldError::LevelOutOfRange {
                field: "infrastructure",
                value: 11,
                ..
            }
        ));
        assert!(!catalog.has_override(id("A1")));

        let err = catalog
            .update_sector(
                id("A1"),
                SectorPatch {
                    population: Some(-1.0),
                    ..SectorPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidPopulation { .. }));
    }

    #[test]
    fn rejects_impossible_cities_without_mutating() {
        let mut catalog = SectorCatalog::new();
        let err = catalog
            .update_sector(
                id("A1"),
                SectorPatch {
                    cities: Some(vec![City::new("Fine", 1.0, 3), City::new("X", -3.0, 200)]),
                    ..SectorPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            &err,
            WorldError::CityLevelOutOfRange { city, value: 200, .. } if city == "X"
        ));
        assert!(err.to_string().contains('X'));

        let err = catalog
            .update_sector(
                id("A1"),
                SectorPatch {
                    cities: Some(vec![City::new("Y", f64::NAN, 2)]),
                    ..SectorPatch::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            &err,
            WorldError::CityInvalidPopulation { city, .. } if city == "Y"
        ));
        assert!(!catalog.has_override(id("A1")));

        let yaml = "C3:\n  threat_level: 4\nC4:\n  cities:\n    - name: Ruin\n      population: -2.0\n      threat_level: 1\n";
        assert!(catalog.apply_overrides_yaml(yaml).is_err());
        assert!(!catalog.has_override(id("C3")));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = SectorCatalog::new();
        assert!(catalog.get("Z99").is_none());
        assert!(catalog.get("f15").is_none());
        assert!(catalog.get("F15").is_some());
    }

    #[test]
    fn ocean_search_never_returns_blank_cells() {
        let catalog = SectorCatalog::with_curated().unwrap();
        let query = SectorQuery {
            terrain: Some(TerrainType::Ocean),
            ..SectorQuery::default()
        };
        assert!(catalog.search(&query).is_empty());
    }

    #[test]
    fn search_is_row_major_and_curated_only() {
        let catalog = SectorCatalog::with_curated().unwrap();
        let all = catalog.search(&SectorQuery::default());
        assert_eq!(all.len(), catalog.override_count());
        assert!(all.windows(2).all(|w| w.first() < w.last()));

        let usa = SectorQuery {
            country: Some("USA".to_owned()),
            ..SectorQuery::default()
        };
        let ids: Vec<String> = catalog.search(&usa).iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["D8", "E9", "E12", "E14", "F9", "F14"]);
    }

    #[test]
    fn search_by_city_and_control() {
        let catalog = SectorCatalog::with_curated().unwrap();
        let query = SectorQuery {
            has_city: Some("kinsh".to_owned()),
            controlled_by: Some(ControlState::Contested),
            ..SectorQuery::default()
        };
        let ids: Vec<String> = catalog.search(&query).iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["K26"]);
    }

    #[test]
    fn yaml_overrides_merge_atomically() {
        let mut catalog = SectorCatalog::new();
        let count = catalog
            .apply_overrides_yaml(
                "B2:\n  name: Fortress of Solitude\n  terrain: ice\n  is_restricted: true\n",
            )
            .unwrap();
        assert_eq!(count, 1);
        let record = catalog.get_sector(id("B2"));
        assert_eq!(record.name, "Fortress of Solitude");
        assert_eq!(record.terrain, TerrainType::Ice);
        assert!(record.is_restricted);

        let bad = "C3:\n  threat_level: 4\nC4:\n  threat_level: 12\n";
        assert!(catalog.apply_overrides_yaml(bad).is_err());
        assert!(!catalog.has_override(id("C3")));

        assert!(catalog.apply_overrides_yaml("Q77:\n  name: Nowhere\n").is_err());
    }

    #[test]
    fn missing_overrides_file_reports_path() {
        let mut catalog = SectorCatalog::new();
        let err = catalog
            .load_overrides_file(Path::new("/nonexistent/aegis-overrides.yaml"))
            .unwrap_err();
        assert!(matches!(err, WorldError::OverridesRead { .. }));
        assert!(err.to_string().contains("aegis-overrides.yaml"));
    }
}
