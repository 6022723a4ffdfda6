//! Integration tests across geography, catalog and travel.
//!
//! These exercise the public API the way the map interface does: resolve a
//! clicked sector, show its record, and price a trip to a neighbour.

#![allow(clippy::unwrap_used)]

use aegis_types::{ControlState, SectorId, SectorPatch, SectorQuery, TerrainType, TravelMethod};
use aegis_world::travel::travel_time_between;
use aegis_world::{SectorCatalog, adjacency, fastest_method, grid_cells};
use serde_json::Value;

#[test]
fn every_sector_has_a_record_and_a_label() {
    let catalog = SectorCatalog::with_curated().unwrap();
    for cell in grid_cells() {
        let record = catalog.get_sector(cell.id);
        assert_eq!(record.id, cell.id);
        assert!(!record.display_label().is_empty(), "{} has no label", cell.id);
    }
}

#[test]
fn curated_sector_labels_use_their_names() {
    let catalog = SectorCatalog::with_curated().unwrap();
    let record = catalog.get("E22").unwrap();
    assert_eq!(record.display_label(), "Western Europe");
    assert_eq!(record.controlled_by, ControlState::Allies);
    assert_eq!(record.cities.len(), 3);
}

#[test]
fn record_serializes_with_string_id_and_snake_case_enums() {
    let catalog = SectorCatalog::with_curated().unwrap();
    let record = catalog.get("K26").unwrap();
    let json: Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], "K26");
    assert_eq!(json["row"], "K");
    assert_eq!(json["col"], 26);
    assert_eq!(json["terrain"], "jungle");
    assert_eq!(json["controlled_by"], "contested");
}

#[test]
fn grid_cell_serializes_flattened_profile() {
    let cell = grid_cells().next().unwrap();
    let json: Value = serde_json::to_value(cell).unwrap();
    assert_eq!(json["id"], "A1");
    assert_eq!(json["name"], "Arctic Ocean");
    assert_eq!(json["climate"], "polar");
    assert_eq!(json["countries"], Value::Array(Vec::new()));
}

#[test]
fn updated_sector_becomes_searchable() {
    let mut catalog = SectorCatalog::with_curated().unwrap();
    let lair: SectorId = "T5".parse().unwrap();
    let query = SectorQuery {
        controlled_by: Some(ControlState::Enemies),
        ..SectorQuery::default()
    };
    assert!(catalog.search(&query).is_empty());

    catalog
        .update_sector(
            lair,
            SectorPatch {
                name: Some("Villain Lair".to_owned()),
                terrain: Some(TerrainType::Islands),
                threat_level: Some(10),
                controlled_by: Some(ControlState::Enemies),
                ..SectorPatch::default()
            },
        )
        .unwrap();
    assert_eq!(catalog.search(&query), vec![lair]);
}

#[test]
fn every_neighbour_of_a_coastal_city_is_reachable_by_air() {
    let catalog = SectorCatalog::with_curated().unwrap();
    let la: SectorId = "F9".parse().unwrap();
    let from = catalog.get_sector(la);
    for neighbour in adjacency(la) {
        let to = catalog.get_sector(neighbour);
        let air = travel_time_between(&catalog, la, neighbour, TravelMethod::Air, 100.0);
        assert!(air.is_reachable(), "{neighbour} unreachable by air");
        assert!(fastest_method(&from, &to, 100.0).is_some());
    }
}
