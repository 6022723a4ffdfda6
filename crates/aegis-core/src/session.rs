//! One game session: the world clock and the sector catalog side by side.
//!
//! The clock and the catalog are independent. A [`Session`] owns one of
//! each together with the base travel speed, and is the single writer for
//! both. Hosts that reach in from more than one task share it through
//! [`SharedSession`], which serializes every mutation behind one mutex.

use std::sync::Arc;

use aegis_types::{SectorId, SectorQuery, SectorRecord, TravelMethod};
use aegis_world::travel::travel_time_between;
use aegis_world::{SectorCatalog, TravelEstimate, WorldError, fastest_method};
use tokio::sync::Mutex;
use tracing::info;

use crate::clock::{ClockError, WorldClock};
use crate::config::{ConfigError, SimulationConfig};

/// Errors that can occur while assembling a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The configuration failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The clock could not be built from the configuration.
    #[error(transparent)]
    Clock(#[from] ClockError),

    /// Seeding or loading sector overrides failed.
    #[error(transparent)]
    World(#[from] WorldError),
}

/// The clock and catalog for one play session.
#[derive(Debug, Clone)]
pub struct Session {
    clock: WorldClock,
    catalog: SectorCatalog,
    base_speed_kmh: f64,
}

impl Session {
    /// A session with the default clock, the curated sectors and the
    /// default travel speed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::World`] if the curated set fails to seed.
    pub fn new() -> Result<Self, SessionError> {
        Self::from_config(&SimulationConfig::default())
    }

    /// Build a session from a loaded configuration.
    ///
    /// Seeds the curated sectors when enabled, then merges the overrides
    /// file on top if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the configuration is out of range or the
    /// overrides file cannot be read or validated.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let clock = WorldClock::from_config(&config.clock)?;

        let mut catalog = SectorCatalog::new();
        if config.catalog.seed_curated {
            catalog.seed_curated()?;
        }
        if let Some(path) = &config.catalog.overrides_file {
            catalog.load_overrides_file(path)?;
        }

        info!(
            world = %config.world.name,
            clock = %clock,
            overrides = catalog.override_count(),
            "Session ready"
        );

        Ok(Self {
            clock,
            catalog,
            base_speed_kmh: config.travel.default_base_speed_kmh,
        })
    }

    /// The world clock.
    pub const fn clock(&self) -> &WorldClock {
        &self.clock
    }

    /// Mutable access to the world clock.
    pub const fn clock_mut(&mut self) -> &mut WorldClock {
        &mut self.clock
    }

    /// The sector catalog.
    pub const fn catalog(&self) -> &SectorCatalog {
        &self.catalog
    }

    /// Mutable access to the sector catalog.
    pub const fn catalog_mut(&mut self) -> &mut SectorCatalog {
        &mut self.catalog
    }

    /// Base travel speed in km/h.
    pub const fn base_speed_kmh(&self) -> f64 {
        self.base_speed_kmh
    }

    /// Resolve a map selection such as `"F15"`. Malformed ids give `None`.
    pub fn select_sector(&self, id: &str) -> Option<SectorRecord> {
        self.catalog.get(id)
    }

    /// Overridden sectors matching `query`, row-major.
    pub fn search(&self, query: &SectorQuery) -> Vec<SectorId> {
        self.catalog.search(query)
    }

    /// Travel time between two sectors at the session's base speed.
    pub fn travel_time(&self, from: SectorId, to: SectorId, method: TravelMethod) -> TravelEstimate {
        travel_time_between(&self.catalog, from, to, method, self.base_speed_kmh)
    }

    /// Quickest method between two sectors, or `None` if nothing gets there.
    pub fn fastest_route(&self, from: SectorId, to: SectorId) -> Option<(TravelMethod, f64)> {
        fastest_method(
            &self.catalog.get_sector(from),
            &self.catalog.get_sector(to),
            self.base_speed_kmh,
        )
    }
}

/// A [`Session`] shared between tasks.
pub type SharedSession = Arc<Mutex<Session>>;

/// Wrap a session for sharing.
pub fn shared(session: Session) -> SharedSession {
    Arc::new(Mutex::new(session))
}
