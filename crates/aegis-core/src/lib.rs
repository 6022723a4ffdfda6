//! World clock, configuration and session orchestration for the Aegis map core.
//!
//! The sector model lives in `aegis-world`; this crate adds the time side
//! and composes both into a playable session.
//!
//! # Modules
//!
//! - [`clock`] -- Simulated calendar with ordered carry, pause/speed control
//!   and the derived day-period views.
//! - [`config`] -- Configuration loading from `aegis-config.yaml` into
//!   strongly-typed structs.
//! - [`session`] -- [`Session`] pairing one clock with one sector catalog,
//!   and the mutex-wrapped [`SharedSession`].
//! - [`runner`] -- The fixed-interval tick driver with host commands.
//!
//! [`Session`]: session::Session
//! [`SharedSession`]: session::SharedSession

pub mod clock;
pub mod config;
pub mod runner;
pub mod session;
