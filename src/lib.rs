//! Golf shot decisions from a snapshot of course, conditions, and player.
//!
//! Given one [`input::DecisionEngineInput`] (hole geometry, hazards,
//! live conditions, and the player's carry table), the engine recommends
//! a club, an aim point, and an expected dispersion, scored with a
//! confidence level. The crate is a pure calculator: no I/O, no
//! persistent state, no clock reads. Callers pass the instant used for
//! data-age checks, so decisions are reproducible.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use chrono::{TimeZone, Utc};
//! use shotcaller::engine::DecisionEngine;
//! use shotcaller::geo::LatLng;
//! use shotcaller::input::{DecisionEngineInput, PlayerProfile};
//!
//! let input = DecisionEngineInput {
//!     hole_id: "1".to_string(),
//!     par: 3,
//!     tee_box_id: "blue".to_string(),
//!     teebox_location: LatLng::new(35.0, -78.0),
//!     green_center: LatLng::new(35.001, -78.0),
//!     pin_location: None,
//!     hazards: Vec::new(),
//!     gps_accuracy_meters: 6.0,
//!     elevation_delta_feet: None,
//!     temperature_f: None,
//!     wind: None,
//!     lie_type: None,
//!     player: PlayerProfile {
//!         club_carry_yds: BTreeMap::from([("PW".to_string(), 120.0)]),
//!         miss_bias: None,
//!     },
//!     is_course_confirmed: true,
//!     is_tee_box_confirmed: true,
//! };
//!
//! let now = Utc.with_ymd_and_hms(2026, 4, 12, 9, 30, 0).unwrap();
//! let out = DecisionEngine::new().decide(&input, now);
//!
//! assert_eq!(out.distance_to_pin_yds, 122.0);
//! assert_eq!(out.recommended_club.as_deref(), Some("PW"));
//! ```

pub mod engine;
pub mod freshness;
pub mod geo;
pub mod input;
pub mod output;

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
