//! Input snapshot types for the decision engine.
//!
//! A [`DecisionEngineInput`] is a complete, already-loaded picture of one
//! shot: course geometry, hazards, live conditions, and the player profile.
//! The engine receives it as a value and never reaches out for more data;
//! acquisition, persistence, and validation all belong to higher layers.
//!
//! Freshness classification reads the wind snapshot from this module too,
//! so it stays independent of the engine itself.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// Hazard classification.
///
/// Only water and out-of-bounds are "primary danger": the kinds the
/// target-placement step actively routes around. The rest are carried for
/// display layers but do not move the aim point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HazardKind {
    /// Penalty area holding water.
    Water,
    /// Out of bounds (white stakes).
    #[serde(rename = "ob")]
    OutOfBounds,
    /// Sand bunker.
    Bunker,
    /// Tree line or wooded area.
    Trees,
    /// Anything else worth marking on the hole.
    Other,
}

impl HazardKind {
    /// Returns true for the kinds the avoidance step routes around.
    pub fn is_primary_danger(&self) -> bool {
        matches!(self, Self::Water | Self::OutOfBounds)
    }
}

impl std::fmt::Display for HazardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Water => write!(f, "water"),
            Self::OutOfBounds => write!(f, "ob"),
            Self::Bunker => write!(f, "bunker"),
            Self::Trees => write!(f, "trees"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A circular hazard on the hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// What kind of trouble this is.
    pub kind: HazardKind,
    /// Center of the hazard circle.
    pub center: LatLng,
    /// Radius of the hazard circle in yards.
    pub radius_yds: f64,
}

/// A timestamped wind observation.
///
/// Absence of wind data on the input is a distinct state from a calm
/// reading; consumers judge freshness from `observed_at` rather than from
/// a separate confidence field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed in mph.
    pub speed_mph: f64,

    /// Direction the wind blows from, in degrees (0=north, 90=east).
    ///
    /// Carried on the snapshot but not yet read by the distance
    /// adjustment, which treats all wind as a headwind until
    /// shot-relative decomposition is available.
    pub direction_deg: f64,

    /// When this reading was observed.
    pub observed_at: DateTime<Utc>,
}

impl Wind {
    /// Age of this reading in fractional minutes at the given instant.
    ///
    /// Negative when the observation is in the caller's future; such a
    /// reading is treated as fresh.
    pub fn age_minutes(&self, now: DateTime<Utc>) -> f64 {
        now.signed_duration_since(self.observed_at).num_milliseconds() as f64 / 60_000.0
    }
}

/// A player's dominant mishit tendency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissBias {
    /// Tends to miss left of the target line.
    Left,
    /// Tends to miss right of the target line.
    Right,
    /// Tends to come up short of the target.
    Short,
    /// Tends to fly past the target.
    Long,
}

impl std::fmt::Display for MissBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Short => write!(f, "short"),
            Self::Long => write!(f, "long"),
        }
    }
}

/// Where the ball currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LieType {
    /// Teed up on the tee box.
    Tee,
    /// Fairway lie.
    Fairway,
    /// Rough lie.
    Rough,
    /// In a bunker.
    Bunker,
}

impl std::fmt::Display for LieType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tee => write!(f, "tee"),
            Self::Fairway => write!(f, "fairway"),
            Self::Rough => write!(f, "rough"),
            Self::Bunker => write!(f, "bunker"),
        }
    }
}

/// Player club-carry data and tendencies.
///
/// Club identifiers are free-form strings ("7i", "D", "3W", ...); the
/// vocabulary is player-configurable, not a closed set. A `BTreeMap` keeps
/// iteration in club-name order so selection tie-breaking is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Typical carry distance in yards, keyed by club identifier.
    pub club_carry_yds: BTreeMap<String, f64>,

    /// The player's dominant miss direction, if known.
    pub miss_bias: Option<MissBias>,
}

impl PlayerProfile {
    /// Number of clubs with a known carry distance.
    pub fn known_club_count(&self) -> usize {
        self.club_carry_yds.len()
    }
}

/// Complete input snapshot for one shot decision.
///
/// Confirmation flags come from a higher layer that knows whether the
/// detected course and tee box are trustworthy; the engine only folds them
/// into its confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEngineInput {
    /// Hole identifier within the course.
    pub hole_id: String,

    /// Par for the hole (3-5).
    pub par: u8,

    /// Tee box identifier ("blue", "white", ...).
    pub tee_box_id: String,

    /// Where the shot is played from.
    pub teebox_location: LatLng,

    /// Center of the green.
    pub green_center: LatLng,

    /// Today's pin position. Supersedes the green center as the aim
    /// reference when present.
    pub pin_location: Option<LatLng>,

    /// Hazards on the hole.
    pub hazards: Vec<Hazard>,

    /// Reported GPS accuracy in meters (lower is better).
    pub gps_accuracy_meters: f64,

    /// Elevation change from ball to target in feet (positive = uphill).
    pub elevation_delta_feet: Option<f64>,

    /// Air temperature in degrees Fahrenheit.
    pub temperature_f: Option<f64>,

    /// Latest wind observation.
    pub wind: Option<Wind>,

    /// Current lie, when the tracking layer knows it.
    pub lie_type: Option<LieType>,

    /// The player's carry table and tendencies.
    pub player: PlayerProfile,

    /// Has the detected course been confirmed?
    pub is_course_confirmed: bool,

    /// Has the detected tee box been confirmed?
    pub is_tee_box_confirmed: bool,
}

impl DecisionEngineInput {
    /// The point the shot is aimed at: today's pin when known, otherwise
    /// the center of the green.
    pub fn aim_reference(&self) -> LatLng {
        self.pin_location.unwrap_or(self.green_center)
    }
}
