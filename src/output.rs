//! Recommendation types produced by the decision engine.

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// How much trust to place in a recommendation.
///
/// Ordered so that comparisons read naturally: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConfidenceLevel {
    /// Major inputs are missing or suspect; treat the numbers as rough.
    Low,
    /// Usable, with known gaps.
    Medium,
    /// Inputs are confirmed, fresh, and precise.
    High,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Where to aim: a circle the player should try to land in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetZone {
    /// Center of the aim circle.
    pub center: LatLng,
    /// Radius of the aim circle in yards.
    pub radius_yds: f64,
}

/// Expected dispersion for the shot, as an ellipse on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingEllipse {
    /// Center of the dispersion pattern.
    pub center: LatLng,
    /// Cross-shot axis in yards.
    pub width_yds: f64,
    /// Along-shot axis in yards.
    pub length_yds: f64,
    /// Orientation of the long axis in degrees, in `[0, 360)`.
    pub bearing_deg: f64,
}

/// One complete shot recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEngineOutput {
    /// Straight-line distance from ball to aim reference, in yards.
    pub distance_to_pin_yds: f64,

    /// Distance the shot plays after condition adjustments, in yards.
    pub effective_distance_yds: f64,

    /// Club identifier from the player's carry table, or `None` when the
    /// table has no entries.
    pub recommended_club: Option<String>,

    /// Where to aim.
    pub target_zone: Option<TargetZone>,

    /// Expected dispersion around the target.
    pub landing_ellipse: Option<LandingEllipse>,

    /// Trust level for this recommendation.
    pub confidence: ConfidenceLevel,

    /// A single swing thought, present only when confidence is high and
    /// no gating input has gone stale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_line_intent: Option<String>,
}
