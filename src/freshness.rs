//! Data-age classification for condition inputs.
//!
//! Conditions arrive with observation timestamps and decay in value as
//! they age. This module classifies each tracked input as fresh, stale,
//! or missing against a [`FreshnessPolicy`], and decides whether staleness
//! should suppress the engine's one-line advisory.
//!
//! Classification is pure: the caller supplies the instant to measure
//! against, so the same snapshot always yields the same report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::input::DecisionEngineInput;

/// Default maximum age of a wind observation before it is stale, in minutes.
pub const DEFAULT_WIND_MAX_AGE_MINUTES: f64 = 30.0;

/// Age classification of one condition input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FreshnessState {
    /// Present and within the policy age limit.
    Fresh,
    /// Present but older than the policy allows.
    Stale,
    /// Not present on the input at all.
    Missing,
}

impl FreshnessState {
    /// Returns true only for [`FreshnessState::Fresh`]; stale and missing
    /// both count against gating checks.
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh)
    }
}

impl std::fmt::Display for FreshnessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fresh => write!(f, "FRESH"),
            Self::Stale => write!(f, "STALE"),
            Self::Missing => write!(f, "MISSING"),
        }
    }
}

/// The condition inputs tracked for freshness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessKey {
    /// The wind observation on the input snapshot.
    Wind,
}

impl std::fmt::Display for FreshnessKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wind => write!(f, "wind"),
        }
    }
}

/// Per-input freshness classification for one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreshnessReport {
    /// State of the wind observation.
    pub wind: FreshnessState,
}

impl FreshnessReport {
    /// Looks up the state recorded for a tracked key.
    pub fn state_for(&self, key: FreshnessKey) -> FreshnessState {
        match key {
            FreshnessKey::Wind => self.wind,
        }
    }
}

/// Age limits and gating rules for condition inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshnessPolicy {
    /// Maximum age of a wind observation before it is stale, in minutes.
    /// A reading exactly at the limit is still fresh.
    pub wind_max_age_minutes: f64,

    /// Keys whose staleness (or absence) suppresses the one-line intent.
    pub suppress_intent_if_stale: Vec<FreshnessKey>,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            wind_max_age_minutes: DEFAULT_WIND_MAX_AGE_MINUTES,
            suppress_intent_if_stale: vec![FreshnessKey::Wind],
        }
    }
}

/// Classifies each tracked condition input on a snapshot.
///
/// # Arguments
///
/// * `input` - The shot snapshot whose conditions are being judged
/// * `policy` - Age limits to judge against
/// * `now` - The instant to measure observation ages from
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shotcaller::freshness::{evaluate_freshness, FreshnessPolicy, FreshnessState};
/// # use shotcaller::geo::LatLng;
/// # use shotcaller::input::{DecisionEngineInput, PlayerProfile};
/// # let input = DecisionEngineInput {
/// #     hole_id: "1".to_string(),
/// #     par: 4,
/// #     tee_box_id: "blue".to_string(),
/// #     teebox_location: LatLng::new(35.0, -78.0),
/// #     green_center: LatLng::new(35.001, -78.0),
/// #     pin_location: None,
/// #     hazards: Vec::new(),
/// #     gps_accuracy_meters: 6.0,
/// #     elevation_delta_feet: None,
/// #     temperature_f: None,
/// #     wind: None,
/// #     lie_type: None,
/// #     player: PlayerProfile::default(),
/// #     is_course_confirmed: true,
/// #     is_tee_box_confirmed: true,
/// # };
/// let now = Utc.with_ymd_and_hms(2026, 4, 12, 9, 30, 0).unwrap();
/// let report = evaluate_freshness(&input, &FreshnessPolicy::default(), now);
/// assert_eq!(report.wind, FreshnessState::Missing);
/// ```
pub fn evaluate_freshness(
    input: &DecisionEngineInput,
    policy: &FreshnessPolicy,
    now: DateTime<Utc>,
) -> FreshnessReport {
    let wind = match &input.wind {
        None => FreshnessState::Missing,
        Some(w) if w.age_minutes(now) > policy.wind_max_age_minutes => FreshnessState::Stale,
        Some(_) => FreshnessState::Fresh,
    };

    FreshnessReport { wind }
}

/// Whether the one-line intent should be withheld for this report.
///
/// True when any key the policy gates on is not fresh; stale and missing
/// both suppress.
pub fn should_suppress_intent(report: &FreshnessReport, policy: &FreshnessPolicy) -> bool {
    policy
        .suppress_intent_if_stale
        .iter()
        .any(|key| !report.state_for(*key).is_fresh())
}
