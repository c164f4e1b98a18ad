//! The shot decision engine.
//!
//! Turns one [`DecisionEngineInput`] snapshot into one
//! [`DecisionEngineOutput`] recommendation through a fixed pipeline:
//!
//! 1. Resolve the aim reference (pin if present, else green center)
//! 2. Measure the base distance and adjust it for conditions
//! 3. Pick a club against the effective distance
//! 4. Place the target zone (miss-bias shift, then hazard avoidance)
//! 5. Size the landing ellipse over the final target
//! 6. Score confidence and gate the one-line intent on freshness
//!
//! [`DecisionEngine::decide`] is total: incomplete inputs degrade the
//! output (absent club, lower confidence) instead of failing. The caller
//! supplies the instant used for data-age checks, so a fixed input and a
//! fixed instant always produce the same output.

mod clubs;
mod confidence;
mod distance;
mod target;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::freshness::{evaluate_freshness, should_suppress_intent, FreshnessPolicy};
use crate::geo::distance_yds;
use crate::input::DecisionEngineInput;
use crate::output::{ConfidenceLevel, DecisionEngineOutput};

/// The advisory line shown when confidence is high and nothing critical
/// has gone stale.
pub const STOCK_INTENT: &str = "Favor center. Commit to your stock swing.";

/// The shot decision engine.
///
/// Holds the freshness policy its advisories gate on; everything else
/// arrives with each call. Cheap to construct and clone.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    freshness_policy: FreshnessPolicy,
}

impl DecisionEngine {
    /// Creates an engine with the default freshness policy.
    pub fn new() -> Self {
        Self {
            freshness_policy: FreshnessPolicy::default(),
        }
    }

    /// Creates an engine that gates its advisory on a custom policy.
    pub fn with_policy(freshness_policy: FreshnessPolicy) -> Self {
        Self { freshness_policy }
    }

    /// The freshness policy this engine gates on.
    pub fn policy(&self) -> &FreshnessPolicy {
        &self.freshness_policy
    }

    /// Computes a recommendation for one shot.
    ///
    /// # Arguments
    ///
    /// * `input` - Complete snapshot of the hole, conditions, and player
    /// * `now` - The instant to measure observation ages from
    pub fn decide(&self, input: &DecisionEngineInput, now: DateTime<Utc>) -> DecisionEngineOutput {
        let aim = input.aim_reference();
        let base_yds = distance_yds(input.teebox_location, aim).round();
        let effective_yds = distance::effective_distance_yds(input, base_yds);

        let confidence = confidence::compute_confidence(input, now);
        let report = evaluate_freshness(input, &self.freshness_policy, now);
        let suppress = should_suppress_intent(&report, &self.freshness_policy);

        // Low confidence still gets a conservative club and a basic
        // target; higher layers decide how much of it to surface.
        let recommended_club = clubs::pick_club(&input.player, effective_yds);

        let zone = target::place_target_zone(input);
        let ellipse = target::landing_ellipse(input, &zone);

        let one_line_intent = if confidence == ConfidenceLevel::High && !suppress {
            Some(STOCK_INTENT.to_string())
        } else {
            None
        };

        debug!(
            hole_id = %input.hole_id,
            base_yds,
            effective_yds,
            club = recommended_club.as_deref().unwrap_or("none"),
            confidence = %confidence,
            wind = %report.wind,
            "shot decision"
        );

        DecisionEngineOutput {
            distance_to_pin_yds: base_yds,
            effective_distance_yds: effective_yds,
            recommended_club,
            target_zone: Some(zone),
            landing_ellipse: Some(ellipse),
            confidence,
            one_line_intent,
        }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
