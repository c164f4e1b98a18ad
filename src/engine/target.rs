//! Target-zone placement and landing-ellipse sizing.
//!
//! The target zone starts at the aim reference, shifts to compensate the
//! player's known miss tendency, then gets pushed clear of primary-danger
//! hazards. The landing ellipse is sized over the tee-to-target distance
//! that results.

use tracing::trace;

use crate::geo::{bearing_deg, distance_yds, project_position, LatLng};
use crate::input::{DecisionEngineInput, MissBias};
use crate::output::{LandingEllipse, TargetZone};

/// Radius of the aim circle in yards.
pub(super) const TARGET_ZONE_RADIUS_YDS: f64 = 12.0;

/// Safety buffer kept between the target and a hazard edge, in yards.
pub(super) const HAZARD_BUFFER_YDS: f64 = 12.0;

/// Extra yards added beyond exactly clearing a hazard.
pub(super) const REPULSION_MARGIN_YDS: f64 = 6.0;

/// Maximum relaxation passes over the hazard set.
///
/// Moving clear of one hazard can move into another; a few passes settle
/// most layouts, and densely packed hazards end with a best-effort point
/// rather than looping.
pub(super) const MAX_AVOIDANCE_PASSES: usize = 4;

/// Lateral compensation for a left/right miss tendency, in yards.
pub(super) const LATERAL_BIAS_YDS: f64 = 10.0;

/// Longitudinal compensation for a short/long miss tendency, in yards.
pub(super) const LONGITUDINAL_BIAS_YDS: f64 = 8.0;

/// Ellipse width as a fraction of shot distance, with its bounds in yards.
pub(super) const ELLIPSE_WIDTH_FACTOR: f64 = 0.08;
pub(super) const ELLIPSE_WIDTH_MIN_YDS: f64 = 10.0;
pub(super) const ELLIPSE_WIDTH_MAX_YDS: f64 = 35.0;

/// Ellipse length as a fraction of shot distance, with its bounds in yards.
pub(super) const ELLIPSE_LENGTH_FACTOR: f64 = 0.06;
pub(super) const ELLIPSE_LENGTH_MIN_YDS: f64 = 8.0;
pub(super) const ELLIPSE_LENGTH_MAX_YDS: f64 = 25.0;

/// Places the aim circle for the shot.
///
/// Starts at the aim reference, compensates the player's miss tendency,
/// then pushes the point clear of water and out-of-bounds.
pub(super) fn place_target_zone(input: &DecisionEngineInput) -> TargetZone {
    let aim = input.aim_reference();
    let biased = apply_miss_bias(input, aim);
    let safe = avoid_hazards(input, biased);

    TargetZone {
        center: safe,
        radius_yds: TARGET_ZONE_RADIUS_YDS,
    }
}

/// Shifts the aim point opposite the player's dominant miss.
///
/// A right-miss player gets an aim point left of the shot line (and vice
/// versa); a short-miss player gets one past the target (and vice
/// versa). Lateral shift applies before longitudinal, both measured
/// against the tee-to-aim bearing taken before either shift.
fn apply_miss_bias(input: &DecisionEngineInput, center: LatLng) -> LatLng {
    let Some(bias) = input.player.miss_bias else {
        return center;
    };

    let shot_bearing = bearing_deg(input.teebox_location, center);

    let lateral_yds = match bias {
        MissBias::Right => -LATERAL_BIAS_YDS,
        MissBias::Left => LATERAL_BIAS_YDS,
        MissBias::Short | MissBias::Long => 0.0,
    };
    let long_short_yds = match bias {
        MissBias::Short => LONGITUDINAL_BIAS_YDS,
        MissBias::Long => -LONGITUDINAL_BIAS_YDS,
        MissBias::Left | MissBias::Right => 0.0,
    };

    let mut adjusted = center;

    if lateral_yds != 0.0 {
        let offset = if lateral_yds > 0.0 { 90.0 } else { 270.0 };
        let lateral_bearing = (shot_bearing + offset) % 360.0;
        adjusted = project_position(adjusted, lateral_bearing, lateral_yds.abs());
    }

    if long_short_yds != 0.0 {
        adjusted = project_position(adjusted, shot_bearing, long_short_yds);
    }

    adjusted
}

/// Pushes a candidate target clear of primary-danger hazards.
///
/// Bunkers, trees, and other marked trouble are left to the player;
/// only water and out-of-bounds move the aim point.
fn avoid_hazards(input: &DecisionEngineInput, center: LatLng) -> LatLng {
    let mut adjusted = center;

    for _ in 0..MAX_AVOIDANCE_PASSES {
        let mut moved = false;

        for hazard in &input.hazards {
            if !hazard.kind.is_primary_danger() {
                continue;
            }

            let d = distance_yds(adjusted, hazard.center);
            let min_safe = hazard.radius_yds + HAZARD_BUFFER_YDS;

            if d < min_safe {
                // Repel along the hazard-to-point line; when the point
                // sits on the hazard center that bearing is undefined,
                // so fall back to the tee-to-aim line.
                let bearing = if d < 1.0 {
                    bearing_deg(input.teebox_location, input.aim_reference())
                } else {
                    bearing_deg(hazard.center, adjusted)
                };

                let push = min_safe - d + REPULSION_MARGIN_YDS;
                adjusted = project_position(adjusted, bearing, push);
                moved = true;

                trace!(
                    kind = %hazard.kind,
                    push_yds = push,
                    "target pushed clear of hazard"
                );
            }
        }

        if !moved {
            break;
        }
    }

    adjusted
}

/// Sizes the expected dispersion footprint over the final target.
///
/// Both axes scale with the tee-to-target distance and clamp to plausible
/// physical bounds. Values round to whole yards and degrees.
pub(super) fn landing_ellipse(input: &DecisionEngineInput, target: &TargetZone) -> LandingEllipse {
    let dist = distance_yds(input.teebox_location, target.center);
    let width = (dist * ELLIPSE_WIDTH_FACTOR).clamp(ELLIPSE_WIDTH_MIN_YDS, ELLIPSE_WIDTH_MAX_YDS);
    let length =
        (dist * ELLIPSE_LENGTH_FACTOR).clamp(ELLIPSE_LENGTH_MIN_YDS, ELLIPSE_LENGTH_MAX_YDS);
    let bearing = bearing_deg(input.teebox_location, target.center);

    LandingEllipse {
        center: target.center,
        width_yds: width.round(),
        length_yds: length.round(),
        // Rounding can land exactly on 360; keep the stored bearing in
        // [0, 360).
        bearing_deg: bearing.round() % 360.0,
    }
}
