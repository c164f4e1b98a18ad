//! Effective playing distance: condition adjustments over the base yardage.

use crate::input::DecisionEngineInput;

/// Feet of elevation change that equal one yard of carry adjustment.
pub(super) const FEET_PER_YARD_OF_CARRY: f64 = 3.0;

/// Cap on the elevation adjustment in yards, either direction.
pub(super) const ELEVATION_CAP_YDS: f64 = 12.0;

/// Temperature at which no adjustment applies, in degrees Fahrenheit.
pub(super) const TEMPERATURE_BASELINE_F: f64 = 70.0;

/// Degrees Fahrenheit per step of percentage adjustment.
pub(super) const TEMPERATURE_STEP_F: f64 = 20.0;

/// Fractional adjustment per temperature step.
pub(super) const TEMPERATURE_PCT_PER_STEP: f64 = 0.01;

/// Cap on the temperature adjustment as a fraction, either direction.
pub(super) const TEMPERATURE_CAP_PCT: f64 = 0.03;

/// Yards of adjustment per mph of wind speed.
pub(super) const WIND_YDS_PER_MPH: f64 = 1.0;

/// Cap on the wind adjustment in yards, either direction.
pub(super) const WIND_CAP_YDS: f64 = 15.0;

/// Adjusts a base distance for elevation, temperature, and wind.
///
/// Terms apply in a fixed order. The temperature term is multiplicative
/// on the partially adjusted distance, so reordering would change the
/// result. Absent readings contribute nothing. The result is rounded to
/// the nearest yard.
pub(super) fn effective_distance_yds(input: &DecisionEngineInput, base_yds: f64) -> f64 {
    let mut eff = base_yds;

    // Elevation: 1 yd per 3 ft of change, capped either direction.
    if let Some(delta_ft) = input.elevation_delta_feet {
        eff += (delta_ft / FEET_PER_YARD_OF_CARRY).clamp(-ELEVATION_CAP_YDS, ELEVATION_CAP_YDS);
    }

    // Temperature: 1% per 20 F away from the 70 F baseline, capped at 3%.
    if let Some(temp_f) = input.temperature_f {
        let pct = ((temp_f - TEMPERATURE_BASELINE_F) / TEMPERATURE_STEP_F
            * TEMPERATURE_PCT_PER_STEP)
            .clamp(-TEMPERATURE_CAP_PCT, TEMPERATURE_CAP_PCT);
        eff *= 1.0 + pct;
    }

    // Wind: 1 yd per mph, capped either direction. Treat all wind as a
    // headwind until shot-direction decomposition is available.
    if let Some(wind) = &input.wind {
        eff += (wind.speed_mph * WIND_YDS_PER_MPH).clamp(-WIND_CAP_YDS, WIND_CAP_YDS);
    }

    eff.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::input::{PlayerProfile, Wind};
    use chrono::{TimeZone, Utc};

    fn bare_input() -> DecisionEngineInput {
        DecisionEngineInput {
            hole_id: "1".to_string(),
            par: 4,
            tee_box_id: "blue".to_string(),
            teebox_location: LatLng::new(35.0, -78.0),
            green_center: LatLng::new(35.001, -78.0),
            pin_location: None,
            hazards: Vec::new(),
            gps_accuracy_meters: 6.0,
            elevation_delta_feet: None,
            temperature_f: None,
            wind: None,
            lie_type: None,
            player: PlayerProfile::default(),
            is_course_confirmed: true,
            is_tee_box_confirmed: true,
        }
    }

    fn wind(speed_mph: f64) -> Wind {
        Wind {
            speed_mph,
            direction_deg: 0.0,
            observed_at: Utc.with_ymd_and_hms(2026, 4, 12, 9, 0, 0).unwrap(),
        }
    }

    // ==================== single-term tests ====================

    #[test]
    fn test_no_conditions_returns_base() {
        let input = bare_input();
        assert_eq!(effective_distance_yds(&input, 150.0), 150.0);
    }

    #[test]
    fn test_uphill_lengthens() {
        let mut input = bare_input();
        input.elevation_delta_feet = Some(15.0);

        assert_eq!(effective_distance_yds(&input, 150.0), 155.0);
    }

    #[test]
    fn test_downhill_shortens() {
        let mut input = bare_input();
        input.elevation_delta_feet = Some(-9.0);

        assert_eq!(effective_distance_yds(&input, 150.0), 147.0);
    }

    #[test]
    fn test_elevation_capped_both_directions() {
        let mut input = bare_input();

        input.elevation_delta_feet = Some(100.0);
        assert_eq!(effective_distance_yds(&input, 150.0), 162.0);

        input.elevation_delta_feet = Some(-100.0);
        assert_eq!(effective_distance_yds(&input, 150.0), 138.0);
    }

    #[test]
    fn test_warm_air_lengthens() {
        let mut input = bare_input();
        input.temperature_f = Some(90.0);

        // +1% of 160
        assert_eq!(effective_distance_yds(&input, 160.0), 162.0);
    }

    #[test]
    fn test_cold_air_shortens() {
        let mut input = bare_input();
        input.temperature_f = Some(50.0);

        // -1% of 160
        assert_eq!(effective_distance_yds(&input, 160.0), 158.0);
    }

    #[test]
    fn test_temperature_capped_both_directions() {
        let mut input = bare_input();

        input.temperature_f = Some(200.0);
        assert_eq!(effective_distance_yds(&input, 160.0), 165.0);

        input.temperature_f = Some(-40.0);
        assert_eq!(effective_distance_yds(&input, 160.0), 155.0);
    }

    #[test]
    fn test_wind_adds_yard_per_mph() {
        let mut input = bare_input();
        input.wind = Some(wind(8.0));

        assert_eq!(effective_distance_yds(&input, 150.0), 158.0);
    }

    #[test]
    fn test_wind_capped() {
        let mut input = bare_input();
        input.wind = Some(wind(100.0));

        assert_eq!(effective_distance_yds(&input, 150.0), 165.0);
    }

    // ==================== ordering tests ====================

    #[test]
    fn test_temperature_scales_elevation_term() {
        // Elevation applies before temperature, so the percentage acts on
        // the already-lengthened distance: (240 + 12) * 1.03 = 259.56.
        let mut input = bare_input();
        input.elevation_delta_feet = Some(36.0);
        input.temperature_f = Some(200.0);

        assert_eq!(effective_distance_yds(&input, 240.0), 260.0);
    }

    #[test]
    fn test_wind_term_not_scaled_by_temperature() {
        // Wind applies after temperature: 240 * 1.03 + 15 = 262.2.
        let mut input = bare_input();
        input.temperature_f = Some(200.0);
        input.wind = Some(wind(100.0));

        assert_eq!(effective_distance_yds(&input, 240.0), 262.0);
    }

    #[test]
    fn test_result_is_rounded() {
        let mut input = bare_input();
        input.elevation_delta_feet = Some(1.0);

        // 150 + 1/3 rounds back down.
        assert_eq!(effective_distance_yds(&input, 150.0), 150.0);
    }
}
