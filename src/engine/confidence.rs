//! Confidence scoring for a recommendation.

use chrono::{DateTime, Utc};

use crate::input::DecisionEngineInput;
use crate::output::ConfidenceLevel;

/// Score every decision starts from.
const FULL_SCORE: i32 = 100;

/// Deduction when the detected course is unconfirmed.
const UNCONFIRMED_COURSE_PENALTY: i32 = 40;

/// Deduction when the detected tee box is unconfirmed.
const UNCONFIRMED_TEE_BOX_PENALTY: i32 = 10;

/// Deduction when reported GPS accuracy is worse than the limit.
const POOR_GPS_PENALTY: i32 = 30;

/// Deduction when the player's carry table is sparse.
const SPARSE_CLUB_DATA_PENALTY: i32 = 25;

/// Deduction when no pin position is known.
const MISSING_PIN_PENALTY: i32 = 10;

/// Deduction when a wind reading is present but aged out.
const AGED_WIND_PENALTY: i32 = 10;

/// GPS accuracy beyond this many meters is penalized.
const GPS_ACCURACY_LIMIT_M: f64 = 12.0;

/// Carry tables with fewer clubs than this are penalized.
const MIN_KNOWN_CLUBS: usize = 5;

/// Wind readings older than this many minutes are penalized.
const WIND_AGE_LIMIT_MINUTES: f64 = 30.0;

/// Minimum score for [`ConfidenceLevel::High`].
const HIGH_THRESHOLD: i32 = 70;

/// Minimum score for [`ConfidenceLevel::Medium`].
const MEDIUM_THRESHOLD: i32 = 45;

/// Scores how much trust the recommendation deserves.
///
/// Starts from a full score and applies independent deductions:
///
/// 1. Unconfirmed course (-40) or tee box (-10)
/// 2. GPS accuracy worse than 12 m (-30)
/// 3. Fewer than 5 known club carries (-25)
/// 4. No pin position (-10)
/// 5. Wind present but older than 30 minutes (-10)
///
/// The final score maps to HIGH at 70+, MEDIUM at 45+, LOW below that.
pub(super) fn compute_confidence(
    input: &DecisionEngineInput,
    now: DateTime<Utc>,
) -> ConfidenceLevel {
    let mut score = FULL_SCORE;

    if !input.is_course_confirmed {
        score -= UNCONFIRMED_COURSE_PENALTY;
    }
    if !input.is_tee_box_confirmed {
        score -= UNCONFIRMED_TEE_BOX_PENALTY;
    }
    if input.gps_accuracy_meters > GPS_ACCURACY_LIMIT_M {
        score -= POOR_GPS_PENALTY;
    }
    if input.player.known_club_count() < MIN_KNOWN_CLUBS {
        score -= SPARSE_CLUB_DATA_PENALTY;
    }
    if input.pin_location.is_none() {
        score -= MISSING_PIN_PENALTY;
    }
    if let Some(wind) = &input.wind {
        if wind.age_minutes(now) > WIND_AGE_LIMIT_MINUTES {
            score -= AGED_WIND_PENALTY;
        }
    }

    if score >= HIGH_THRESHOLD {
        ConfidenceLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}
