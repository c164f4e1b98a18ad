//! Club selection against an effective playing distance.

use crate::input::PlayerProfile;

/// Yards below the effective distance still considered in-band.
pub(super) const BAND_SHORT_YDS: f64 = 30.0;

/// Yards above the effective distance still considered in-band.
pub(super) const BAND_LONG_YDS: f64 = 15.0;

/// Candidates within this many yards of the effective distance tie-break
/// toward the shorter carry.
pub(super) const CONTROL_TIE_WINDOW_YDS: f64 = 5.0;

/// Picks the club whose carry best fits the effective distance.
///
/// The candidate band is asymmetric: a club may carry up to 30 yards
/// short of the target but only 15 yards past it, since coming up short
/// is the cheaper miss. In-band candidates rank by distance from the
/// target carry; near-ties go to the shorter, more controllable club.
/// With no in-band candidate, fall back to the longest club that stays
/// at or under the effective distance, then to the shortest club
/// overall. Returns `None` when no carry is known.
pub(super) fn pick_club(player: &PlayerProfile, effective_yds: f64) -> Option<String> {
    let clubs: Vec<(&str, f64)> = player
        .club_carry_yds
        .iter()
        .map(|(name, carry)| (name.as_str(), *carry))
        .collect();

    if clubs.is_empty() {
        return None;
    }

    let band_min = effective_yds - BAND_SHORT_YDS;
    let band_max = effective_yds + BAND_LONG_YDS;

    let mut candidates: Vec<(&str, f64)> = clubs
        .iter()
        .copied()
        .filter(|(_, carry)| (band_min..=band_max).contains(carry))
        .collect();
    candidates.sort_by(|a, b| {
        (a.1 - effective_yds)
            .abs()
            .total_cmp(&(b.1 - effective_yds).abs())
    });

    if let Some(best) = candidates.first() {
        let mut close: Vec<(&str, f64)> = candidates
            .iter()
            .copied()
            .filter(|(_, carry)| (carry - effective_yds).abs() <= CONTROL_TIE_WINDOW_YDS)
            .collect();
        if close.len() > 1 {
            close.sort_by(|a, b| a.1.total_cmp(&b.1));
            return Some(close[0].0.to_string());
        }
        return Some(best.0.to_string());
    }

    // Nothing lands in the band: lay up with the longest club that stays
    // at or under the target, or take the shortest club when everything
    // flies past it.
    let mut by_carry = clubs;
    by_carry.sort_by(|a, b| a.1.total_cmp(&b.1));
    let under = by_carry
        .iter()
        .rev()
        .find(|(_, carry)| *carry <= effective_yds);

    Some(under.unwrap_or(&by_carry[0]).0.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn profile(clubs: &[(&str, f64)]) -> PlayerProfile {
        PlayerProfile {
            club_carry_yds: clubs
                .iter()
                .map(|(name, carry)| (name.to_string(), *carry))
                .collect::<BTreeMap<_, _>>(),
            miss_bias: None,
        }
    }

    // ==================== in-band selection tests ====================

    #[test]
    fn test_nearest_carry_in_band_wins() {
        let player = profile(&[("7i", 150.0), ("8i", 140.0)]);

        assert_eq!(pick_club(&player, 152.0).as_deref(), Some("7i"));
    }

    #[test]
    fn test_near_tie_prefers_shorter_carry() {
        // 6i and 7i are both 4 yards off the target; the shorter club is
        // the more controllable pick.
        let player = profile(&[("6i", 160.0), ("7i", 152.0)]);

        assert_eq!(pick_club(&player, 156.0).as_deref(), Some("7i"));
    }

    #[test]
    fn test_tie_window_edge_still_tie_breaks() {
        // Both exactly 5 yards off.
        let player = profile(&[("5i", 175.0), ("6i", 165.0)]);

        assert_eq!(pick_club(&player, 170.0).as_deref(), Some("6i"));
    }

    #[test]
    fn test_clear_winner_outside_tie_window_keeps_rank_order() {
        // 8i is 2 off, 6i is 12 off; no tie-break applies.
        let player = profile(&[("6i", 168.0), ("8i", 158.0)]);

        assert_eq!(pick_club(&player, 156.0).as_deref(), Some("8i"));
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let short_edge = profile(&[("lo", 170.0)]);
        assert_eq!(pick_club(&short_edge, 200.0).as_deref(), Some("lo"));

        let long_edge = profile(&[("hi", 215.0)]);
        assert_eq!(pick_club(&long_edge, 200.0).as_deref(), Some("hi"));
    }

    #[test]
    fn test_club_past_long_edge_excluded() {
        // 216 sits just past the +15 edge of [170, 215], so 5w is the
        // only candidate.
        let player = profile(&[("3w", 216.0), ("5w", 190.0)]);

        assert_eq!(pick_club(&player, 200.0).as_deref(), Some("5w"));
    }

    #[test]
    fn test_identical_carries_pick_first_by_name() {
        // Equal carries are a pure tie; club-name order decides, so the
        // result is stable across runs.
        let player = profile(&[("9i", 150.0), ("8i", 150.0)]);

        assert_eq!(pick_club(&player, 150.0).as_deref(), Some("8i"));
    }

    // ==================== fallback tests ====================

    #[test]
    fn test_fallback_longest_club_under_target() {
        let player = profile(&[("D", 250.0), ("3W", 235.0)]);

        assert_eq!(pick_club(&player, 300.0).as_deref(), Some("D"));
    }

    #[test]
    fn test_fallback_shortest_club_when_everything_flies_past() {
        let player = profile(&[("D", 250.0), ("3W", 235.0)]);

        assert_eq!(pick_club(&player, 150.0).as_deref(), Some("3W"));
    }

    #[test]
    fn test_single_club_always_selected() {
        let player = profile(&[("D", 250.0)]);

        assert_eq!(pick_club(&player, 122.0).as_deref(), Some("D"));
    }

    #[test]
    fn test_no_known_carries_yields_none() {
        let player = PlayerProfile::default();

        assert_eq!(pick_club(&player, 150.0), None);
    }
}
