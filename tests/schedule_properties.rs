//! Property tests for the countdown and prayer window calculators

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use crescent_board::{
    render::mark_active_prayer,
    schedule::{compute_countdown, locate_window, CountdownResult, PrayerWindowTable},
    state::board::{Board, PRAYER_CARD_CLASS},
};

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).single().unwrap()
}

/// Strictly increasing thresholds within one day
fn table_strategy() -> impl Strategy<Value = Vec<(String, u32)>> {
    prop::collection::btree_set(0u32..1440, 1..8).prop_map(|thresholds| {
        thresholds
            .into_iter()
            .enumerate()
            .map(|(i, t)| (format!("w{}", i), t))
            .collect()
    })
}

proptest! {
    /// Before the target the fields never overstate and lose under a second
    #[test]
    fn remaining_truncates_within_a_second(diff_ms in 1i64..400 * 86_400_000) {
        let target = base();
        let now = target - Duration::milliseconds(diff_ms);

        match compute_countdown(target, now) {
            CountdownResult::Remaining(remaining) => {
                prop_assert!(remaining.hours < 24);
                prop_assert!(remaining.minutes < 60);
                prop_assert!(remaining.seconds < 60);
                let rebuilt = remaining.as_millis() as i64;
                prop_assert!(rebuilt <= diff_ms);
                prop_assert!(rebuilt > diff_ms - 1000);
            }
            CountdownResult::Arrived => prop_assert!(false, "arrived with {} ms left", diff_ms),
        }
    }

    /// At or after the target the countdown has arrived
    #[test]
    fn arrived_at_or_after_target(past_ms in 0i64..400 * 86_400_000) {
        let target = base();
        prop_assert_eq!(compute_countdown(target, target + Duration::milliseconds(past_ms)), CountdownResult::Arrived);
    }

    #[test]
    fn countdown_is_pure(offset_ms in -86_400_000i64..86_400_000) {
        let target = base();
        let now = target + Duration::milliseconds(offset_ms);
        prop_assert_eq!(compute_countdown(target, now), compute_countdown(target, now));
    }

    /// The located window is the unique half-open interval holding `now`
    #[test]
    fn located_window_is_the_half_open_match(table in table_strategy(), now in 0u32..1440) {
        let located = locate_window(&table, now);

        let matches: Vec<&str> = table
            .iter()
            .enumerate()
            .filter(|(i, (_, t))| now >= *t && table.get(i + 1).map_or(true, |(_, next)| now < *next))
            .map(|(_, (name, _))| name.as_str())
            .collect();
        prop_assert!(matches.len() <= 1);
        prop_assert_eq!(located, matches.first().copied());

        if now < table[0].1 {
            prop_assert_eq!(located, None);
        } else {
            prop_assert!(located.is_some());
        }
    }

    /// Marking flags at most one card, and exactly the located one
    #[test]
    fn marking_stays_exclusive(table in table_strategy(), times in prop::collection::vec(0u32..1440, 1..10)) {
        let prayers = PrayerWindowTable::new(table).unwrap();
        let mut board = Board::page(&prayers, 0);

        for now in times {
            let active = prayers.locate(now);
            let flagged = mark_active_prayer(&mut board, &prayers, active);
            let ids = board.active_ids(PRAYER_CARD_CLASS);

            prop_assert_eq!(flagged, ids.len());
            prop_assert!(ids.len() <= 1);
            prop_assert_eq!(ids.first().cloned(), active.map(|name| format!("prayer-{}", name)));
        }
    }
}

#[test]
fn reference_examples() {
    let target = base();
    let now = Utc.with_ymd_and_hms(2025, 2, 27, 12, 0, 0).single().unwrap();
    let result = compute_countdown(target, now);
    assert_eq!(result.padded(), ["01", "12", "00", "00"]);

    let later = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).single().unwrap();
    assert!(compute_countdown(target, later).is_arrived());

    let table = PrayerWindowTable::reference();
    assert_eq!(table.locate(800), Some("dzuhur"));
    assert_eq!(table.locate(100), None);
}
