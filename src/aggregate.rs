//! Aggregation helpers for the dashboard and goal views.

use chrono::{DateTime, NaiveDate, Utc};

/// How many of the most-recent rows per log type the dashboard considers
/// when computing today's totals. Entries beyond the window are ignored
/// even when they were recorded today, so a day with more than five logs
/// of one type under-counts. Intentional: the totals describe "recent
/// activity that happened today", not a full daily ledger.
pub const DASHBOARD_RECENT_WINDOW: i64 = 5;

/// Sum `metric` over the rows recorded on `day`. Callers pass the bounded
/// recent window fetched for the dashboard (newest first); this function
/// only filters and sums.
pub fn sum_for_day<T>(
    rows: &[T],
    day: NaiveDate,
    recorded_at: impl Fn(&T) -> DateTime<Utc>,
    metric: impl Fn(&T) -> f64,
) -> f64 {
    rows.iter()
        .filter(|r| recorded_at(r).date_naive() == day)
        .map(metric)
        .sum()
}

/// Completion state after a progress update: flips to true once the
/// current value reaches the target, and never flips back.
pub fn goal_completed(current_value: f64, target_value: f64, already_completed: bool) -> bool {
    already_completed || current_value >= target_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(day: NaiveDate, hour: u32) -> DateTime<Utc> {
        Utc.from_utc_datetime(&day.and_hms_opt(hour, 0, 0).unwrap())
    }

    #[test]
    fn sums_only_rows_from_the_given_day() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let yesterday = today - Duration::days(1);
        let rows = vec![
            (at(today, 8), 0.5),
            (at(yesterday, 22), 1.0),
            (at(today, 12), 0.25),
        ];

        let total = sum_for_day(&rows, today, |r| r.0, |r| r.1);
        assert!((total - 0.75).abs() < 1e-9);
    }

    #[test]
    fn empty_rows_sum_to_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let rows: Vec<(DateTime<Utc>, f64)> = vec![];
        assert_eq!(sum_for_day(&rows, today, |r| r.0, |r| r.1), 0.0);
    }

    #[test]
    fn bounded_window_under_counts_busy_days() {
        // Eight entries today, but the dashboard only ever sees the five
        // most recent. The total reflects those five, not all eight.
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let all: Vec<(DateTime<Utc>, f64)> = (0..8).map(|h| (at(today, 8 + h), 1.0)).collect();

        let mut newest_first = all.clone();
        newest_first.sort_by_key(|r| std::cmp::Reverse(r.0));
        let window: Vec<_> = newest_first
            .into_iter()
            .take(DASHBOARD_RECENT_WINDOW as usize)
            .collect();

        let total = sum_for_day(&window, today, |r| r.0, |r| r.1);
        assert_eq!(total, 5.0);

        let unbounded = sum_for_day(&all, today, |r| r.0, |r| r.1);
        assert_eq!(unbounded, 8.0);
    }

    #[test]
    fn goal_completes_at_target() {
        assert!(goal_completed(10.0, 10.0, false));
        assert!(goal_completed(12.5, 10.0, false));
        assert!(!goal_completed(9.9, 10.0, false));
    }

    #[test]
    fn goal_completion_never_reverts() {
        // Completed once, a later lower value keeps it completed.
        assert!(goal_completed(3.0, 10.0, true));
    }
}
