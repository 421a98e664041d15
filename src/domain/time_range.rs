// Trailing time-window filtering applied client-side to fetched readings
use crate::domain::reading::Timestamped;
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Trailing time window measured back from "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "last-7-days")]
    Last7Days,
    #[serde(rename = "last-30-days")]
    Last30Days,
    #[serde(rename = "last-90-days")]
    Last90Days,
    #[serde(rename = "last-180-days")]
    Last180Days,
    #[serde(rename = "last-365-days")]
    Last365Days,
    #[serde(rename = "lifetime")]
    Lifetime,
}

impl Default for TimeRange {
    fn default() -> Self {
        TimeRange::Last7Days
    }
}

impl TimeRange {
    /// Window length in seconds; `None` means no filtering.
    pub fn window_secs(self) -> Option<i64> {
        match self {
            TimeRange::Last7Days => Some(7 * SECONDS_PER_DAY),
            TimeRange::Last30Days => Some(30 * SECONDS_PER_DAY),
            TimeRange::Last90Days => Some(90 * SECONDS_PER_DAY),
            TimeRange::Last180Days => Some(180 * SECONDS_PER_DAY),
            TimeRange::Last365Days => Some(365 * SECONDS_PER_DAY),
            TimeRange::Lifetime => None,
        }
    }
}

/// Retain readings whose timestamp falls within the trailing window.
///
/// The boundary is inclusive: a reading exactly `window_secs` old stays in.
/// Readings with a future timestamp also pass the check. Input order is
/// preserved; no sort is performed.
pub fn filter_by_time<R: Timestamped>(records: Vec<R>, range: TimeRange, now: i64) -> Vec<R> {
    match range.window_secs() {
        Some(window) => records
            .into_iter()
            .filter(|r| now - r.time() <= window)
            .collect(),
        None => records,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reading::EnergyReading;

    const T: i64 = 1_700_000_000;

    fn reading(time: i64, energy: f64) -> EnergyReading {
        EnergyReading { time, energy }
    }

    #[test]
    fn test_window_secs() {
        assert_eq!(TimeRange::Last7Days.window_secs(), Some(604_800));
        assert_eq!(TimeRange::Last30Days.window_secs(), Some(2_592_000));
        assert_eq!(TimeRange::Last90Days.window_secs(), Some(7_776_000));
        assert_eq!(TimeRange::Last180Days.window_secs(), Some(15_552_000));
        assert_eq!(TimeRange::Last365Days.window_secs(), Some(31_536_000));
        assert_eq!(TimeRange::Lifetime.window_secs(), None);
    }

    #[test]
    fn test_selector_names_round_trip() {
        let range: TimeRange = serde_json::from_str("\"last-7-days\"").unwrap();
        assert_eq!(range, TimeRange::Last7Days);
        assert_eq!(
            serde_json::to_string(&TimeRange::Lifetime).unwrap(),
            "\"lifetime\""
        );
        assert!(serde_json::from_str::<TimeRange>("\"last-week\"").is_err());
    }

    #[test]
    fn test_window_excludes_older_readings() {
        let records = vec![reading(T, 5.0), reading(T - 8 * SECONDS_PER_DAY, 3.0)];
        let filtered = filter_by_time(records, TimeRange::Last7Days, T);
        assert_eq!(filtered, vec![reading(T, 5.0)]);
    }

    #[test]
    fn test_lifetime_retains_everything() {
        let records = vec![reading(T, 5.0), reading(T - 8 * SECONDS_PER_DAY, 3.0)];
        let filtered = filter_by_time(records.clone(), TimeRange::Lifetime, T);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let records = vec![reading(T - 7 * SECONDS_PER_DAY, 1.0)];
        let filtered = filter_by_time(records.clone(), TimeRange::Last7Days, T);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_empty_input() {
        let filtered = filter_by_time(Vec::<EnergyReading>::new(), TimeRange::Last30Days, T);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_future_timestamp_is_retained() {
        let records = vec![reading(T + 3600, 2.0)];
        let filtered = filter_by_time(records.clone(), TimeRange::Last7Days, T);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let records = vec![reading(T - 60, 1.0), reading(T, 2.0), reading(T - 30, 3.0)];
        let filtered = filter_by_time(records.clone(), TimeRange::Last7Days, T);
        assert_eq!(filtered, records);
    }
}
