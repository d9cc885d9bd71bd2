use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{core::week::WINDOW_DAYS, quantity::energy::KilowattHours};

#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct FacilityId(pub u32);

/// Single daily consumption reading.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConsumptionRecord {
    pub date: NaiveDate,
    pub kwh: KilowattHours,
}

impl ConsumptionRecord {
    /// Zero-based day of the month.
    pub fn day_index(&self) -> usize {
        self.date.day0() as usize
    }
}

#[derive(Clone, Debug)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,

    /// Full consumption history, in no particular order.
    pub consumption: Vec<ConsumptionRecord>,
}

impl Facility {
    /// Records falling into the first [`WINDOW_DAYS`] days of the month.
    ///
    /// Only the month is matched, the year is not.
    pub fn records_in_window(&self, month: u32) -> impl Iterator<Item = &ConsumptionRecord> {
        self.consumption
            .iter()
            .filter(move |record| record.date.month() == month && record.day_index() < WINDOW_DAYS)
    }
}

#[cfg(test)]
impl Facility {
    /// Facility with one reading per day, starting on the 1st of the month.
    pub fn with_daily(id: u32, name: &str, year: i32, month: u32, daily: &[f64]) -> Self {
        let consumption = daily
            .iter()
            .zip(1..)
            .map(|(kwh, day)| ConsumptionRecord {
                date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                kwh: KilowattHours(*kwh),
            })
            .collect();
        Self { id: FacilityId(id), name: name.to_owned(), consumption }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_records_in_window_skips_other_months() {
        let mut facility = Facility::with_daily(1, "Alpha", 2024, 3, &[1.0; 7]);
        let april = Facility::with_daily(1, "Alpha", 2024, 4, &[2.0; 7]);
        facility.consumption.extend(april.consumption);
        let records = facility.records_in_window(4).collect_vec();
        assert_eq!(records.len(), 7);
        assert!(records.iter().all(|record| record.kwh == KilowattHours(2.0)));
    }

    #[test]
    fn test_records_in_window_skips_later_days() {
        let facility = Facility::with_daily(1, "Alpha", 2024, 3, &[1.0; 10]);
        let days = facility.records_in_window(3).map(|record| record.date.day()).collect_vec();
        assert_eq!(days, (1..=7).collect_vec());
    }

    #[test]
    fn test_records_in_window_ignores_year() {
        let mut facility = Facility::with_daily(1, "Alpha", 2023, 5, &[1.0; 3]);
        let next_year = Facility::with_daily(1, "Alpha", 2024, 5, &[1.0; 7]);
        facility.consumption.extend(next_year.consumption.into_iter().skip(3));
        assert_eq!(facility.records_in_window(5).count(), 7);
    }

    #[test]
    fn test_invalid_month_matches_nothing() {
        let facility = Facility::with_daily(1, "Alpha", 2024, 1, &[1.0; 7]);
        assert_eq!(facility.records_in_window(13).count(), 0);
        assert_eq!(facility.records_in_window(0).count(), 0);
    }
}
