use itertools::Itertools;

use crate::{
    core::facility::{Facility, FacilityId},
    prelude::*,
    quantity::energy::KilowattHours,
};

/// Length of the scheduling window, starting on the 1st of the month.
pub const WINDOW_DAYS: usize = 7;

/// Consumption of a single facility on each day of the window.
pub type DailyConsumption = [KilowattHours; WINDOW_DAYS];

/// First-week consumption of the facilities that have complete data.
///
/// Facilities keep their source order, which is also the order the solver tries them in.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct WeeklyConsumption(Vec<(FacilityId, DailyConsumption)>);

impl WeeklyConsumption {
    #[instrument(skip_all, fields(month = month))]
    pub fn extract(facilities: &[Facility], month: u32) -> Self {
        let eligible: Self = facilities
            .iter()
            .filter_map(|facility| {
                let daily = facility
                    .records_in_window(month)
                    .sorted_by_key(|record| record.day_index())
                    .map(|record| record.kwh)
                    .collect_vec();
                match DailyConsumption::try_from(daily) {
                    Ok(daily) => Some((facility.id, daily)),
                    Err(daily) => {
                        warn!(
                            facility_id = %facility.id,
                            month,
                            n_days = daily.len(),
                            "incomplete data, excluding the facility",
                        );
                        None
                    }
                }
            })
            .collect();
        info!(n_facilities = facilities.len(), n_eligible = eligible.len(), "extracted");
        eligible
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FacilityId, &DailyConsumption)> {
        self.0.iter().map(|(facility_id, daily)| (*facility_id, daily))
    }

    pub fn get(&self, facility_id: FacilityId) -> Option<&DailyConsumption> {
        self.iter().find(|(id, _)| *id == facility_id).map(|(_, daily)| daily)
    }
}

impl FromIterator<(FacilityId, DailyConsumption)> for WeeklyConsumption {
    fn from_iter<T: IntoIterator<Item = (FacilityId, DailyConsumption)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::core::facility::ConsumptionRecord;

    const RAMP: [f64; WINDOW_DAYS] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

    #[test]
    fn test_extract_complete_facility() {
        let facilities = [Facility::with_daily(1, "Alpha", 2024, 6, &RAMP)];
        let weekly = WeeklyConsumption::extract(&facilities, 6);
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly.get(FacilityId(1)), Some(&RAMP.map(KilowattHours)));
    }

    #[test]
    fn test_extract_sorts_by_day() {
        let mut facility = Facility::with_daily(1, "Alpha", 2024, 6, &RAMP);
        facility.consumption.reverse();
        facility.consumption.swap(1, 4);
        let weekly = WeeklyConsumption::extract(&[facility], 6);
        assert_eq!(weekly.get(FacilityId(1)), Some(&RAMP.map(KilowattHours)));
    }

    #[test]
    fn test_extract_excludes_short_history() {
        let facilities = [
            Facility::with_daily(1, "Alpha", 2024, 6, &[1.0; 6]),
            Facility::with_daily(2, "Bravo", 2024, 6, &[1.0; 7]),
        ];
        let weekly = WeeklyConsumption::extract(&facilities, 6);
        assert_eq!(weekly.iter().map(|(id, _)| id).collect_vec(), [FacilityId(2)]);
        assert!(weekly.get(FacilityId(1)).is_none());
    }

    #[test]
    fn test_extract_excludes_duplicated_day() {
        let mut facility = Facility::with_daily(1, "Alpha", 2024, 6, &[1.0; 7]);
        facility.consumption.push(ConsumptionRecord {
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            kwh: KilowattHours(1.0),
        });
        assert!(WeeklyConsumption::extract(&[facility], 6).is_empty());
    }

    #[test]
    fn test_extract_keeps_source_order() {
        let facilities = [
            Facility::with_daily(3, "Charlie", 2024, 2, &[1.0; 7]),
            Facility::with_daily(1, "Alpha", 2024, 2, &[1.0; 7]),
            Facility::with_daily(2, "Bravo", 2024, 2, &[1.0; 7]),
        ];
        let weekly = WeeklyConsumption::extract(&facilities, 2);
        assert_eq!(
            weekly.iter().map(|(id, _)| id).collect_vec(),
            [FacilityId(3), FacilityId(1), FacilityId(2)],
        );
    }

    #[test]
    fn test_extract_other_month_is_empty() {
        let facilities = [Facility::with_daily(1, "Alpha", 2024, 6, &[1.0; 7])];
        assert!(WeeklyConsumption::extract(&facilities, 7).is_empty());
    }

    #[test]
    fn test_extract_no_facilities() {
        assert!(WeeklyConsumption::extract(&[], 1).is_empty());
    }

    #[test]
    fn test_every_vector_is_full_week() {
        let facilities = [
            Facility::with_daily(1, "Alpha", 2024, 9, &[1.0; 7]),
            Facility::with_daily(2, "Bravo", 2024, 9, &[1.0; 3]),
            Facility::with_daily(3, "Charlie", 2024, 9, &[1.0; 20]),
        ];
        let weekly = WeeklyConsumption::extract(&facilities, 9);
        assert_eq!(weekly.len(), 2);
        assert!(weekly.iter().all(|(_, daily)| daily.len() == WINDOW_DAYS));
    }
}
