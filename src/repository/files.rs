use std::{
    collections::HashMap,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::{
    core::facility::{ConsumptionRecord, Facility, FacilityId},
    prelude::*,
    quantity::energy::KilowattHours,
    repository::ConsumptionRepository,
};

/// Facilities and their readings stored as two CSV files.
///
/// - Facilities: `id,name`
/// - Consumption: `facility_id,date,kwh`, where the date is formatted as `%Y-%m-%d`
#[must_use]
pub struct CsvRepository {
    facilities_path: PathBuf,
    consumption_path: PathBuf,
}

#[derive(Deserialize)]
struct FacilityRow {
    id: FacilityId,
    name: String,
}

#[derive(Deserialize)]
struct ConsumptionRow {
    facility_id: FacilityId,
    date: NaiveDate,
    kwh: KilowattHours,
}

impl CsvRepository {
    pub fn new(facilities_path: impl Into<PathBuf>, consumption_path: impl Into<PathBuf>) -> Self {
        Self { facilities_path: facilities_path.into(), consumption_path: consumption_path.into() }
    }

    /// Read the facilities and attach the consumption records to them.
    ///
    /// Facilities keep the file order, and so do the records of each facility.
    pub fn read(facilities: impl Read, consumption: impl Read) -> Result<Vec<Facility>> {
        let mut facilities = Self::reader(facilities)
            .deserialize::<FacilityRow>()
            .map(|row| {
                row.map(|row| Facility { id: row.id, name: row.name, consumption: Vec::new() })
            })
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read the facilities")?;

        let indices: HashMap<FacilityId, usize> =
            facilities.iter().enumerate().map(|(index, facility)| (facility.id, index)).collect();

        let mut n_records = 0_usize;
        for row in Self::reader(consumption).deserialize::<ConsumptionRow>() {
            let row = row.context("failed to read a consumption record")?;
            if let Some(index) = indices.get(&row.facility_id) {
                facilities[*index]
                    .consumption
                    .push(ConsumptionRecord { date: row.date, kwh: row.kwh });
                n_records += 1;
            } else {
                warn!(facility_id = %row.facility_id, date = %row.date, "unknown facility, skipping");
            }
        }

        debug!(n_facilities = facilities.len(), n_records, "loaded");
        Ok(facilities)
    }

    fn reader<R: Read>(inner: R) -> csv::Reader<R> {
        ReaderBuilder::new().trim(Trim::All).from_reader(inner)
    }

    fn open(path: &Path) -> Result<File> {
        File::open(path).with_context(|| format!("failed to open `{}`", path.display()))
    }
}

impl ConsumptionRepository for CsvRepository {
    #[instrument(skip_all, fields(facilities = %self.facilities_path.display()))]
    fn load_facilities(&self) -> Result<Vec<Facility>> {
        Self::read(Self::open(&self.facilities_path)?, Self::open(&self.consumption_path)?)
            .with_context(|| {
                format!(
                    "failed to load `{}` and `{}`",
                    self.facilities_path.display(),
                    self.consumption_path.display(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    const FACILITIES: &str = "\
id,name
2,Bravo
1,Alpha
";

    #[test]
    fn test_read() {
        let consumption = "\
facility_id,date,kwh
1,2024-03-02,12.5
2,2024-03-01,3
1,2024-03-01, 10.25
";
        let facilities = CsvRepository::read(FACILITIES.as_bytes(), consumption.as_bytes()).unwrap();
        assert_eq!(facilities.len(), 2);

        assert_eq!(facilities[0].id, FacilityId(2));
        assert_eq!(facilities[0].name, "Bravo");
        assert_eq!(facilities[0].consumption.len(), 1);

        let alpha = &facilities[1];
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.consumption.len(), 2);
        assert_eq!(alpha.consumption[0].date.day(), 2);
        assert_eq!(alpha.consumption[1].kwh, KilowattHours(10.25));
    }

    #[test]
    fn test_read_skips_unknown_facility() {
        let consumption = "\
facility_id,date,kwh
3,2024-03-01,1.0
1,2024-03-01,2.0
";
        let facilities =
            CsvRepository::read(FACILITIES.as_bytes(), consumption.as_bytes()).unwrap();
        assert_eq!(facilities.iter().map(|facility| facility.consumption.len()).sum::<usize>(), 1);
    }

    #[test]
    fn test_read_empty() {
        let facilities = CsvRepository::read("id,name\n".as_bytes(), "".as_bytes()).unwrap();
        assert!(facilities.is_empty());
    }

    #[test]
    fn test_read_malformed_date() {
        let consumption = "\
facility_id,date,kwh
1,01/03/2024,2.0
";
        assert!(CsvRepository::read(FACILITIES.as_bytes(), consumption.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let repository =
            CsvRepository::new("/nonexistent/facilities.csv", "/nonexistent/consumption.csv");
        let error = repository.load_facilities().unwrap_err();
        assert!(format!("{error:#}").contains("/nonexistent/facilities.csv"));
    }

    #[test]
    fn test_in_memory() {
        let facilities = vec![Facility::with_daily(1, "Alpha", 2024, 1, &[1.0; 7])];
        let loaded = facilities.load_facilities().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].consumption.len(), 7);
    }
}
