use std::path::PathBuf;

use clap::Parser;

use crate::repository::CsvRepository;

#[derive(Parser)]
pub struct RepositoryArgs {
    /// CSV file with the `id,name` columns.
    #[clap(long = "facilities-path", env = "FACILITIES_PATH")]
    facilities_path: PathBuf,

    /// CSV file with the `facility_id,date,kwh` columns.
    #[clap(long = "consumption-path", env = "CONSUMPTION_PATH")]
    consumption_path: PathBuf,
}

impl RepositoryArgs {
    pub fn open(&self) -> CsvRepository {
        CsvRepository::new(&self.facilities_path, &self.consumption_path)
    }
}
