mod files;

pub use self::files::CsvRepository;
use crate::{core::facility::Facility, prelude::*};

/// Source of the facilities together with their consumption history.
pub trait ConsumptionRepository {
    fn load_facilities(&self) -> Result<Vec<Facility>>;
}

impl ConsumptionRepository for Vec<Facility> {
    fn load_facilities(&self) -> Result<Vec<Facility>> {
        Ok(self.clone())
    }
}
