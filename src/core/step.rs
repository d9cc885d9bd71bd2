use crate::{
    core::facility::FacilityId,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Single-day schedule step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// One-based day of the month.
    pub day: usize,

    pub facility_id: FacilityId,

    /// Consumption of the serviced facility on this day.
    pub energy: KilowattHours,

    /// Charged when the facility differs from the previous day's one.
    pub switching_penalty: Cost,

    /// Energy plus the switching penalty.
    pub cost: Cost,
}
