use itertools::Itertools;

use crate::{
    core::{facility::FacilityId, step::Step},
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Optimal weekly schedule.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub total_cost: Cost,

    /// One step per day of the window, in day order.
    pub steps: Vec<Step>,
}

impl Solution {
    pub fn assignment(&self) -> impl Iterator<Item = FacilityId> {
        self.steps.iter().map(|step| step.facility_id)
    }

    pub fn n_switches(&self) -> usize {
        self.assignment().tuple_windows().filter(|(previous, next)| previous != next).count()
    }

    pub fn total_energy(&self) -> KilowattHours {
        self.steps.iter().map(|step| step.energy).sum()
    }
}
