use crate::quantity::energy::KilowattHours;

quantity!(
    /// Scheduling objective: consumed energy plus switching penalties.
    Cost,
    suffix: "",
    precision: 2
);

/// Energy is priced at unit weight.
impl From<KilowattHours> for Cost {
    fn from(energy: KilowattHours) -> Self {
        Self(energy.0)
    }
}
