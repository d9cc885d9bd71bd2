quantity!(
    /// Daily energy consumption of a facility.
    KilowattHours,
    suffix: " kWh",
    precision: 2
);
