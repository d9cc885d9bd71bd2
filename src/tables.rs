use std::collections::HashMap;

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        facility::{Facility, FacilityId},
        solution::Solution,
        week::{WINDOW_DAYS, WeeklyConsumption},
    },
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Facility display names by their IDs, falling back to the ID for unknown facilities.
struct Names<'a>(HashMap<FacilityId, &'a str>);

impl<'a> Names<'a> {
    fn new(facilities: &'a [Facility]) -> Self {
        Self(facilities.iter().map(|facility| (facility.id, facility.name.as_str())).collect())
    }

    fn get(&self, facility_id: FacilityId) -> String {
        self.0.get(&facility_id).map_or_else(|| facility_id.to_string(), |name| (*name).to_owned())
    }
}

/// Human-readable `Day N: <facility>` lines.
#[must_use]
pub fn schedule_lines(solution: &Solution, facilities: &[Facility]) -> Vec<String> {
    let names = Names::new(facilities);
    solution
        .steps
        .iter()
        .map(|step| format!("Day {}: {}", step.day, names.get(step.facility_id)))
        .collect()
}

#[must_use]
pub fn build_schedule_table(solution: &Solution, facilities: &[Facility]) -> Table {
    let names = Names::new(facilities);

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Day", "Facility", "Energy", "Switch", "Cost"]);
    for step in &solution.steps {
        table.add_row(vec![
            Cell::new(format!("Day {}", step.day)).add_attribute(Attribute::Dim),
            Cell::new(names.get(step.facility_id)),
            Cell::new(step.energy).set_alignment(CellAlignment::Right),
            Cell::new(step.switching_penalty).set_alignment(CellAlignment::Right).fg(
                if step.switching_penalty > Cost::ZERO { Color::Red } else { Color::Reset },
            ),
            Cell::new(step.cost).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{} switches", solution.n_switches())).add_attribute(Attribute::Dim),
        Cell::new(solution.total_energy()).set_alignment(CellAlignment::Right),
        Cell::new(""),
        Cell::new(solution.total_cost)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

/// Eligible facilities against the days of the window, the cheapest facility of each day is green.
#[must_use]
pub fn build_weekly_table(weekly_consumption: &WeeklyConsumption, facilities: &[Facility]) -> Table {
    let names = Names::new(facilities);
    let daily_minimums: [Option<KilowattHours>; WINDOW_DAYS] = std::array::from_fn(|day_index| {
        weekly_consumption.iter().map(|(_, daily)| daily[day_index]).min()
    });

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(
        std::iter::once(Cell::new("Facility"))
            .chain((1..=WINDOW_DAYS).map(|day| Cell::new(format!("Day {day}"))))
            .collect::<Vec<_>>(),
    );
    for (facility_id, daily) in weekly_consumption.iter() {
        table.add_row(
            std::iter::once(Cell::new(names.get(facility_id)))
                .chain(daily.iter().zip(daily_minimums).map(|(energy, minimum)| {
                    Cell::new(energy).set_alignment(CellAlignment::Right).fg(
                        if Some(*energy) == minimum { Color::Green } else { Color::Reset },
                    )
                }))
                .collect::<Vec<_>>(),
        );
    }
    table
}
