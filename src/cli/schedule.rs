use clap::Parser;

use crate::{
    cli::repository::RepositoryArgs,
    core::{solver::Solver, week::WeeklyConsumption},
    prelude::*,
    quantity::cost::Cost,
    repository::ConsumptionRepository,
    tables::{build_schedule_table, schedule_lines},
};

#[derive(Parser)]
pub struct ScheduleArgs {
    /// Month number, the first week of which is scheduled.
    ///
    /// Not validated: a month without readings simply yields no schedule.
    #[clap(long, env = "MONTH")]
    pub month: u32,

    /// Penalty for servicing a different facility than the day before.
    #[clap(long = "switching-penalty", env = "SWITCHING_PENALTY", default_value = "5")]
    pub switching_penalty: Cost,

    #[clap(flatten)]
    pub repository: RepositoryArgs,
}

#[instrument(skip_all, fields(month = args.month))]
pub fn schedule(args: &ScheduleArgs) -> Result {
    let facilities = args.repository.open().load_facilities()?;
    info!(n_facilities = facilities.len(), "loaded facilities");

    let weekly_consumption = WeeklyConsumption::extract(&facilities, args.month);
    let solver = Solver::builder()
        .weekly_consumption(&weekly_consumption)
        .switching_penalty(args.switching_penalty)
        .build();
    let Some(solution) = solver.solve() else {
        warn!("no feasible schedule, no facility has complete data for the first week");
        return Ok(());
    };

    println!("{}", build_schedule_table(&solution, &facilities));
    for line in schedule_lines(&solution, &facilities) {
        println!("{line}");
    }

    if let Some((facility_id, baseline_cost)) = solver.fixed_baseline() {
        info!(
            %facility_id,
            ?baseline_cost,
            savings = ?(baseline_cost - solution.total_cost),
            "compared to servicing a single facility",
        );
    }
    info!(total_cost = ?solution.total_cost, "done");
    Ok(())
}
