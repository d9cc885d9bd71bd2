use clap::Parser;

use crate::{
    cli::repository::RepositoryArgs,
    core::week::WeeklyConsumption,
    prelude::*,
    repository::ConsumptionRepository,
    tables::build_weekly_table,
};

#[derive(Parser)]
pub struct WeekArgs {
    /// Month number, the first week of which is shown.
    #[clap(long, env = "MONTH")]
    pub month: u32,

    #[clap(flatten)]
    pub repository: RepositoryArgs,
}

#[instrument(skip_all, fields(month = args.month))]
pub fn week(args: &WeekArgs) -> Result {
    let facilities = args.repository.open().load_facilities()?;
    let weekly_consumption = WeeklyConsumption::extract(&facilities, args.month);
    if weekly_consumption.is_empty() {
        warn!("no facility has complete data for the first week");
        return Ok(());
    }
    println!("{}", build_weekly_table(&weekly_consumption, &facilities));
    Ok(())
}
