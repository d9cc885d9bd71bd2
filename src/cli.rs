mod repository;
mod schedule;
mod week;

use clap::{Parser, Subcommand};

pub use self::{
    schedule::{ScheduleArgs, schedule},
    week::{WeekArgs, week},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: find the cheapest facility to service on each of the first days of the month.
    #[clap(name = "schedule")]
    Schedule(Box<ScheduleArgs>),

    /// Show the first-week consumption of the facilities with complete data.
    #[clap(name = "week")]
    Week(Box<WeekArgs>),
}
