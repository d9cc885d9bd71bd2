#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod repository;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, schedule, week},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Schedule(args) => schedule(&args)?,
        Command::Week(args) => week(&args)?,
    }

    info!("done!");
    Ok(())
}
