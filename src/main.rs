#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod profile;
mod quantity;
mod tables;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command},
    prelude::*,
    tables::build_rates_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
    debug!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let store = args.profile_store();

    match args.command {
        Command::Status(args) => args.run(&store),
        Command::Watch(args) => args.run(&store).await?,
        Command::Schedule(args) => args.run(&store),
        Command::Rates => println!("{}", build_rates_table()),
        Command::Tips(args) => args.run(),
        Command::Profile(args) => args.run(&store)?,
    }

    Ok(())
}
