// src/bin/cli.rs
use clap::Parser;
use kroenke_csv::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::Stderr);
    cli::run(cli::Args::parse())
}
