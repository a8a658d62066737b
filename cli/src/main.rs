#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
#![warn(clippy::expect_used)]

use crate::app_config::AppConfig;
use args::{CliArgs, Command};
use clap::Parser;
use commands::{
    completions::completions_cmd, config::config_cmd, menu::menu_cmd, note::note_cmd,
};
use logging::setup_tracing;
use profile::{get_profile_path, Profile};

mod app_config;
mod args;
mod commands;
mod formatters;
mod logging;
mod menu;
mod profile;
mod terminal;

#[cfg(test)]
mod test;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let profile_path = get_profile_path(&args.config.profile_path);
    let profile = Profile::from_path(&profile_path)?;
    let config = AppConfig::from_args(args.config, &profile_path, profile.as_ref());

    setup_tracing(&config.log_level);

    match args.command {
        None => menu_cmd(&config.file_path()),
        Some(Command::Config) => config_cmd(config)?,
        Some(Command::Completions(args)) => completions_cmd(args.shell),
        Some(Command::Note(subcommand)) => note_cmd(&config.file_path(), subcommand)?,
    }

    Ok(())
}
