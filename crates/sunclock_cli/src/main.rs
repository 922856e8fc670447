mod cli;
mod commands;
mod config;
mod logging;
mod watch_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::JulianDay { date } => commands::julian_day(&date),
        Command::Solar(args) => commands::solar(&args),
        Command::Times(args) => commands::times(&args),
        Command::Window(args) => commands::window(&args),
        Command::Dial(args) => commands::dial(&args),
        Command::Watch(args) => watch_cmd::run(&args),
    }
}
