use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::cmd_check::palette_check;
use crate::cmd_json::palette_json;
use crate::cmd_show::palette_show;
use crate::commands::{Cli, Commands};

mod cmd_check;
mod cmd_json;
mod cmd_show;
mod commands;
mod common;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let level = if cli.debug { LevelFilter::Debug } else { LevelFilter::Error };
	env_logger::Builder::new()
		.filter_level(level)
		.parse_default_env()
		.init();

	let result = match &cli.command {
		Some(Commands::Show(args)) => palette_show(args),
		Some(Commands::Json(args)) => palette_json(args),
		Some(Commands::Check(args)) => palette_check(args),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
