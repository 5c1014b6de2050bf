use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use gpl_rs::palettes::mode::ParsingMode;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Decodes and inspects GIMP palette files")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Enables debug logging.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ShowArgs {
	#[arg(help = "The input palette. Use - to read from stdin.")]
	pub input: PathBuf,

	#[arg(short = 'm', long, value_enum, help = "Sets the validation mode.", default_value_t = ParsingMode::default())]
	pub mode: ParsingMode,

	#[arg(long, help = "Prints hex values only, without color swatches.")]
	pub no_swatches: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct JsonArgs {
	#[arg(help = "The input palette. Use - to read from stdin.")]
	pub input: PathBuf,

	#[arg(short = 'm', long, value_enum, help = "Sets the validation mode.", default_value_t = ParsingMode::default())]
	pub mode: ParsingMode,

	#[arg(short, long, help = "Pretty-prints the JSON output.")]
	pub pretty: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct CheckArgs {
	#[arg(help = "The input palette. Use - to read from stdin.")]
	pub input: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints a palette's metadata and colors.")]
	Show(ShowArgs),
	#[command(about = "Dumps a palette as JSON.")]
	Json(JsonArgs),
	#[command(about = "Lists everything that keeps a palette from being strictly valid.")]
	Check(CheckArgs),
}
