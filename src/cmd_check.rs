use crate::commands::CheckArgs;
use crate::common::decode_input;
use anyhow::{Result, bail};
use colored::Colorize;
use gpl_rs::palettes::mode::ParsingMode;

/// Decodes leniently so every problem in the file is listed, not just the first.
pub(crate) fn palette_check(args: &CheckArgs) -> Result<()> {
	let decoded = decode_input(&args.input, ParsingMode::Lenient)?;

	if decoded.warnings.is_empty() {
		println!("{} ({} colors)", "OK".green(), decoded.palette.len());
		return Ok(());
	}

	for warning in &decoded.warnings {
		println!("{} {warning}", "warning:".yellow());
	}

	bail!("{} problems keep this palette from decoding in strict mode", decoded.warnings.len())
}
