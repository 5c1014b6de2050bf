use anyhow::{Context, Result};
use gpl_rs::palettes::mode::ParsingMode;
use gpl_rs::palettes::palette::{Decoded, Palette};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Decodes the palette at `input`, reading stdin if the path is `-`.
pub(crate) fn decode_input<P: AsRef<Path>>(input: P, mode: ParsingMode) -> Result<Decoded> {
	let input = input.as_ref();

	let decoded = if input == Path::new("-") {
		Palette::decode_gpl(io::stdin().lock(), mode)?
	} else {
		let f = File::open(input).with_context(|| format!("can't open {}", input.display()))?;
		Palette::decode_gpl(BufReader::new(f), mode)
			.with_context(|| format!("can't decode {}", input.display()))?
	};

	Ok(decoded)
}
