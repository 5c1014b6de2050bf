use crate::commands::ShowArgs;
use crate::common::decode_input;
use anyhow::Result;
use colored::Colorize;
use gpl_rs::palettes::palette::Entry;

fn swatch(entry: &Entry) -> String {
	let c = entry.color;
	"    ".on_truecolor(c.r, c.g, c.b).to_string()
}

pub(crate) fn palette_show(args: &ShowArgs) -> Result<()> {
	let decoded = decode_input(&args.input, args.mode)?;
	let pal = &decoded.palette;

	let name = if pal.name.is_empty() { "(unnamed)" } else { pal.name.as_str() };
	println!("{}", name.bold());

	if pal.columns > 0 {
		println!("Columns: {}", pal.columns);
	}
	println!("Colors: {}", pal.len());

	for comment in &pal.comments {
		println!("{}", format!("#{comment}").dimmed());
	}

	let width = pal.len().to_string().len();
	for (i, entry) in pal.entries.iter().enumerate() {
		if args.no_swatches {
			print!("[{i:>width$}] {}", entry.color);
		} else {
			print!("[{i:>width$}] {} {}", swatch(entry), entry.color);
		}

		if !entry.name.is_empty() {
			print!(" {}", entry.name);
		}
		println!();
	}

	if !decoded.warnings.is_empty() {
		eprintln!("NOTE: {} irregularities were coerced while decoding!", decoded.warnings.len());
	}

	Ok(())
}
