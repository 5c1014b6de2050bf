use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::palettes::lines::LineSource;
use crate::palettes::mode::{ParsingMode, Verdict};
use crate::palettes::palette::{Decoded, Palette, PaletteError};
use crate::palettes::row::parse_row;
use crate::palettes::scan::scan_int;

// https://gitlab.gnome.org/GNOME/gimp/-/blob/master/app/core/gimppalette-load.c

const GIMP_MAGIC: &str = "GIMP Palette";
const NAME_PREFIX: &str = "Name: ";
const COLUMNS_PREFIX: &str = "Columns: ";

/// Walks header, name, columns and body in that order.
struct GplDecoder<R: BufRead> {
	lines: LineSource<R>,
	mode: ParsingMode,
	warnings: Vec<PaletteError>,
}

impl<R: BufRead> GplDecoder<R> {
	fn new(reader: R, mode: ParsingMode) -> Self {
		Self {
			lines: LineSource::new(reader),
			mode,
			warnings: Vec::new(),
		}
	}

	fn settle<T>(&mut self, verdict: Verdict<T>) -> Result<T, PaletteError> {
		verdict.settle(|fault| {
			log::warn!("{fault} (ignored in {} mode)", self.mode);
			self.warnings.push(fault);
		})
	}

	fn expect_header(&mut self) -> Result<(), PaletteError> {
		match self.lines.next_line()? {
			Some(line) if line == GIMP_MAGIC => {
				log::debug!("Found magic header");
				Ok(())
			}
			found => Err(PaletteError::BadHeader { found }),
		}
	}

	/// Reads a `prefix` line and returns its trimmed value.
	///
	/// Any other line is an error built by `missing`, or is put back for the next
	/// stage if the mode tolerates it.
	fn expect_prefixed(&mut self, prefix: &str, missing: fn(usize) -> PaletteError) -> Result<Option<String>, PaletteError> {
		let line = self.lines.next_line()?;
		if let Some(value) = line.as_deref().and_then(|l| l.strip_prefix(prefix)) {
			return Ok(Some(value.trim().to_string()));
		}

		let line_number = match line {
			Some(_) => self.lines.line_number(),
			None => self.lines.line_number() + 1,
		};

		let verdict = self.mode.judge(missing(line_number), line);
		if let Some(line) = self.settle(verdict)? {
			self.lines.put_back(line);
		}

		Ok(None)
	}

	fn expect_name(&mut self) -> Result<String, PaletteError> {
		let name = self.expect_prefixed(NAME_PREFIX, |line| PaletteError::MissingName { line })?;
		if let Some(name) = &name {
			log::debug!("Palette name: \"{name}\"");
		}

		Ok(name.unwrap_or_default())
	}

	fn expect_columns(&mut self) -> Result<i32, PaletteError> {
		let Some(value) = self.expect_prefixed(COLUMNS_PREFIX, |line| PaletteError::MissingColumns { line })? else {
			return Ok(0);
		};

		let verdict = match scan_int::<i32>(&value) {
			Ok(columns) => {
				log::debug!("Palette columns: {columns}");
				Verdict::Accepted(columns)
			}
			Err(source) => {
				let fault = PaletteError::BadColumns { line: self.lines.line_number(), value, source };
				self.mode.judge(fault, 0)
			}
		};

		self.settle(verdict)
	}

	fn read_body(&mut self, pal: &mut Palette) -> Result<(), PaletteError> {
		while let Some(line) = self.lines.next_line()? {
			let trimmed_line = line.trim();
			if trimmed_line.is_empty() {
				continue;
			}

			if let Some(comment) = trimmed_line.strip_prefix('#') {
				pal.comments.push(comment.to_string());
				continue;
			}

			let verdict = parse_row(trimmed_line, self.lines.line_number(), self.mode);
			let entry = self.settle(verdict)?;
			pal.entries.push(entry);
		}

		Ok(())
	}

	fn decode(mut self) -> Result<Decoded, PaletteError> {
		self.expect_header()?;

		let mut pal = Palette {
			name: self.expect_name()?,
			columns: self.expect_columns()?,
			..Default::default()
		};

		self.read_body(&mut pal)?;

		log::debug!(
			"Decoded {} entries and {} comments from {} lines ({} warnings)",
			pal.len(), pal.comments.len(), self.lines.line_number(), self.warnings.len()
		);

		Ok(Decoded { palette: pal, warnings: self.warnings })
	}
}

impl Palette {
	/// Decodes a GIMP palette, also returning what lenient parsing had to coerce.
	pub fn decode_gpl<R: BufRead>(reader: R, mode: ParsingMode) -> Result<Decoded, PaletteError> {
		GplDecoder::new(reader, mode).decode()
	}

	pub fn from_gpl_reader<R: BufRead>(reader: R, mode: ParsingMode) -> Result<Palette, PaletteError> {
		Self::decode_gpl(reader, mode).map(|d| d.palette)
	}

	pub fn from_gpl_file<P: AsRef<Path>>(path: P, mode: ParsingMode) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_gpl_reader(reader, mode)
	}

	pub fn from_gpl_string<S: AsRef<str>>(s: S, mode: ParsingMode) -> Result<Palette, PaletteError> {
		Self::from_gpl_reader(s.as_ref().as_bytes(), mode)
	}
}
