use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

use serde::Serialize;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl Color {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// GPL files carry no alpha channel, every color is fully opaque.
	pub const fn alpha(&self) -> u8 {
		u8::MAX
	}

	pub const fn to_rgba(&self) -> [u8; 4] {
		[self.r, self.g, self.b, self.alpha()]
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize)]
pub struct Entry {
	pub name: String,
	pub color: Color,
}

impl Entry {
	pub fn new<S: Into<String>>(name: S, color: Color) -> Self {
		Self { name: name.into(), color }
	}
}

/// A decoded GIMP palette.
///
/// Comments and entries are kept in file order but independently of each other,
/// so their interleaving in the source is not preserved.
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
	/// Empty if the file had no `Name: ` line.
	pub name: String,
	/// Suggested grid width, 0 if unspecified.
	pub columns: i32,
	pub comments: Vec<String>,
	pub entries: Vec<Entry>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.entries.push(Entry { color: c, ..Default::default() });
	}

	pub fn push_named_color(&mut self, c: Color, name: String) {
		self.entries.push(Entry { color: c, name });
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Successful decode result, including every irregularity lenient parsing papered over.
#[derive(Debug, Default)]
pub struct Decoded {
	pub palette: Palette,
	/// The errors strict parsing would have raised, in the order they were encountered.
	pub warnings: Vec<PaletteError>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
	Red,
	Green,
	Blue,
}

impl Channel {
	pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

impl Display for Channel {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Channel::Red => write!(f, "red"),
			Channel::Green => write!(f, "green"),
			Channel::Blue => write!(f, "blue"),
		}
	}
}

/// A single problem found in a color row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowFault {
	MissingField { found: usize },
	Malformed { channel: Channel, text: String },
	OutOfRange { channel: Channel, value: i64 },
}

impl Display for RowFault {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			RowFault::MissingField { found } => write!(f, "expected 3 color values, found {found}"),
			RowFault::Malformed { channel, text } => write!(f, "invalid {channel} value \"{text}\""),
			RowFault::OutOfRange { channel, value } => write!(f, "{channel} value {value} is out of range"),
		}
	}
}

#[derive(Debug)]
pub enum PaletteError {
	BadHeader { found: Option<String> },
	MissingName { line: usize },
	MissingColumns { line: usize },
	BadColumns { line: usize, value: String, source: ParseIntError },
	InvalidRow { line: usize, faults: Vec<RowFault> },
	IoErr(std::io::Error),
}

impl PaletteError {
	/// The row faults carried by this error, empty for anything but [`PaletteError::InvalidRow`].
	pub fn row_faults(&self) -> &[RowFault] {
		match self {
			PaletteError::InvalidRow { faults, .. } => faults,
			_ => &[],
		}
	}

	/// The 1-based line the error refers to, if any.
	pub fn line(&self) -> Option<usize> {
		match self {
			PaletteError::BadHeader { .. } => Some(1),
			PaletteError::MissingName { line } |
			PaletteError::MissingColumns { line } |
			PaletteError::BadColumns { line, .. } |
			PaletteError::InvalidRow { line, .. } => Some(*line),
			PaletteError::IoErr(_) => None,
		}
	}
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::BadHeader { found: None } => write!(f, "Missing magic header: the input is empty"),
			PaletteError::BadHeader { found: Some(found) } => write!(f, "Invalid magic sequence: \"{found}\""),
			PaletteError::MissingName { line } => write!(f, "Missing palette name in line {line}"),
			PaletteError::MissingColumns { line } => write!(f, "Missing palette columns in line {line}"),
			PaletteError::BadColumns { line, value, source } => write!(f, "Bad columns entry \"{value}\" in line {line}: {source}"),
			PaletteError::InvalidRow { line, faults } => {
				let faults = faults.iter().map(|f| f.to_string()).collect::<Vec<String>>();
				write!(f, "Invalid data in line {line}: {}", faults.join(", "))
			}
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl Error for PaletteError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			PaletteError::BadColumns { source, .. } => Some(source),
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
