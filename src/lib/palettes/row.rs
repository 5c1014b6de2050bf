use std::sync::LazyLock;

use regex::Regex;

use crate::palettes::mode::{ParsingMode, Verdict};
use crate::palettes::palette::{Channel, Color, Entry, PaletteError, RowFault};
use crate::palettes::scan::scan_int;

static FIELD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// R, G, B and the optional name, which may itself contain whitespace.
const MAX_FIELDS: usize = 4;

/// Parses one color row of the palette body.
///
/// Missing trailing channels, non-numeric channels and channels outside `0..=255` are
/// all collected as faults of the row. If there are any, `mode` decides whether the row
/// is rejected or accepted with those channels zeroed or clamped.
pub fn parse_row(line: &str, line_number: usize, mode: ParsingMode) -> Verdict<Entry> {
	let line = line.trim();
	let fields: Vec<&str> = if line.is_empty() {
		Vec::new()
	} else {
		FIELD_SEPARATOR.splitn(line, MAX_FIELDS).collect()
	};

	let mut faults = Vec::new();
	if fields.len() < Channel::ALL.len() {
		faults.push(RowFault::MissingField { found: fields.len() });
	}

	let mut rgb = [0_u8; 3];
	for ((channel, slot), text) in Channel::ALL.into_iter().zip(rgb.iter_mut()).zip(fields.iter()) {
		let (value, fault) = parse_channel(channel, text);
		*slot = value;
		faults.extend(fault);
	}

	let name = fields.get(3).map(|s| s.to_string()).unwrap_or_default();
	let entry = Entry::new(name, Color::from(rgb));

	if faults.is_empty() {
		return Verdict::Accepted(entry);
	}

	mode.judge(PaletteError::InvalidRow { line: line_number, faults }, entry)
}

/// Parses a single channel, returning the value to store and the fault found, if any.
///
/// Text without a leading integer, or one too large for an `i64`, yields 0. Numbers
/// outside the byte range saturate at the nearer bound.
fn parse_channel(channel: Channel, text: &str) -> (u8, Option<RowFault>) {
	let Ok(value) = scan_int::<i64>(text) else {
		return (0, Some(RowFault::Malformed { channel, text: text.to_string() }));
	};

	match u8::try_from(value) {
		Ok(v) => (v, None),
		Err(_) => {
			let clamped = value.clamp(0, u8::MAX as i64) as u8;
			(clamped, Some(RowFault::OutOfRange { channel, value }))
		}
	}
}
