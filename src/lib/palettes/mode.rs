use std::fmt::{Display, Formatter};

use crate::palettes::palette::PaletteError;

/// Validation policy applied while decoding.
#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum ParsingMode {
	/// Any structural or numeric irregularity is fatal.
	Strict,
	/// Irregularities are defaulted, clamped or skipped.
	#[default]
	Lenient,
}

impl Display for ParsingMode {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ParsingMode::Strict => write!(f, "strict"),
			ParsingMode::Lenient => write!(f, "lenient"),
		}
	}
}

/// Outcome of one validation step.
#[derive(Debug)]
pub enum Verdict<T> {
	Accepted(T),
	/// The input was irregular, `T` is the best-effort replacement.
	Coerced(T, PaletteError),
	Rejected(PaletteError),
}

impl ParsingMode {
	/// Turns an irregularity into a verdict: strict rejects it, lenient substitutes `fallback`.
	pub fn judge<T>(self, fault: PaletteError, fallback: T) -> Verdict<T> {
		match self {
			ParsingMode::Strict => Verdict::Rejected(fault),
			ParsingMode::Lenient => Verdict::Coerced(fallback, fault),
		}
	}
}

impl<T> Verdict<T> {
	/// Unwraps the verdict, handing the fault of a coerced value to `on_coerced`.
	pub fn settle<F: FnOnce(PaletteError)>(self, on_coerced: F) -> Result<T, PaletteError> {
		match self {
			Verdict::Accepted(v) => Ok(v),
			Verdict::Coerced(v, fault) => {
				on_coerced(fault);
				Ok(v)
			}
			Verdict::Rejected(fault) => Err(fault),
		}
	}
}
