use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static LEADING_INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").unwrap());

/// Reads the optionally signed decimal integer `text` starts with, ignoring anything after it.
///
/// `"12abc"` is 12 and `"0x10"` is 0. Text without a leading integer, or one that
/// overflows `T`, is an error.
pub fn scan_int<T: FromStr<Err = ParseIntError>>(text: &str) -> Result<T, ParseIntError> {
	let digits = LEADING_INT.find(text).map_or(text, |m| m.as_str());
	digits.parse::<T>()
}
