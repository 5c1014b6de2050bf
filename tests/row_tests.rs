use gpl_rs::palettes::mode::ParsingMode::{Lenient, Strict};
use gpl_rs::palettes::mode::Verdict;
use gpl_rs::palettes::palette::{Channel, Color, Entry, PaletteError, RowFault};
use gpl_rs::palettes::row::parse_row;

struct RowTest {
	pub line: &'static str,
	pub expected: Entry,
	pub faults: Vec<RowFault>,
}

impl RowTest {
	fn new(line: &'static str, rgb: [u8; 3], name: &str, faults: Vec<RowFault>) -> Self {
		Self {
			line,
			expected: Entry::new(name, Color::from(rgb)),
			faults,
		}
	}
}

fn row_data() -> Vec<RowTest> {
	use Channel::*;
	use RowFault::*;

	vec![
		RowTest::new("0 127 255",                [0, 127, 255],   "",          vec![]),
		RowTest::new("0 127 255 red",            [0, 127, 255],   "red",       vec![]),
		RowTest::new("1\t2  3   Dark  Slate Blue", [1, 2, 3],     "Dark  Slate Blue", vec![]),
		RowTest::new("+7 08 9",                  [7, 8, 9],       "",          vec![]),
		RowTest::new("255 255",                  [255, 255, 0],   "",          vec![MissingField { found: 2 }]),
		RowTest::new("12",                       [12, 0, 0],      "",          vec![MissingField { found: 1 }]),
		RowTest::new("-100 999 255",             [0, 255, 255],   "",          vec![
			OutOfRange { channel: Red, value: -100 },
			OutOfRange { channel: Green, value: 999 },
		]),
		RowTest::new("xx 127 255",               [0, 127, 255],   "",          vec![Malformed { channel: Red, text: "xx".to_string() }]),
		RowTest::new("1 2 0x10 hex",             [1, 2, 0],       "hex",       vec![]),
		RowTest::new("12abc 0 0",                [12, 0, 0],      "",          vec![]),
		RowTest::new("7 -3px 260%",              [7, 0, 255],     "",          vec![
			OutOfRange { channel: Green, value: -3 },
			OutOfRange { channel: Blue, value: 260 },
		]),
		RowTest::new("99999999999999999999 0 0", [0, 0, 0],       "",          vec![Malformed { channel: Red, text: "99999999999999999999".to_string() }]),
		RowTest::new("- + 1",                    [0, 0, 1],       "",          vec![
			Malformed { channel: Red, text: "-".to_string() },
			Malformed { channel: Green, text: "+".to_string() },
		]),
		RowTest::new("ab 300",                   [0, 255, 0],     "",          vec![
			MissingField { found: 2 },
			Malformed { channel: Red, text: "ab".to_string() },
			OutOfRange { channel: Green, value: 300 },
		]),
	]
}

#[test]
fn row_parsing_lenient() {
	for (i, test) in row_data().iter().enumerate() {
		match parse_row(test.line, i + 1, Lenient) {
			Verdict::Accepted(entry) => {
				assert!(test.faults.is_empty(), "{i}: \"{}\" should have been coerced!", test.line);
				assert_eq!(entry, test.expected, "{i}: entries aren't equal!");
			}
			Verdict::Coerced(entry, fault) => {
				assert_eq!(entry, test.expected, "{i}: entries aren't equal!");
				assert_eq!(fault.line(), Some(i + 1), "{i}: wrong line number!");
				assert_eq!(fault.row_faults(), test.faults.as_slice(), "{i}: faults aren't equal!");
			}
			Verdict::Rejected(err) => panic!("{i}: lenient parsing rejected \"{}\": {err}", test.line),
		}
	}
}

#[test]
fn row_parsing_strict() {
	for (i, test) in row_data().iter().enumerate() {
		let verdict = parse_row(test.line, i + 1, Strict);
		if test.faults.is_empty() {
			assert!(matches!(verdict, Verdict::Accepted(_)), "{i}: \"{}\" should have been accepted!", test.line);
			continue;
		}

		match verdict {
			Verdict::Rejected(err @ PaletteError::InvalidRow { .. }) => {
				assert_eq!(err.row_faults(), test.faults.as_slice(), "{i}: faults aren't equal!");
			}
			other => panic!("{i}: \"{}\" should have been rejected, got {other:?}", test.line),
		}
	}
}

#[test]
fn row_name_keeps_inner_whitespace() {
	let Verdict::Accepted(entry) = parse_row("  10 20 30   a\tb  ", 1, Strict) else {
		panic!("row should have been accepted");
	};

	assert_eq!(entry.name, "a\tb");
	assert_eq!(entry.color, Color::new(10, 20, 30));
}
