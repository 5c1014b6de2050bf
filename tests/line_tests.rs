use std::io::{self, BufReader, Read};

use gpl_rs::palettes::lines::LineSource;

struct BrokenPipe<'a> {
	data: &'a [u8],
}

impl Read for BrokenPipe<'_> {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if self.data.is_empty() {
			return Err(io::Error::from(io::ErrorKind::BrokenPipe));
		}
		self.data.read(buf)
	}
}

#[test]
fn lines_are_split_and_stripped() {
	let mut lines = LineSource::new("one\ntwo\r\n\nthree".as_bytes());

	assert_eq!(lines.next_line().unwrap().as_deref(), Some("one"));
	assert_eq!(lines.next_line().unwrap().as_deref(), Some("two"));
	assert_eq!(lines.next_line().unwrap().as_deref(), Some(""));
	assert_eq!(lines.next_line().unwrap().as_deref(), Some("three"));
	assert_eq!(lines.line_number(), 4);
	assert_eq!(lines.next_line().unwrap(), None);
	assert_eq!(lines.next_line().unwrap(), None);
}

#[test]
fn put_back_lines_come_first() {
	let mut lines = LineSource::new("a\nb\nc\n".as_bytes());
	assert_eq!(lines.line_number(), 0);

	let a = lines.next_line().unwrap().unwrap();
	let b = lines.next_line().unwrap().unwrap();
	assert_eq!(lines.line_number(), 2);

	// nested put-backs behave like a stack
	lines.put_back(b);
	lines.put_back(a);

	let collected = lines.by_ref().collect::<io::Result<Vec<String>>>().unwrap();
	assert_eq!(collected, vec!["a", "b", "c"]);
	assert_eq!(lines.line_number(), 3);
}

#[test]
fn put_back_keeps_line_number() {
	let mut lines = LineSource::new("x\ny\n".as_bytes());

	let x = lines.next_line().unwrap().unwrap();
	lines.put_back(x);
	assert_eq!(lines.next_line().unwrap().as_deref(), Some("x"));
	assert_eq!(lines.line_number(), 1);
	assert_eq!(lines.next_line().unwrap().as_deref(), Some("y"));
	assert_eq!(lines.line_number(), 2);
}

#[test]
fn put_back_after_end_of_input() {
	let mut lines = LineSource::new("last".as_bytes());

	let last = lines.next_line().unwrap().unwrap();
	assert_eq!(lines.next_line().unwrap(), None);

	lines.put_back(last);
	assert_eq!(lines.next_line().unwrap().as_deref(), Some("last"));
	assert_eq!(lines.next_line().unwrap(), None);
}

#[test]
fn read_error_is_terminal() {
	let mut lines = LineSource::new(BufReader::new(BrokenPipe { data: b"first\nsecond\n" }));

	assert_eq!(lines.next_line().unwrap().as_deref(), Some("first"));
	assert_eq!(lines.next_line().unwrap().as_deref(), Some("second"));

	let err = lines.next_line().unwrap_err();
	assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

	assert_eq!(lines.next_line().unwrap(), None);
	assert!(lines.next().is_none());
}

#[test]
fn invalid_utf8_is_a_read_error() {
	let mut lines = LineSource::new(&b"GIMP Palette\n\xFF\xFE\n"[..]);

	assert!(lines.next_line().is_ok());
	assert_eq!(lines.next_line().unwrap_err().kind(), io::ErrorKind::InvalidData);
}
