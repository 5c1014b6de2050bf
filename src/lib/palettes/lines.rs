use std::io::{self, BufRead};

/// Pull-based line reader with put-back support.
///
/// Lines are returned without their `\n` or `\r\n` terminator. Put-back lines form a
/// stack and are handed out before anything still unread. A read error is reported
/// exactly once, after which the source behaves as if it were exhausted.
pub struct LineSource<R: BufRead> {
	reader: R,
	pending: Vec<(usize, String)>,
	read_count: usize,
	current: usize,
	finished: bool,
}

impl<R: BufRead> LineSource<R> {
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			pending: Vec::new(),
			read_count: 0,
			current: 0,
			finished: false,
		}
	}

	pub fn next_line(&mut self) -> io::Result<Option<String>> {
		if let Some((number, line)) = self.pending.pop() {
			self.current = number;
			return Ok(Some(line));
		}

		if self.finished {
			return Ok(None);
		}

		let mut line = String::new();
		match self.reader.read_line(&mut line) {
			Ok(0) => {
				self.finished = true;
				Ok(None)
			}
			Ok(_) => {
				if line.ends_with('\n') {
					line.pop();
					if line.ends_with('\r') {
						line.pop();
					}
				}

				self.read_count += 1;
				self.current = self.read_count;
				Ok(Some(line))
			}
			Err(e) => {
				self.finished = true;
				Err(e)
			}
		}
	}

	/// Makes `line` the next value returned by [`LineSource::next_line`].
	///
	/// It keeps the number of the line most recently returned.
	pub fn put_back(&mut self, line: String) {
		self.pending.push((self.current, line));
	}

	/// 1-based number of the line most recently returned, 0 before the first one.
	pub fn line_number(&self) -> usize {
		self.current
	}
}

impl<R: BufRead> Iterator for LineSource<R> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_line().transpose()
	}
}
