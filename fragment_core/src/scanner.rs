use std::io::BufReader;
use std::io::Bytes;
use std::io::Read;

use tracing::trace;

use crate::ActiveRule;
use crate::FragmentResult;
use crate::Language;
use crate::SplitOptions;

/// The per-scan state machine.
///
/// Bytes are pushed one at a time. After each byte the scanner either opens a
/// rule, closes the active rule, or checks the delimiters, and hands back a
/// fragment whenever a delimiter is detected outside of any rule.
#[derive(Debug)]
pub struct Scanner<'a> {
	language: &'a Language,
	options: SplitOptions,
	buffer: Vec<u8>,
	active: Option<ActiveRule<'a>>,
}

impl<'a> Scanner<'a> {
	pub fn new(language: &'a Language, options: SplitOptions) -> Self {
		Self {
			language,
			options,
			buffer: vec![],
			active: None,
		}
	}

	/// Bytes of the fragment currently being accumulated.
	pub fn buffer(&self) -> &[u8] {
		&self.buffer
	}

	/// The rule currently hiding delimiters, if any.
	pub fn active_rule(&self) -> Option<&ActiveRule<'a>> {
		self.active.as_ref()
	}

	/// Feed one byte. Returns the completed fragment when this byte finishes
	/// a delimiter outside of any rule.
	pub fn push(&mut self, byte: u8) -> Option<String> {
		self.buffer.push(byte);

		match self.active.as_ref().map(ActiveRule::uses_explicit_end) {
			None => {
				// A rule start hides any delimiter made of the same bytes.
				if let Some(active) = self.language.start_rule(&self.buffer) {
					trace!(offset = self.buffer.len(), "rule started");
					self.active = Some(active);
					return None;
				}
			}
			Some(true) => {
				let ended = self
					.active
					.as_ref()
					.is_some_and(|active| active.end_matches(&self.buffer));

				if ended {
					trace!(offset = self.buffer.len(), "rule ended");
					self.active = None;
				}
				return None;
			}
			// Rules without a terminator of their own are closed below.
			Some(false) => {}
		}

		if !self.language.detects_delimiter(&self.buffer) {
			return None;
		}

		self.active = None;
		self.emit()
	}

	/// Flush whatever is left at end of input. A rule that is still open is
	/// not an error; its partial content becomes the last fragment.
	pub fn finish(mut self) -> Option<String> {
		if self.active.is_some() {
			trace!(offset = self.buffer.len(), "input ended inside a rule");
		}

		self.emit()
	}

	fn emit(&mut self) -> Option<String> {
		let bytes = std::mem::take(&mut self.buffer);
		let fragment = String::from_utf8_lossy(&bytes);
		let fragment = if self.options.trim {
			fragment.trim()
		} else {
			fragment.as_ref()
		};

		if fragment.is_empty() {
			return None;
		}

		trace!(len = fragment.len(), "fragment emitted");
		Some(fragment.to_string())
	}
}

/// Iterator over the fragments of a byte stream, produced in scan order.
///
/// Created by [`Language::fragments`]. A read error is yielded once and ends
/// the iteration.
#[derive(Debug)]
pub struct Fragments<'a, R> {
	bytes: Bytes<BufReader<R>>,
	scanner: Option<Scanner<'a>>,
}

impl<'a, R: Read> Fragments<'a, R> {
	pub(crate) fn new(language: &'a Language, reader: R, options: SplitOptions) -> Self {
		Self {
			bytes: BufReader::new(reader).bytes(),
			scanner: Some(Scanner::new(language, options)),
		}
	}
}

impl<R: Read> Iterator for Fragments<'_, R> {
	type Item = FragmentResult<String>;

	fn next(&mut self) -> Option<Self::Item> {
		loop {
			let scanner = self.scanner.as_mut()?;

			match self.bytes.next() {
				Some(Ok(byte)) => {
					if let Some(fragment) = scanner.push(byte) {
						return Some(Ok(fragment));
					}
				}
				Some(Err(error)) => {
					self.scanner = None;
					return Some(Err(error.into()));
				}
				None => {
					let scanner = self.scanner.take()?;
					if let Some(fragment) = scanner.finish() {
						return Some(Ok(fragment));
					}
				}
			}
		}
	}
}
