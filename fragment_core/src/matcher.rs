use derive_more::Deref;
use regex::bytes::Regex;
use regex::bytes::RegexBuilder;

use crate::FragmentError;
use crate::FragmentResult;

/// Literal bytes tested against the tail of the scanned buffer.
///
/// The two-character escape `\n` in the configured text is normalized to a
/// single newline byte so that tables written with raw strings can still
/// express line endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
	bytes: Vec<u8>,
	case_insensitive: bool,
}

impl Literal {
	/// Build a literal matcher. `role` names the literal in the error raised
	/// when the text is empty.
	pub fn new(text: &str, case_insensitive: bool, role: &'static str) -> FragmentResult<Self> {
		let bytes = normalize_newlines(text);

		if bytes.is_empty() {
			return Err(FragmentError::EmptyLiteral { role });
		}

		Ok(Self {
			bytes,
			case_insensitive,
		})
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Returns true when `buffer` ends with this literal. Case folding is
	/// ASCII only.
	pub fn is_suffix_of(&self, buffer: &[u8]) -> bool {
		if !self.case_insensitive {
			return buffer.ends_with(&self.bytes);
		}

		buffer.len() >= self.bytes.len()
			&& buffer[buffer.len() - self.bytes.len()..].eq_ignore_ascii_case(&self.bytes)
	}
}

fn normalize_newlines(text: &str) -> Vec<u8> {
	let bytes = text.as_bytes();
	let mut normalized = Vec::with_capacity(bytes.len());
	let mut index = 0;

	while index < bytes.len() {
		if bytes[index] == b'\\' && bytes.get(index + 1) == Some(&b'n') {
			normalized.push(b'\n');
			index += 2;
		} else {
			normalized.push(bytes[index]);
			index += 1;
		}
	}

	normalized
}

/// A regular expression that only matches when it ends exactly at the end of
/// the scanned buffer.
#[derive(Debug, Clone)]
pub struct Pattern {
	source: String,
	regex: Regex,
}

impl Pattern {
	pub fn new(source: &str, case_insensitive: bool) -> FragmentResult<Self> {
		let regex = compile_suffix_regex(source, case_insensitive).map_err(|error| {
			FragmentError::InvalidPattern {
				pattern: source.to_string(),
				reason: error.to_string(),
			}
		})?;

		Ok(Self {
			source: source.to_string(),
			regex,
		})
	}

	/// The pattern as configured, without the end anchor.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Number of groups in the pattern, including the implicit whole-match
	/// group.
	pub fn group_count(&self) -> usize {
		self.regex.captures_len()
	}

	pub fn is_suffix_of(&self, buffer: &[u8]) -> bool {
		self.regex.is_match(buffer)
	}

	/// Match against the tail of `buffer` and record every capture group.
	pub fn captures(&self, buffer: &[u8]) -> Option<Captures> {
		// The cheap check avoids a capture search on almost every byte.
		if !self.regex.is_match(buffer) {
			return None;
		}

		let captures = self.regex.captures(buffer)?;

		Some(Captures(
			captures
				.iter()
				.map(|group| group.map(|group| group.as_bytes().to_vec()))
				.collect(),
		))
	}
}

pub(crate) fn compile_suffix_regex(
	source: &str,
	case_insensitive: bool,
) -> Result<Regex, regex::Error> {
	RegexBuilder::new(&format!("(?:{source})$"))
		.case_insensitive(case_insensitive)
		.build()
}

/// Groups captured by a rule's start pattern. Index `0` holds the whole
/// match; groups that did not participate are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Captures(Vec<Option<Vec<u8>>>);

impl Captures {
	/// The bytes captured by `index`, if the group exists and participated.
	pub fn group(&self, index: usize) -> Option<&[u8]> {
		self.0.get(index)?.as_deref()
	}
}

impl<const N: usize> From<[&str; N]> for Captures {
	fn from(groups: [&str; N]) -> Self {
		Self(
			groups
				.into_iter()
				.map(|group| Some(group.as_bytes().to_vec()))
				.collect(),
		)
	}
}
