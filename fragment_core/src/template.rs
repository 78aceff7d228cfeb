use logos::Logos;

use crate::Captures;
use crate::FragmentError;
use crate::FragmentResult;
use crate::Pattern;
use crate::matcher::compile_suffix_regex;

/// Raw tokens produced by logos for an end pattern template.
#[derive(Logos, Debug, PartialEq)]
enum TemplateToken {
	/// `\1` through `\9`.
	#[regex(r"\\[0-9]")]
	BackReference,
	/// A backslash followed by anything but a digit, e.g. `\$` or `\\`.
	#[regex(r"\\[^0-9]")]
	Escape,
	#[regex(r"[^\\]+")]
	Text,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
	Text(String),
	Group(usize),
}

/// The end pattern of a pattern rule, with back-references resolved from the
/// captures of the start pattern each time the rule becomes active.
#[derive(Debug, Clone)]
pub struct EndTemplate {
	source: String,
	segments: Vec<Segment>,
	case_insensitive: bool,
}

impl EndTemplate {
	/// Tokenize `source` and check that it compiles once every back-reference
	/// is replaced by the empty string.
	pub fn new(source: &str, case_insensitive: bool) -> FragmentResult<Self> {
		let template = Self {
			source: source.to_string(),
			segments: tokenize(source),
			case_insensitive,
		};

		compile_suffix_regex(&template.render(&Captures::default()), case_insensitive).map_err(
			|error| {
				FragmentError::InvalidPattern {
					pattern: source.to_string(),
					reason: error.to_string(),
				}
			},
		)?;

		Ok(template)
	}

	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// The largest group index referenced by the template.
	pub fn max_group(&self) -> Option<usize> {
		self.segments
			.iter()
			.filter_map(|segment| {
				match segment {
					Segment::Group(index) => Some(*index),
					Segment::Text(_) => None,
				}
			})
			.max()
	}

	/// Substitute every back-reference with the escaped text of the matching
	/// capture. Group `0`, groups out of range and groups that did not take
	/// part in the match all resolve to the empty string.
	pub fn render(&self, captures: &Captures) -> String {
		let mut rendered = String::with_capacity(self.source.len());

		for segment in &self.segments {
			match segment {
				Segment::Text(text) => rendered.push_str(text),
				Segment::Group(0) => {}
				Segment::Group(index) => {
					if let Some(bytes) = captures.group(*index) {
						rendered.push_str(&regex::escape(&String::from_utf8_lossy(bytes)));
					}
				}
			}
		}

		rendered
	}

	/// Render and compile the template for one activation of its rule.
	pub fn compile(&self, captures: &Captures) -> FragmentResult<Pattern> {
		Pattern::new(&self.render(captures), self.case_insensitive)
	}
}

fn tokenize(source: &str) -> Vec<Segment> {
	let mut segments: Vec<Segment> = vec![];

	for (token, span) in TemplateToken::lexer(source).spanned() {
		let slice = &source[span];

		if let Ok(TemplateToken::BackReference) = token {
			let index = usize::from(slice.as_bytes()[1] - b'0');
			segments.push(Segment::Group(index));
			continue;
		}

		// Escapes, plain text and a dangling backslash are copied verbatim.
		match segments.last_mut() {
			Some(Segment::Text(text)) => text.push_str(slice),
			_ => segments.push(Segment::Text(slice.to_string())),
		}
	}

	segments
}
