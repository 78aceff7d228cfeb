use tracing::warn;

use crate::Captures;
use crate::EndTemplate;
use crate::Literal;
use crate::Pattern;

/// A rule opening an opaque region in which delimiters are ignored.
#[derive(Debug, Clone)]
pub enum Rule {
	Literal(LiteralRule),
	Pattern(PatternRule),
}

/// A rule whose start and end are literal byte sequences.
#[derive(Debug, Clone)]
pub struct LiteralRule {
	pub(crate) start: Literal,
	/// `None` when the rule is closed by the next delimiter rather than by a
	/// terminator of its own.
	pub(crate) end: Option<Literal>,
}

impl LiteralRule {
	pub fn start(&self) -> &Literal {
		&self.start
	}

	pub fn end(&self) -> Option<&Literal> {
		self.end.as_ref()
	}
}

/// A rule whose start is a pattern and whose end is a template that may refer
/// back to the groups captured by the start.
#[derive(Debug, Clone)]
pub struct PatternRule {
	pub(crate) start: Pattern,
	pub(crate) end: EndTemplate,
}

impl PatternRule {
	pub fn start(&self) -> &Pattern {
		&self.start
	}

	pub fn end(&self) -> &EndTemplate {
		&self.end
	}
}

impl Rule {
	/// Test whether the rule starts at the end of `buffer`. The returned
	/// activation carries everything needed to recognize the end of the rule,
	/// so the rule itself is never mutated and can be shared between scans.
	pub fn start_matches(&self, buffer: &[u8]) -> Option<ActiveRule<'_>> {
		match self {
			Self::Literal(rule) => {
				if !rule.start.is_suffix_of(buffer) {
					return None;
				}

				let end = match &rule.end {
					Some(literal) => ActiveEnd::Literal(literal),
					None => ActiveEnd::Delimiter,
				};

				Some(ActiveRule {
					rule: self,
					captures: Captures::default(),
					end,
				})
			}
			Self::Pattern(rule) => {
				let captures = rule.start.captures(buffer)?;

				let end = match rule.end.compile(&captures) {
					Ok(pattern) => ActiveEnd::Pattern(Some(pattern)),
					Err(error) => {
						warn!(
							start = rule.start.as_str(),
							end = rule.end.as_str(),
							%error,
							"end pattern failed to compile, rule can only be closed by end of input"
						);
						ActiveEnd::Pattern(None)
					}
				};

				Some(ActiveRule {
					rule: self,
					captures,
					end,
				})
			}
		}
	}

	/// False for literal rules that are closed by the next delimiter.
	pub fn uses_explicit_end(&self) -> bool {
		!matches!(self, Self::Literal(LiteralRule { end: None, .. }))
	}
}

#[derive(Debug, Clone)]
#[allow(variant_size_differences)]
enum ActiveEnd<'a> {
	Literal(&'a Literal),
	/// `None` when the substituted template did not compile.
	Pattern(Option<Pattern>),
	Delimiter,
}

/// A rule that has started, together with the state captured at its start.
#[derive(Debug, Clone)]
pub struct ActiveRule<'a> {
	rule: &'a Rule,
	captures: Captures,
	end: ActiveEnd<'a>,
}

impl<'a> ActiveRule<'a> {
	pub fn rule(&self) -> &'a Rule {
		self.rule
	}

	/// Groups captured by the start pattern. Empty for literal rules.
	pub fn captures(&self) -> &Captures {
		&self.captures
	}

	pub fn uses_explicit_end(&self) -> bool {
		!matches!(self.end, ActiveEnd::Delimiter)
	}

	/// Test whether the rule ends at the end of `buffer`. Always false for
	/// rules that defer to delimiters.
	pub fn end_matches(&self, buffer: &[u8]) -> bool {
		match &self.end {
			ActiveEnd::Literal(literal) => literal.is_suffix_of(buffer),
			ActiveEnd::Pattern(Some(pattern)) => pattern.is_suffix_of(buffer),
			ActiveEnd::Pattern(None) | ActiveEnd::Delimiter => false,
		}
	}
}
