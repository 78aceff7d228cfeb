use serde::Deserialize;
use serde::Serialize;

/// Declarative description of a language: which markers end a fragment and
/// which regions hide those markers.
///
/// ```toml
/// case_insensitive = false
///
/// [[delimiters]]
/// kind = "literal"
/// value = ";"
///
/// [[rules]]
/// kind = "literal"
/// start = "--"
/// end = "\n"
///
/// [[rules]]
/// kind = "pattern"
/// start = '(\$([a-zA-Z0-9_]*)\$)'
/// end = '\$\2\$'
/// ```
///
/// Order is significant in both lists: the first rule whose start matches
/// wins, and the first delimiter detected ends the fragment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageConfig {
	/// Fold ASCII case for literals and compile every pattern
	/// case-insensitively.
	#[serde(default)]
	pub case_insensitive: bool,
	#[serde(default)]
	pub delimiters: Vec<DelimiterConfig>,
	#[serde(default)]
	pub rules: Vec<RuleConfig>,
}

impl LanguageConfig {
	pub fn new(
		delimiters: impl IntoIterator<Item = DelimiterConfig>,
		rules: impl IntoIterator<Item = RuleConfig>,
	) -> Self {
		Self {
			case_insensitive: false,
			delimiters: delimiters.into_iter().collect(),
			rules: rules.into_iter().collect(),
		}
	}

	#[must_use]
	pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
		self.case_insensitive = case_insensitive;
		self
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DelimiterConfig {
	Literal { value: String },
	Pattern { value: String },
}

impl DelimiterConfig {
	pub fn literal(value: impl Into<String>) -> Self {
		Self::Literal {
			value: value.into(),
		}
	}

	pub fn pattern(value: impl Into<String>) -> Self {
		Self::Pattern {
			value: value.into(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum RuleConfig {
	/// Literal start and end. Without an `end`, `stop_at_delimiter` must be set
	/// and the rule stays open until the next delimiter.
	Literal {
		start: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		end: Option<String>,
		#[serde(default)]
		stop_at_delimiter: bool,
	},
	/// Pattern start; the end may refer to start groups with `\1` .. `\9`.
	Pattern { start: String, end: String },
}

impl RuleConfig {
	pub fn literal(start: impl Into<String>, end: impl Into<String>) -> Self {
		Self::Literal {
			start: start.into(),
			end: Some(end.into()),
			stop_at_delimiter: false,
		}
	}

	/// A literal rule closed by the next delimiter, such as a comment running
	/// to the end of the line.
	pub fn until_delimiter(start: impl Into<String>) -> Self {
		Self::Literal {
			start: start.into(),
			end: None,
			stop_at_delimiter: true,
		}
	}

	pub fn pattern(start: impl Into<String>, end: impl Into<String>) -> Self {
		Self::Pattern {
			start: start.into(),
			end: end.into(),
		}
	}
}

/// Per-scan options.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitOptions {
	/// Trim surrounding whitespace from every fragment. Fragments that are
	/// empty after trimming are dropped.
	#[serde(default)]
	pub trim: bool,
}

impl SplitOptions {
	pub fn trimmed() -> Self {
		Self { trim: true }
	}
}
