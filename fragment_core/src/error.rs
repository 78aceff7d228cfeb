use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum FragmentError {
	#[error(transparent)]
	#[diagnostic(code(fragment::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid pattern `{pattern}`: {reason}")]
	#[diagnostic(
		code(fragment::invalid_pattern),
		help("patterns use the `regex` crate syntax and are anchored to the end of the scanned text")
	)]
	InvalidPattern { pattern: String, reason: String },

	#[error("empty literal for {role}")]
	#[diagnostic(
		code(fragment::empty_literal),
		help("an empty literal matches after every byte; use `stop_at_delimiter` for rules without a terminator")
	)]
	EmptyLiteral { role: &'static str },

	#[error("invalid rule starting with `{start}`: {reason}")]
	#[diagnostic(
		code(fragment::invalid_rule),
		help("a literal rule needs either an `end` or `stop_at_delimiter = true`, not both")
	)]
	InvalidRule { start: String, reason: String },

	#[error("failed to parse language table: {0}")]
	#[diagnostic(
		code(fragment::config_parse),
		help("check that the table is valid TOML with `delimiters` and `rules` arrays")
	)]
	ConfigParse(String),

	#[error("unknown language: `{0}`")]
	#[diagnostic(
		code(fragment::unknown_language),
		help("available languages: pgsql, shell, xml")
	)]
	UnknownLanguage(String),
}

pub type FragmentResult<T> = Result<T, FragmentError>;
