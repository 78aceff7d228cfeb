use std::io::Read;

use tracing::debug;

use crate::ActiveRule;
use crate::Delimiter;
use crate::DelimiterConfig;
use crate::EndTemplate;
use crate::FragmentError;
use crate::FragmentResult;
use crate::Fragments;
use crate::LanguageConfig;
use crate::Literal;
use crate::LiteralRule;
use crate::Pattern;
use crate::PatternRule;
use crate::Rule;
use crate::RuleConfig;
use crate::Scanner;
use crate::SplitOptions;

/// A compiled language: its delimiters and rules in configuration order.
///
/// A `Language` holds no scanning state. Captures live in the [`ActiveRule`]
/// returned by each start match, so one instance can serve any number of
/// concurrent scans.
#[derive(Debug, Clone)]
pub struct Language {
	delimiters: Vec<Delimiter>,
	rules: Vec<Rule>,
	case_insensitive: bool,
}

impl Language {
	/// Compile a configuration. Every literal and pattern is validated here so
	/// that a scan can never fail on a malformed table.
	pub fn new(config: LanguageConfig) -> FragmentResult<Self> {
		let LanguageConfig {
			case_insensitive,
			delimiters,
			rules,
		} = config;

		let delimiters = delimiters
			.into_iter()
			.map(|delimiter| compile_delimiter(delimiter, case_insensitive))
			.collect::<FragmentResult<Vec<_>>>()?;

		let rules = rules
			.into_iter()
			.map(|rule| compile_rule(rule, case_insensitive))
			.collect::<FragmentResult<Vec<_>>>()?;

		debug!(
			delimiters = delimiters.len(),
			rules = rules.len(),
			case_insensitive,
			"compiled language"
		);

		Ok(Self {
			delimiters,
			rules,
			case_insensitive,
		})
	}

	pub fn delimiters(&self) -> &[Delimiter] {
		&self.delimiters
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn is_case_insensitive(&self) -> bool {
		self.case_insensitive
	}

	/// Split `input` into fragments in scan order.
	#[tracing::instrument(level = "debug", skip_all, fields(len = input.as_ref().len()))]
	pub fn split(&self, input: impl AsRef<str>, options: SplitOptions) -> Vec<String> {
		let mut scanner = Scanner::new(self, options);
		let mut fragments: Vec<String> = input
			.as_ref()
			.bytes()
			.filter_map(|byte| scanner.push(byte))
			.collect();

		fragments.extend(scanner.finish());
		fragments
	}

	/// Stream fragments out of `reader` as soon as each one is complete.
	pub fn fragments<R: Read>(&self, reader: R, options: SplitOptions) -> Fragments<'_, R> {
		Fragments::new(self, reader, options)
	}

	/// The first rule, in configuration order, that starts at the end of
	/// `buffer`.
	pub fn start_rule(&self, buffer: &[u8]) -> Option<ActiveRule<'_>> {
		self.rules.iter().find_map(|rule| rule.start_matches(buffer))
	}

	/// True when any delimiter ends at the end of `buffer`.
	pub fn detects_delimiter(&self, buffer: &[u8]) -> bool {
		self.delimiters
			.iter()
			.any(|delimiter| delimiter.is_detected(buffer))
	}
}

impl TryFrom<LanguageConfig> for Language {
	type Error = FragmentError;

	fn try_from(config: LanguageConfig) -> FragmentResult<Self> {
		Self::new(config)
	}
}

fn compile_delimiter(config: DelimiterConfig, case_insensitive: bool) -> FragmentResult<Delimiter> {
	match config {
		DelimiterConfig::Literal { value } => {
			Ok(Delimiter::Literal(Literal::new(
				&value,
				case_insensitive,
				"delimiter",
			)?))
		}
		DelimiterConfig::Pattern { value } => {
			Ok(Delimiter::Pattern(Pattern::new(&value, case_insensitive)?))
		}
	}
}

fn compile_rule(config: RuleConfig, case_insensitive: bool) -> FragmentResult<Rule> {
	match config {
		RuleConfig::Literal {
			start,
			end,
			stop_at_delimiter,
		} => {
			let end = match (end, stop_at_delimiter) {
				(Some(end), false) => Some(Literal::new(&end, case_insensitive, "rule end")?),
				(None, true) => None,
				(Some(_), true) => {
					return Err(FragmentError::InvalidRule {
						start,
						reason: "`end` is set together with `stop_at_delimiter`".to_string(),
					});
				}
				(None, false) => {
					return Err(FragmentError::InvalidRule {
						start,
						reason: "missing `end`".to_string(),
					});
				}
			};

			Ok(Rule::Literal(LiteralRule {
				start: Literal::new(&start, case_insensitive, "rule start")?,
				end,
			}))
		}
		RuleConfig::Pattern { start, end } => {
			let start = Pattern::new(&start, case_insensitive)?;
			let end = EndTemplate::new(&end, case_insensitive)?;

			if let Some(max_group) = end.max_group() {
				let groups = start.group_count();
				if max_group >= groups {
					debug!(
						start = start.as_str(),
						end = end.as_str(),
						max_group,
						groups,
						"end pattern refers to a group the start pattern never captures"
					);
				}
			}

			Ok(Rule::Pattern(PatternRule { start, end }))
		}
	}
}
