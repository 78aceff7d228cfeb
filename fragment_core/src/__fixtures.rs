use crate::DelimiterConfig;
use crate::Language;
use crate::LanguageConfig;
use crate::RuleConfig;

pub(crate) fn sql_config() -> LanguageConfig {
	LanguageConfig::new(
		[
			DelimiterConfig::literal(";"),
			DelimiterConfig::pattern(r"\\(g|gdesc|gexec|gx|crosstabview).*\n"),
		],
		[
			RuleConfig::literal("--", "\n"),
			RuleConfig::literal("/*", "*/"),
			RuleConfig::literal("'", "'"),
			RuleConfig::literal("\"", "\""),
			RuleConfig::pattern("(?i)BEGIN", "(?i)END|COMMIT|ROLLBACK"),
			RuleConfig::pattern(r"(\$([a-zA-Z0-9_]*)\$)", r"\$\2\$"),
		],
	)
}

pub(crate) fn sql() -> Language {
	Language::new(sql_config()).unwrap_or_else(|e| panic!("sql fixture: {e}"))
}

pub(crate) fn shell() -> Language {
	let config = LanguageConfig::new(
		[DelimiterConfig::literal(";"), DelimiterConfig::literal("\n")],
		[
			RuleConfig::literal("'", "'"),
			RuleConfig::literal("\"", "\""),
			RuleConfig::literal("\\", "\n"),
			RuleConfig::until_delimiter("#"),
			RuleConfig::pattern(r#"<<-?\s*"?'?([^"'<>\s\n]+).*\n"#, r"\n\1"),
		],
	);

	Language::new(config).unwrap_or_else(|e| panic!("shell fixture: {e}"))
}

pub(crate) fn markup() -> Language {
	let config = LanguageConfig::new(
		[DelimiterConfig::literal("\n")],
		[RuleConfig::pattern(r"(?i)<(\w+)>", r"(?i)</\1>")],
	);

	Language::new(config).unwrap_or_else(|e| panic!("markup fixture: {e}"))
}

/// Batch separator in the style of `GO` lines, to exercise literal case
/// folding.
pub(crate) fn batches(case_insensitive: bool) -> Language {
	let config = LanguageConfig::new([DelimiterConfig::literal(r"\ngo")], [])
		.case_insensitive(case_insensitive);

	Language::new(config).unwrap_or_else(|e| panic!("batch fixture: {e}"))
}

pub(crate) fn split_trimmed(language: &Language, input: &str) -> Vec<String> {
	language.split(input, crate::SplitOptions::trimmed())
}
