use fragment_core::DelimiterConfig;
use fragment_core::RuleConfig;
use rstest::rstest;
use similar_asserts::assert_eq;

use super::*;

#[rstest]
#[case::pgsql("pgsql", Dialect::PgSql)]
#[case::postgresql("PostgreSQL", Dialect::PgSql)]
#[case::sql("sql", Dialect::PgSql)]
#[case::shell("shell", Dialect::Shell)]
#[case::sh("sh", Dialect::Shell)]
#[case::xml("xml", Dialect::Xml)]
#[case::markup("markup", Dialect::Xml)]
fn parse_dialect_names(#[case] name: &str, #[case] expected: Dialect) -> FragmentResult<()> {
	assert_eq!(name.parse::<Dialect>()?, expected);

	Ok(())
}

#[test]
fn unknown_dialect_is_an_error() {
	let result = "cobol".parse::<Dialect>();
	assert!(matches!(result, Err(FragmentError::UnknownLanguage(name)) if name == "cobol"));
}

#[test]
fn display_round_trips_through_from_str() -> FragmentResult<()> {
	for dialect in Dialect::ALL {
		assert_eq!(dialect.to_string().parse::<Dialect>()?, dialect);
	}

	Ok(())
}

#[rstest]
#[case::pgsql(Dialect::PgSql, 2, 6)]
#[case::shell(Dialect::Shell, 2, 5)]
#[case::xml(Dialect::Xml, 1, 1)]
fn embedded_tables_compile(
	#[case] dialect: Dialect,
	#[case] delimiters: usize,
	#[case] rules: usize,
) -> FragmentResult<()> {
	let language = dialect.load()?;
	assert_eq!(language.delimiters().len(), delimiters);
	assert_eq!(language.rules().len(), rules);
	assert!(!language.is_case_insensitive());

	let shared = dialect.language();
	assert_eq!(shared.rules().len(), rules);

	Ok(())
}

#[test]
fn pgsql_table_lists_rules_in_precedence_order() -> FragmentResult<()> {
	let config = Dialect::PgSql.config()?;

	assert_eq!(config.delimiters, [
		DelimiterConfig::literal(";"),
		DelimiterConfig::pattern(r"\\(g|gdesc|gexec|gx|crosstabview).*\n"),
	]);
	assert_eq!(config.rules, [
		RuleConfig::literal("--", "\n"),
		RuleConfig::literal("/*", "*/"),
		RuleConfig::literal("'", "'"),
		RuleConfig::literal("\"", "\""),
		RuleConfig::pattern("(?i)BEGIN", "(?i)END|COMMIT|ROLLBACK"),
		RuleConfig::pattern(r"(\$([a-zA-Z0-9_]*)\$)", r"\$\2\$"),
	]);

	Ok(())
}

#[test]
fn shell_table_lists_rules_in_precedence_order() -> FragmentResult<()> {
	let config = Dialect::Shell.config()?;

	assert_eq!(config.delimiters, [
		DelimiterConfig::literal(";"),
		DelimiterConfig::literal("\n"),
	]);
	assert_eq!(config.rules, [
		RuleConfig::literal("'", "'"),
		RuleConfig::literal("\"", "\""),
		RuleConfig::literal("\\", "\n"),
		RuleConfig::until_delimiter("#"),
		RuleConfig::pattern(r#"<<-?\s*"?'?([^"'<>\s\n]+).*\n"#, r"\n\1"),
	]);

	Ok(())
}
