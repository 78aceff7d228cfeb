//! Ready-made rule tables for [`fragment_core`].
//!
//! Each table is a TOML document embedded in the crate and compiled into a
//! [`Language`] the first time it is used. The compiled languages hold no
//! scanning state and are shared by every caller.
//!
//! ```rust
//! use fragment_core::SplitOptions;
//!
//! let statements = fragment_languages::pgsql().split(
//! 	"SELECT 1; DO $$ BEGIN PERFORM 1; END $$;",
//! 	SplitOptions::trimmed(),
//! );
//! assert_eq!(statements, ["SELECT 1;", "DO $$ BEGIN PERFORM 1; END $$;"]);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use fragment_core::FragmentError;
use fragment_core::FragmentResult;
use fragment_core::Language;
use fragment_core::LanguageConfig;
use tracing::debug;

/// The built-in languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
	/// PostgreSQL scripts as read by psql: statements end with `;` or a
	/// query-buffer command such as `\g`.
	PgSql,
	/// Shell scripts: commands end with `;` or a newline.
	Shell,
	/// Line-oriented markup: elements spanning several lines stay together.
	Xml,
}

impl Dialect {
	pub const ALL: [Self; 3] = [Self::PgSql, Self::Shell, Self::Xml];

	pub fn name(self) -> &'static str {
		match self {
			Self::PgSql => "pgsql",
			Self::Shell => "shell",
			Self::Xml => "xml",
		}
	}

	/// The embedded TOML table.
	pub fn source(self) -> &'static str {
		match self {
			Self::PgSql => include_str!("../languages/pgsql.toml"),
			Self::Shell => include_str!("../languages/shell.toml"),
			Self::Xml => include_str!("../languages/xml.toml"),
		}
	}

	pub fn config(self) -> FragmentResult<LanguageConfig> {
		toml::from_str(self.source()).map_err(|e| FragmentError::ConfigParse(e.to_string()))
	}

	/// Parse and compile a fresh copy of the table.
	pub fn load(self) -> FragmentResult<Language> {
		debug!(dialect = self.name(), "loading built-in language");
		Language::new(self.config()?)
	}

	/// The shared, compiled language.
	pub fn language(self) -> &'static Language {
		match self {
			Self::PgSql => &PGSQL,
			Self::Shell => &SHELL,
			Self::Xml => &XML,
		}
	}
}

impl fmt::Display for Dialect {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Dialect {
	type Err = FragmentError;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		match name.to_ascii_lowercase().as_str() {
			"pgsql" | "postgresql" | "postgres" | "sql" => Ok(Self::PgSql),
			"shell" | "sh" | "bash" => Ok(Self::Shell),
			"xml" | "markup" | "html" => Ok(Self::Xml),
			_ => Err(FragmentError::UnknownLanguage(name.to_string())),
		}
	}
}

// The embedded tables are covered by this crate's tests, so a failure here
// can only come from editing them.
fn compile(dialect: Dialect) -> Language {
	dialect
		.load()
		.unwrap_or_else(|e| panic!("built-in `{dialect}` table is invalid: {e}"))
}

static PGSQL: LazyLock<Language> = LazyLock::new(|| compile(Dialect::PgSql));
static SHELL: LazyLock<Language> = LazyLock::new(|| compile(Dialect::Shell));
static XML: LazyLock<Language> = LazyLock::new(|| compile(Dialect::Xml));

/// PostgreSQL statements.
pub fn pgsql() -> &'static Language {
	Dialect::PgSql.language()
}

/// Shell commands.
pub fn shell() -> &'static Language {
	Dialect::Shell.language()
}

/// Markup lines and multi-line elements.
pub fn xml() -> &'static Language {
	Dialect::Xml.language()
}

#[cfg(test)]
mod __tests;
