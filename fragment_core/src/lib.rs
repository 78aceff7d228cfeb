//! `fragment_core` splits scripts into top-level fragments (statements or
//! lines) in a single pass, without ever cutting through a quoted string, a
//! comment, a heredoc, a dollar-quoted block or any other region described by
//! a rule.
//!
//! ## Scanning
//!
//! ```text
//! input bytes
//!   → append to buffer
//!   → no active rule?   try each rule start against the buffer tail
//!   → active rule?      try its end against the buffer tail
//!   → otherwise         try each delimiter against the buffer tail
//!   → delimiter found   emit buffer as a fragment, clear it
//! ```
//!
//! Every test is a suffix test: literals must end the buffer and patterns are
//! anchored to its end, so a match always means "completed by the byte just
//! scanned". At most one rule is active at a time and rules never nest.
//!
//! ## Key Types
//!
//! - [`LanguageConfig`] - Declarative delimiters and rules, deserializable
//!   with serde.
//! - [`Language`] - A validated, compiled configuration. Immutable and
//!   shareable between threads.
//! - [`Rule`] / [`Delimiter`] - Literal or pattern variants of each marker.
//! - [`ActiveRule`] - A started rule together with the groups its start
//!   pattern captured.
//! - [`Scanner`] - The per-scan state machine, fed one byte at a time.
//! - [`Fragments`] - Streaming iterator over the fragments of a reader.
//!
//! ## Quick Start
//!
//! ```rust
//! use fragment_core::DelimiterConfig;
//! use fragment_core::Language;
//! use fragment_core::LanguageConfig;
//! use fragment_core::RuleConfig;
//! use fragment_core::SplitOptions;
//!
//! let language = Language::new(LanguageConfig::new(
//! 	[DelimiterConfig::literal(";")],
//! 	[
//! 		RuleConfig::literal("'", "'"),
//! 		RuleConfig::pattern(r"(\$([a-zA-Z0-9_]*)\$)", r"\$\2\$"),
//! 	],
//! ))
//! .unwrap();
//!
//! let fragments = language.split("SELECT ';'; SELECT $x$;$x$;", SplitOptions::trimmed());
//! assert_eq!(fragments, ["SELECT ';';", "SELECT $x$;$x$;"]);
//! ```

pub use config::*;
pub use delimiter::*;
pub use error::*;
pub use language::*;
pub use matcher::*;
pub use rule::*;
pub use scanner::*;
pub use template::*;

mod config;
mod delimiter;
#[allow(unused_assignments)]
mod error;
mod language;
mod matcher;
mod rule;
mod scanner;
mod template;

#[cfg(test)]
mod __fixtures;
