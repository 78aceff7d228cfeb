use crate::Literal;
use crate::Pattern;

/// A marker that ends the current fragment when no rule is holding the
/// scanner open.
#[derive(Debug, Clone)]
pub enum Delimiter {
	/// Ends the fragment when the buffer ends with the literal.
	Literal(Literal),
	/// Ends the fragment when the pattern matches a suffix of the buffer.
	Pattern(Pattern),
}

impl Delimiter {
	pub fn is_detected(&self, buffer: &[u8]) -> bool {
		match self {
			Self::Literal(literal) => literal.is_suffix_of(buffer),
			Self::Pattern(pattern) => pattern.is_suffix_of(buffer),
		}
	}
}
