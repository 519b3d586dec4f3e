use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// An immutable code sample lifted out of a rendered fragment: the decoded
/// source text plus the explicit language hint, when the markup carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
	/// The raw source text, tags stripped and entities decoded.
	pub text: String,
	/// Language token from a `language-*`/`lang-*` class, verbatim.
	pub hint: Option<String>,
}

impl CodeBlock {
	pub fn new(text: impl Into<String>, hint: Option<String>) -> Self {
		Self {
			text: text.into(),
			hint,
		}
	}
}

/// Identity of a code block within an enhancement pass. Derived from the
/// block's raw text and its ordinal position, so identical twin blocks in
/// one fragment still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(u64);

impl BlockId {
	pub fn new(text: &str, ordinal: usize) -> Self {
		let mut hasher = DefaultHasher::new();
		text.hash(&mut hasher);
		ordinal.hash(&mut hasher);
		Self(hasher.finish())
	}
}

/// Record of one block enhanced during a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancedBlock {
	/// The block's identity within the pass.
	pub id: BlockId,
	/// The display label the detector settled on.
	pub label: String,
	/// The raw text captured before tokenization. This exact value feeds
	/// the copy affordance.
	pub raw_text: String,
}
