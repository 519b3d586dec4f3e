use logos::Logos;

use crate::tokens::Token;
use crate::tokens::TokenCategory;
use crate::tokens::is_keyword;

/// Raw lexemes produced by logos in a single left-to-right pass over a
/// code sample. Anything the lexer cannot match surfaces as an error span
/// and stays residual text.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
	BlockComment,
	#[regex(r"//[^\n]*", allow_greedy = true)]
	SlashComment,
	#[regex(r"#[^\n]*", allow_greedy = true)]
	HashComment,
	#[regex(r#""([^"\\\n]|\\.)*""#)]
	DoubleQuoted,
	#[regex(r"'([^'\\\n]|\\.)*'")]
	SingleQuoted,
	#[regex(r"`([^`\\]|\\.)*`")]
	Template,
	#[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
	Annotation,
	#[regex(r"0[xX][0-9a-fA-F]+")]
	HexNumber,
	#[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
	Number,
	#[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
	Ident,
}

/// Walks the raw lexeme stream and decides which spans to claim as tokens.
/// Identifiers are the only context-dependent case: keyword membership and
/// a trailing `(` are resolved here rather than in the lexer rules.
struct TokenWalker<'a> {
	/// The text being scanned.
	source: &'a str,
	/// The collected raw lexemes and their byte spans.
	raw_tokens: Vec<(Result<RawToken, ()>, std::ops::Range<usize>)>,
	/// Claimed spans, in source order.
	tokens: Vec<Token>,
}

impl<'a> TokenWalker<'a> {
	fn new(source: &'a str) -> Self {
		let raw_tokens: Vec<_> = RawToken::lexer(source).spanned().collect();

		Self {
			source,
			raw_tokens,
			tokens: vec![],
		}
	}

	/// Claim a span for a category.
	fn claim(&mut self, category: TokenCategory, span: std::ops::Range<usize>) {
		self.tokens.push(Token { category, span });
	}

	/// Whether the byte directly after `span` is an opening parenthesis.
	fn followed_by_paren(&self, span: &std::ops::Range<usize>) -> bool {
		self.source.as_bytes().get(span.end) == Some(&b'(')
	}

	fn process(mut self) -> Vec<Token> {
		let raw_tokens = std::mem::take(&mut self.raw_tokens);

		for (result, span) in raw_tokens {
			// Unrecognized bytes stay residual.
			let Ok(raw) = result else {
				continue;
			};

			match raw {
				RawToken::BlockComment => self.claim(TokenCategory::BlockComment, span),
				RawToken::SlashComment | RawToken::HashComment => {
					self.claim(TokenCategory::LineComment, span);
				}
				RawToken::DoubleQuoted | RawToken::SingleQuoted | RawToken::Template => {
					self.claim(TokenCategory::Str, span);
				}
				RawToken::Annotation => self.claim(TokenCategory::Annotation, span),
				RawToken::HexNumber | RawToken::Number => self.claim(TokenCategory::Number, span),
				RawToken::Ident => {
					let ident = &self.source[span.clone()];
					if is_keyword(ident) {
						self.claim(TokenCategory::Keyword, span);
					} else if self.followed_by_paren(&span) {
						self.claim(TokenCategory::Call, span);
					}
					// Plain identifiers stay residual.
				}
			}
		}

		self.tokens
	}
}

/// Scan a code sample into claimed token spans.
///
/// The scan is a single pass: each byte belongs to at most one token, spans
/// are strictly increasing, and concatenating token spans with the residual
/// text between them reconstructs the input exactly. All state is local to
/// the call.
pub fn scan(text: &str) -> Vec<Token> {
	TokenWalker::new(text).process()
}
