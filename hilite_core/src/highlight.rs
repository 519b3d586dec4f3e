use crate::html::escape_text;
use crate::lexer::scan;
use crate::tokens::Token;

/// Render a code sample as escaped markup with each classified span wrapped
/// in a `<span class="{prefix}-{category}">` element. Residual text between
/// spans is escaped but otherwise untouched, so stripping the inserted tags
/// and decoding entities reproduces the input exactly.
pub fn highlight(text: &str, class_prefix: &str) -> String {
	render(text, &scan(text), class_prefix)
}

/// Render an already-computed scan. `tokens` must be the scan of `text`.
pub fn render(text: &str, tokens: &[Token], class_prefix: &str) -> String {
	let mut out = String::with_capacity(text.len() + tokens.len() * 32);
	let mut cursor = 0;

	for token in tokens {
		out.push_str(&escape_text(&text[cursor..token.span.start]));
		out.push_str(&format!(
			"<span class=\"{class_prefix}-{}\">{}</span>",
			token.category.class_suffix(),
			escape_text(token.text(text)),
		));
		cursor = token.span.end;
	}

	out.push_str(&escape_text(&text[cursor..]));
	out
}
