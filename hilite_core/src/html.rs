//! Small text utilities for working with fragment markup: entity escaping
//! and decoding, plus tag stripping for raw-text capture.

/// Escape text content for element bodies.
pub fn escape_text(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			'\n' => out.push_str("&#10;"),
			_ => out.push(ch),
		}
	}
	out
}

/// Decode the named entities produced by renderers and escapers, plus
/// decimal and hexadecimal numeric references. Unrecognized `&...;`
/// sequences are left untouched.
pub fn decode_entities(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(idx) = rest.find('&') {
		out.push_str(&rest[..idx]);
		rest = &rest[idx..];

		// Entity bodies are short ASCII; search a bounded byte window so
		// multibyte text after `&` can't land a slice mid-character.
		let window = &rest.as_bytes()[..rest.len().min(12)];
		let Some(end) = window.iter().position(|&byte| byte == b';') else {
			out.push('&');
			rest = &rest[1..];
			continue;
		};

		let entity = &rest[1..end];
		let decoded = match entity {
			"amp" => Some('&'),
			"lt" => Some('<'),
			"gt" => Some('>'),
			"quot" => Some('"'),
			"apos" => Some('\''),
			_ => decode_numeric(entity),
		};

		match decoded {
			Some(ch) => {
				out.push(ch);
				rest = &rest[end + 1..];
			}
			None => {
				out.push('&');
				rest = &rest[1..];
			}
		}
	}

	out.push_str(rest);
	out
}

/// Decode a `#NN` or `#xNN` numeric reference body.
fn decode_numeric(entity: &str) -> Option<char> {
	let body = entity.strip_prefix('#')?;
	let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
		u32::from_str_radix(hex, 16).ok()?
	} else {
		body.parse::<u32>().ok()?
	};
	char::from_u32(code)
}

/// Remove `<...>` tag runs, keeping only text content. An unterminated tag
/// swallows the remainder of the input.
pub fn strip_tags(markup: &str) -> String {
	let mut out = String::with_capacity(markup.len());
	let mut rest = markup;

	while let Some(idx) = rest.find('<') {
		out.push_str(&rest[..idx]);
		match rest[idx..].find('>') {
			Some(close) => rest = &rest[idx + close + 1..],
			None => return out,
		}
	}

	out.push_str(rest);
	out
}
