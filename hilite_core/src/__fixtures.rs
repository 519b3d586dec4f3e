use crate::html::escape_text;

pub(crate) const PYTHON_SNIPPET: &str =
	"import numpy as np\n\ndef mean(values):\n\treturn sum(values) / len(values)\n";

pub(crate) const JAVASCRIPT_SNIPPET: &str =
	"import { mount } from 'svelte';\n\nexport const app = mount();\n";

pub(crate) const RUST_SNIPPET: &str =
	"fn main() {\n\tlet mut total = 0xFF;\n\ttotal += 1.5e3 as i64; // tally\n}\n";

/// A fragment with one plain, hint-less code block surrounded by prose.
pub(crate) fn plain_fragment(code: &str) -> String {
	format!(
		"<p>Example:</p><pre><code>{}</code></pre><p>Done.</p>",
		escape_text(code)
	)
}

/// A fragment whose code element carries an explicit language class.
pub(crate) fn hinted_fragment(lang: &str, code: &str) -> String {
	format!(
		"<pre><code class=\"language-{lang}\">{}</code></pre>",
		escape_text(code)
	)
}

/// A fragment with two identical hint-less blocks.
pub(crate) fn twin_fragment(code: &str) -> String {
	let escaped = escape_text(code);
	format!("<pre><code>{escaped}</code></pre><hr/><pre><code>{escaped}</code></pre>")
}
