use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use tracing::trace;

use crate::block::BlockId;
use crate::block::CodeBlock;
use crate::block::EnhancedBlock;
use crate::config::HiliteConfig;
use crate::detect::detect;
use crate::highlight::highlight;
use crate::html::decode_entities;
use crate::html::escape_attr;
use crate::html::escape_text;
use crate::html::strip_tags;

static PRE_REGION: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?is)<pre\b[^>]*>.*?</pre\s*>").expect("valid region pattern"));
static PRE_OPEN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?is)^<pre\b([^>]*)>").expect("valid open pattern"));
static CODE_OPEN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?is)<code\b([^>]*)>").expect("valid open pattern"));
static CODE_CLOSE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?i)</code\s*>").expect("valid close pattern"));
static CLASS_HINT: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(?i)\b(?:language|lang)-([A-Za-z0-9_+#.-]+)").expect("valid hint pattern")
});

/// Result of one enhancement pass: the rewritten fragment plus a record for
/// each block enhanced during this pass. A pass over already-enhanced
/// markup returns the input unchanged and an empty record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhanced {
	/// The rewritten fragment.
	pub html: String,
	/// Newly enhanced blocks, in document order.
	pub blocks: Vec<EnhancedBlock>,
}

/// Walks a rendered fragment, finds un-enhanced `<pre><code>` blocks, and
/// wraps each in header chrome with a detected language label, a copy
/// control, and highlighted content.
#[derive(Debug, Clone, Default)]
pub struct Enhancer {
	config: HiliteConfig,
}

impl Enhancer {
	pub fn new(config: HiliteConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &HiliteConfig {
		&self.config
	}

	/// Run one enhancement pass over a fragment.
	///
	/// Each candidate region is processed independently; a malformed or
	/// already-enhanced region is emitted unchanged and never aborts its
	/// siblings. The processed-id set is owned by this call, so the
	/// enhancer itself carries no state between passes.
	pub fn enhance(&self, html: &str) -> Enhanced {
		let mut out = String::with_capacity(html.len() * 2);
		let mut blocks: Vec<EnhancedBlock> = vec![];
		let mut processed: HashSet<BlockId> = HashSet::new();
		let mut cursor = 0;

		for region in PRE_REGION.find_iter(html) {
			out.push_str(&html[cursor..region.start()]);
			cursor = region.end();

			match self.enhance_region(region.as_str(), blocks.len(), &mut processed) {
				Some((markup, record)) => {
					trace!(label = %record.label, "enhanced code block");
					out.push_str(&markup);
					blocks.push(record);
				}
				None => out.push_str(region.as_str()),
			}
		}

		out.push_str(&html[cursor..]);

		Enhanced { html: out, blocks }
	}

	/// Process one `<pre>...</pre>` region. `None` leaves it untouched.
	fn enhance_region(
		&self,
		region: &str,
		ordinal: usize,
		processed: &mut HashSet<BlockId>,
	) -> Option<(String, EnhancedBlock)> {
		let pre_open = PRE_OPEN.captures(region)?;
		let pre_attrs = pre_open.get(1).map_or("", |m| m.as_str());

		if pre_attrs.contains("data-enhanced") {
			trace!("block already enhanced, skipping");
			return None;
		}

		let Some(code_open) = CODE_OPEN.captures(region) else {
			debug!("candidate block has no inner code element, skipping");
			return None;
		};
		let code_attrs = code_open.get(1).map_or("", |m| m.as_str());
		let inner_start = code_open.get(0)?.end();
		let inner_end = CODE_CLOSE.find_iter(region).last()?.start();
		if inner_end < inner_start {
			debug!("candidate block has a malformed code element, skipping");
			return None;
		}
		let inner = &region[inner_start..inner_end];

		// Capture the raw text before tokenization touches the markup; the
		// copy control is bound to exactly this value.
		let raw_text = decode_entities(&strip_tags(inner));

		let id = BlockId::new(&raw_text, ordinal);
		if !processed.insert(id) {
			return None;
		}

		let hint = class_hint(code_attrs).or_else(|| class_hint(pre_attrs));
		let block = CodeBlock::new(raw_text.clone(), hint);
		let label = detect(&block, &self.config.fallback_label);

		// Externally pre-highlighted content keeps its markup; only plain
		// content is tokenized.
		let marker = format!("class=\"{}-", self.config.class_prefix);
		let body = if inner.contains(&marker) {
			inner.to_string()
		} else {
			highlight(&raw_text, &self.config.class_prefix)
		};

		let markup = self.wrap_with_chrome(pre_attrs, code_attrs, &body, &label, &raw_text);

		Some((markup, EnhancedBlock {
			id,
			label,
			raw_text,
		}))
	}

	/// Build the wrapper: header row with label and copy control, then the
	/// original block re-parented underneath, stamped with the enhancement
	/// marker.
	fn wrap_with_chrome(
		&self,
		pre_attrs: &str,
		code_attrs: &str,
		body: &str,
		label: &str,
		raw_text: &str,
	) -> String {
		let stem = &self.config.wrapper_class;
		let mut out = String::with_capacity(body.len() + raw_text.len() + 256);

		out.push_str(&format!("<figure class=\"{stem}\" data-enhanced=\"true\">"));
		out.push_str(&format!(
			"<figcaption class=\"{stem}-header\"><span class=\"{stem}-lang\">{}</span>",
			escape_text(label)
		));
		if self.config.copy_button {
			out.push_str(&format!(
				"<button type=\"button\" class=\"{stem}-copy\" data-copy-text=\"{}\">Copy</button>",
				escape_attr(raw_text)
			));
		}
		out.push_str("</figcaption>");
		out.push_str(&format!(
			"<pre{pre_attrs} data-enhanced=\"true\"><code{code_attrs}>{body}</code></pre>"
		));
		out.push_str("</figure>");

		out
	}
}

/// Extract the language token from a `language-*`/`lang-*` class, verbatim.
fn class_hint(attrs: &str) -> Option<String> {
	CLASS_HINT
		.captures(attrs)
		.map(|captures| captures[1].to_string())
}
