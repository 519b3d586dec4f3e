use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::CodeBlock;

/// Ordered content heuristics. Each pattern is tried against the block's
/// raw text in order and the first match wins. Install/import shapes come
/// before the shell-prompt shape so `pip install` lines resolve as shell
/// commands via the install rule rather than the bare prompt rule, and
/// `import ...` lines resolve to their language.
static HEURISTICS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
	[
		(
			r"(?m)^\s*(npm|yarn|pnpm|pip3?|cargo|brew|apt|apt-get)\s+(install|add|i)\b",
			"bash",
		),
		(
			r#"(?m)^\s*(import\s+.+\s+from\s+['"]|export\s+(default\s+)?(function|const|class)\b|const\s+\w+\s*=\s*require\()"#,
			"javascript",
		),
		(
			r"(?m)^\s*(interface\s+\w+\s*\{|type\s+\w+\s*=|enum\s+\w+\s*\{)",
			"typescript",
		),
		(
			r"(?m)^\s*(from\s+[\w.]+\s+import\s+|import\s+[\w.]+(\s+as\s+\w+)?$|def\s+\w+\s*\()",
			"python",
		),
		(r"(?m)^\s*\$\s+\S", "bash"),
		(r"(?i)^\s*(<!doctype\s+html|<html\b|<[a-z][a-z0-9-]*(\s[^>]*)?>)", "html"),
		(
			r"(?im)^\s*(select\s.+\sfrom\s|insert\s+into\s|create\s+table\s|update\s.+\sset\s)",
			"sql",
		),
		(r#"(?s)^\s*\{\s*"[^"]*"\s*:"#, "json"),
		(
			r"(?m)^\s*(fn\s+\w+|let\s+mut\s+|pub\s+(fn|struct|enum|trait)\b|impl\s+\w)",
			"rust",
		),
		(r"(?m)^\s*(func\s+\w+|package\s+\w+$)", "go"),
		(r#"(?m)^\s*#include\s*[<"]"#, "c"),
	]
	.into_iter()
	.map(|(pattern, label)| (Regex::new(pattern).expect("valid heuristic pattern"), label))
	.collect()
});

/// Resolve a display label for a code block.
///
/// An explicit hint always wins, verbatim. Otherwise the content heuristics
/// are consulted in order, and `fallback` is returned when nothing matches.
/// Deterministic, side-effect free, and never fails.
pub fn detect(block: &CodeBlock, fallback: &str) -> String {
	if let Some(hint) = &block.hint {
		return hint.clone();
	}

	detect_from_text(&block.text)
		.map_or_else(|| fallback.to_string(), str::to_string)
}

/// Apply the content heuristics alone; `None` when no shape matches.
pub fn detect_from_text(text: &str) -> Option<&'static str> {
	HEURISTICS
		.iter()
		.find(|(pattern, _)| pattern.is_match(text))
		.map(|(_, label)| *label)
}
