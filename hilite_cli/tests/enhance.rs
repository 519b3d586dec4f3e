mod common;

use hilite_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

#[test]
fn enhance_wraps_code_blocks() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("page.html");
	std::fs::write(
		&input,
		"<h1>Demo</h1><pre><code>fn main() {}</code></pre>",
	)?;

	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("enhance")
		.arg(&input)
		.assert()
		.success()
		.stdout(
			predicates::str::contains("data-enhanced")
				.and(predicates::str::contains("hl-keyword"))
				.and(predicates::str::contains("codeblock-lang\">rust")),
		);

	Ok(())
}

#[test]
fn enhance_reads_stdin() -> AnyEmptyResult {
	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("enhance")
		.write_stdin("<pre><code># note\nx = 5</code></pre>")
		.assert()
		.success()
		.stdout(
			predicates::str::contains("hl-comment").and(predicates::str::contains("hl-number")),
		);

	Ok(())
}

#[test]
fn enhance_twice_is_a_no_op() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("page.html");
	let enhanced = tmp.path().join("enhanced.html");
	std::fs::write(&input, "<pre><code>let total = 5;</code></pre>")?;

	let mut first = common::hilite_cmd();
	let _ = first
		.arg("enhance")
		.arg(&input)
		.arg("--output")
		.arg(&enhanced)
		.assert()
		.success()
		.stdout(predicates::str::contains("enhanced 1 code block(s)"));

	let expected = std::fs::read_to_string(&enhanced)?;

	let mut second = common::hilite_cmd();
	let _ = second
		.arg("enhance")
		.arg(&enhanced)
		.assert()
		.success()
		.stdout(expected);

	Ok(())
}

#[test]
fn enhance_renders_markdown_input_first() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("notes.md");
	std::fs::write(
		&input,
		"# Notes\n\n```python\nimport numpy as np\n```\n",
	)?;

	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("enhance")
		.arg(&input)
		.arg("--markdown")
		.assert()
		.success()
		.stdout(
			predicates::str::contains("codeblock-lang\">python")
				.and(predicates::str::contains("data-copy-text")),
		);

	Ok(())
}

#[test]
fn enhance_honors_config_discovery() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("page.html");
	std::fs::write(&input, "<pre><code>x = 5</code></pre>")?;
	std::fs::write(tmp.path().join("hilite.toml"), "copy_button = false\n")?;

	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("enhance")
		.arg(&input)
		.arg("--config-dir")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("codeblock-copy").not());

	Ok(())
}
