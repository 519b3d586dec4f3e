mod common;

use hilite_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;

#[test]
fn detect_lists_blocks_with_languages() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("page.html");
	std::fs::write(
		&input,
		"<pre><code>import numpy as np</code></pre>\
		 <pre><code>fn main() {}</code></pre>",
	)?;

	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("detect")
		.arg(&input)
		.assert()
		.success()
		.stdout(
			predicates::str::contains("python").and(predicates::str::contains("rust")),
		);

	Ok(())
}

#[test]
fn detect_reports_an_empty_fragment() -> AnyEmptyResult {
	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("detect")
		.write_stdin("<p>no code here</p>")
		.assert()
		.success()
		.stdout(predicates::str::contains("no code blocks found"));

	Ok(())
}

#[test]
fn detect_emits_json_records() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("page.html");
	std::fs::write(
		&input,
		"<pre><code class=\"language-ruby\">puts 'hi'</code></pre>",
	)?;

	let mut cmd = common::hilite_cmd();
	let output = cmd
		.arg("detect")
		.arg(&input)
		.arg("--format")
		.arg("json")
		.assert()
		.success();

	let records: Value = serde_json::from_slice(&output.get_output().stdout)?;
	assert_eq!(records[0]["index"], 0);
	assert_eq!(records[0]["language"], "ruby");

	Ok(())
}

#[test]
fn copy_rejects_an_out_of_range_block() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("page.html");
	std::fs::write(&input, "<pre><code>x = 5</code></pre>")?;

	let mut cmd = common::hilite_cmd();
	let _ = cmd
		.arg("copy")
		.arg(&input)
		.arg("--block")
		.arg("5")
		.assert()
		.failure()
		.stderr(predicates::str::contains("no code block at index 5"));

	Ok(())
}
