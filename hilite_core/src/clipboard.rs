use std::io::Write;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;

use crate::error::AnyEmptyResult;

/// How long an activated control reports the acknowledgement state.
pub const ACK_DURATION: Duration = Duration::from_secs(2);

/// A destination for clipboard writes. The seam exists so the
/// primary/fallback ordering can be exercised without a real clipboard.
pub trait ClipboardBackend {
	/// Write the full text to the clipboard. Any error hands the text to
	/// the next backend in line.
	fn write(&mut self, text: &str) -> AnyEmptyResult;
}

/// Primary path: the native system clipboard.
pub struct SystemClipboard;

impl ClipboardBackend for SystemClipboard {
	fn write(&mut self, text: &str) -> AnyEmptyResult {
		let mut clipboard = arboard::Clipboard::new()?;
		clipboard.set_text(text.to_string())?;
		Ok(())
	}
}

/// Fallback path: pipe the text into the platform's copy utility.
pub struct CommandClipboard;

fn copy_commands() -> &'static [(&'static str, &'static [&'static str])] {
	if cfg!(target_os = "macos") {
		&[("pbcopy", &[])]
	} else if cfg!(windows) {
		&[("clip", &[])]
	} else {
		&[("wl-copy", &[]), ("xclip", &["-selection", "clipboard"])]
	}
}

fn pipe_to_command(program: &str, args: &[&str], text: &str) -> AnyEmptyResult {
	let mut child = Command::new(program)
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::null())
		.stderr(Stdio::null())
		.spawn()?;

	// Drop stdin after writing so the utility sees EOF before we wait.
	if let Some(mut stdin) = child.stdin.take() {
		stdin.write_all(text.as_bytes())?;
	}

	let status = child.wait()?;
	if status.success() {
		Ok(())
	} else {
		Err(format!("`{program}` exited with {status}").into())
	}
}

impl ClipboardBackend for CommandClipboard {
	fn write(&mut self, text: &str) -> AnyEmptyResult {
		for &(program, args) in copy_commands() {
			match pipe_to_command(program, args, text) {
				Ok(()) => return Ok(()),
				Err(error) => {
					debug!(%program, %error, "copy utility unavailable");
				}
			}
		}

		Err("no copy utility available".into())
	}
}

/// An interactive control bound to a fixed text value. Activation writes
/// the text to the system clipboard, preferring the native API and falling
/// back to the platform copy utility. Failures never reach the caller; the
/// only observable outcome of a total failure is that the acknowledgement
/// state does not appear.
pub struct CopyControl {
	text: String,
	primary: Box<dyn ClipboardBackend>,
	fallback: Box<dyn ClipboardBackend>,
	acknowledged_at: Option<Instant>,
}

impl CopyControl {
	pub fn new(text: impl Into<String>) -> Self {
		Self::with_backends(text, Box::new(SystemClipboard), Box::new(CommandClipboard))
	}

	pub fn with_backends(
		text: impl Into<String>,
		primary: Box<dyn ClipboardBackend>,
		fallback: Box<dyn ClipboardBackend>,
	) -> Self {
		Self {
			text: text.into(),
			primary,
			fallback,
			acknowledged_at: None,
		}
	}

	/// The text this control will place on the clipboard.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Write the bound text to the clipboard. On success (either path) the
	/// control enters the acknowledgement state for [`ACK_DURATION`].
	pub fn activate(&mut self) {
		let copied = match self.primary.write(&self.text) {
			Ok(()) => true,
			Err(error) => {
				debug!(%error, "primary clipboard write failed, trying fallback");
				match self.fallback.write(&self.text) {
					Ok(()) => true,
					Err(error) => {
						debug!(%error, "fallback clipboard write failed");
						false
					}
				}
			}
		};

		if copied {
			self.acknowledged_at = Some(Instant::now());
		}
	}

	/// Whether the control is currently showing the acknowledgement state.
	pub fn is_acknowledged(&self) -> bool {
		self.acknowledged_at
			.is_some_and(|at| at.elapsed() < ACK_DURATION)
	}

	/// Clear the acknowledgement state immediately.
	pub fn reset(&mut self) {
		self.acknowledged_at = None;
	}
}
