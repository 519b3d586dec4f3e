use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Enhance code blocks in rendered HTML with language labels, highlighting, and copy chrome.",
	long_about = "hilite scans rendered HTML fragments for <pre><code> blocks, guesses each \
	              block's language, tokenizes its text into lightweight highlighted markup, and \
	              wraps it in header chrome with a language label and a copy-to-clipboard \
	              control.\n\nQuick start:\n  hilite enhance page.html   Rewrite a fragment to \
	              stdout\n  hilite detect page.html    List detected languages per block\n  \
	              hilite copy page.html -b 0 Copy a block's source to the clipboard"
)]
pub struct HiliteCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for a hilite.toml configuration file.
	#[arg(long, short, global = true)]
	pub config_dir: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Enhance the code blocks in an HTML fragment.
	///
	/// Reads the fragment from a file (or stdin when omitted), wraps every
	/// un-enhanced code block in header chrome with a detected language
	/// label and a copy control, and writes the result to stdout or to
	/// `--output`. Running the command over its own output is a no-op.
	Enhance {
		/// Input file; reads stdin when omitted.
		input: Option<PathBuf>,

		/// Output file; writes stdout when omitted.
		#[arg(long, short)]
		output: Option<PathBuf>,

		/// Treat the input as markdown and render it to HTML first.
		#[arg(long, default_value_t = false)]
		markdown: bool,
	},
	/// List the code blocks in a fragment with their detected languages.
	///
	/// Prints one line per block with its index, resolved language label,
	/// and a one-line preview. Use `--format json` for programmatic
	/// consumption.
	Detect {
		/// Input file; reads stdin when omitted.
		input: Option<PathBuf>,

		/// Output format for the block listing.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,

		/// Treat the input as markdown and render it to HTML first.
		#[arg(long, default_value_t = false)]
		markdown: bool,
	},
	/// Copy the raw source text of a code block to the system clipboard.
	///
	/// The copied text is the block's original source, exactly as captured
	/// before any highlighting markup was applied. A clipboard failure is
	/// reported but never fails the command; the native clipboard API is
	/// tried first, then the platform's copy utility.
	Copy {
		/// Input file; reads stdin when omitted.
		input: Option<PathBuf>,

		/// Zero-indexed block to copy.
		#[arg(long, short)]
		block: usize,

		/// Treat the input as markdown and render it to HTML first.
		#[arg(long, default_value_t = false)]
		markdown: bool,
	},
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable listing.
	Text,
	/// A JSON array of block records.
	Json,
}
