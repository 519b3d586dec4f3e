use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum HiliteError {
	#[error(transparent)]
	#[diagnostic(code(hilite::io_error))]
	Io(#[from] std::io::Error),

	#[error("failure to render markdown: {0}")]
	#[diagnostic(code(hilite::markdown))]
	Markdown(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(hilite::config_parse),
		help(
			"check that hilite.toml contains only known keys: class_prefix, fallback_label, \
			 copy_button, wrapper_class"
		)
	)]
	ConfigParse(String),

	#[error("no code block at index {index} (fragment has {count})")]
	#[diagnostic(
		code(hilite::block_out_of_range),
		help("run `hilite detect` to list the code blocks in this fragment")
	)]
	BlockOutOfRange { index: usize, count: usize },
}

pub type HiliteResult<T> = Result<T, HiliteError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
