use std::path::Path;

use serde::Deserialize;

use crate::error::HiliteError;
use crate::error::HiliteResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["hilite.toml", ".hilite.toml", ".config/hilite.toml"];

/// Presentation settings for the enhancer, loaded from `hilite.toml`:
///
/// ```toml
/// class_prefix = "hl"
/// fallback_label = "code"
/// copy_button = true
/// wrapper_class = "codeblock"
/// ```
///
/// Every field is optional; an absent file yields the defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HiliteConfig {
	/// Class prefix for token spans; also the marker the re-tokenization
	/// guard looks for.
	pub class_prefix: String,
	/// Label used when detection finds nothing.
	pub fallback_label: String,
	/// Whether chrome includes the copy control.
	pub copy_button: bool,
	/// Class stem for the wrapper, header, label, and copy elements.
	pub wrapper_class: String,
}

impl Default for HiliteConfig {
	fn default() -> Self {
		Self {
			class_prefix: "hl".into(),
			fallback_label: "code".into(),
			copy_button: true,
			wrapper_class: "codeblock".into(),
		}
	}
}

impl HiliteConfig {
	/// Load the first config file found under `dir`, or defaults when none
	/// of the candidates exist.
	pub fn load(dir: &Path) -> HiliteResult<Self> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = dir.join(candidate);
			if path.is_file() {
				let content = std::fs::read_to_string(&path)?;
				return Self::parse(&content);
			}
		}

		Ok(Self::default())
	}

	/// Parse config content directly.
	pub fn parse(content: &str) -> HiliteResult<Self> {
		toml::from_str(content).map_err(|e| HiliteError::ConfigParse(e.to_string()))
	}
}
