use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use hilite_cli::Commands;
use hilite_cli::HiliteCli;
use hilite_cli::OutputFormat;
use hilite_core::AnyEmptyResult;
use hilite_core::AnyResult;
use hilite_core::CopyControl;
use hilite_core::Enhanced;
use hilite_core::Enhancer;
use hilite_core::HiliteConfig;
use hilite_core::HiliteError;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = HiliteCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if args.verbose {
		tracing_subscriber::fmt()
			.with_env_filter(
				tracing_subscriber::EnvFilter::try_from_default_env()
					.unwrap_or_else(|_| "debug".into()),
			)
			.with_writer(std::io::stderr)
			.init();
	}

	let result = match args.command {
		Some(Commands::Enhance {
			ref input,
			ref output,
			markdown,
		}) => run_enhance(&args, input.as_deref(), output.as_deref(), markdown),
		Some(Commands::Detect {
			ref input,
			format,
			markdown,
		}) => run_detect(&args, input.as_deref(), format, markdown),
		Some(Commands::Copy {
			ref input,
			block,
			markdown,
		}) => run_copy(&args, input.as_deref(), block, markdown),
		None => {
			eprintln!("No subcommand specified. Run `hilite --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<HiliteError>() {
			Ok(hilite_err) => {
				let report: miette::Report = (*hilite_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn load_config(args: &HiliteCli) -> AnyResult<HiliteConfig> {
	let dir = args
		.config_dir
		.clone()
		.unwrap_or_else(|| PathBuf::from("."));
	Ok(HiliteConfig::load(&dir)?)
}

fn read_input(input: Option<&Path>) -> AnyResult<String> {
	match input {
		Some(path) => Ok(std::fs::read_to_string(path)?),
		None => {
			let mut content = String::new();
			std::io::stdin().read_to_string(&mut content)?;
			Ok(content)
		}
	}
}

/// Load the input and, for markdown input, render it to HTML so the
/// enhancer always operates on a rendered fragment.
fn load_fragment(input: Option<&Path>, markdown: bool) -> AnyResult<String> {
	let content = read_input(input)?;

	if markdown {
		let html = markdown::to_html_with_options(&content, &markdown::Options::gfm())
			.map_err(|e| HiliteError::Markdown(e.to_string()))?;
		Ok(html)
	} else {
		Ok(content)
	}
}

fn enhance_fragment(args: &HiliteCli, input: Option<&Path>, markdown: bool) -> AnyResult<Enhanced> {
	let config = load_config(args)?;
	let fragment = load_fragment(input, markdown)?;
	Ok(Enhancer::new(config).enhance(&fragment))
}

fn run_enhance(
	args: &HiliteCli,
	input: Option<&Path>,
	output: Option<&Path>,
	markdown: bool,
) -> AnyEmptyResult {
	let result = enhance_fragment(args, input, markdown)?;

	match output {
		Some(path) => {
			std::fs::write(path, &result.html)?;
			let count = result.blocks.len();
			println!(
				"{} enhanced {count} code block(s) -> {}",
				colored!("✓", green),
				path.display()
			);
		}
		None => print!("{}", result.html),
	}

	Ok(())
}

fn run_detect(
	args: &HiliteCli,
	input: Option<&Path>,
	format: OutputFormat,
	markdown: bool,
) -> AnyEmptyResult {
	let result = enhance_fragment(args, input, markdown)?;

	match format {
		OutputFormat::Text => {
			if result.blocks.is_empty() {
				println!("no code blocks found");
				return Ok(());
			}

			for (index, block) in result.blocks.iter().enumerate() {
				println!("{index:>3}  {:<12} {}", block.label, preview(&block.raw_text));
			}
		}
		OutputFormat::Json => {
			let records: Vec<serde_json::Value> = result
				.blocks
				.iter()
				.enumerate()
				.map(|(index, block)| {
					serde_json::json!({
						"index": index,
						"language": block.label,
						"preview": preview(&block.raw_text),
					})
				})
				.collect();
			println!("{}", serde_json::to_string_pretty(&records)?);
		}
	}

	Ok(())
}

fn run_copy(
	args: &HiliteCli,
	input: Option<&Path>,
	block: usize,
	markdown: bool,
) -> AnyEmptyResult {
	let result = enhance_fragment(args, input, markdown)?;

	let Some(record) = result.blocks.get(block) else {
		return Err(
			HiliteError::BlockOutOfRange {
				index: block,
				count: result.blocks.len(),
			}
			.into(),
		);
	};

	let mut control = CopyControl::new(record.raw_text.clone());
	control.activate();

	if control.is_acknowledged() {
		println!(
			"{} copied block {block} ({})",
			colored!("✓", green),
			record.label
		);
	} else {
		// Clipboard failures degrade to a notice, never a hard error.
		eprintln!(
			"{} no clipboard available, nothing copied",
			colored!("warning:", yellow)
		);
	}

	Ok(())
}

/// First line of a block's text, shortened for listings.
fn preview(text: &str) -> String {
	let line = text.lines().next().unwrap_or_default();
	let mut out: String = line.chars().take(48).collect();
	if line.chars().count() > 48 {
		out.push('…');
	}
	out
}
