//! `tagdown render` command implementation.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use tagdown_config::{CliSettings, Config};
use tagdown_renderer::{DEFAULT_MAX_DEPTH, MarkdownEngine, TagRenderer};

use crate::error::CliError;
use crate::output::Output;

/// Input path that stands for standard input.
const STDIN_MARKER: &str = "-";

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown files to render, in order (default: stdin).
    inputs: Vec<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover tagdown.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Font family for `[mono]` blocks (overrides config).
    #[arg(long)]
    font: Option<String>,

    /// Extra named color as NAME=VALUE (repeatable, overrides config).
    #[arg(long = "color", value_name = "NAME=VALUE", value_parser = parse_color_override)]
    colors: Vec<(String, String)>,

    /// Maximum nesting depth of container tags.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, an input cannot be read, a
    /// document nests containers too deeply, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            monospace_font: self.font,
            colors: self.colors,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let renderer =
            TagRenderer::new(&config.renderer_config()).with_max_depth(self.max_depth);
        let html = render_inputs(&renderer, &self.inputs)?;

        if let Some(path) = &self.output {
            std::fs::write(path, &html)?;
            Output::new().success(&format!("Wrote {}", path.display()));
        } else {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }

        Ok(())
    }
}

/// Parse a `NAME=VALUE` color override.
fn parse_color_override(arg: &str) -> Result<(String, String), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{arg}`"))?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return Err(format!("color name and value must not be empty in `{arg}`"));
    }
    Ok((name.to_owned(), value.to_owned()))
}

/// Render every input with one renderer, concatenating the HTML.
///
/// No inputs means a single read from stdin.
fn render_inputs<E: MarkdownEngine>(
    renderer: &TagRenderer<E>,
    inputs: &[PathBuf],
) -> Result<String, CliError> {
    let stdin_only = [PathBuf::from(STDIN_MARKER)];
    let inputs = if inputs.is_empty() {
        &stdin_only[..]
    } else {
        inputs
    };

    let mut html = String::new();
    for input in inputs {
        let markdown = read_input(input)?;
        tracing::debug!(input = %input.display(), bytes = markdown.len(), "Rendering");
        html.push_str(&renderer.render(&markdown)?);
    }
    Ok(html)
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if path == Path::new(STDIN_MARKER) {
        return Ok(io::read_to_string(io::stdin())?);
    }
    std::fs::read_to_string(path).map_err(|source| CliError::Input {
        path: path.display().to_string(),
        source,
    })
}
