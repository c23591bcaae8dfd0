//! `tagdown styles` command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use tagdown_config::{CliSettings, Config};
use tagdown_renderer::style_block;

use crate::error::CliError;

/// Arguments for the styles command.
#[derive(Args)]
pub(crate) struct StylesArgs {
    /// Path to configuration file (default: auto-discover tagdown.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Font family for `[mono]` blocks (overrides config).
    #[arg(long)]
    font: Option<String>,
}

impl StylesArgs {
    /// Execute the styles command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            monospace_font: self.font,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(style_block(&config.monospace_font).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
