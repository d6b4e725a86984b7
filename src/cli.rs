//! Command-line argument parsing for maskedit
//!
//! Supports:
//! - Choosing a mask directly or by preset name
//! - Overriding provider options from the config file
//! - Commands from arguments, a script file or stdin

use clap::Parser;
use std::path::PathBuf;

use crate::config::MaskConfig;
use crate::mask::ProviderOptions;

/// Apply editing commands to a masked text buffer
#[derive(Parser, Debug)]
#[command(name = "maskedit", version, about = "Masked text input engine")]
pub struct CliArgs {
    /// Mask string, or the name of a preset from the config file
    #[arg(short, long, conflicts_with = "preset")]
    pub mask: Option<String>,

    /// Preset name from the config file
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Config file to use instead of ~/.config/maskedit/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Prompt character shown at empty positions
    #[arg(long, value_name = "C")]
    pub prompt: Option<char>,

    /// Hide assigned characters behind this character in the display string
    #[arg(long, value_name = "C")]
    pub password: Option<char>,

    /// Only accept ASCII characters
    #[arg(long)]
    pub ascii_only: bool,

    /// Reject the prompt character as input instead of storing it
    #[arg(long)]
    pub reject_prompt_input: bool,

    /// Locale whose separator symbols are used (from the config file)
    #[arg(long, value_name = "NAME")]
    pub locale: Option<String>,

    /// Read commands from a script file
    #[arg(short, long, value_name = "FILE", conflicts_with = "commands")]
    pub script: Option<PathBuf>,

    /// Print one JSON object per command
    #[arg(long)]
    pub json: bool,

    /// Commands to run, e.g. "add 123" "show"
    #[arg(value_name = "COMMANDS")]
    pub commands: Vec<String>,
}

/// Where commands are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSource {
    Inline(Vec<String>),
    Script(PathBuf),
    Stdin,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub mask: String,
    pub options: ProviderOptions,
    pub source: CommandSource,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a session, resolving presets and option overrides
    pub fn into_config(self, config: &MaskConfig) -> Result<SessionConfig, String> {
        let mask = match (&self.mask, &self.preset) {
            (Some(mask), _) => config.resolve_mask(mask).to_string(),
            (None, Some(name)) => config
                .presets
                .get(name)
                .cloned()
                .ok_or_else(|| format!("Unknown preset {:?}", name))?,
            (None, None) => return Err("A mask is required (--mask or --preset)".to_string()),
        };

        let mut config = config.clone();
        if let Some(locale) = self.locale {
            config.locale = Some(locale);
        }

        let mut options = config.provider_options();
        if let Some(prompt) = self.prompt {
            options.prompt_char = prompt;
        }
        if let Some(password) = self.password {
            options.password_char = Some(password);
        }
        if self.ascii_only {
            options.ascii_only = true;
        }
        if self.reject_prompt_input {
            options.allow_prompt_as_input = false;
            options.reset_on_prompt = false;
        }

        let source = if !self.commands.is_empty() {
            CommandSource::Inline(self.commands)
        } else if let Some(script) = self.script {
            CommandSource::Script(script)
        } else {
            CommandSource::Stdin
        };

        Ok(SessionConfig {
            mask,
            options,
            source,
            json: self.json,
        })
    }
}
