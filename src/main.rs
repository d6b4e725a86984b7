use std::fs::File;
use std::io::{self, BufReader, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use maskedit::cli::{CliArgs, CommandSource};
use maskedit::config::MaskConfig;
use maskedit::mask::MaskedTextProvider;
use maskedit::script;

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    maskedit::tracing::init();

    let config = match &args.config {
        Some(path) => MaskConfig::load_from(path)?,
        None => MaskConfig::load(),
    };

    let session = args.into_config(&config).map_err(anyhow::Error::msg)?;
    let mut provider = MaskedTextProvider::with_options(&session.mask, &session.options)
        .with_context(|| format!("Invalid mask {:?}", session.mask))?;
    tracing::info!("Provider ready for mask {:?}", session.mask);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let failures = match session.source {
        CommandSource::Inline(lines) => {
            let messages = script::parse_script(&lines.join("\n"))?;
            script::run(&mut provider, messages, &mut out, session.json)?
        }
        CommandSource::Script(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            script::run_reader(&mut provider, BufReader::new(file), &mut out, session.json)?
        }
        CommandSource::Stdin => {
            script::run_reader(&mut provider, io::stdin().lock(), &mut out, session.json)?
        }
    };
    out.flush()?;

    if failures > 0 {
        tracing::debug!("{} command(s) failed", failures);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
