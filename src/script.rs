//! Line-oriented command scripts
//!
//! One command per line:
//!
//! ```text
//! add TEXT | insert POS TEXT | remove [START [END]] | replace START END TEXT
//! set TEXT | clear | verify TEXT | prompt C | password C|none | show
//! ```
//!
//! Text arguments run to the end of the line, so they may contain spaces.
//! Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::mask::MaskedTextProvider;
use crate::messages::{MaskMsg, RemoveTarget};
use crate::update::update;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("{command}: {value:?} is not a position")]
    InvalidPosition { command: &'static str, value: String },
    #[error("{command}: expected a single character, got {value:?}")]
    InvalidChar { command: &'static str, value: String },
    #[error("{command}: unexpected argument {value:?}")]
    UnexpectedArgument { command: &'static str, value: String },
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ScriptError>,
    },
}

/// Split off the first space-delimited word; the rest is kept verbatim
fn split_word(input: &str) -> (&str, Option<&str>) {
    match input.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (input, None),
    }
}

fn required<'a>(
    command: &'static str,
    argument: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ScriptError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ScriptError::MissingArgument { command, argument })
}

fn position(command: &'static str, value: &str) -> Result<usize, ScriptError> {
    value.parse().map_err(|_| ScriptError::InvalidPosition {
        command,
        value: value.to_string(),
    })
}

fn single_char(command: &'static str, value: &str) -> Result<char, ScriptError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ScriptError::InvalidChar {
            command,
            value: value.to_string(),
        }),
    }
}

fn no_argument(command: &'static str, rest: Option<&str>) -> Result<(), ScriptError> {
    match rest.map(str::trim).filter(|r| !r.is_empty()) {
        Some(value) => Err(ScriptError::UnexpectedArgument {
            command,
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}

/// Parse one script line; `Ok(None)` for blank lines and comments
pub fn parse_command(line: &str) -> Result<Option<MaskMsg>, ScriptError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim_end().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let msg = match word {
        "add" => MaskMsg::Add(required("add", "TEXT", rest)?.to_string()),
        "insert" => {
            let (pos, text) = split_word(required("insert", "POS", rest)?);
            MaskMsg::Insert {
                position: position("insert", pos)?,
                text: required("insert", "TEXT", text)?.to_string(),
            }
        }
        "remove" => {
            let args: Vec<&str> = rest.unwrap_or_default().split_whitespace().collect();
            let target = match args.as_slice() {
                [] => RemoveTarget::Last,
                [at] => RemoveTarget::At(position("remove", at)?),
                [start, end] => {
                    RemoveTarget::Range(position("remove", start)?, position("remove", end)?)
                }
                [_, _, extra, ..] => {
                    return Err(ScriptError::UnexpectedArgument {
                        command: "remove",
                        value: extra.to_string(),
                    })
                }
            };
            MaskMsg::Remove(target)
        }
        "replace" => {
            let (start, rest) = split_word(required("replace", "START", rest)?);
            let (end, text) = split_word(required("replace", "END", rest)?);
            MaskMsg::Replace {
                start: position("replace", start)?,
                end: position("replace", end)?,
                text: text.unwrap_or_default().to_string(),
            }
        }
        "set" => MaskMsg::Set(rest.unwrap_or_default().to_string()),
        "clear" => {
            no_argument("clear", rest)?;
            MaskMsg::Clear
        }
        "verify" => MaskMsg::Verify(rest.unwrap_or_default().to_string()),
        "prompt" => MaskMsg::SetPrompt(single_char("prompt", required("prompt", "C", rest)?)?),
        "password" => match required("password", "C", rest)? {
            "none" => MaskMsg::SetPassword(None),
            value => MaskMsg::SetPassword(Some(single_char("password", value)?)),
        },
        "show" => {
            no_argument("show", rest)?;
            MaskMsg::Show
        }
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    Ok(Some(msg))
}

/// Parse a whole script, numbering errors by line
pub fn parse_script(script: &str) -> Result<Vec<MaskMsg>, ScriptError> {
    let mut messages = Vec::new();
    for (index, line) in script.lines().enumerate() {
        let parsed = parse_command(line).map_err(|e| ScriptError::AtLine {
            line: index + 1,
            source: Box::new(e),
        })?;
        messages.extend(parsed);
    }
    Ok(messages)
}

/// Apply every message in order, writing one line per outcome
///
/// Returns the number of failed operations.
pub fn run<W: Write>(
    provider: &mut MaskedTextProvider,
    messages: impl IntoIterator<Item = MaskMsg>,
    out: &mut W,
    json: bool,
) -> Result<usize> {
    let mut failures = 0;
    for msg in messages {
        let outcome = update(provider, msg);
        if !outcome.success {
            failures += 1;
        }
        if json {
            serde_json::to_writer(&mut *out, &outcome).context("Failed to encode outcome")?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", outcome)?;
        }
    }
    Ok(failures)
}

/// Read a script from `reader` and [`run`] it
pub fn run_reader<R: BufRead, W: Write>(
    provider: &mut MaskedTextProvider,
    reader: R,
    out: &mut W,
    json: bool,
) -> Result<usize> {
    let mut script = String::new();
    for line in reader.lines() {
        script.push_str(&line.context("Failed to read script")?);
        script.push('\n');
    }
    let messages = parse_script(&script)?;
    tracing::debug!("Parsed {} commands", messages.len());
    run(provider, messages, out, json)
}
