//! Update function for the Elm-style architecture
//!
//! Applies a [`MaskMsg`] to a provider and reports what happened.

use std::fmt;

use serde::Serialize;

use crate::mask::{EditResult, MaskedTextProvider, ResultHint};
use crate::messages::{MaskMsg, RemoveTarget};

/// Result of applying one message, with the provider state afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub command: &'static str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<ResultHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// `to_string()` of the provider
    pub text: String,
    /// `to_display_string()` of the provider
    pub display: String,
}

impl Outcome {
    fn new(command: &'static str, provider: &MaskedTextProvider) -> Self {
        Self {
            command,
            success: true,
            position: None,
            hint: None,
            error: None,
            text: provider.to_string(),
            display: provider.to_display_string(),
        }
    }

    fn with_result(mut self, result: EditResult) -> Self {
        self.success = result.success;
        self.position = Some(result.position);
        self.hint = Some(result.hint);
        self
    }

    fn with_error(mut self, error: impl fmt::Display) -> Self {
        self.success = false;
        self.error = Some(error.to_string());
        self
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.success { "ok" } else { "failed" };
        write!(f, "{}: {}", self.command, status)?;
        if let (Some(position), Some(hint)) = (self.position, self.hint) {
            write!(f, " at {} ({:?})", position, hint)?;
        }
        if let Some(error) = &self.error {
            write!(f, " ({})", error)?;
        }
        write!(f, " [{}]", self.display)
    }
}

/// Main update function - applies one message to the provider
pub fn update(provider: &mut MaskedTextProvider, msg: MaskMsg) -> Outcome {
    let command = msg.name();

    let applied: Result<Option<EditResult>, String> = match msg {
        MaskMsg::Add(text) => Ok(Some(provider.add_str(&text))),
        MaskMsg::Insert { position, text } => Ok(Some(provider.insert_at(&text, position))),
        MaskMsg::Remove(RemoveTarget::Last) => Ok(Some(provider.remove())),
        MaskMsg::Remove(RemoveTarget::At(position)) => {
            Ok(Some(provider.remove_at_position(position)))
        }
        MaskMsg::Remove(RemoveTarget::Range(start, end)) => {
            Ok(Some(provider.remove_at(start, end)))
        }
        MaskMsg::Replace { start, end, text } => Ok(Some(provider.replace(&text, start, end))),
        MaskMsg::Set(text) => Ok(Some(provider.set(&text))),
        MaskMsg::Clear => Ok(Some(provider.clear())),
        MaskMsg::Verify(text) => Ok(Some(provider.verify_string(&text))),
        MaskMsg::SetPrompt(prompt) => provider
            .set_prompt_char(prompt)
            .map(|_| None)
            .map_err(|e| e.to_string()),
        MaskMsg::SetPassword(password) => provider
            .set_password_char(password)
            .map(|_| None)
            .map_err(|e| e.to_string()),
        MaskMsg::Show => Ok(None),
    };

    let outcome = Outcome::new(command, provider);
    match applied {
        Ok(Some(result)) => {
            if !result.success {
                tracing::debug!(
                    "{} failed at {}: {:?}",
                    command,
                    result.position,
                    result.hint
                );
            }
            outcome.with_result(result)
        }
        Ok(None) => outcome,
        Err(error) => {
            tracing::warn!("{} rejected: {}", command, error);
            outcome.with_error(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_add_reports_state() {
        let mut p = MaskedTextProvider::new("00-00").unwrap();
        let outcome = update(&mut p, MaskMsg::Add("123".to_string()));
        assert!(outcome.success);
        assert_eq!(outcome.position, Some(3));
        assert_eq!(outcome.hint, Some(ResultHint::Success));
        assert_eq!(outcome.text, "12-3");
        assert_eq!(outcome.display, "12-3_");
    }

    #[test]
    fn test_update_prompt_conflict() {
        let mut p = MaskedTextProvider::new("00").unwrap();
        update(&mut p, MaskMsg::SetPassword(Some('*')));
        let outcome = update(&mut p, MaskMsg::SetPrompt('*'));
        assert!(!outcome.success);
        assert!(outcome.error.is_some());
        assert_eq!(p.prompt_char(), '_');
    }

    #[test]
    fn test_outcome_display() {
        let mut p = MaskedTextProvider::new("00").unwrap();
        let outcome = update(&mut p, MaskMsg::Add("x".to_string()));
        assert_eq!(outcome.to_string(), "add: failed at 0 (DigitExpected) [__]");

        let outcome = update(&mut p, MaskMsg::Show);
        assert_eq!(outcome.to_string(), "show: ok [__]");
    }

    #[test]
    fn test_outcome_json_omits_empty_fields() {
        let mut p = MaskedTextProvider::new("0").unwrap();
        let json = serde_json::to_value(update(&mut p, MaskMsg::Show)).unwrap();
        assert_eq!(json["command"], "show");
        assert!(json.get("position").is_none());
        assert_eq!(json["display"], "_");
    }
}
