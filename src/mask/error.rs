//! Construction and configuration errors for masked-text providers.
//!
//! Input validation never produces one of these; rejected input is reported
//! through [`ResultHint`](super::ResultHint) instead.

use thiserror::Error;

/// Fatal errors raised while building or reconfiguring a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    /// The mask string was empty
    #[error("mask must not be empty")]
    InvalidMask,

    /// The mask contains a character that is not printable
    #[error("mask contains non-printable character {ch:?} at index {index}")]
    InvalidMaskCharacter { ch: char, index: usize },

    /// Prompt and password characters would become equal
    #[error("prompt and password characters must differ (both are {0:?})")]
    PromptPasswordConflict(char),

    /// The prompt character is not printable
    #[error("{0:?} is not a valid prompt character")]
    InvalidPromptChar(char),

    /// The password character is not printable
    #[error("{0:?} is not a valid password character")]
    InvalidPasswordChar(char),
}
