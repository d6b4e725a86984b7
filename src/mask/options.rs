//! Construction options for [`MaskedTextProvider`](super::MaskedTextProvider).

use serde::{Deserialize, Serialize};

use super::locale::LocaleSymbols;

/// Prompt shown at unassigned edit positions unless configured otherwise
pub const DEFAULT_PROMPT_CHAR: char = '_';

/// Password character used by `set_is_password(true)`
pub const DEFAULT_PASSWORD_CHAR: char = '*';

/// Options applied when building a provider.
///
/// Every field has a default, so partial YAML documents deserialize fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderOptions {
    pub prompt_char: char,
    /// `None` disables password masking
    pub password_char: Option<char>,
    pub allow_prompt_as_input: bool,
    pub ascii_only: bool,
    pub include_prompt: bool,
    pub include_literals: bool,
    pub reset_on_prompt: bool,
    pub reset_on_space: bool,
    pub skip_literals: bool,
    pub symbols: LocaleSymbols,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            prompt_char: DEFAULT_PROMPT_CHAR,
            password_char: None,
            allow_prompt_as_input: true,
            ascii_only: false,
            include_prompt: false,
            include_literals: true,
            reset_on_prompt: true,
            reset_on_space: true,
            skip_literals: true,
            symbols: LocaleSymbols::invariant(),
        }
    }
}

impl ProviderOptions {
    /// Options with password masking enabled
    pub fn password(password_char: char) -> Self {
        Self {
            password_char: Some(password_char),
            ..Self::default()
        }
    }

    /// Options restricting input to ASCII
    pub fn ascii() -> Self {
        Self {
            ascii_only: true,
            ..Self::default()
        }
    }
}
