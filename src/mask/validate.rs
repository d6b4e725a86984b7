//! Character validation against mask tokens and the escape rules.

use unicode_general_category::{get_general_category, GeneralCategory};

use super::hint::ResultHint;
use super::provider::MaskedTextProvider;

const SPACE: char = ' ';

/// Letter, digit, punctuation, symbol or space.
pub fn is_printable(ch: char) -> bool {
    use GeneralCategory::*;

    ch == SPACE
        || is_alphanumeric(ch)
        || matches!(
            get_general_category(ch),
            ConnectorPunctuation
                | DashPunctuation
                | OpenPunctuation
                | ClosePunctuation
                | InitialPunctuation
                | FinalPunctuation
                | OtherPunctuation
                | MathSymbol
                | CurrencySymbol
                | ModifierSymbol
                | OtherSymbol
        )
}

pub fn is_valid_password_char(ch: char) -> bool {
    is_printable(ch)
}

fn is_letter(ch: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(ch),
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
    )
}

/// Decimal digits only (`Nd`); superscripts, fractions and numerals are not digits
fn is_digit(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

fn is_alphanumeric(ch: char) -> bool {
    is_letter(ch) || is_digit(ch)
}

/// ASCII non-control, non-space: `'!'..='~'`
fn is_ascii_visible(ch: char) -> bool {
    ch.is_ascii_graphic()
}

/// Check `input` against one mask token.
///
/// Returns the failure hint, or `None` when the token accepts the input.
pub fn check_token(token: char, input: char, ascii_only: bool) -> Option<ResultHint> {
    use ResultHint::*;

    let optional_space = input == SPACE;
    match token {
        '0' if !is_digit(input) => Some(DigitExpected),
        '9' if !(is_digit(input) || optional_space) => Some(DigitExpected),
        '#' if !(is_digit(input) || matches!(input, '+' | '-') || optional_space) => {
            Some(DigitExpected)
        }
        'L' | '?' => {
            if !(is_letter(input) || (token == '?' && optional_space)) {
                Some(LetterExpected)
            } else if ascii_only && !input.is_ascii_alphabetic() && !optional_space {
                Some(AsciiCharacterExpected)
            } else {
                None
            }
        }
        '&' if ascii_only && !is_ascii_visible(input) => Some(AsciiCharacterExpected),
        'C' if ascii_only && !is_ascii_visible(input) && !optional_space => {
            Some(AsciiCharacterExpected)
        }
        'A' | 'a' => {
            if !(is_alphanumeric(input) || (token == 'a' && optional_space)) {
                Some(AlphanumericCharacterExpected)
            } else if ascii_only && !input.is_ascii_alphanumeric() && !optional_space {
                Some(AsciiCharacterExpected)
            } else {
                None
            }
        }
        _ => None,
    }
}

impl MaskedTextProvider {
    /// Test whether `input` is acceptable at `position` without mutating anything.
    ///
    /// `Ok(hint)` when accepted (possibly escaped), `Err(hint)` when rejected.
    /// `position` must be in range.
    pub(crate) fn test_char(&self, input: char, position: usize) -> Result<ResultHint, ResultHint> {
        if !is_printable(input) {
            return Err(ResultHint::InvalidInput);
        }

        let descriptor = &self.descriptors[position];

        // Literals are checked before prompt and space.
        if descriptor.is_non_edit() {
            return if self.skip_literals && input == self.buffer[position] {
                Ok(ResultHint::CharacterEscaped)
            } else {
                Err(ResultHint::NonEditPosition)
            };
        }

        let reset_hint = if descriptor.is_assigned {
            ResultHint::SideEffect
        } else {
            ResultHint::CharacterEscaped
        };

        if input == self.prompt_char {
            if self.reset_on_prompt {
                return Ok(reset_hint);
            }
            if !self.allow_prompt_as_input {
                return Err(ResultHint::PromptCharNotAllowed);
            }
        }

        if input == SPACE && self.reset_on_space {
            return Ok(reset_hint);
        }

        let token = self.mask_chars[descriptor.mask_position];
        if let Some(hint) = check_token(token, input, self.ascii_only) {
            return Err(hint);
        }

        if descriptor.is_assigned && input == self.buffer[position] {
            Ok(ResultHint::NoEffect)
        } else {
            Ok(ResultHint::Success)
        }
    }

    /// Whether `input` would be escaped (skipped or reset) at `position`.
    /// `position` must be in range.
    pub(crate) fn test_escape_char(&self, input: char, position: usize) -> bool {
        if self.descriptors[position].is_non_edit() {
            return self.skip_literals && input == self.buffer[position];
        }
        (self.reset_on_prompt && input == self.prompt_char)
            || (self.reset_on_space && input == SPACE)
    }
}
