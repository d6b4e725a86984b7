//! MaskedTextProvider - the stateful test string behind a masked input.

use std::ops::Index;

use super::compiler::compile;
use super::descriptor::PositionDescriptor;
use super::error::MaskError;
use super::locale::LocaleSymbols;
use super::options::{ProviderOptions, DEFAULT_PASSWORD_CHAR};
use super::validate::{is_printable, is_valid_password_char};

/// Stateful masked-text engine.
///
/// Holds the compiled mask (one [`PositionDescriptor`] per slot), the test
/// string and the assignment counters. `Clone` produces an independent copy.
#[derive(Debug, Clone)]
pub struct MaskedTextProvider {
    pub(crate) mask: String,
    pub(crate) mask_chars: Vec<char>,
    pub(crate) symbols: LocaleSymbols,
    pub(crate) descriptors: Vec<PositionDescriptor>,
    pub(crate) buffer: Vec<char>,

    pub(crate) prompt_char: char,
    pub(crate) password_char: Option<char>,
    pub(crate) allow_prompt_as_input: bool,
    pub(crate) ascii_only: bool,
    pub(crate) include_prompt: bool,
    pub(crate) include_literals: bool,
    pub(crate) reset_on_prompt: bool,
    pub(crate) reset_on_space: bool,
    pub(crate) skip_literals: bool,

    pub(crate) assigned_count: usize,
    pub(crate) required_assigned_count: usize,
    pub(crate) required_edit_count: usize,
    pub(crate) optional_edit_count: usize,
}

impl MaskedTextProvider {
    /// Create a provider with default options and invariant locale symbols
    pub fn new(mask: &str) -> Result<Self, MaskError> {
        Self::with_options(mask, &ProviderOptions::default())
    }

    /// Create a provider from explicit options
    pub fn with_options(mask: &str, options: &ProviderOptions) -> Result<Self, MaskError> {
        check_prompt_and_password(options.prompt_char, options.password_char)?;

        let compiled = compile(mask, &options.symbols, options.prompt_char)?;

        Ok(Self {
            mask: mask.to_string(),
            mask_chars: mask.chars().collect(),
            symbols: options.symbols.clone(),
            descriptors: compiled.descriptors,
            buffer: compiled.buffer,
            prompt_char: options.prompt_char,
            password_char: options.password_char,
            allow_prompt_as_input: options.allow_prompt_as_input,
            ascii_only: options.ascii_only,
            include_prompt: options.include_prompt,
            include_literals: options.include_literals,
            reset_on_prompt: options.reset_on_prompt,
            reset_on_space: options.reset_on_space,
            skip_literals: options.skip_literals,
            assigned_count: 0,
            required_assigned_count: 0,
            required_edit_count: compiled.required_edit_count,
            optional_edit_count: compiled.optional_edit_count,
        })
    }

    /// Snapshot of the current configuration as options
    pub fn options(&self) -> ProviderOptions {
        ProviderOptions {
            prompt_char: self.prompt_char,
            password_char: self.password_char,
            allow_prompt_as_input: self.allow_prompt_as_input,
            ascii_only: self.ascii_only,
            include_prompt: self.include_prompt,
            include_literals: self.include_literals,
            reset_on_prompt: self.reset_on_prompt,
            reset_on_space: self.reset_on_space,
            skip_literals: self.skip_literals,
            symbols: self.symbols.clone(),
        }
    }

    /// Whether a character may be used as input
    pub fn is_valid_input_char(ch: char) -> bool {
        is_printable(ch)
    }

    /// Whether a character may appear in a mask
    pub fn is_valid_mask_char(ch: char) -> bool {
        is_printable(ch)
    }

    /// Whether a character may be used as password character
    pub fn is_valid_password_char(ch: char) -> bool {
        is_valid_password_char(ch)
    }
}

fn check_prompt_and_password(prompt: char, password: Option<char>) -> Result<(), MaskError> {
    if !is_printable(prompt) {
        return Err(MaskError::InvalidPromptChar(prompt));
    }
    if let Some(password) = password {
        if !is_valid_password_char(password) {
            return Err(MaskError::InvalidPasswordChar(password));
        }
        if password == prompt {
            return Err(MaskError::PromptPasswordConflict(prompt));
        }
    }
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

impl MaskedTextProvider {
    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn symbols(&self) -> &LocaleSymbols {
        &self.symbols
    }

    /// Length of the test string
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True for masks made only of modifiers and escapes
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Descriptor of a slot, `None` when out of range
    pub fn descriptor(&self, position: usize) -> Option<&PositionDescriptor> {
        self.descriptors.get(position)
    }

    /// Character at a position of the test string
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.buffer.get(position).copied()
    }

    pub fn edit_position_count(&self) -> usize {
        self.required_edit_count + self.optional_edit_count
    }

    pub fn required_edit_position_count(&self) -> usize {
        self.required_edit_count
    }

    pub fn assigned_edit_position_count(&self) -> usize {
        self.assigned_count
    }

    pub fn available_edit_position_count(&self) -> usize {
        self.edit_position_count() - self.assigned_count
    }

    /// All required positions have been assigned
    pub fn mask_completed(&self) -> bool {
        self.required_assigned_count == self.required_edit_count
    }

    /// All edit positions have been assigned
    pub fn mask_full(&self) -> bool {
        self.assigned_count == self.edit_position_count()
    }

    /// Lazily enumerate the edit positions. Each call starts a fresh scan.
    pub fn edit_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.descriptors
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_edit())
            .map(|(position, _)| position)
    }

    pub fn allow_prompt_as_input(&self) -> bool {
        self.allow_prompt_as_input
    }

    pub fn ascii_only(&self) -> bool {
        self.ascii_only
    }

    pub fn include_prompt(&self) -> bool {
        self.include_prompt
    }

    pub fn set_include_prompt(&mut self, value: bool) {
        self.include_prompt = value;
    }

    pub fn include_literals(&self) -> bool {
        self.include_literals
    }

    pub fn set_include_literals(&mut self, value: bool) {
        self.include_literals = value;
    }

    pub fn reset_on_prompt(&self) -> bool {
        self.reset_on_prompt
    }

    /// Treat prompt input as "reset this position" instead of a value
    pub fn set_reset_on_prompt(&mut self, value: bool) {
        self.reset_on_prompt = value;
    }

    pub fn reset_on_space(&self) -> bool {
        self.reset_on_space
    }

    /// Treat space input as "reset this position" instead of a value
    pub fn set_reset_on_space(&mut self, value: bool) {
        self.reset_on_space = value;
    }

    pub fn skip_literals(&self) -> bool {
        self.skip_literals
    }

    /// Accept (and skip) input matching the literal at a non-edit position
    pub fn set_skip_literals(&mut self, value: bool) {
        self.skip_literals = value;
    }

    pub fn prompt_char(&self) -> char {
        self.prompt_char
    }

    /// Change the prompt; unassigned edit slots are rewritten in place.
    pub fn set_prompt_char(&mut self, prompt: char) -> Result<(), MaskError> {
        if self.password_char == Some(prompt) {
            return Err(MaskError::PromptPasswordConflict(prompt));
        }
        if !is_printable(prompt) {
            return Err(MaskError::InvalidPromptChar(prompt));
        }
        if prompt == self.prompt_char {
            return Ok(());
        }

        tracing::debug!("Prompt char {:?} -> {:?}", self.prompt_char, prompt);
        self.prompt_char = prompt;
        for (slot, descriptor) in self.buffer.iter_mut().zip(&self.descriptors) {
            if descriptor.is_edit() && !descriptor.is_assigned {
                *slot = prompt;
            }
        }
        Ok(())
    }

    pub fn password_char(&self) -> Option<char> {
        self.password_char
    }

    /// Set or clear (`None`) the password character
    pub fn set_password_char(&mut self, password: Option<char>) -> Result<(), MaskError> {
        check_prompt_and_password(self.prompt_char, password)?;
        if password != self.password_char {
            tracing::debug!("Password char {:?} -> {:?}", self.password_char, password);
            self.password_char = password;
        }
        Ok(())
    }

    pub fn is_password(&self) -> bool {
        self.password_char.is_some()
    }

    /// Toggle masking using [`DEFAULT_PASSWORD_CHAR`]
    pub fn set_is_password(&mut self, value: bool) -> Result<(), MaskError> {
        if value == self.is_password() {
            return Ok(());
        }
        self.set_password_char(value.then_some(DEFAULT_PASSWORD_CHAR))
    }
}

impl Index<usize> for MaskedTextProvider {
    type Output = char;

    /// Panics when `position >= len()`; use [`MaskedTextProvider::char_at`] for a checked read.
    fn index(&self, position: usize) -> &char {
        &self.buffer[position]
    }
}
