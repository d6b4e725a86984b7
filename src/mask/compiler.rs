//! Mask compiler: turns a mask string into position descriptors and the initial test string.

use super::descriptor::{CaseConversion, CharType, PositionDescriptor};
use super::error::MaskError;
use super::locale::LocaleSymbols;
use super::validate::is_printable;

/// Classification of a single unescaped mask character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    /// `0 L & A`
    EditRequired,
    /// `9 # ? C a`
    EditOptional,
    /// `. , : / $`
    Separator,
    /// `< > |`
    Modifier(CaseConversion),
    /// `\`
    Escape,
    Literal,
}

impl MaskToken {
    pub fn classify(ch: char) -> Self {
        match ch {
            '0' | 'L' | '&' | 'A' => MaskToken::EditRequired,
            '9' | '#' | '?' | 'C' | 'a' => MaskToken::EditOptional,
            '.' | ',' | ':' | '/' | '$' => MaskToken::Separator,
            '<' => MaskToken::Modifier(CaseConversion::ToLower),
            '>' => MaskToken::Modifier(CaseConversion::ToUpper),
            '|' => MaskToken::Modifier(CaseConversion::None),
            '\\' => MaskToken::Escape,
            _ => MaskToken::Literal,
        }
    }
}

/// Output of [`compile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMask {
    pub descriptors: Vec<PositionDescriptor>,
    pub buffer: Vec<char>,
    pub required_edit_count: usize,
    pub optional_edit_count: usize,
}

/// Check that a mask is non-empty and made of printable characters only
pub fn validate_mask(mask: &str) -> Result<(), MaskError> {
    if mask.is_empty() {
        return Err(MaskError::InvalidMask);
    }
    match mask.chars().enumerate().find(|&(_, ch)| !is_printable(ch)) {
        Some((index, ch)) => Err(MaskError::InvalidMaskCharacter { ch, index }),
        None => Ok(()),
    }
}

/// Compile `mask` into descriptors, filling edit slots with `prompt`.
pub fn compile(mask: &str, symbols: &LocaleSymbols, prompt: char) -> Result<CompiledMask, MaskError> {
    validate_mask(mask)?;

    let mut compiled = CompiledMask {
        descriptors: Vec::with_capacity(mask.len()),
        buffer: Vec::with_capacity(mask.len()),
        required_edit_count: 0,
        optional_edit_count: 0,
    };
    let mut case_conversion = CaseConversion::None;
    let mut escaped = false;

    for (mask_position, ch) in mask.chars().enumerate() {
        if escaped {
            escaped = false;
            compiled.push(mask_position, CharType::Literal, ch);
            continue;
        }

        match MaskToken::classify(ch) {
            MaskToken::Escape => escaped = true,
            MaskToken::Modifier(conversion) => case_conversion = conversion,
            MaskToken::Separator => {
                let symbol = symbols.separator(ch).unwrap_or_default();
                for sym_ch in symbol.chars() {
                    compiled.push(mask_position, CharType::Separator, sym_ch);
                }
            }
            MaskToken::EditRequired => {
                compiled.required_edit_count += 1;
                compiled.push_edit(mask_position, CharType::EditRequired, case_conversion, prompt);
            }
            MaskToken::EditOptional => {
                compiled.optional_edit_count += 1;
                compiled.push_edit(mask_position, CharType::EditOptional, case_conversion, prompt);
            }
            MaskToken::Literal => compiled.push(mask_position, CharType::Literal, ch),
        }
    }

    tracing::debug!(
        "Compiled mask {:?}: {} positions, {} required, {} optional",
        mask,
        compiled.buffer.len(),
        compiled.required_edit_count,
        compiled.optional_edit_count
    );

    Ok(compiled)
}

impl CompiledMask {
    fn push(&mut self, mask_position: usize, char_type: CharType, ch: char) {
        self.descriptors
            .push(PositionDescriptor::new(mask_position, char_type));
        self.buffer.push(ch);
    }

    fn push_edit(
        &mut self,
        mask_position: usize,
        char_type: CharType,
        case_conversion: CaseConversion,
        prompt: char,
    ) {
        let mut descriptor = PositionDescriptor::new(mask_position, char_type);
        descriptor.case_conversion = case_conversion;
        self.descriptors.push(descriptor);
        self.buffer.push(prompt);
    }
}
