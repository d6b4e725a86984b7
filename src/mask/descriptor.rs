//! Per-position descriptors produced by the mask compiler.

use serde::Serialize;

/// Category of a test-string slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CharType {
    /// Input required for the mask to be complete
    EditRequired,
    /// Input accepted but not required
    EditOptional,
    /// Locale-dependent separator or currency symbol
    Separator,
    /// Fixed character copied from the mask
    Literal,
}

impl CharType {
    /// EditRequired | EditOptional
    pub fn is_edit(self) -> bool {
        matches!(self, CharType::EditRequired | CharType::EditOptional)
    }

    /// Literal | Separator
    pub fn is_non_edit(self) -> bool {
        !self.is_edit()
    }
}

/// Case conversion applied when committing a letter to an edit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CaseConversion {
    #[default]
    None,
    ToLower,
    ToUpper,
}

impl CaseConversion {
    /// Apply the conversion to a single character.
    ///
    /// Only letters whose case differs from the target are touched; a
    /// conversion that expands to several characters keeps the input.
    pub fn apply(self, ch: char) -> char {
        match self {
            CaseConversion::ToLower if ch.is_uppercase() => single(ch.to_lowercase()).unwrap_or(ch),
            CaseConversion::ToUpper if ch.is_lowercase() => single(ch.to_uppercase()).unwrap_or(ch),
            _ => ch,
        }
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Descriptor of one slot in the test string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionDescriptor {
    /// Index (in chars) of the mask character this slot was compiled from
    pub mask_position: usize,
    pub char_type: CharType,
    pub case_conversion: CaseConversion,
    /// True once user input occupies this edit slot
    pub is_assigned: bool,
}

impl PositionDescriptor {
    pub fn new(mask_position: usize, char_type: CharType) -> Self {
        Self {
            mask_position,
            char_type,
            case_conversion: CaseConversion::None,
            is_assigned: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.char_type.is_edit()
    }

    pub fn is_non_edit(&self) -> bool {
        self.char_type.is_non_edit()
    }

    pub fn is_required(&self) -> bool {
        self.char_type == CharType::EditRequired
    }
}
