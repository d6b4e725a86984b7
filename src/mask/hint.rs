//! Result hints and the `EditResult` triple returned by every edit and verify operation.

use serde::Serialize;

/// Classification of an operation outcome.
///
/// Positive values denote success, negative values failure. Variants are
/// declared in discriminant order so the derived `Ord` ranks success hints
/// as `Success > SideEffect > NoEffect > CharacterEscaped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ResultHint {
    /// Position is outside the test string
    PositionOutOfRange = -55,
    /// Position holds a literal or separator
    NonEditPosition = -54,
    /// No edit position left to hold the input
    UnavailableEditPosition = -53,
    /// Prompt used as input while `allow_prompt_as_input` is off
    PromptCharNotAllowed = -52,
    /// Input is not a printable character
    InvalidInput = -51,
    LetterExpected = -4,
    DigitExpected = -3,
    AlphanumericCharacterExpected = -2,
    AsciiCharacterExpected = -1,
    /// Neutral starting value while accumulating hints
    Unknown = 0,
    /// Input silently ignored (escaped prompt, space or literal)
    CharacterEscaped = 1,
    /// Value and assignment state are unchanged
    NoEffect = 2,
    /// A position other than the target was cleared or shifted
    SideEffect = 3,
    Success = 4,
}

impl ResultHint {
    /// Whether the hint denotes a successful operation
    pub fn is_success(self) -> bool {
        (self as i32) > 0
    }
}

/// Outcome of an edit or verify operation.
///
/// `position` is the last position the primary operation touched on
/// success, or the first position that made the test fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditResult {
    pub success: bool,
    pub position: usize,
    pub hint: ResultHint,
}

impl EditResult {
    pub fn ok(position: usize, hint: ResultHint) -> Self {
        Self {
            success: true,
            position,
            hint,
        }
    }

    pub fn fail(position: usize, hint: ResultHint) -> Self {
        Self {
            success: false,
            position,
            hint,
        }
    }
}

/// Failure raised inside a test pass; converted into an [`EditResult`] at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub position: usize,
    pub hint: ResultHint,
}

impl Rejection {
    pub fn new(position: usize, hint: ResultHint) -> Self {
        Self { position, hint }
    }
}

/// Result of an internal test or commit pass: the last touched position and
/// the strongest hint observed, or the rejection that stopped it.
pub(crate) type Outcome = Result<(usize, ResultHint), Rejection>;

pub(crate) fn settle(outcome: Outcome) -> EditResult {
    match outcome {
        Ok((position, hint)) => EditResult::ok(position, hint),
        Err(r) => EditResult::fail(r.position, r.hint),
    }
}
