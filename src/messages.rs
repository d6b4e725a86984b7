//! Message types for the Elm-style architecture
//!
//! Every change to a provider driven by the command line or a script
//! flows through [`MaskMsg`].

/// Which characters a `remove` command deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveTarget {
    /// The last assigned character, no shifting
    Last,
    /// One position, shifting the rest left
    At(usize),
    /// Inclusive range, shifting the rest left
    Range(usize, usize),
}

/// Provider messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskMsg {
    /// Append text after the last assigned position
    Add(String),
    /// Insert text at a position, shifting right
    Insert { position: usize, text: String },
    Remove(RemoveTarget),
    /// Replace an inclusive range with text
    Replace {
        start: usize,
        end: usize,
        text: String,
    },
    /// Replace the whole content
    Set(String),
    Clear,
    /// Test text against the mask without changing anything
    Verify(String),
    SetPrompt(char),
    /// `None` turns password masking off
    SetPassword(Option<char>),
    /// Report the current state
    Show,
}

impl MaskMsg {
    /// Command word used in scripts and output
    pub fn name(&self) -> &'static str {
        match self {
            MaskMsg::Add(_) => "add",
            MaskMsg::Insert { .. } => "insert",
            MaskMsg::Remove(_) => "remove",
            MaskMsg::Replace { .. } => "replace",
            MaskMsg::Set(_) => "set",
            MaskMsg::Clear => "clear",
            MaskMsg::Verify(_) => "verify",
            MaskMsg::SetPrompt(_) => "prompt",
            MaskMsg::SetPassword(_) => "password",
            MaskMsg::Show => "show",
        }
    }
}
