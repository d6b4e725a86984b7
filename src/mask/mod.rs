//! Masked text input engine.
//!
//! A mask such as `(999) 000-0000` is compiled into a fixed-length test
//! string where every slot is either an edit position (accepting one
//! character of a given class) or a literal. The provider validates input
//! against the mask, shifts characters on insert and delete, and renders
//! the buffer with configurable prompt, literal and password handling.
//!
//! # Architecture
//!
//! - [`compile`]: mask string to [`PositionDescriptor`]s and an initial buffer
//! - [`LocaleSymbols`] / [`LocaleSource`]: separator symbols for `. , : / $`
//! - [`MaskedTextProvider`]: the stateful buffer, counters and public API
//! - [`EditResult`] / [`ResultHint`]: outcome of every edit and verify call
//!
//! Edits are all-or-nothing. Each operation is tested in full against the
//! current state before anything is written, so a failed edit leaves the
//! provider untouched.
//!
//! # Mask language
//!
//! | Char | Meaning |
//! |------|---------|
//! | `0` | digit, required |
//! | `9` | digit or space, optional |
//! | `#` | digit, space, `+` or `-`, optional |
//! | `L` | letter, required |
//! | `?` | letter, optional |
//! | `&` | any printable character, required |
//! | `C` | any printable character, optional |
//! | `A` | letter or digit, required |
//! | `a` | letter or digit, optional |
//! | `. , : / $` | locale separators |
//! | `<` `>` `\|` | lower, upper, no case conversion |
//! | `\` | escape the next character as a literal |
//!
//! # Example
//!
//! ```
//! use maskedit::mask::{MaskedTextProvider, ResultHint};
//!
//! let mut p = MaskedTextProvider::new("00/00/0000").unwrap();
//! assert!(p.set("12252024").success);
//! assert_eq!(p.to_string(), "12/25/2024");
//!
//! let result = p.add('1');
//! assert!(!result.success);
//! assert_eq!(result.hint, ResultHint::UnavailableEditPosition);
//! ```

mod compiler;
mod descriptor;
mod edit;
mod error;
mod format;
mod hint;
mod index;
mod locale;
mod options;
mod provider;
mod validate;

// Re-export main types
pub use compiler::{compile, validate_mask, CompiledMask, MaskToken};
pub use descriptor::{CaseConversion, CharType, PositionDescriptor};
pub use error::MaskError;
pub use hint::{EditResult, ResultHint};
pub use index::Direction;
pub use locale::{LocaleSource, LocaleSymbols, LocaleTable};
pub use options::{ProviderOptions, DEFAULT_PASSWORD_CHAR, DEFAULT_PROMPT_CHAR};
pub use provider::MaskedTextProvider;
pub use validate::is_printable;
