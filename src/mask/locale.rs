//! Locale separator symbols consumed by the mask compiler.
//!
//! The crate ships no locale database. Callers either pass explicit
//! [`LocaleSymbols`] or resolve them through a [`LocaleSource`], such as
//! the [`LocaleTable`] loaded from configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Symbols substituted for the separator tokens `.` `,` `:` `/` `$`.
///
/// Each symbol may span several characters; every character gets its own
/// slot in the test string. Missing fields deserialize to the invariant symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleSymbols {
    pub decimal: String,
    pub group: String,
    pub time: String,
    pub date: String,
    pub currency: String,
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        Self::invariant()
    }
}

impl LocaleSymbols {
    /// Culture-neutral symbols
    pub fn invariant() -> Self {
        let symbol = |token| invariant_symbol(token).unwrap_or_default().to_string();
        Self {
            decimal: symbol('.'),
            group: symbol(','),
            time: symbol(':'),
            date: symbol('/'),
            currency: symbol('$'),
        }
    }

    /// Symbol for a separator token, `None` for any other mask character
    pub fn for_token(&self, token: char) -> Option<&str> {
        match token {
            '.' => Some(&self.decimal),
            ',' => Some(&self.group),
            ':' => Some(&self.time),
            '/' => Some(&self.date),
            '$' => Some(&self.currency),
            _ => None,
        }
    }

    /// Symbol placed for a separator token.
    ///
    /// An empty symbol would leave the separator without slots, so the
    /// invariant symbol is used instead.
    pub fn separator(&self, token: char) -> Option<&str> {
        match self.for_token(token)? {
            "" => {
                tracing::warn!("Empty locale symbol for {:?}, using invariant", token);
                invariant_symbol(token)
            }
            symbol => Some(symbol),
        }
    }

    /// Look up `locale` in `source`, falling back to the invariant symbols
    pub fn resolve(source: &dyn LocaleSource, locale: &str) -> Self {
        match source.locale_symbols(locale) {
            Some(symbols) => symbols,
            None => {
                tracing::debug!("No symbols for locale {:?}, using invariant", locale);
                Self::invariant()
            }
        }
    }
}

fn invariant_symbol(token: char) -> Option<&'static str> {
    match token {
        '.' => Some("."),
        ',' => Some(","),
        ':' => Some(":"),
        '/' => Some("/"),
        '$' => Some("¤"),
        _ => None,
    }
}

/// Lookup of separator symbols by locale name.
pub trait LocaleSource {
    fn locale_symbols(&self, locale: &str) -> Option<LocaleSymbols>;
}

/// Locale source backed by an in-memory map (usually from `config.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    entries: HashMap<String, LocaleSymbols>,
}

impl LocaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: impl Into<String>, symbols: LocaleSymbols) {
        self.entries.insert(locale.into(), symbols);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocaleSource for LocaleTable {
    fn locale_symbols(&self, locale: &str) -> Option<LocaleSymbols> {
        self.entries.get(locale).cloned()
    }
}
