//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use maskedit::mask::{MaskedTextProvider, ProviderOptions};

/// Create a provider with default options
pub fn provider(mask: &str) -> MaskedTextProvider {
    MaskedTextProvider::new(mask).unwrap()
}

/// Create a provider with explicit options
pub fn provider_with(mask: &str, options: &ProviderOptions) -> MaskedTextProvider {
    MaskedTextProvider::with_options(mask, options).unwrap()
}

/// Create a provider and `set` its content, asserting success
pub fn filled(mask: &str, input: &str) -> MaskedTextProvider {
    let mut p = provider(mask);
    let result = p.set(input);
    assert!(result.success, "set({:?}) on {:?} failed: {:?}", input, mask, result);
    p
}

/// Whole test string including prompts and literals
pub fn full_text(p: &MaskedTextProvider) -> String {
    p.to_string_with(true, true)
}

/// Assigned flag of every position
pub fn assigned_flags(p: &MaskedTextProvider) -> Vec<bool> {
    (0..p.len())
        .map(|i| p.descriptor(i).is_some_and(|d| d.is_assigned))
        .collect()
}

/// Everything observable about a provider's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub text: String,
    pub assigned: Vec<bool>,
    pub assigned_count: usize,
    pub mask_completed: bool,
}

pub fn snapshot(p: &MaskedTextProvider) -> Snapshot {
    Snapshot {
        text: full_text(p),
        assigned: assigned_flags(p),
        assigned_count: p.assigned_edit_position_count(),
        mask_completed: p.mask_completed(),
    }
}

/// Check the counter and buffer invariants through the public API
pub fn assert_invariants(p: &MaskedTextProvider) {
    let assigned = p
        .edit_positions()
        .filter(|&i| p.descriptor(i).is_some_and(|d| d.is_assigned))
        .count();
    assert_eq!(p.assigned_edit_position_count(), assigned);
    assert_eq!(
        p.available_edit_position_count(),
        p.edit_position_count() - assigned
    );
    assert_eq!(full_text(p).chars().count(), p.len());

    for i in 0..p.len() {
        let d = p.descriptor(i).unwrap();
        if !d.is_edit() {
            assert!(!d.is_assigned, "literal at {} marked assigned", i);
        } else if !d.is_assigned {
            assert_eq!(p[i], p.prompt_char(), "unassigned slot {} lost its prompt", i);
        }
    }

    let required_assigned = p
        .edit_positions()
        .filter(|&i| p.descriptor(i).is_some_and(|d| d.is_required() && d.is_assigned))
        .count();
    assert_eq!(
        p.mask_completed(),
        required_assigned == p.required_edit_position_count()
    );
    assert_eq!(p.mask_full(), assigned == p.edit_position_count());
}
