//! Edit engine tests - add, insert, remove, replace, set, clear

mod common;

use common::{assert_invariants, filled, full_text, provider, provider_with, snapshot};
use maskedit::mask::{EditResult, ProviderOptions, ResultHint};

// ========================================================================
// Add
// ========================================================================

#[test]
fn test_add_phone_number() {
    let mut p = provider("(999) 000-0000");
    let result = p.add_str("5551234567");
    assert_eq!(result, EditResult::ok(13, ResultHint::Success));
    assert_eq!(p.to_string(), "(555) 123-4567");
    assert!(p.mask_full());
    assert_invariants(&p);
}

#[test]
fn test_add_skips_typed_literals() {
    let mut p = provider("(999) 000-0000");
    assert!(p.add_str("(555) 123-4567").success);
    assert_eq!(p.to_string(), "(555) 123-4567");
}

#[test]
fn test_add_on_full_provider_fails() {
    let mut p = filled("00", "12");
    let before = snapshot(&p);
    assert_eq!(p.add('x'), EditResult::fail(2, ResultHint::UnavailableEditPosition));
    assert_eq!(p.add('3'), EditResult::fail(2, ResultHint::UnavailableEditPosition));
    assert_eq!(snapshot(&p), before);
}

#[test]
fn test_add_space_on_optional_digit() {
    let options = ProviderOptions {
        reset_on_space: false,
        ..ProviderOptions::default()
    };
    let mut p = provider_with("99", &options);
    assert_eq!(p.add(' '), EditResult::ok(0, ResultHint::Success));
    assert_eq!(p.assigned_edit_position_count(), 1);
}

#[test]
fn test_add_space_resets_by_default() {
    let mut p = provider("99");
    assert_eq!(p.add(' '), EditResult::ok(0, ResultHint::CharacterEscaped));
    assert_eq!(p.assigned_edit_position_count(), 0);
}

// ========================================================================
// Insert
// ========================================================================

#[test]
fn test_insert_in_middle_of_date() {
    let mut p = provider("00/00/0000");
    assert!(p.add_str("1225202").success);
    // "12/25/202_" -> insert "0" before the year
    let result = p.insert_at("0", 6);
    assert!(result.success);
    assert_eq!(full_text(&p), "12/25/0202");
    assert_invariants(&p);
}

#[test]
fn test_insert_char_at_matches_insert_at() {
    let mut a = filled("0000", "12");
    let mut b = a.clone();
    assert_eq!(a.insert_char_at('9', 0), b.insert_at("9", 0));
    assert_eq!(full_text(&a), full_text(&b));
}

#[test]
fn test_insert_failure_is_atomic() {
    let mut p = filled("000", "123");
    let before = snapshot(&p);
    assert!(!p.insert_at("4", 1).success);
    assert_eq!(snapshot(&p), before);
}

#[test]
fn test_insert_escaped_prompt_shifts_as_hole() {
    let mut p = provider("0000");
    p.add_str("12");
    assert!(p.insert_at("_", 0).success);
    assert_eq!(full_text(&p), "_12_");
    assert_eq!(p.assigned_edit_position_count(), 2);
    assert_invariants(&p);
}

// ========================================================================
// Remove
// ========================================================================

#[test]
fn test_remove_at_first_of_full_mask() {
    let mut p = filled("0000", "1234");
    assert!(p.remove_at(0, 0).success);
    assert_eq!(p.to_string_with(true, true), "234_");
    assert_eq!(p.assigned_edit_position_count(), 3);
}

#[test]
fn test_remove_at_position_shifts_across_literals() {
    let mut p = filled("(999) 000-0000", "5551234567");
    assert!(p.remove_at_position(1).success);
    assert_eq!(full_text(&p), "(551) 234-567_");
    assert_invariants(&p);
}

#[test]
fn test_remove_literal_only_range() {
    let mut p = filled("00-00", "1234");
    assert_eq!(p.remove_at(2, 2), EditResult::ok(2, ResultHint::NoEffect));
    assert_eq!(full_text(&p), "12-34");
}

#[test]
fn test_remove_repeatedly_empties() {
    let mut p = filled("000", "123");
    for expected in [2, 1, 0] {
        assert_eq!(p.remove(), EditResult::ok(expected, ResultHint::Success));
    }
    assert_eq!(p.remove(), EditResult::ok(0, ResultHint::NoEffect));
    assert_invariants(&p);
}

// ========================================================================
// Replace
// ========================================================================

#[test]
fn test_replace_with_longer_text() {
    let mut p = provider("00000000");
    p.add_str("1256");
    assert!(p.replace("234", 1, 1).success);
    assert_eq!(full_text(&p), "123456__");
    assert_invariants(&p);
}

#[test]
fn test_replace_with_shorter_text() {
    let mut p = filled("00000", "12345");
    assert!(p.replace("0", 0, 2).success);
    assert_eq!(full_text(&p), "045__");
    assert_invariants(&p);
}

#[test]
fn test_replace_out_of_range() {
    let mut p = provider("000");
    assert_eq!(
        p.replace("1", 0, 3),
        EditResult::fail(3, ResultHint::PositionOutOfRange)
    );
    assert_eq!(
        p.replace("1", 2, 1),
        EditResult::fail(2, ResultHint::PositionOutOfRange)
    );
    assert_eq!(
        p.replace_char('1', 3),
        EditResult::fail(3, ResultHint::PositionOutOfRange)
    );
    assert_eq!(
        p.replace_str("1", 9),
        EditResult::fail(9, ResultHint::PositionOutOfRange)
    );
}

#[test]
fn test_replace_char_range_on_literal() {
    let mut p = provider("0-0");
    assert_eq!(
        p.replace_char_range('5', 1, 1),
        EditResult::fail(1, ResultHint::NonEditPosition)
    );
}

#[test]
fn test_replace_invalid_is_atomic() {
    let mut p = filled("0000", "1234");
    let before = snapshot(&p);
    assert!(!p.replace("9x", 0, 3).success);
    assert_eq!(snapshot(&p), before);
}

// ========================================================================
// Set / Clear
// ========================================================================

#[test]
fn test_set_any_chars() {
    let p = filled("&&&-&&&&", "ABC1234");
    assert_eq!(p.to_string(), "ABC-1234");
}

#[test]
fn test_set_date() {
    let p = filled("00/00/0000", "12252024");
    assert_eq!(p.to_string(), "12/25/2024");
    assert!(p.mask_completed());
}

#[test]
fn test_set_failure_keeps_old_content() {
    let mut p = filled("LLL", "abc");
    let before = snapshot(&p);
    assert_eq!(p.set("a1c"), EditResult::fail(1, ResultHint::LetterExpected));
    assert_eq!(snapshot(&p), before);
}

#[test]
fn test_clear_idempotent() {
    let mut p = filled("00", "12");
    assert_eq!(p.clear().hint, ResultHint::Success);
    let after_first = snapshot(&p);
    assert_eq!(p.clear(), EditResult::ok(0, ResultHint::NoEffect));
    assert_eq!(snapshot(&p), after_first);
}

#[test]
fn test_ascii_only_rejects_accents() {
    let mut p = provider_with("LLL", &ProviderOptions::ascii());
    assert_eq!(
        p.set("aéb"),
        EditResult::fail(1, ResultHint::AsciiCharacterExpected)
    );
    assert!(p.set("abc").success);
}

#[test]
fn test_clone_is_independent() {
    let mut p = filled("000", "123");
    let snapshot_before = snapshot(&p);
    let copy = p.clone();
    p.clear();
    assert_eq!(snapshot(&copy), snapshot_before);
    assert_eq!(p.assigned_edit_position_count(), 0);
}
