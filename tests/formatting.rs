//! Formatting tests - render flags, ranges and password display

mod common;

use common::{filled, provider, provider_with};
use maskedit::mask::{LocaleSymbols, MaskedTextProvider, ProviderOptions};

// ========================================================================
// Include flags
// ========================================================================

#[test]
fn test_display_uses_current_flags() {
    let mut p = provider("00-00");
    p.add_str("1");
    assert_eq!(p.to_string(), "1 -");

    p.set_include_prompt(true);
    assert_eq!(p.to_string(), "1_-__");

    p.set_include_literals(false);
    assert_eq!(p.to_string(), "1___");
}

#[test]
fn test_render_matches_convenience_forms() {
    let p = filled("(000) 000", "123");
    assert_eq!(p.render(true, true, true, 0, p.len()), p.to_string_with(true, true));
    assert_eq!(
        p.render(true, false, true, 0, p.len()),
        p.to_string_masked(true)
    );
    assert_eq!(p.render(true, false, true, 1, 3), p.to_string_range(1, 3));
}

#[test]
fn test_render_without_prompt_or_literals() {
    let mut p = provider("(000) 000");
    p.replace_char('4', 7);
    assert_eq!(p.to_string_with(false, false), "    4");
    assert_eq!(p.to_string_with(false, true), "(   )  4");
}

#[test]
fn test_render_clamps_length() {
    let p = filled("0000", "1234");
    assert_eq!(p.render(true, true, true, 2, 100), "34");
    assert_eq!(p.render(true, true, true, 4, 1), "");
}

// ========================================================================
// Password
// ========================================================================

#[test]
fn test_password_hides_assigned_positions() {
    let mut p = provider_with("000-00-0000", &ProviderOptions::password('*'));
    assert!(p.set("123456789").success);
    assert_eq!(p.to_display_string(), "***-**-****");
    assert_eq!(p.to_string_masked(true), "123-45-6789");
    assert_eq!(p.to_string_masked(false), "***-**-****");
}

#[test]
fn test_password_partial_fill() {
    let mut p = provider_with("0000", &ProviderOptions::password('#'));
    p.add_str("12");
    assert_eq!(p.to_display_string(), "##__");
    assert_eq!(p.render(false, true, true, 0, 4), "##__");
}

#[test]
fn test_toggle_password() {
    let mut p = filled("000", "123");
    p.set_is_password(true).unwrap();
    assert_eq!(p.to_display_string(), "***");
    p.set_password_char(None).unwrap();
    assert_eq!(p.to_display_string(), "123");
}

// ========================================================================
// Prompt and locale
// ========================================================================

#[test]
fn test_prompt_change_updates_display() {
    let mut p = provider("00-00");
    p.add_str("1");
    p.set_prompt_char('.').unwrap();
    assert_eq!(p.to_display_string(), "1.-..");
    // A dot typed now resets instead of filling
    assert!(p.add('.').success);
    assert_eq!(p.assigned_edit_position_count(), 1);
}

#[test]
fn test_locale_symbols_in_output() {
    let options = ProviderOptions {
        symbols: LocaleSymbols {
            decimal: ",".to_string(),
            group: ".".to_string(),
            currency: "kr".to_string(),
            ..LocaleSymbols::invariant()
        },
        ..ProviderOptions::default()
    };
    let mut p = MaskedTextProvider::with_options("$ 0,000.00", &options).unwrap();
    assert_eq!(p.len(), 11);
    assert!(p.set("123456").success);
    assert_eq!(p.to_string(), "kr 1.234,56");
}
