//! Right-to-left text helpers
//!
//! egui lays glyphs out left to right in logical order. Arabic strings are
//! reversed into visual order before display so they read correctly.

use std::borrow::Cow;

fn is_arabic(c: char) -> bool {
    matches!(c,
        '\u{0600}'..='\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08FF}'
        | '\u{FB50}'..='\u{FDFF}'
        | '\u{FE70}'..='\u{FEFF}')
}

/// Visual-order rendition of `text`.
///
/// Only strings containing Arabic characters are reversed; runs of digits
/// keep their left-to-right order.
pub fn visual(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_arabic) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut digits = String::new();
    for c in text.chars().rev() {
        if c.is_ascii_digit() {
            digits.insert(0, c);
            continue;
        }
        out.push_str(&digits);
        digits.clear();
        out.push(c);
    }
    out.push_str(&digits);

    Cow::Owned(out)
}
