//! Letter values for names.
//!
//! Hebrew letters use standard gematria (final forms count as their base
//! letter). Latin letters use the Pythagorean 1-9 cycle.

use super::error::ComputationError;

fn hebrew_value(ch: char) -> Option<u32> {
    let value = match ch {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => return None,
    };
    Some(value)
}

fn latin_value(ch: char) -> Option<u32> {
    if ch.is_ascii_alphabetic() {
        let index = (ch.to_ascii_lowercase() as u32) - ('a' as u32);
        Some(index % 9 + 1)
    } else {
        None
    }
}

/// Separators and diacritics that carry no value.
fn is_ignorable(ch: char) -> bool {
    matches!(ch, ' ' | '-' | '\'' | '"' | '`' | '\u{05F3}' | '\u{05F4}')
        || ('\u{0591}'..='\u{05C7}').contains(&ch)
}

/// Add two name values.
///
/// # Errors
/// `Internal` when the sum does not fit in a `u32`.
pub fn combine_values(a: u32, b: u32) -> Result<u32, ComputationError> {
    a.checked_add(b)
        .ok_or_else(|| ComputationError::Internal(format!("ערך השם חורג מהטווח ({a} + {b})")))
}

/// Sum the letter values of a name.
///
/// # Errors
/// `EmptyName` when nothing valued remains, `MalformedName` on any character
/// that is neither a letter nor ignorable.
pub fn name_value(name: &str, field: &'static str) -> Result<u32, ComputationError> {
    let mut total = 0;
    let mut letters = 0;
    for ch in name.trim().chars() {
        if is_ignorable(ch) {
            continue;
        }
        let value = hebrew_value(ch)
            .or_else(|| latin_value(ch))
            .ok_or_else(|| ComputationError::MalformedName {
                name: name.to_string(),
                ch,
            })?;
        total = combine_values(total, value)?;
        letters += 1;
    }
    if letters == 0 {
        return Err(ComputationError::EmptyName(field));
    }
    Ok(total)
}
