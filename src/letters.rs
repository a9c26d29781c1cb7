// 🔤 Letters - Pythagorean letter values and the vowel partition
// Names are reduced to a-z before any letter is counted

use serde::Serialize;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Pythagorean value of a letter: a..i = 1..9, then the cycle repeats.
/// Returns `None` for anything outside a-z / A-Z.
pub fn letter_value(c: char) -> Option<u32> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() {
        Some((c as u32 - 'a' as u32) % 9 + 1)
    } else {
        None
    }
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Lowercase the name and drop every character that is not a-z.
///
/// Spaces, hyphens, digits and accented letters (`é`, `ñ`) are all removed.
pub fn normalize_name(full_name: &str) -> String {
    full_name
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

// ============================================================================
// LETTER SUMS
// ============================================================================

/// Unreduced letter sums of a name.
///
/// `vowels + consonants == total` always holds; the reduced numbers do not
/// share that property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LetterSums {
    /// Feeds Soul Urge
    pub vowels: u32,
    /// Feeds Personality
    pub consonants: u32,
    /// Feeds Expression
    pub total: u32,
}

pub fn letter_sums(full_name: &str) -> LetterSums {
    let mut sums = LetterSums::default();

    for c in normalize_name(full_name).chars() {
        let Some(value) = letter_value(c) else { continue };
        if is_vowel(c) {
            sums.vowels += value;
        } else {
            sums.consonants += value;
        }
        sums.total += value;
    }

    sums
}
