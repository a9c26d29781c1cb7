// 🧮 Calculators - Life Path, Expression, Soul Urge, Personality
// Pure functions over raw strings plus a typed profile built from validated input

use crate::error::{NumerologyError, Result};
use crate::input::{BirthDate, FullName};
use crate::letters::letter_sums;
use crate::meanings::{meaning_for, NumberMeaning};
use crate::reduction::reduce_to_single_digit_or_master;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Life Path returned when no birth date was given at all.
pub const LIFE_PATH_FALLBACK: u32 = 7;

// ============================================================================
// RAW STRING CALCULATORS
// ============================================================================

/// Life Path number: every digit of year, month and day summed, then reduced.
///
/// An empty (or blank) date yields [`LIFE_PATH_FALLBACK`] so a half-filled
/// form still renders. Anything else must parse as `YYYY-MM-DD`.
pub fn calculate_life_path(birth_date: &str) -> Result<u32> {
    match BirthDate::parse(birth_date) {
        Ok(date) => Ok(life_path(&date)),
        Err(NumerologyError::EmptyDate) => {
            debug!("empty birth date, using life path fallback {}", LIFE_PATH_FALLBACK);
            Ok(LIFE_PATH_FALLBACK)
        }
        Err(e) => Err(e),
    }
}

/// Expression (Destiny) number: all letters of the name.
pub fn calculate_expression(full_name: &str) -> u32 {
    reduce_to_single_digit_or_master(letter_sums(full_name).total)
}

/// Soul Urge (Heart's Desire) number: vowels only.
pub fn calculate_soul_urge(full_name: &str) -> u32 {
    reduce_to_single_digit_or_master(letter_sums(full_name).vowels)
}

/// Personality number: consonants only.
pub fn calculate_personality(full_name: &str) -> u32 {
    reduce_to_single_digit_or_master(letter_sums(full_name).consonants)
}

pub fn calculate_all_numbers(full_name: &str, birth_date: &str) -> Result<NumerologyProfile> {
    Ok(NumerologyProfile {
        life_path: calculate_life_path(birth_date)?,
        soul_urge: calculate_soul_urge(full_name),
        expression: calculate_expression(full_name),
        personality: calculate_personality(full_name),
    })
}

fn life_path(date: &BirthDate) -> u32 {
    reduce_to_single_digit_or_master(date.digits().iter().sum())
}

// ============================================================================
// PROFILE
// ============================================================================

/// The four core numbers. They are independent and may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub soul_urge: u32,
    pub expression: u32,
    pub personality: u32,
}

impl NumerologyProfile {
    /// Profile from validated input. Cannot fail.
    pub fn compute(name: &FullName, date: &BirthDate) -> Self {
        let sums = letter_sums(name.as_str());

        NumerologyProfile {
            life_path: life_path(date),
            soul_urge: reduce_to_single_digit_or_master(sums.vowels),
            expression: reduce_to_single_digit_or_master(sums.total),
            personality: reduce_to_single_digit_or_master(sums.consonants),
        }
    }

    /// (label, number) pairs in display order.
    pub fn entries(&self) -> [(&'static str, u32); 4] {
        [
            ("Life Path", self.life_path),
            ("Expression", self.expression),
            ("Soul Urge", self.soul_urge),
            ("Personality", self.personality),
        ]
    }

    /// Each number with its meaning; numbers without one (0) are skipped.
    pub fn meanings(&self) -> Vec<(&'static str, NumberMeaning)> {
        self.entries()
            .into_iter()
            .filter_map(|(label, n)| meaning_for(n).ok().map(|m| (label, m)))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
