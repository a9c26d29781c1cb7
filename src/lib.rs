// Numerology Engine - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod error;
pub mod reduction;
pub mod letters;
pub mod input;        // Boundary types: FullName, BirthDate
pub mod calculators;  // Life Path, Expression, Soul Urge, Personality
pub mod meanings;
pub mod zodiac;
pub mod reading;
pub mod batch;        // CSV in, CSV out
pub mod logging;

// Re-export commonly used types
pub use error::{NumerologyError, Result};
pub use reduction::{reduce_to_single_digit_or_master, digit_sum, is_master_number, MASTER_NUMBERS};
pub use letters::{letter_value, is_vowel, normalize_name, letter_sums, LetterSums, VOWELS};
pub use input::{BirthDate, FullName};
pub use calculators::{
    calculate_life_path, calculate_expression, calculate_soul_urge,
    calculate_personality, calculate_all_numbers,
    NumerologyProfile, LIFE_PATH_FALLBACK,
};
pub use meanings::{meaning_for, NumberMeaning, MEANINGFUL_NUMBERS};
pub use zodiac::{get_sun_sign, Element, ZodiacSign};
pub use reading::Reading;
pub use batch::{
    load_people, read_people, compute_readings, write_records,
    PersonRecord, BatchRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
