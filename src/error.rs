// ⚠️ Engine Errors
// Every failure the numerology engine can report to a caller

/// Errors raised at the input boundary of the engine.
///
/// The calculators themselves never fail on names; only dates and
/// meaning lookups can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumerologyError {
    #[error("birth date is empty")]
    EmptyDate,

    #[error("invalid birth date {input:?}: expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("name {input:?} contains no letters a-z")]
    NoLetters { input: String },

    #[error("no meaning defined for number {number}")]
    UnknownNumber { number: u32 },

    #[error("unknown zodiac sign {input:?}")]
    UnknownSign { input: String },
}

impl NumerologyError {
    pub fn invalid_date(input: impl Into<String>) -> Self {
        NumerologyError::InvalidDate { input: input.into() }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(NumerologyError::EmptyDate.to_string(), "birth date is empty");
        assert_eq!(
            NumerologyError::invalid_date("tomorrow").to_string(),
            "invalid birth date \"tomorrow\": expected YYYY-MM-DD"
        );
        assert_eq!(
            NumerologyError::UnknownNumber { number: 0 }.to_string(),
            "no meaning defined for number 0"
        );
        assert_eq!(
            NumerologyError::UnknownSign { input: "Ophiuchus".to_string() }.to_string(),
            "unknown zodiac sign \"Ophiuchus\""
        );
    }
}
