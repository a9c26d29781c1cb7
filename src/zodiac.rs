// ♈ Zodiac - sun sign from the month and day of a birth date
// The year never matters; Feb 29 falls inside Pisces like Feb 28

use crate::error::{NumerologyError, Result};
use crate::input::BirthDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

/// (sign, first month, first day, last month, last day), inclusive.
///
/// Capricorn is handled as the closing branch in `from_month_day` since it
/// wraps the new year.
const RANGES: [(ZodiacSign, u32, u32, u32, u32); 11] = [
    (ZodiacSign::Aquarius, 1, 20, 2, 18),
    (ZodiacSign::Pisces, 2, 19, 3, 20),
    (ZodiacSign::Aries, 3, 21, 4, 19),
    (ZodiacSign::Taurus, 4, 20, 5, 20),
    (ZodiacSign::Gemini, 5, 21, 6, 20),
    (ZodiacSign::Cancer, 6, 21, 7, 22),
    (ZodiacSign::Leo, 7, 23, 8, 22),
    (ZodiacSign::Virgo, 8, 23, 9, 22),
    (ZodiacSign::Libra, 9, 23, 10, 22),
    (ZodiacSign::Scorpio, 10, 23, 11, 21),
    (ZodiacSign::Sagittarius, 11, 22, 12, 21),
];

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Sign for a (month, day) pair, or `None` if the pair is not a day of
    /// any year (e.g. 4/31 or 13/1). Feb 29 is accepted.
    pub fn from_month_day(month: u32, day: u32) -> Option<ZodiacSign> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(month) {
            return None;
        }

        let sign = RANGES
            .iter()
            .find(|(_, start_month, start_day, end_month, end_day)| {
                (month == *start_month && day >= *start_day)
                    || (month == *end_month && day <= *end_day)
            })
            .map(|(sign, ..)| *sign)
            .unwrap_or(ZodiacSign::Capricorn);

        Some(sign)
    }

    pub fn from_birth_date(date: &BirthDate) -> ZodiacSign {
        // A BirthDate is always a real calendar day
        Self::from_month_day(date.month(), date.day()).unwrap_or(ZodiacSign::Capricorn)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            ZodiacSign::Aries => '♈',
            ZodiacSign::Taurus => '♉',
            ZodiacSign::Gemini => '♊',
            ZodiacSign::Cancer => '♋',
            ZodiacSign::Leo => '♌',
            ZodiacSign::Virgo => '♍',
            ZodiacSign::Libra => '♎',
            ZodiacSign::Scorpio => '♏',
            ZodiacSign::Sagittarius => '♐',
            ZodiacSign::Capricorn => '♑',
            ZodiacSign::Aquarius => '♒',
            ZodiacSign::Pisces => '♓',
        }
    }

    pub fn element(&self) -> Element {
        match self {
            ZodiacSign::Aries | ZodiacSign::Leo | ZodiacSign::Sagittarius => Element::Fire,
            ZodiacSign::Taurus | ZodiacSign::Virgo | ZodiacSign::Capricorn => Element::Earth,
            ZodiacSign::Gemini | ZodiacSign::Libra | ZodiacSign::Aquarius => Element::Air,
            ZodiacSign::Cancer | ZodiacSign::Scorpio | ZodiacSign::Pisces => Element::Water,
        }
    }

    /// Human readable range, e.g. "Jan 20 - Feb 18".
    pub fn date_range(&self) -> String {
        let (start_month, start_day, end_month, end_day) = match self {
            ZodiacSign::Capricorn => (12, 22, 1, 19),
            sign => RANGES
                .iter()
                .find(|(s, ..)| s == sign)
                .map(|(_, sm, sd, em, ed)| (*sm, *sd, *em, *ed))
                .unwrap_or((12, 22, 1, 19)),
        };

        format!(
            "{} {} - {} {}",
            month_abbrev(start_month),
            start_day,
            month_abbrev(end_month),
            end_day
        )
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ZodiacSign {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self> {
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NumerologyError::UnknownSign { input: s.to_string() })
    }
}

/// Sun sign for a `YYYY-MM-DD` birth date.
///
/// Unparseable or empty input is an error rather than silently becoming
/// Capricorn.
pub fn get_sun_sign(birth_date: &str) -> Result<ZodiacSign> {
    let date = BirthDate::parse(birth_date).map_err(|e| {
        debug!("sun sign lookup rejected {:?}: {}", birth_date, e);
        match e {
            NumerologyError::EmptyDate => NumerologyError::invalid_date(birth_date),
            other => other,
        }
    })?;

    Ok(ZodiacSign::from_birth_date(&date))
}

fn days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn month_abbrev(month: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    MONTHS.get(month.wrapping_sub(1) as usize).copied().unwrap_or("?")
}

// ============================================================================
// TESTS
// ============================================================================
