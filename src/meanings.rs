// 📖 Number Meanings - what each core number stands for
// Static table rendered next to every number in the result views

use crate::error::{NumerologyError, Result};
use crate::reduction::is_master_number;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub number: u32,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
    pub is_master: bool,
}

/// Every number a calculator can produce for a real name and date.
pub const MEANINGFUL_NUMBERS: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

/// Look up the meaning of a reduced number.
///
/// Only 1-9 and the Master Numbers have one; 0 (a name without letters)
/// and unreduced values are rejected.
pub fn meaning_for(number: u32) -> Result<NumberMeaning> {
    let meaning = match number {
        1 => entry(
            1,
            "The Leader",
            &["independent", "ambitious", "pioneering"],
            "Driven to go first and carve out a path of their own.",
        ),
        2 => entry(
            2,
            "The Peacemaker",
            &["diplomatic", "sensitive", "cooperative"],
            "Thrives in partnership and reads the room before anyone else does.",
        ),
        3 => entry(
            3,
            "The Communicator",
            &["creative", "expressive", "social"],
            "Lights up a conversation and turns feelings into words and art.",
        ),
        4 => entry(
            4,
            "The Builder",
            &["steady", "practical", "loyal"],
            "Shows love through reliability and plans that actually happen.",
        ),
        5 => entry(
            5,
            "The Adventurer",
            &["curious", "restless", "free-spirited"],
            "Needs variety and a partner who says yes to the next trip.",
        ),
        6 => entry(
            6,
            "The Nurturer",
            &["caring", "responsible", "devoted"],
            "Makes a home wherever they go and looks after everyone in it.",
        ),
        7 => entry(
            7,
            "The Seeker",
            &["introspective", "analytical", "spiritual"],
            "Looks beneath the surface and values depth over small talk.",
        ),
        8 => entry(
            8,
            "The Powerhouse",
            &["confident", "driven", "strategic"],
            "Builds success and wants a partner who can match the pace.",
        ),
        9 => entry(
            9,
            "The Humanitarian",
            &["compassionate", "idealistic", "generous"],
            "Loves widely and is drawn to people who care about the bigger picture.",
        ),
        11 => entry(
            11,
            "The Intuitive",
            &["visionary", "inspired", "perceptive"],
            "A master number of insight; senses connections before they are spoken.",
        ),
        22 => entry(
            22,
            "The Master Builder",
            &["visionary", "disciplined", "grounded"],
            "A master number that turns big dreams into lasting structures.",
        ),
        33 => entry(
            33,
            "The Master Teacher",
            &["selfless", "healing", "uplifting"],
            "A master number devoted to lifting others through love and guidance.",
        ),
        _ => return Err(NumerologyError::UnknownNumber { number }),
    };

    Ok(meaning)
}

fn entry(
    number: u32,
    title: &'static str,
    keywords: &'static [&'static str],
    description: &'static str,
) -> NumberMeaning {
    NumberMeaning {
        number,
        title,
        keywords,
        description,
        is_master: is_master_number(number),
    }
}
