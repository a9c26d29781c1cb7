// 🔮 Reading - everything a result view renders for one person

use crate::calculators::NumerologyProfile;
use crate::error::Result;
use crate::input::{BirthDate, FullName};
use crate::zodiac::{Element, ZodiacSign};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub full_name: FullName,
    pub birth_date: BirthDate,
    pub profile: NumerologyProfile,
    pub sun_sign: ZodiacSign,
    pub element: Element,
}

impl Reading {
    pub fn new(full_name: &FullName, birth_date: &BirthDate) -> Self {
        let sun_sign = ZodiacSign::from_birth_date(birth_date);

        Reading {
            full_name: full_name.clone(),
            birth_date: *birth_date,
            profile: NumerologyProfile::compute(full_name, birth_date),
            sun_sign,
            element: sun_sign.element(),
        }
    }

    /// Validate raw form strings and build the reading.
    pub fn from_raw(full_name: &str, birth_date: &str) -> Result<Self> {
        let name = FullName::parse(full_name)?;
        let date = BirthDate::parse(birth_date)?;
        Ok(Reading::new(&name, &date))
    }
}
