// 📋 Batch Mode - CSV of people in, CSV of readings out
// Bad rows are reported per row; one typo never aborts the whole file

use crate::reading::Reading;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// One input row. Headers: `full_name,birth_date`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub full_name: String,
    #[serde(default)]
    pub birth_date: String,
}

/// One output row. Number columns are empty when `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchRecord {
    pub full_name: String,
    pub birth_date: String,
    pub life_path: Option<u32>,
    pub expression: Option<u32>,
    pub soul_urge: Option<u32>,
    pub personality: Option<u32>,
    pub sun_sign: Option<String>,
    pub error: Option<String>,
}

impl BatchRecord {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    fn from_person(person: &PersonRecord) -> Self {
        match Reading::from_raw(&person.full_name, &person.birth_date) {
            Ok(reading) => BatchRecord {
                full_name: reading.full_name.to_string(),
                birth_date: reading.birth_date.to_string(),
                life_path: Some(reading.profile.life_path),
                expression: Some(reading.profile.expression),
                soul_urge: Some(reading.profile.soul_urge),
                personality: Some(reading.profile.personality),
                sun_sign: Some(reading.sun_sign.to_string()),
                error: None,
            },
            Err(e) => BatchRecord {
                full_name: person.full_name.clone(),
                birth_date: person.birth_date.clone(),
                life_path: None,
                expression: None,
                soul_urge: None,
                personality: None,
                sun_sign: None,
                error: Some(e.to_string()),
            },
        }
    }
}

pub fn load_people(csv_path: &Path) -> Result<Vec<PersonRecord>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;
    read_people(file)
}

pub fn read_people<R: Read>(reader: R) -> Result<Vec<PersonRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut people = Vec::new();
    for result in rdr.deserialize() {
        let person: PersonRecord = result.context("Failed to deserialize person")?;
        people.push(person);
    }

    Ok(people)
}

pub fn compute_readings(people: &[PersonRecord]) -> Vec<BatchRecord> {
    let records: Vec<BatchRecord> = people.iter().map(BatchRecord::from_person).collect();

    let failed = records.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        warn!("{} of {} rows could not be read", failed, records.len());
    }
    info!("computed {} readings", records.len() - failed);

    records
}

pub fn write_records<W: Write>(writer: W, records: &[BatchRecord]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record).context("Failed to write record")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(())
}
