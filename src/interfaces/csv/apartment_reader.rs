use crate::domain::apartment::{Rent, UnitType};
use crate::error::{AppError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct SeedRecord {
    r#type: String,
    name: String,
    rent: Rent,
}

/// One apartment row read from a seed file.
#[derive(Debug, PartialEq, Clone)]
pub struct SeedApartment {
    pub unit_type: UnitType,
    pub name: String,
    pub rent: Rent,
}

/// Reads apartments from a CSV source with a `type,name,rent` header.
///
/// Fields are whitespace-trimmed and `type` is matched case-insensitively
/// (`twobhk`, `threebhk`). Each row is reported on its own, so one bad row does
/// not stop the rest of the file.
pub struct ApartmentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ApartmentReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator over the rows in file order.
    ///
    /// Fails up front only if the header line cannot be read.
    pub fn apartments(mut self) -> Result<impl Iterator<Item = Result<SeedApartment>>> {
        let headers = self.reader.headers()?.clone();
        Ok(self.reader.into_records().map(move |record| {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line());
            let raw: SeedRecord = record.deserialize(Some(&headers))?;
            let unit_type = raw
                .r#type
                .parse::<UnitType>()
                .map_err(|reason| AppError::Seed { line, reason })?;
            Ok(SeedApartment {
                unit_type,
                name: raw.name,
                rent: raw.rent,
            })
        }))
    }
}
