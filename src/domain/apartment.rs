use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// The closed set of unit layouts a tracked apartment can have.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnitType {
    TwoBedroom,
    ThreeBedroom,
}

impl UnitType {
    /// Label shown in listings and confirmations.
    pub fn label(&self) -> &'static str {
        match self {
            UnitType::TwoBedroom => "TWOBHK",
            UnitType::ThreeBedroom => "THREEBHK",
        }
    }
}

impl FromStr for UnitType {
    type Err = String;

    /// Parses the label case-insensitively (`twobhk`, `THREEBHK`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "twobhk" => Ok(UnitType::TwoBedroom),
            "threebhk" => Ok(UnitType::ThreeBedroom),
            other => Err(format!("unknown apartment type '{other}'")),
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monthly rent for a unit.
///
/// Wraps `rust_decimal::Decimal` so amounts like `1200.50` keep their exact
/// value. No sign or range rule is applied: zero and negative rents are
/// accepted as entered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Rent(Decimal);

impl Rent {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Rent {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl FromStr for Rent {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl fmt::Display for Rent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1000.00 prints as 1000, 1200.50 as 1200.5
        write!(f, "{}", self.0.normalize())
    }
}

/// One tracked rental unit.
#[derive(Debug, PartialEq, Clone)]
pub struct Apartment {
    /// Lookup key. Not required to be unique.
    pub name: String,
    pub rent: Rent,
    pub rent_paid: bool,
    /// Fixed at creation.
    pub unit_type: UnitType,
}

impl Apartment {
    pub fn new(unit_type: UnitType, name: impl Into<String>, rent: Rent) -> Self {
        Self {
            name: name.into(),
            rent,
            rent_paid: false,
            unit_type,
        }
    }

    pub fn set_rent(&mut self, rent: Rent) {
        self.rent = rent;
    }

    /// Marks rent as paid. Returns `false` when it already was.
    pub fn pay_rent(&mut self) -> bool {
        !std::mem::replace(&mut self.rent_paid, true)
    }

    /// Clears the paid flag. Returns `false` when there was nothing to clear.
    pub fn clear_rent_payment(&mut self) -> bool {
        std::mem::replace(&mut self.rent_paid, false)
    }
}
