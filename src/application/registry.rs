use crate::domain::apartment::{Apartment, Rent, UnitType};
use crate::domain::selection::SelectionSet;
use crate::error::RegistryError;
use tracing::{debug, warn};

/// Result of [`ApartmentRegistry::pay_rent`] when the apartment exists.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PaymentOutcome {
    NowPaid,
    AlreadyPaid,
}

/// Result of [`ApartmentRegistry::clear_rent_payment`] when the apartment exists.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ClearOutcome {
    Cleared,
    NothingToClear,
}

/// Result of [`ApartmentRegistry::select`] when selection is allowed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SelectOutcome {
    Selected,
    AlreadySelected,
}

/// Owns the apartment records, in insertion order, and the selection set.
///
/// Every name-based operation resolves the name with [`find_by_name`]: a linear,
/// case-sensitive scan where the first match wins. Duplicate names are accepted
/// on insert, so later duplicates are never reachable by name.
///
/// [`find_by_name`]: ApartmentRegistry::find_by_name
#[derive(Debug, Default)]
pub struct ApartmentRegistry {
    apartments: Vec<Apartment>,
    selection: SelectionSet,
}

impl ApartmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new unpaid apartment.
    pub fn add(&mut self, unit_type: UnitType, name: impl Into<String>, rent: Rent) {
        let apartment = Apartment::new(unit_type, name, rent);
        debug!(name = %apartment.name, %unit_type, %rent, "apartment added");
        self.apartments.push(apartment);
    }

    /// All apartments in the order they were added.
    pub fn list(&self) -> &[Apartment] {
        &self.apartments
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Apartment> {
        self.apartments.iter().find(|a| a.name == name)
    }

    fn find_by_name_mut(&mut self, name: &str) -> Result<&mut Apartment, RegistryError> {
        match self.apartments.iter_mut().find(|a| a.name == name) {
            Some(apartment) => Ok(apartment),
            None => {
                warn!(name, "apartment not found");
                Err(RegistryError::NotFound(name.to_string()))
            }
        }
    }

    pub fn update_rent(&mut self, name: &str, rent: Rent) -> Result<(), RegistryError> {
        let apartment = self.find_by_name_mut(name)?;
        debug!(name, old = %apartment.rent, new = %rent, "rent updated");
        apartment.set_rent(rent);
        Ok(())
    }

    pub fn pay_rent(&mut self, name: &str) -> Result<PaymentOutcome, RegistryError> {
        let apartment = self.find_by_name_mut(name)?;
        if apartment.pay_rent() {
            debug!(name, "rent paid");
            Ok(PaymentOutcome::NowPaid)
        } else {
            Ok(PaymentOutcome::AlreadyPaid)
        }
    }

    pub fn clear_rent_payment(&mut self, name: &str) -> Result<ClearOutcome, RegistryError> {
        let apartment = self.find_by_name_mut(name)?;
        if apartment.clear_rent_payment() {
            debug!(name, "rent payment cleared");
            Ok(ClearOutcome::Cleared)
        } else {
            Ok(ClearOutcome::NothingToClear)
        }
    }

    /// Marks the apartment as selected. Requires its rent to be paid.
    pub fn select(&mut self, name: &str) -> Result<SelectOutcome, RegistryError> {
        let apartment = self.find_by_name_mut(name)?;
        if !apartment.rent_paid {
            warn!(name, "selection blocked, rent not paid");
            return Err(RegistryError::RentNotPaid(name.to_string()));
        }

        if self.selection.insert(name) {
            debug!(name, "apartment selected");
            Ok(SelectOutcome::Selected)
        } else {
            Ok(SelectOutcome::AlreadySelected)
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.contains(name)
    }

    /// Selected names, in selection order.
    pub fn selected(&self) -> &[String] {
        self.selection.names()
    }

    pub fn len(&self) -> usize {
        self.apartments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apartments.is_empty()
    }
}
