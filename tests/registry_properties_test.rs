use rand::Rng;
use rentroll::application::registry::{ApartmentRegistry, SelectOutcome};
use rentroll::domain::apartment::{Rent, UnitType};
use rentroll::error::RegistryError;
use rust_decimal::Decimal;

fn random_registry(rng: &mut impl Rng, count: usize) -> (ApartmentRegistry, Vec<(UnitType, String, Rent)>) {
    let mut registry = ApartmentRegistry::new();
    let mut added = Vec::with_capacity(count);
    for i in 0..count {
        let unit_type = if rng.gen_bool(0.5) {
            UnitType::TwoBedroom
        } else {
            UnitType::ThreeBedroom
        };
        // Small name pool so duplicates show up.
        let name = format!("U{}", rng.gen_range(0..count / 2 + 1));
        let rent = Rent::new(Decimal::new(rng.gen_range(-10_000..500_000), 2));
        registry.add(unit_type, name.clone(), rent);
        added.push((unit_type, name, rent));
        assert_eq!(registry.len(), i + 1);
    }
    (registry, added)
}

#[test]
fn test_list_preserves_insertion_order() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let count = rng.gen_range(1..60);
        let (registry, added) = random_registry(&mut rng, count);

        let listed: Vec<(UnitType, String, Rent, bool)> = registry
            .list()
            .iter()
            .map(|a| (a.unit_type, a.name.clone(), a.rent, a.rent_paid))
            .collect();
        let expected: Vec<(UnitType, String, Rent, bool)> = added
            .into_iter()
            .map(|(t, n, r)| (t, n, r, false))
            .collect();
        assert_eq!(listed, expected);
    }
}

#[test]
fn test_lookup_always_returns_first_duplicate() {
    let mut rng = rand::thread_rng();
    let (mut registry, added) = random_registry(&mut rng, 40);

    for (_, name, _) in &added {
        let first = added.iter().position(|(_, n, _)| n == name).unwrap();
        registry.update_rent(name, Rent::new(Decimal::from(first as i64))).unwrap();
    }

    for (index, apartment) in registry.list().iter().enumerate() {
        let first = added.iter().position(|(_, n, _)| *n == apartment.name).unwrap();
        if index == first {
            assert_eq!(apartment.rent, Rent::new(Decimal::from(first as i64)));
        } else {
            assert_eq!(apartment.rent, added[index].2);
        }
    }
}

#[test]
fn test_selection_gate_holds_under_random_operations() {
    let mut rng = rand::thread_rng();
    let (mut registry, added) = random_registry(&mut rng, 30);

    for _ in 0..300 {
        let name = added[rng.gen_range(0..added.len())].1.clone();
        match rng.gen_range(0..3) {
            0 => {
                registry.pay_rent(&name).unwrap();
            }
            1 => {
                registry.clear_rent_payment(&name).unwrap();
            }
            _ => {
                let was_selected = registry.is_selected(&name);
                let paid = registry.find_by_name(&name).unwrap().rent_paid;
                let before = registry.selected().len();
                match registry.select(&name) {
                    Ok(SelectOutcome::Selected) => {
                        assert!(paid && !was_selected);
                        assert_eq!(registry.selected().len(), before + 1);
                    }
                    Ok(SelectOutcome::AlreadySelected) => {
                        assert!(paid && was_selected);
                        assert_eq!(registry.selected().len(), before);
                    }
                    Err(RegistryError::RentNotPaid(_)) => {
                        assert!(!paid);
                        assert_eq!(registry.selected().len(), before);
                    }
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
        }
    }

    let mut names = registry.selected().to_vec();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), registry.selected().len());
}
