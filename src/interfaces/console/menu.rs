use crate::domain::apartment::UnitType;

pub const MENU: &str = "Select an option:
1. Add Apartment
2. Display Apartments
3. Update Rent
4. Select Apartment
5. Pay Rent
6. Clear Rent Payment
7. Exit
";

pub const SEPARATOR: &str = "-----------------------------";

/// One entry of the numbered menu.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuCommand {
    Add,
    Display,
    UpdateRent,
    Select,
    PayRent,
    ClearRentPayment,
    Exit,
}

impl MenuCommand {
    /// Maps a menu number (`1`..=`7`) to its command. Anything else is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::Display),
            3 => Some(Self::UpdateRent),
            4 => Some(Self::Select),
            5 => Some(Self::PayRent),
            6 => Some(Self::ClearRentPayment),
            7 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Maps the type selector asked for when adding (`1` two-bedroom, `2`
/// three-bedroom).
pub fn parse_unit_choice(input: &str) -> Option<UnitType> {
    match input.trim().parse::<u32>().ok()? {
        1 => Some(UnitType::TwoBedroom),
        2 => Some(UnitType::ThreeBedroom),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_numbers() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::Add));
        assert_eq!(MenuCommand::parse(" 4 "), Some(MenuCommand::Select));
        assert_eq!(MenuCommand::parse("7"), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        assert_eq!(MenuCommand::parse("0"), None);
        assert_eq!(MenuCommand::parse("8"), None);
        assert_eq!(MenuCommand::parse("-1"), None);
        assert_eq!(MenuCommand::parse("add"), None);
        assert_eq!(MenuCommand::parse(""), None);
    }

    #[test]
    fn test_parse_unit_choice() {
        assert_eq!(parse_unit_choice("1"), Some(UnitType::TwoBedroom));
        assert_eq!(parse_unit_choice("2\n"), Some(UnitType::ThreeBedroom));
        assert_eq!(parse_unit_choice("3"), None);
        assert_eq!(parse_unit_choice("two"), None);
    }
}
