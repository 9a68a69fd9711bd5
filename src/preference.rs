use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Veg,
    Meat,
    NoPreference,
}

impl Preference {
    // only V and M mean anything, every other letter is "no preference"
    pub fn from_code(code: &str) -> Preference {
        match code {
            "V" => Preference::Veg,
            "M" => Preference::Meat,
            _ => Preference::NoPreference,
        }
    }
}

/// Customer x curry matrix of preferences. Cells the customer never mentioned
/// hold `Preference::NoPreference`. Rows are in the original order of the orders.
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceTable {
    num_curries: usize,
    rows: Vec<Vec<Preference>>,
}

impl PreferenceTable {
    pub fn new(num_customers: usize, num_curries: usize) -> Self {
        PreferenceTable {
            num_curries,
            rows: vec![vec![Preference::NoPreference; num_curries]; num_customers],
        }
    }

    pub fn num_curries(&self) -> usize {
        self.num_curries
    }

    pub fn num_customers(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, customer: usize) -> &[Preference] {
        &self.rows[customer]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Preference]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    // curry_idx is 0-based here, the builder has already validated it
    pub(crate) fn set(&mut self, customer: usize, curry_idx: usize, preference: Preference) {
        self.rows[customer][curry_idx] = preference;
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerClass {
    pub has_veg: bool,
    pub has_meat: bool,
}

impl CustomerClass {
    pub fn of_row(row: &[Preference]) -> Self {
        CustomerClass {
            has_veg: row.contains(&Preference::Veg),
            has_meat: row.contains(&Preference::Meat),
        }
    }

    /// Least preferred type available to this customer is Meat. Also true for a
    /// customer who asked for nothing at all.
    pub fn is_meat_only(&self) -> bool {
        !self.has_veg
    }
}

pub fn classify_customers(table: &PreferenceTable) -> Vec<CustomerClass> {
    let classes: Vec<CustomerClass> = table.rows().map(CustomerClass::of_row).collect();
    debug!(
        has_veg = ?classes.iter().map(|c| c.has_veg).collect::<Vec<_>>(),
        has_meat = ?classes.iter().map(|c| c.has_meat).collect::<Vec<_>>(),
        "classified customers"
    );
    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::Preference::*;

    #[test]
    fn check_from_code() {
        assert_eq!(Preference::from_code("V"), Veg);
        assert_eq!(Preference::from_code("M"), Meat);
        assert_eq!(Preference::from_code("N"), NoPreference);
        assert_eq!(Preference::from_code("v"), NoPreference);
        assert_eq!(Preference::from_code("VM"), NoPreference);
    }

    #[test]
    fn new_table_has_no_preferences() {
        let table = PreferenceTable::new(2, 3);
        assert_eq!(table.num_customers(), 2);
        assert_eq!(table.num_curries(), 3);
        for row in table.rows() {
            assert!(row.iter().all(|p| *p == NoPreference));
        }
    }

    #[test]
    fn check_classify_customers() {
        let mut table = PreferenceTable::new(4, 3);
        table.set(0, 0, Veg);
        table.set(0, 1, Meat);
        table.set(1, 2, Meat);
        table.set(2, 1, Veg);
        // customer 3 says nothing

        let classes = classify_customers(&table);
        assert_eq!(classes[0], CustomerClass { has_veg: true, has_meat: true });
        assert_eq!(classes[1], CustomerClass { has_veg: false, has_meat: true });
        assert_eq!(classes[2], CustomerClass { has_veg: true, has_meat: false });
        assert_eq!(classes[3], CustomerClass { has_veg: false, has_meat: false });

        assert!(!classes[0].is_meat_only());
        assert!(classes[1].is_meat_only());
        assert!(!classes[2].is_meat_only());
        assert!(classes[3].is_meat_only());
    }

    #[test]
    fn explicit_no_preference_does_not_count() {
        let class = CustomerClass::of_row(&[NoPreference, NoPreference]);
        assert!(!class.has_veg);
        assert!(!class.has_meat);
    }
}
