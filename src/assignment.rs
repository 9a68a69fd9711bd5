use std::fmt;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::preference::{classify_customers, CustomerClass, Preference, PreferenceTable};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dish {
    #[serde(rename = "V")]
    Veg,
    #[serde(rename = "M")]
    Meat,
}

impl Dish {
    pub fn symbol(self) -> char {
        match self {
            Dish::Veg => 'V',
            Dish::Meat => 'M',
        }
    }

    pub fn other(self) -> Dish {
        match self {
            Dish::Veg => Dish::Meat,
            Dish::Meat => Dish::Veg,
        }
    }

    // preference a customer must have stated for a curry to accept this dish there
    pub fn preference(self) -> Preference {
        match self {
            Dish::Veg => Preference::Veg,
            Dish::Meat => Preference::Meat,
        }
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Final dish per curry, in curry order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct CurryMix(pub Vec<Dish>);

impl CurryMix {
    pub fn dishes(&self) -> &[Dish] {
        &self.0
    }
}

impl fmt::Display for CurryMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dishes().iter().join(" "))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved { curry_mix: CurryMix },
    // index of the first order that could not be placed
    Infeasible { customer: usize },
}

impl Outcome {
    pub fn curry_mix(&self) -> Option<&CurryMix> {
        match self {
            Outcome::Solved { curry_mix } => Some(curry_mix),
            Outcome::Infeasible { .. } => None,
        }
    }
}

pub struct Assignment<'a> {
    pub table: &'a PreferenceTable,
    pub classes: Vec<CustomerClass>,
    // one entry per curry, None until some customer claims it
    pub curry_mix: Vec<Option<Dish>>,
}

impl<'a> Assignment<'a> {
    pub fn new(table: &'a PreferenceTable) -> Self {
        Assignment {
            table,
            classes: classify_customers(table),
            curry_mix: vec![None; table.num_curries()],
        }
    }

    // curry already claimed with the other dish, so unusable for `dish`
    pub fn is_blocked(&self, curry_idx: usize, dish: Dish) -> bool {
        self.curry_mix[curry_idx] == Some(dish.other())
    }

    /// Translates the solver state into the final mix. Curries nobody claimed
    /// become Veg.
    pub fn finalize(self) -> CurryMix {
        CurryMix(self.curry_mix.into_iter().map(|dish| dish.unwrap_or(Dish::Veg)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_finalize_defaults_to_veg() {
        let table = PreferenceTable::new(0, 4);
        let mut assignment = Assignment::new(&table);
        assignment.curry_mix[1] = Some(Dish::Meat);
        assignment.curry_mix[2] = Some(Dish::Veg);

        let curry_mix = assignment.finalize();
        assert_eq!(curry_mix.dishes(), &[Dish::Veg, Dish::Meat, Dish::Veg, Dish::Veg]);
        assert_eq!(curry_mix.to_string(), "V M V V");
    }

    #[test]
    fn check_is_blocked() {
        let table = PreferenceTable::new(0, 3);
        let mut assignment = Assignment::new(&table);
        assignment.curry_mix[0] = Some(Dish::Meat);
        assignment.curry_mix[1] = Some(Dish::Veg);

        assert!(assignment.is_blocked(0, Dish::Veg));
        assert!(!assignment.is_blocked(0, Dish::Meat));
        assert!(assignment.is_blocked(1, Dish::Meat));
        assert!(!assignment.is_blocked(1, Dish::Veg));
        assert!(!assignment.is_blocked(2, Dish::Veg));
        assert!(!assignment.is_blocked(2, Dish::Meat));
    }

    #[test]
    fn check_outcome_json() {
        let solved = Outcome::Solved { curry_mix: CurryMix(vec![Dish::Meat, Dish::Veg]) };
        assert_eq!(serde_json::to_string(&solved).unwrap(),
            r#"{"status":"solved","curry_mix":["M","V"]}"#);

        let infeasible = Outcome::Infeasible { customer: 1 };
        assert_eq!(serde_json::to_string(&infeasible).unwrap(),
            r#"{"status":"infeasible","customer":1}"#);
        assert_eq!(infeasible.curry_mix(), None);
    }
}
