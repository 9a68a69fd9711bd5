use tracing::{debug, info, trace};

use crate::assignment::{Assignment, Dish, Outcome};
use crate::builder::{build_preference_table, Instance};
use crate::error::MixError;
use crate::preference::Preference;

/*Greedy two pass fill of the curry mix.
Pass 1: customers without any veg preference can only be served meat, so their first
meat curry is locked as Meat before anybody else is looked at.
Pass 2: everybody else, in order, takes their first veg curry that is not already Meat,
falling back once to their first meat curry that is not already Veg.
First come first served, nothing is ever re-assigned.*/

impl<'a> Assignment<'a> {

    fn lock_meat_lovers(&mut self) {
        let table = self.table;
        for customer in 0..table.num_customers() {
            if !self.classes[customer].is_meat_only() {
                continue;
            }
            // customers with no preference at all have nothing to lock
            if let Some(curry_idx) = table.row(customer).iter().position(|&p| p == Preference::Meat) {
                self.curry_mix[curry_idx] = Some(Dish::Meat);
            }
        }
    }

    // lowest numbered curry the customer asked for as `dish` that is not claimed as the other dish
    fn find_free_curry(&self, customer: usize, dish: Dish) -> Option<usize> {
        let wanted = dish.preference();
        self.table.row(customer).iter().enumerate()
            .filter(|&(_, &p)| p == wanted)
            .map(|(curry_idx, _)| curry_idx)
            .find(|&curry_idx| !self.is_blocked(curry_idx, dish))
    }

    fn place_customer(&self, customer: usize) -> Option<(usize, Dish)> {
        if let Some(curry_idx) = self.find_free_curry(customer, Dish::Veg) {
            return Some((curry_idx, Dish::Veg));
        }
        if self.classes[customer].has_meat {
            debug!(customer, "no free veg curry, trying meat");
            return self.find_free_curry(customer, Dish::Meat).map(|curry_idx| (curry_idx, Dish::Meat));
        }
        None
    }

    pub fn solve(mut self) -> Outcome {
        self.lock_meat_lovers();
        debug!(curry_mix = ?self.curry_mix, "curry mix after filling meat lovers");

        for customer in 0..self.table.num_customers() {
            // meat lovers were handled in the first pass
            if self.classes[customer].is_meat_only() {
                continue;
            }

            let Some((curry_idx, dish)) = self.place_customer(customer) else {
                info!(customer, "no acceptable curry left for customer, no solution");
                return Outcome::Infeasible { customer };
            };
            trace!(customer, curry = curry_idx + 1, %dish, "placed customer");
            self.curry_mix[curry_idx] = Some(dish);
        }

        let curry_mix = self.finalize();
        debug!(%curry_mix, "final curry mix");
        Outcome::Solved { curry_mix }
    }
}

pub fn process_orders(instance: &Instance) -> Result<Outcome, MixError> {
    let table = build_preference_table(instance)?;
    Ok(Assignment::new(&table).solve())
}
