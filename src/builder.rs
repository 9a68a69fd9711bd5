use std::fs;
use std::path::Path;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MixError;
use crate::preference::{Preference, PreferenceTable};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Instance {
    pub curries: usize,
    // one line per customer: "<curry> <letter> <curry> <letter> ..."
    #[serde(default)]
    pub orders: Vec<String>,
}

fn deserialize(data: &str) -> Result<Instance, serde_json::Error> {
    let data_struct: Instance = serde_json::from_str(data)?;
    Ok(data_struct)
}

// First line is the number of curries, every following line is an order.
pub fn parse_order_file(data: &str) -> Result<Instance, MixError> {
    let mut lines = data.lines();
    let header = lines.next().ok_or(MixError::MissingCurryCount)?.trim();
    if header.is_empty() {
        return Err(MixError::MissingCurryCount);
    }
    let curries = header
        .parse::<usize>()
        .map_err(|_| MixError::InvalidCurryCount(header.to_string()))?;

    Ok(Instance {
        curries,
        orders: lines.map(String::from).collect(),
    })
}

pub fn instance_build(path: &Path) -> Result<Instance, MixError> {
    let data = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(deserialize(&data)?)
    } else {
        parse_order_file(&data)
    }
}

/// Splits one order line into (curry index, preference) pairs, curry index
/// 1-based as written. Pairs keep the order they were listed in.
pub fn parse_order(customer: usize, order: &str, num_curries: usize)
    -> Result<Vec<(usize, Preference)>, MixError> {
    let tokens = order.split_whitespace().collect_vec();
    if tokens.len() % 2 != 0 {
        return Err(MixError::malformed(customer,
            format!("odd number of tokens ({}), expected <curry> <preference> pairs", tokens.len())));
    }

    tokens.into_iter().tuples().map(|(curry, code)| {
        let nth_curry = curry.parse::<usize>().map_err(|_|
            MixError::malformed(customer, format!("'{}' is not a curry number", curry)))?;
        if nth_curry == 0 || nth_curry > num_curries {
            return Err(MixError::malformed(customer,
                format!("curry {} outside 1..={}", nth_curry, num_curries)));
        }
        Ok((nth_curry, Preference::from_code(code)))
    }).collect()
}

pub fn build_preference_table(instance: &Instance) -> Result<PreferenceTable, MixError> {
    let mut table = PreferenceTable::new(instance.orders.len(), instance.curries);

    for (customer, order) in instance.orders.iter().enumerate() {
        let curry_prefs = parse_order(customer, order, instance.curries)?;
        debug!(customer, ?curry_prefs, "parsed order");

        // a curry listed twice keeps its last preference
        for (nth_curry, preference) in curry_prefs {
            table.set(customer, nth_curry - 1, preference);
        }
    }
    debug!(table = ?table.rows().collect_vec(), "preference table");

    Ok(table)
}
