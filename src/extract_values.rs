use crate::error::TreeError;
use crate::instances::{get_attribute_values, get_distinct_values, Instance};
use std::collections::HashMap;
use std::hash::Hash;

/// Counts how often every distinct value occurs.
pub fn frequencies<T, I>(values: I) -> HashMap<T, usize>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Returns the most common value of `attribute`.
/// Ties go to the value that occurs first in `data`.
pub fn majority_vote(data: &[Instance], attribute: &str) -> Result<String, TreeError> {
    if data.is_empty() {
        return Err(TreeError::EmptyData);
    }
    let counts = frequencies(get_attribute_values(data, attribute)?);

    let mut majority: Option<(&str, usize)> = None;
    for value in get_distinct_values(data, attribute)? {
        let count = counts.get(&value).copied().unwrap_or(0);
        match majority {
            Some((_, best)) if count <= best => {}
            _ => majority = Some((value, count)),
        }
    }
    majority
        .map(|(value, _)| value.to_string())
        .ok_or(TreeError::EmptyData)
}
