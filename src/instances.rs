use crate::error::TreeError;
use std::collections::{HashMap, HashSet};

/// A single labeled or unlabeled record: attribute name to categorical value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    values: HashMap<String, String>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attribute: impl Into<String>, value: impl Into<String>) {
        self.values.insert(attribute.into(), value.into());
    }

    pub fn with(mut self, attribute: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn value(&self, attribute: &str) -> Option<&str> {
        self.values.get(attribute).map(String::as_str)
    }

    pub fn get(&self, attribute: &str) -> Result<&str, TreeError> {
        self.value(attribute)
            .ok_or_else(|| TreeError::MissingAttribute {
                attribute: attribute.to_string(),
            })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Instance {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(attribute, value)| (attribute.into(), value.into()))
                .collect(),
        }
    }
}

/// Values of `attribute` across `data`, in row order.
pub fn get_attribute_values<'a>(
    data: &'a [Instance],
    attribute: &str,
) -> Result<Vec<&'a str>, TreeError> {
    data.iter().map(|instance| instance.get(attribute)).collect()
}

/// Distinct values of `attribute`, in the order they are first seen.
pub fn get_distinct_values<'a>(
    data: &'a [Instance],
    attribute: &str,
) -> Result<Vec<&'a str>, TreeError> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for value in get_attribute_values(data, attribute)? {
        if seen.insert(value) {
            distinct.push(value);
        }
    }
    Ok(distinct)
}

pub fn get_matching_instances(data: &[Instance], attribute: &str, value: &str) -> Vec<Instance> {
    data.iter()
        .filter(|instance| instance.value(attribute) == Some(value))
        .cloned()
        .collect()
}
