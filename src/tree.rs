use crate::criterion::Fitness;
use crate::error::TreeError;
use crate::instances::{get_distinct_values, get_matching_instances, Instance};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// A decision tree over categorical attributes.
///
/// `Split` nodes hold one child for every value of `attribute` observed in
/// the training data that reached them, and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionTree {
    /// Final classification.
    Leaf(String),
    /// Branch on the value of `attribute`.
    Split {
        attribute: String,
        children: BTreeMap<String, DecisionTree>,
    },
}

impl DecisionTree {
    /// Number of splits on the longest path from the root to a leaf.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 0,
            DecisionTree::Split { children, .. } => {
                1 + children.values().map(|child| child.depth()).max().unwrap_or(0)
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            DecisionTree::Leaf(_) => 1,
            DecisionTree::Split { children, .. } => {
                children.values().map(|child| child.leaf_count()).sum()
            }
        }
    }

    /// All attributes the tree splits on.
    pub fn split_attributes(&self) -> BTreeSet<&str> {
        let mut attributes = BTreeSet::new();
        self.collect_split_attributes(&mut attributes);
        attributes
    }

    fn collect_split_attributes<'a>(&'a self, attributes: &mut BTreeSet<&'a str>) {
        if let DecisionTree::Split {
            attribute,
            children,
        } = self
        {
            attributes.insert(attribute.as_str());
            for child in children.values() {
                child.collect_split_attributes(attributes);
            }
        }
    }
}

/// Returns the attribute with the highest fitness score.
/// Ties go to the attribute listed first.
pub fn choose_attribute<'a, S, F>(
    data: &[Instance],
    attributes: &'a [S],
    target_attr: &str,
    fitness: &F,
) -> Result<&'a str, TreeError>
where
    S: AsRef<str>,
    F: Fitness + ?Sized,
{
    if data.is_empty() {
        return Err(TreeError::EmptyData);
    }

    let mut optimal_attribute: Option<(&str, f64)> = None;
    for attribute in attributes.iter().map(|attribute| attribute.as_ref()) {
        let score = fitness.score(data, attribute, target_attr)?;
        trace!("Attribute '{}' scores {}", attribute, score);
        // NaN never wins over a real score.
        let score = if score.is_nan() { f64::NEG_INFINITY } else { score };

        match optimal_attribute {
            Some((_, optimal)) if score > optimal => optimal_attribute = Some((attribute, score)),
            None => optimal_attribute = Some((attribute, score)),
            _ => {}
        }
    }
    optimal_attribute
        .map(|(attribute, _)| attribute)
        .ok_or(TreeError::NoAttributes)
}

/// Grows a tree from `data` by repeatedly splitting on the fittest remaining
/// attribute. When no attributes remain, the leaf holds `default_class`.
pub fn build_tree<S, F, D>(
    data: &[Instance],
    attributes: &[S],
    fitness: &F,
    target_attr: &str,
    default_class: &D,
) -> Result<DecisionTree, TreeError>
where
    S: AsRef<str>,
    F: Fitness + ?Sized,
    D: Fn(&[Instance], &str) -> Result<String, TreeError> + ?Sized,
{
    if data.is_empty() {
        return Err(TreeError::EmptyData);
    }

    if attributes.is_empty() {
        let class = default_class(data, target_attr)?;
        debug!("No attributes left, defaulting to '{}'", class);
        return Ok(DecisionTree::Leaf(class));
    }

    let classes = get_distinct_values(data, target_attr)?;
    if let [class] = classes.as_slice() {
        return Ok(DecisionTree::Leaf(class.to_string()));
    }

    let next_attr = choose_attribute(data, attributes, target_attr, fitness)?;
    debug!("Splitting {} instances on '{}'", data.len(), next_attr);

    // Every child gets the same snapshot: the parent's attributes minus this split.
    let remaining: Vec<&str> = attributes
        .iter()
        .map(|attribute| attribute.as_ref())
        .filter(|attribute| *attribute != next_attr)
        .collect();

    let mut children = BTreeMap::new();
    for value in get_distinct_values(data, next_attr)? {
        let matching_data = get_matching_instances(data, next_attr, value);
        let subtree = build_tree(&matching_data, &remaining, fitness, target_attr, default_class)?;
        children.insert(value.to_string(), subtree);
    }

    Ok(DecisionTree::Split {
        attribute: next_attr.to_string(),
        children,
    })
}
