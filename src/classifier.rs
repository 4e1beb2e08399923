use crate::criterion::Fitness;
use crate::error::TreeError;
use crate::extract_values::majority_vote;
use crate::instances::Instance;
use crate::settings::Settings;
use crate::tree::{build_tree, DecisionTree};
use log::debug;

/// An instance together with the class the tree predicts for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification<'a> {
    pub instance: &'a Instance,
    pub class: &'a str,
}

/// Follows the splits of `tree` matching the values of `instance` down to a leaf.
pub fn classify_instance<'a>(
    instance: &Instance,
    tree: &'a DecisionTree,
) -> Result<&'a str, TreeError> {
    match tree {
        DecisionTree::Leaf(class) => Ok(class.as_str()),
        DecisionTree::Split {
            attribute,
            children,
        } => {
            let value = instance.get(attribute)?;
            let subtree = children.get(value).ok_or_else(|| TreeError::UnseenValue {
                attribute: attribute.clone(),
                value: value.to_string(),
            })?;
            classify_instance(instance, subtree)
        }
    }
}

/// Classifies every instance, keeping the input order.
pub fn classify<'a>(
    instances: &'a [Instance],
    tree: &'a DecisionTree,
) -> Result<Vec<Classification<'a>>, TreeError> {
    instances
        .iter()
        .map(|instance| {
            Ok(Classification {
                instance,
                class: classify_instance(instance, tree)?,
            })
        })
        .collect()
}

/// A tree trained once on a set of instances and reused for classification.
#[derive(Debug, Clone)]
pub struct Id3Classifier {
    tree: DecisionTree,
    attributes: Vec<String>,
    settings: Settings,
}

impl Id3Classifier {
    /// Trains with the criterion from `settings` and majority vote as the default class.
    pub fn fit<S: AsRef<str>>(
        data: &[Instance],
        attributes: &[S],
        settings: Settings,
    ) -> Result<Self, TreeError> {
        let criterion = settings.get_criterion();
        Self::fit_with(data, attributes, settings, &criterion, &majority_vote)
    }

    pub fn fit_with<S, F, D>(
        data: &[Instance],
        attributes: &[S],
        settings: Settings,
        fitness: &F,
        default_class: &D,
    ) -> Result<Self, TreeError>
    where
        S: AsRef<str>,
        F: Fitness + ?Sized,
        D: Fn(&[Instance], &str) -> Result<String, TreeError> + ?Sized,
    {
        let tree = build_tree(
            data,
            attributes,
            fitness,
            settings.get_target_attribute(),
            default_class,
        )?;
        debug!(
            "Trained tree of depth {} with {} leaves on {} instances",
            tree.depth(),
            tree.leaf_count(),
            data.len()
        );
        Ok(Self {
            tree,
            attributes: attributes.iter().map(|a| a.as_ref().to_string()).collect(),
            settings,
        })
    }

    pub fn tree(&self) -> &DecisionTree {
        &self.tree
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn classify_instance(&self, instance: &Instance) -> Result<&str, TreeError> {
        classify_instance(instance, &self.tree)
    }

    pub fn classify<'a>(
        &'a self,
        instances: &'a [Instance],
    ) -> Result<Vec<Classification<'a>>, TreeError> {
        classify(instances, &self.tree)
    }
}
