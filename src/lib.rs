pub mod classifier;
pub mod constants;
pub mod criterion;
pub mod display_tree;
pub mod error;
pub mod extract_values;
pub mod information_gain;
pub mod instances;
pub mod preprocessing;
pub mod settings;
pub mod tree;

#[cfg(test)]
mod test_utils;

pub use classifier::{classify, classify_instance, Classification, Id3Classifier};
pub use criterion::{Criterion, Fitness};
pub use error::TreeError;
pub use extract_values::{frequencies, majority_vote};
pub use information_gain::{entropy, gain_ratio, information_gain};
pub use instances::Instance;
pub use settings::Settings;
pub use tree::{build_tree, choose_attribute, DecisionTree};
