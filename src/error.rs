use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError), // Automatically converts PolarsError

    #[error("Can't compute over an empty set of instances")]
    EmptyData,

    #[error("Can't choose an attribute from an empty attribute set")]
    NoAttributes,

    #[error("Instance has no value for attribute '{attribute}'")]
    MissingAttribute { attribute: String },

    #[error("Value '{value}' of attribute '{attribute}' was never observed during training")]
    UnseenValue { attribute: String, value: String },

    #[error("Null value for attribute '{attribute}' in row {row}")]
    MissingValue { attribute: String, row: usize },
}
