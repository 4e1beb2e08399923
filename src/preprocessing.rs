use crate::error::TreeError;
use crate::instances::Instance;
use polars::io::SerReader;
use polars::prelude::CsvReadOptions;
use polars_core::datatypes::DataType;
use polars_core::frame::DataFrame;
use polars_lazy::frame::LazyFrame;
use std::path::Path;

pub fn read_csv_dataframe(path: impl AsRef<Path>) -> Result<DataFrame, TreeError> {
    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
        .finish()?;
    Ok(df)
}

/// Converts every row of `df` into an instance. All columns are treated as
/// categorical: non-string columns are cast to their string representation.
pub fn dataframe_to_instances(df: &DataFrame) -> Result<Vec<Instance>, TreeError> {
    let mut instances = vec![Instance::new(); df.height()];
    for column in df.get_columns() {
        let attribute = column.name().to_string();
        let values = column.cast(&DataType::String)?;
        for (row, value) in values.str()?.into_iter().enumerate() {
            let value = value.ok_or_else(|| TreeError::MissingValue {
                attribute: attribute.clone(),
                row,
            })?;
            instances[row].insert(attribute.as_str(), value);
        }
    }
    Ok(instances)
}

pub fn lazy_frame_to_instances(lf: LazyFrame) -> Result<Vec<Instance>, TreeError> {
    dataframe_to_instances(&lf.collect()?)
}

pub fn read_csv_instances(path: impl AsRef<Path>) -> Result<Vec<Instance>, TreeError> {
    dataframe_to_instances(&read_csv_dataframe(path)?)
}

/// Column names of `df` that can be split on, i.e. every column except the target.
pub fn get_attribute_columns(df: &DataFrame, target_column: &str) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .filter(|name| name != target_column)
        .collect()
}
