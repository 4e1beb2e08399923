use id3_trees::constants::{TARGET_COLUMN, WEATHER_FILE_PATH};
use id3_trees::preprocessing::{dataframe_to_instances, get_attribute_columns, read_csv_dataframe};
use id3_trees::{Id3Classifier, Settings};
use log::info;
use std::error::Error;

// Usage: id3_trees [CSV_FILE] [TARGET_COLUMN]
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let file_path = args.next().unwrap_or_else(|| WEATHER_FILE_PATH.to_string());
    let target_column = args.next().unwrap_or_else(|| TARGET_COLUMN.to_string());

    info!("Reading instances from {}", file_path);
    let df = read_csv_dataframe(&file_path)?;
    let instances = dataframe_to_instances(&df)?;
    let attributes = get_attribute_columns(&df, &target_column);

    let mut settings = Settings::default();
    settings.set_target_attribute(target_column.as_str());
    info!(
        "Building tree on {} instances over {:?} using {}",
        instances.len(),
        attributes,
        settings.get_criterion()
    );
    let classifier = Id3Classifier::fit(&instances, &attributes, settings)?;
    println!("{}", classifier.tree());

    for classification in classifier.classify(&instances)? {
        let actual = classification.instance.get(&target_column)?;
        println!("{} -> {}", actual, classification.class);
    }
    Ok(())
}
