pub const TARGET_COLUMN: &str = "target";
pub const WEATHER_FILE_PATH: &str = "data/weather.csv";
