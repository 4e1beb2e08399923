use crate::instances::Instance;

pub const WEATHER_TARGET_COLUMN: &str = "target";
const WEATHER_COLUMNS: [&str; 5] = [
    "outlook",
    "temperature",
    "humidity",
    "wind",
    WEATHER_TARGET_COLUMN,
];
const WEATHER_ROWS: [&str; 14] = [
    "sunny hot high weak no",
    "sunny hot high strong no",
    "overcast hot high weak yes",
    "rain mild high weak yes",
    "rain cool normal weak yes",
    "rain cool normal strong no",
    "overcast cool normal strong yes",
    "sunny mild high weak no",
    "sunny cool normal weak yes",
    "rain mild normal weak yes",
    "sunny mild normal strong yes",
    "overcast mild high strong yes",
    "overcast hot normal weak yes",
    "rain mild high strong no",
];

pub fn get_weather_dataset() -> Vec<Instance> {
    WEATHER_ROWS
        .iter()
        .map(|row| {
            WEATHER_COLUMNS
                .iter()
                .copied()
                .zip(row.split_whitespace())
                .collect::<Instance>()
        })
        .collect()
}

pub fn get_weather_attributes() -> Vec<String> {
    WEATHER_COLUMNS[..4].iter().map(|c| c.to_string()).collect()
}

/// Attributes `a` and `b` partition the rows into the same groups under
/// different value names, so every split measure scores them equally.
pub fn get_renamed_split_dataset() -> Vec<Instance> {
    (0..60)
        .map(|row| {
            let group = row % 3;
            let label = if row % 4 == 0 || (group == 0 && row % 7 < 3) {
                "yes"
            } else {
                "no"
            };
            Instance::new()
                .with("a", ["x", "y", "z"][group])
                .with("b", ["p", "q", "r"][group])
                .with("target", label)
        })
        .collect()
}
