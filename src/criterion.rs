use crate::error::TreeError;
use crate::information_gain::{gain_ratio, information_gain};
use crate::instances::Instance;
use std::fmt;

/// Scores how good `attribute` is for splitting `data` when predicting
/// `target_attr`. Higher is better.
pub trait Fitness {
    fn score(&self, data: &[Instance], attribute: &str, target_attr: &str)
        -> Result<f64, TreeError>;
}

impl<F> Fitness for F
where
    F: Fn(&[Instance], &str, &str) -> Result<f64, TreeError>,
{
    fn score(
        &self,
        data: &[Instance],
        attribute: &str,
        target_attr: &str,
    ) -> Result<f64, TreeError> {
        self(data, attribute, target_attr)
    }
}

/// Built-in splitting criteria.
/// * `Criterion::InformationGain` maximizes the reduction in entropy (ID3).
/// * `Criterion::GainRatio` normalizes the gain by the split information,
///     penalizing attributes with many distinct values (C4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Criterion {
    #[default]
    InformationGain,
    GainRatio,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InformationGain => "Information gain",
            Self::GainRatio => "Gain ratio",
        };
        write!(f, "{name}")
    }
}

impl Fitness for Criterion {
    fn score(
        &self,
        data: &[Instance],
        attribute: &str,
        target_attr: &str,
    ) -> Result<f64, TreeError> {
        match self {
            Criterion::InformationGain => information_gain(data, attribute, target_attr),
            Criterion::GainRatio => gain_ratio(data, attribute, target_attr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{get_weather_dataset, WEATHER_TARGET_COLUMN};

    #[test]
    fn test_criterion_matches_plain_functions() -> Result<(), TreeError> {
        let data = get_weather_dataset();
        assert_eq!(
            Criterion::InformationGain.score(&data, "wind", WEATHER_TARGET_COLUMN)?,
            information_gain(&data, "wind", WEATHER_TARGET_COLUMN)?
        );
        assert_eq!(
            Criterion::GainRatio.score(&data, "wind", WEATHER_TARGET_COLUMN)?,
            gain_ratio(&data, "wind", WEATHER_TARGET_COLUMN)?
        );
        Ok(())
    }

    #[test]
    fn test_function_pointer_is_fitness() -> Result<(), TreeError> {
        let data = get_weather_dataset();
        let fitness = information_gain;
        assert!(fitness.score(&data, "outlook", WEATHER_TARGET_COLUMN)? > 0.2);
        Ok(())
    }

    #[test]
    fn test_display_criterion() {
        assert_eq!(Criterion::default().to_string(), "Information gain");
        assert_eq!(Criterion::GainRatio.to_string(), "Gain ratio");
    }
}
