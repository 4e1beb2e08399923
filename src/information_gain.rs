// Entropy based measures used to score a candidate split attribute.

use crate::error::TreeError;
use crate::extract_values::frequencies;
use crate::instances::{
    get_attribute_values, get_distinct_values, get_matching_instances, Instance,
};

/// Counts of every distinct value of `attribute`, in first-seen order so that
/// sums over them are reproducible.
fn ordered_counts<'a>(
    data: &'a [Instance],
    attribute: &str,
) -> Result<Vec<(&'a str, usize)>, TreeError> {
    let counts = frequencies(get_attribute_values(data, attribute)?);
    Ok(get_distinct_values(data, attribute)?
        .into_iter()
        .map(|value| (value, counts.get(&value).copied().unwrap_or(0)))
        .collect())
}

fn entropy_of_counts(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    let total = total as f64;
    counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let proportion = count as f64 / total;
            -proportion * proportion.log2()
        })
        .sum()
}

/// Shannon entropy, in bits, of the distribution of `target_attr` over `data`.
pub fn entropy(data: &[Instance], target_attr: &str) -> Result<f64, TreeError> {
    if data.is_empty() {
        return Err(TreeError::EmptyData);
    }
    let counts = ordered_counts(data, target_attr)?;
    Ok(entropy_of_counts(
        counts.into_iter().map(|(_, count)| count),
        data.len(),
    ))
}

/// Reduction in entropy of `target_attr` obtained by partitioning `data` on `split_attr`.
pub fn information_gain(
    data: &[Instance],
    split_attr: &str,
    target_attr: &str,
) -> Result<f64, TreeError> {
    let data_entropy = entropy(data, target_attr)?;
    let total = data.len() as f64;

    // Remaining entropy of every subset, weighted by the share of data it holds:
    let mut total_subset_entropy = 0.0;
    for (value, count) in ordered_counts(data, split_attr)? {
        let subset = get_matching_instances(data, split_attr, value);
        total_subset_entropy += (count as f64 / total) * entropy(&subset, target_attr)?;
    }
    Ok(data_entropy - total_subset_entropy)
}

/// Entropy of `data` with respect to the values of `split_attr` itself.
pub fn split_information(data: &[Instance], split_attr: &str) -> Result<f64, TreeError> {
    entropy(data, split_attr)
}

/// Information gain normalised by split information. An attribute holding a
/// single value scores `0.0`.
pub fn gain_ratio(
    data: &[Instance],
    split_attr: &str,
    target_attr: &str,
) -> Result<f64, TreeError> {
    let split_info = split_information(data, split_attr)?;
    if split_info <= f64::EPSILON {
        return Ok(0.0);
    }
    Ok(information_gain(data, split_attr, target_attr)? / split_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{get_weather_attributes, get_weather_dataset, WEATHER_TARGET_COLUMN};

    fn labeled(labels: &[&str]) -> Vec<Instance> {
        labels
            .iter()
            .map(|label| Instance::new().with("foo", *label))
            .collect()
    }

    #[test]
    fn test_entropy_of_sample_text() -> Result<(), TreeError> {
        let data: Vec<Instance> = "sample_text"
            .chars()
            .map(|c| Instance::new().with("foo", c.to_string()))
            .collect();
        assert!((entropy(&data, "foo")? - 3.0958).abs() < 1e-4);
        Ok(())
    }

    #[test]
    fn test_entropy_of_even_split_is_one_bit() -> Result<(), TreeError> {
        let data = labeled(&["yes", "no", "yes", "no", "no", "yes"]);
        assert!((entropy(&data, "foo")? - 1.0).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_entropy_of_pure_data_is_zero() -> Result<(), TreeError> {
        let data = labeled(&["yes", "yes", "yes"]);
        assert_eq!(entropy(&data, "foo")?, 0.0);
        Ok(())
    }

    #[test]
    fn test_entropy_of_no_data() {
        assert!(matches!(entropy(&[], "foo"), Err(TreeError::EmptyData)));
    }

    #[test]
    fn test_information_gain_of_weather_attributes() -> Result<(), TreeError> {
        let data = get_weather_dataset();
        let expected = [0.246, 0.029, 0.151, 0.048];
        for (attribute, expected_gain) in get_weather_attributes().iter().zip(expected) {
            let gain = information_gain(&data, attribute, WEATHER_TARGET_COLUMN)?;
            assert!(
                (gain - expected_gain).abs() < 0.01,
                "gain for {} was {}",
                attribute,
                gain
            );
        }
        Ok(())
    }

    #[test]
    fn test_information_gain_is_never_negative() -> Result<(), TreeError> {
        let data = get_weather_dataset();
        // Any column, the target itself included, is a valid split.
        for attribute in get_weather_attributes()
            .iter()
            .map(String::as_str)
            .chain([WEATHER_TARGET_COLUMN])
        {
            for size in 1..=data.len() {
                let gain = information_gain(&data[..size], attribute, WEATHER_TARGET_COLUMN)?;
                assert!(gain >= -1e-12, "negative gain {} for {}", gain, attribute);
            }
        }
        Ok(())
    }

    #[test]
    fn test_equivalent_attributes_score_identically() -> Result<(), TreeError> {
        let data = crate::test_utils::get_renamed_split_dataset();
        let gain_a = information_gain(&data, "a", "target")?;
        for _ in 0..200 {
            assert_eq!(information_gain(&data, "a", "target")?.to_bits(), gain_a.to_bits());
            assert_eq!(information_gain(&data, "b", "target")?.to_bits(), gain_a.to_bits());
        }
        Ok(())
    }

    #[test]
    fn test_gain_ratio_of_outlook() -> Result<(), TreeError> {
        let data = get_weather_dataset();
        let ratio = gain_ratio(&data, "outlook", WEATHER_TARGET_COLUMN)?;
        assert!((ratio - 0.156).abs() < 0.01);
        Ok(())
    }

    #[test]
    fn test_gain_ratio_of_constant_attribute_is_zero() -> Result<(), TreeError> {
        let data: Vec<Instance> = labeled(&["yes", "no"])
            .into_iter()
            .map(|instance| instance.with("constant", "x"))
            .collect();
        assert_eq!(gain_ratio(&data, "constant", "foo")?, 0.0);
        Ok(())
    }
}
