//! Numeric scaling and conversion.

use crate::error::{PrepError, Result};
use tracing::{debug, trace};

fn bounds(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

/// Rescale `data` linearly so its minimum maps to `min_val` and its maximum
/// to `max_val`.
///
/// Constant input maps every item to `min_val`. An inverted or NaN target
/// range is rejected.
///
/// # Examples
///
/// ```
/// use prepkit_core::numeric::minmax_normalize;
///
/// let scaled = minmax_normalize(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.0, 1.0).unwrap();
/// assert_eq!(scaled, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn minmax_normalize(data: &[f64], min_val: f64, max_val: f64) -> Result<Vec<f64>> {
    if min_val > max_val || min_val.is_nan() || max_val.is_nan() {
        return Err(PrepError::invalid_range("normalization range", min_val, max_val));
    }
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let (lo, hi) = bounds(data);
    debug!(len = data.len(), lo, hi, "Min-max normalizing");
    if lo == hi {
        return Ok(vec![min_val; data.len()]);
    }

    let span = max_val - min_val;
    Ok(data
        .iter()
        .map(|&x| min_val + (x - lo) / (hi - lo) * span)
        .collect())
}

/// Z-score standardization using the population standard deviation.
///
/// Constant input maps every item to 0.0.
pub fn z_score_standardize(data: &[f64]) -> Vec<f64> {
    if data.is_empty() {
        return Vec::new();
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    debug!(len = data.len(), mean, std_dev, "Standardizing");

    if std_dev == 0.0 {
        return vec![0.0; data.len()];
    }
    data.iter().map(|x| (x - mean) / std_dev).collect()
}

/// Clip every item into `[min_threshold, max_threshold]`.
///
/// # Examples
///
/// ```
/// use prepkit_core::numeric::clip_values;
///
/// let clipped = clip_values(&[1.0, 5.0, 10.0, 15.0, 20.0], 5.0, 15.0).unwrap();
/// assert_eq!(clipped, vec![5.0, 5.0, 10.0, 15.0, 15.0]);
/// ```
pub fn clip_values(data: &[f64], min_threshold: f64, max_threshold: f64) -> Result<Vec<f64>> {
    // f64::clamp panics on an inverted range
    if min_threshold > max_threshold || min_threshold.is_nan() || max_threshold.is_nan() {
        return Err(PrepError::invalid_range(
            "clip thresholds",
            min_threshold,
            max_threshold,
        ));
    }
    Ok(data
        .iter()
        .map(|x| x.clamp(min_threshold, max_threshold))
        .collect())
}

/// Convert digit-only strings to integers, dropping everything else.
///
/// Signs, whitespace, and decimal points all disqualify an item, as do digit
/// strings too large for `i64`.
///
/// # Examples
///
/// ```
/// use prepkit_core::numeric::lst_to_ints;
///
/// assert_eq!(lst_to_ints(&["1", "2", "three", "4", "5five"]), vec![1, 2, 4]);
/// ```
pub fn lst_to_ints<S: AsRef<str>>(data: &[S]) -> Vec<i64> {
    data.iter()
        .filter_map(|item| {
            let s = item.as_ref();
            if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
                trace!(item = s, "Skipping non-digit item");
                return None;
            }
            s.parse::<i64>().ok()
        })
        .collect()
}

/// Natural logarithm of every strictly positive item; others are dropped.
pub fn log_transform(data: &[f64]) -> Vec<f64> {
    let transformed: Vec<f64> = data.iter().filter(|&&x| x > 0.0).map(|x| x.ln()).collect();
    if transformed.len() != data.len() {
        debug!(
            dropped = data.len() - transformed.len(),
            "Dropped non-positive values before log transform"
        );
    }
    transformed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_minmax_default_range() {
        let result = minmax_normalize(&SAMPLE, 0.0, 1.0).unwrap();
        assert_close(&result, &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_minmax_custom_range() {
        let result = minmax_normalize(&SAMPLE, -1.0, 1.0).unwrap();
        assert_close(&result, &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_minmax_constant_and_empty() {
        assert_eq!(minmax_normalize(&[3.0, 3.0], 0.0, 1.0).unwrap(), vec![0.0, 0.0]);
        assert_eq!(minmax_normalize(&[3.0, 3.0], 2.0, 5.0).unwrap(), vec![2.0, 2.0]);
        assert!(minmax_normalize(&[], 0.0, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_minmax_inverted_range() {
        assert!(matches!(
            minmax_normalize(&SAMPLE, 1.0, 0.0),
            Err(PrepError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_minmax_nan_range() {
        assert!(matches!(
            minmax_normalize(&[1.0, 2.0], f64::NAN, 1.0),
            Err(PrepError::InvalidRange { .. })
        ));
        assert!(matches!(
            minmax_normalize(&[1.0, 2.0], 0.0, f64::NAN),
            Err(PrepError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_z_score() {
        let result = z_score_standardize(&SAMPLE);
        let std_dev = 2.0f64.sqrt();
        let expected: Vec<f64> = SAMPLE.iter().map(|x| (x - 3.0) / std_dev).collect();
        assert_close(&result, &expected);
        assert!((result[0] + std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_z_score_constant_and_empty() {
        assert_eq!(z_score_standardize(&[7.0, 7.0, 7.0]), vec![0.0, 0.0, 0.0]);
        assert!(z_score_standardize(&[]).is_empty());
    }

    #[test]
    fn test_clip() {
        assert_eq!(
            clip_values(&SAMPLE, 2.0, 4.0).unwrap(),
            vec![2.0, 2.0, 3.0, 4.0, 4.0]
        );
        assert!(clip_values(&SAMPLE, 4.0, 2.0).is_err());
        assert!(clip_values(&SAMPLE, f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_to_ints() {
        assert_eq!(lst_to_ints(&["1", "2", "3"]), vec![1, 2, 3]);
        assert_eq!(lst_to_ints(&["-1", "2.0", " 3", "", "007"]), vec![7]);
        assert!(lst_to_ints(&["99999999999999999999"]).is_empty());
    }

    #[test]
    fn test_log_transform() {
        let result = log_transform(&[1.0, 10.0, 100.0]);
        assert_close(&result, &[0.0, 2.302585092994046, 4.605170185988092]);
        assert_eq!(log_transform(&[0.0, -5.0, f64::NAN]), Vec::<f64>::new());
    }

    proptest! {
        #[test]
        fn prop_minmax_stays_in_range(data in prop::collection::vec(-1e6f64..1e6, 1..50)) {
            let result = minmax_normalize(&data, -2.0, 3.0).unwrap();
            prop_assert_eq!(result.len(), data.len());
            for x in &result {
                prop_assert!((-2.0 - 1e-9..=3.0 + 1e-9).contains(x));
            }

            let (lo, hi) = bounds(&data);
            for (x, scaled) in data.iter().zip(&result) {
                if *x == lo {
                    prop_assert!((scaled + 2.0).abs() < 1e-9);
                } else if *x == hi {
                    prop_assert!((scaled - 3.0).abs() < 1e-9);
                }
            }
        }

        #[test]
        fn prop_clip_stays_in_range(
            data in prop::collection::vec(-1e6f64..1e6, 0..50),
            lo in -100f64..0.0,
            hi in 0f64..100.0,
        ) {
            let result = clip_values(&data, lo, hi).unwrap();
            for (x, c) in data.iter().zip(&result) {
                prop_assert!((lo..=hi).contains(c));
                if (lo..=hi).contains(x) {
                    prop_assert_eq!(x, c);
                }
            }
        }

        #[test]
        fn prop_z_score_has_zero_mean_and_unit_std(
            data in prop::collection::vec(-1e3f64..1e3, 1..50),
        ) {
            let n = data.len() as f64;
            let result = z_score_standardize(&data);
            let mean = result.iter().sum::<f64>() / n;
            prop_assert!(mean.abs() < 1e-6);

            let input_mean = data.iter().sum::<f64>() / n;
            let input_var = data.iter().map(|x| (x - input_mean).powi(2)).sum::<f64>() / n;
            let input_std = input_var.sqrt();
            if input_std > 1e-6 {
                let std = (result.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n).sqrt();
                prop_assert!((std - 1.0).abs() < 1e-6);
            } else {
                prop_assert!(result.iter().all(|x| x.abs() < 1e-6));
            }
        }
    }
}
