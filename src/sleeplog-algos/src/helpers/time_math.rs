use chrono::{NaiveTime, TimeDelta};

pub const SECONDS_PER_HOUR: f64 = 3600.0;

pub fn delta_hours(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / (SECONDS_PER_HOUR * 1000.0)
}

/// Hours from `from` to `to` as times of the same day, negative when `to` is earlier.
pub fn hours_between(from: NaiveTime, to: NaiveTime) -> f64 {
    delta_hours(to.signed_duration_since(from))
}

/// Arithmetic mean, NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        f64::NAN
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Sample standard deviation (n - 1 denominator), NaN for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }

    let mean = mean(values);
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;

    variance.sqrt()
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_between_same_day() {
        let from = NaiveTime::from_hms_opt(1, 0, 0).unwrap();
        let to = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        assert_eq!(hours_between(from, to), 7.5);
        assert_eq!(hours_between(to, from), -7.5);
    }

    #[test]
    fn delta_hours_basic() {
        assert_eq!(delta_hours(TimeDelta::minutes(90)), 1.5);
        assert_eq!(delta_hours(TimeDelta::zero()), 0.0);
    }

    #[test]
    fn mean_empty_is_nan() {
        assert!(mean(&[]).is_nan());
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn std_dev_needs_two_values() {
        assert!(std_dev(&[]).is_nan());
        assert!(std_dev(&[7.0]).is_nan());
    }

    #[test]
    fn std_dev_is_sample() {
        assert!((std_dev(&[6.0, 7.0, 8.0]) - 1.0).abs() < 1e-12);
        // population std would be 2.0 here
        let sample = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sample - 2.138_089_935_299_395).abs() < 1e-12);
    }

    #[test]
    fn std_dev_zero_variance() {
        assert_eq!(std_dev(&[8.0, 8.0, 8.0]), 0.0);
    }

    #[test]
    fn round_float_basic() {
        assert_eq!(round_float(3.14159), 3.14);
        assert_eq!(round_float(1.999), 2.0);
        assert_eq!(round_float(0.0), 0.0);
    }
}
