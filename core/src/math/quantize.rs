//! Sine sampling and byte-range quantization.

use crate::prelude::TableConfig;

/// Sine argument for `index`, evaluated as `((2 * pi) * index) / period`.
pub fn sample_phase(config: &TableConfig, index: usize) -> f64 {
    2.0 * config.pi * index as f64 / config.period as f64
}

/// Scaled but unrounded sample.
pub fn raw_sample(config: &TableConfig, index: usize) -> f64 {
    config.amplitude * sample_phase(config, index).sin()
}

/// Rounds half away from zero and shifts by the configured offset.
///
/// No clamping: the result only fits a byte because of the default amplitude
/// and offset.
pub fn quantize(config: &TableConfig, raw: f64) -> i32 {
    raw.round() as i32 + config.offset
}

pub fn sample_at(config: &TableConfig, index: usize) -> i32 {
    quantize(config, raw_sample(config, index))
}

/// All samples of `[start, end)` in index order.
pub fn generate(config: &TableConfig) -> Vec<i32> {
    (config.start..config.end)
        .map(|index| sample_at(config, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_peak_midpoint_and_trough() {
        let config = TableConfig::default();
        assert_eq!(sample_at(&config, 256), 255);
        assert_eq!(sample_at(&config, 512), 128);
        assert_eq!(sample_at(&config, 767), 1);
    }

    #[test]
    fn generate_covers_half_period_in_order() {
        let config = TableConfig::default();
        let samples = generate(&config);
        assert_eq!(samples.len(), 512);
        assert_eq!(samples[0], sample_at(&config, 256));
        assert_eq!(samples[511], sample_at(&config, 767));
        assert!(samples.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn samples_stay_in_byte_range() {
        let samples = generate(&TableConfig::default());
        assert!(samples.iter().all(|&v| (1..=255).contains(&v)));
    }

    #[test]
    fn samples_are_odd_symmetric_about_half_period() {
        let config = TableConfig::default();
        for k in 1..256 {
            let sum = sample_at(&config, 512 + k) + sample_at(&config, 512 - k);
            assert!((sum - 256).abs() <= 1, "k={} sum={}", k, sum);
        }
    }

    #[test]
    fn quantize_rounds_ties_away_from_zero() {
        let config = TableConfig::default();
        assert_eq!(quantize(&config, 0.5), 129);
        assert_eq!(quantize(&config, -0.5), 127);
        assert_eq!(quantize(&config, -0.0), 128);
        assert_eq!(quantize(&config, 126.49), 254);
    }

    #[test]
    fn quantize_does_not_clamp() {
        let config = TableConfig {
            amplitude: 200.0,
            ..Default::default()
        };
        assert_eq!(sample_at(&config, 256), 328);
        assert_eq!(sample_at(&config, 767), -72);
    }

    #[test]
    fn standard_pi_agrees_on_endpoints() {
        // TABLE_PI is ~1e-9 above pi; the endpoints do not move.
        let config = TableConfig {
            pi: std::f64::consts::PI,
            ..Default::default()
        };
        assert_eq!(sample_at(&config, 256), 255);
        assert_eq!(sample_at(&config, 512), 128);
        assert_eq!(sample_at(&config, 767), 1);
    }
}
