//! SA configuration and the geometric cooling schedule.

use crate::error::{Result, TspError};

/// Configuration for the Simulated Annealing search.
///
/// The schedule is geometric: one candidate is evaluated per temperature
/// step and `T_{k+1} = cooling_rate * T_k`. The search stops once
/// `T <= min_temperature`.
///
/// # Examples
///
/// ```
/// use tsp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_min_temperature(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Stopping temperature. Must be positive and below the initial one.
    pub min_temperature: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            min_temperature: 1e-3,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the schedule.
    ///
    /// Requires finite values with `initial_temperature > min_temperature > 0`
    /// and `0 < cooling_rate < 1`.
    pub fn validate(&self) -> Result<()> {
        let Self {
            initial_temperature,
            cooling_rate,
            min_temperature,
            ..
        } = *self;

        if !initial_temperature.is_finite() || !min_temperature.is_finite() {
            return Err(TspError::invalid_schedule(format!(
                "temperatures must be finite, got initial={initial_temperature}, min={min_temperature}"
            )));
        }
        if min_temperature <= 0.0 {
            return Err(TspError::invalid_schedule(format!(
                "min_temperature must be positive, got {min_temperature}"
            )));
        }
        if initial_temperature <= min_temperature {
            return Err(TspError::invalid_schedule(format!(
                "initial_temperature ({initial_temperature}) must exceed min_temperature ({min_temperature})"
            )));
        }
        // NaN fails both comparisons
        if !(cooling_rate > 0.0 && cooling_rate < 1.0) {
            return Err(TspError::invalid_schedule(format!(
                "cooling_rate must be in (0, 1), got {cooling_rate}"
            )));
        }
        Ok(())
    }

    /// Number of iterations the schedule performs.
    ///
    /// Roughly `ln(min / initial) / ln(rate)`; computed by replaying the
    /// floating-point product so it matches the search loop exactly.
    /// Returns 0 for an invalid schedule.
    pub fn schedule_length(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut temperature = self.initial_temperature;
        let mut steps = 0usize;
        while temperature > self.min_temperature {
            temperature = cool(temperature, self);
            steps += 1;
        }
        steps
    }
}

/// Next temperature of the geometric schedule.
#[inline]
pub(crate) fn cool(temperature: f64, config: &SaConfig) -> f64 {
    temperature * config.cooling_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.cooling_rate - 0.995).abs() < 1e-15);
        assert!((config.min_temperature - 1e-3).abs() < 1e-15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(10.0);
        assert!(matches!(
            config.validate(),
            Err(TspError::InvalidScheduleParameters(_))
        ));

        let equal = SaConfig::default()
            .with_initial_temperature(5.0)
            .with_min_temperature(5.0);
        assert!(equal.validate().is_err());
    }

    #[test]
    fn test_validate_non_positive_min() {
        assert!(SaConfig::default().with_min_temperature(0.0).validate().is_err());
        assert!(SaConfig::default().with_min_temperature(-1.0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let config = SaConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_validate_non_finite_temperature() {
        let config = SaConfig::default().with_initial_temperature(f64::INFINITY);
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_min_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_schedule_length_matches_log_estimate() {
        let config = SaConfig::default();
        let estimate = (config.min_temperature / config.initial_temperature).ln()
            / config.cooling_rate.ln();
        let steps = config.schedule_length() as f64;
        assert!(
            (steps - estimate.ceil()).abs() <= 1.0,
            "steps {steps}, estimate {estimate}"
        );
    }

    #[test]
    fn test_schedule_length_halving() {
        // 8 -> 4 -> 2 -> 1: three steps to reach min = 1
        let config = SaConfig::default()
            .with_initial_temperature(8.0)
            .with_cooling_rate(0.5)
            .with_min_temperature(1.0);
        assert_eq!(config.schedule_length(), 3);
    }

    #[test]
    fn test_schedule_length_invalid_is_zero() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(10.0);
        assert_eq!(config.schedule_length(), 0);
    }
}
