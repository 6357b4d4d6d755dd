//! Seeded synthetic prior/posterior draw generation.
//!
//! Used by `si demo` and by tests. Everything is deterministic given the seed:
//! the same seed and draw count reproduce the same matrices bit for bit.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::ParameterSet;
use crate::error::AppError;

/// Configuration for the demo scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    pub seed: u64,
    /// Draws per parameter in each of the prior and posterior matrices.
    pub draw_count: usize,
    pub prior_mean: f64,
    pub prior_sd: f64,
    pub posterior_mean: f64,
    pub posterior_sd: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        // A moderate belief update: prior N(0,1), posterior N(0.5, 0.3).
        Self {
            seed: 42,
            draw_count: 1000,
            prior_mean: 0.0,
            prior_sd: 1.0,
            posterior_mean: 0.5,
            posterior_sd: 0.3,
        }
    }
}

/// `n` draws from `N(mean, sd)` with a fixed seed.
///
/// # Panics
/// Panics if `sd` is not finite and positive; callers that accept user input
/// validate first.
pub fn normal_draws(seed: u64, mean: f64, sd: f64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, sd).expect("valid normal parameters");
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate a single-parameter prior/posterior pair for the demo pipeline.
pub fn generate_demo_draws(config: &DemoConfig) -> Result<(ParameterSet, ParameterSet), AppError> {
    if config.draw_count < 2 {
        return Err(AppError::new(2, "Demo draw count must be >= 2."));
    }
    for (label, sd) in [("prior", config.prior_sd), ("posterior", config.posterior_sd)] {
        if !(sd.is_finite() && sd > 0.0) {
            return Err(AppError::new(
                2,
                format!("Invalid {label} standard deviation: {sd} (must be finite and > 0)."),
            ));
        }
    }
    if !(config.prior_mean.is_finite() && config.posterior_mean.is_finite()) {
        return Err(AppError::new(2, "Demo means must be finite."));
    }

    // Distinct sub-seeds so the prior and posterior are independent streams.
    let prior_draws = normal_draws(
        config.seed,
        config.prior_mean,
        config.prior_sd,
        config.draw_count,
    );
    let posterior_draws = normal_draws(
        config.seed.wrapping_add(1),
        config.posterior_mean,
        config.posterior_sd,
        config.draw_count,
    );

    let prior = ParameterSet::new(vec!["theta".into()], vec![prior_draws])?;
    let posterior = ParameterSet::new(vec!["theta".into()], vec![posterior_draws])?;
    Ok((prior, posterior))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_reproducible_for_a_seed() {
        let a = normal_draws(9, 1.0, 2.0, 50);
        let b = normal_draws(9, 1.0, 2.0, 50);
        assert_eq!(a, b);

        let c = normal_draws(10, 1.0, 2.0, 50);
        assert_ne!(a, c);
    }

    #[test]
    fn demo_draws_have_matching_shape() {
        let (prior, posterior) = generate_demo_draws(&DemoConfig::default()).unwrap();
        assert_eq!(prior.len(), posterior.len());
        assert_eq!(prior.column(0).len(), 1000);
        assert_eq!(posterior.column(0).len(), 1000);
        assert_ne!(prior.column(0), posterior.column(0));
    }

    #[test]
    fn demo_config_is_validated() {
        let config = DemoConfig {
            posterior_sd: 0.0,
            ..DemoConfig::default()
        };
        assert_eq!(generate_demo_draws(&config).unwrap_err().exit_code(), 2);

        let config = DemoConfig {
            draw_count: 1,
            ..DemoConfig::default()
        };
        assert_eq!(generate_demo_draws(&config).unwrap_err().exit_code(), 2);
    }
}
