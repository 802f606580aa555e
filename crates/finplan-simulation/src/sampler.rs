//! Random monthly return sampling.

use finplan_core::AssetClass;
use rand::Rng;

use crate::assumptions::ReturnAssumptions;

/// Draws random monthly returns from the configured assumptions.
///
/// The RNG is injected per call so callers control seeding; the sampler
/// never touches wall-clock entropy itself.
#[derive(Debug, Clone, Default)]
pub struct ReturnSampler {
    assumptions: ReturnAssumptions,
}

impl ReturnSampler {
    pub fn new(assumptions: ReturnAssumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &ReturnAssumptions {
        &self.assumptions
    }

    /// Sample one month's return for an asset class.
    ///
    /// Annualized parameters are scaled to monthly: mean by 1/12,
    /// volatility by 1/sqrt(12). The normal variate comes from a
    /// Box-Muller transform over two uniform draws.
    pub fn sample_monthly_return<R: Rng>(&self, class: AssetClass, rng: &mut R) -> f64 {
        let assumption = self.assumptions.get(class);
        let monthly_mean = assumption.annual_mean / 12.0;
        let monthly_vol = assumption.annual_volatility / 12.0_f64.sqrt();
        monthly_mean + monthly_vol * standard_normal(rng)
    }
}

/// Standard-normal variate via Box-Muller.
///
/// `u1` is mapped into (0, 1] so the log never sees zero.
fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_same_seed_same_samples() {
        let sampler = ReturnSampler::default();
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);

        for class in AssetClass::ALL {
            let a = sampler.sample_monthly_return(class, &mut rng_a);
            let b = sampler.sample_monthly_return(class, &mut rng_b);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_zero_volatility_returns_mean() {
        let mut assumptions = ReturnAssumptions::default();
        assumptions.cash.annual_volatility = 0.0;
        let sampler = ReturnSampler::new(assumptions);
        let mut rng = StdRng::seed_from_u64(1);

        let sample = sampler.sample_monthly_return(AssetClass::Cash, &mut rng);
        assert!((sample - 0.02 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_mean_converges_to_monthly_mean() {
        let sampler = ReturnSampler::default();
        let mut rng = StdRng::seed_from_u64(42);
        let n = 200_000;

        let sum: f64 = (0..n)
            .map(|_| sampler.sample_monthly_return(AssetClass::Bonds, &mut rng))
            .sum();
        let mean = sum / f64::from(n);

        let expected = 0.04 / 12.0;
        // Standard error ~ (0.05 / sqrt(12)) / sqrt(200k) ~ 3e-5.
        assert!((mean - expected).abs() < 3e-4);
    }

    #[test]
    fn test_samples_are_finite() {
        let sampler = ReturnSampler::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..10_000 {
            for class in AssetClass::ALL {
                assert!(sampler.sample_monthly_return(class, &mut rng).is_finite());
            }
        }
    }
}
