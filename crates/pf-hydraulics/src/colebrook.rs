//! Fixed-point solver for the implicit Colebrook-White friction relation.

use crate::error::{HydraulicsError, HydraulicsResult};
use pf_core::Real;

/// Colebrook solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookConfig {
    /// Initial iterate. Tiny on purpose: it only ever appears under a square
    /// root in a denominator, so it is numerically safe.
    pub seed: Real,
    /// Maximum iterations; realistic turbulent cases converge in single digits
    pub max_iterations: usize,
    /// Absolute tolerance on successive iterates
    pub tolerance: Real,
}

impl Default for ColebrookConfig {
    fn default() -> Self {
        Self {
            seed: 1e-10,
            max_iterations: 1000,
            tolerance: 1e-20,
        }
    }
}

/// Solve `1/sqrt(f) = -2*log10(rr/3.71 + 2.51/(Re*sqrt(f)))` for `f` by
/// direct (Picard) substitution, where `rr` is the relative roughness `K/D`.
///
/// The rearrangement is self-damping for realistic turbulent Reynolds numbers
/// and roughness ratios, so the budget in `config` is a safety valve rather
/// than an expected iteration count. Exhausting it returns the last iterate
/// without error; only a zero or negative iterate is treated as divergence.
pub fn solve_friction_factor(
    reynolds: Real,
    rel_roughness: Real,
    config: &ColebrookConfig,
) -> HydraulicsResult<Real> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(HydraulicsError::InvalidInput {
            what: "Reynolds number must be positive and finite",
        });
    }

    let mut f = config.seed;
    for iteration in 0..config.max_iterations {
        let f_prev = f;
        let arg = rel_roughness / 3.71 + 2.51 / (reynolds * f_prev.sqrt());
        f = 1.0 / (-2.0 * arg.log10()).powi(2);

        if f <= 0.0 {
            return Err(HydraulicsError::NonPhysicalFrictionFactor {
                value: f,
                iteration,
            });
        }

        if (f - f_prev).abs() < config.tolerance {
            break;
        }
    }

    Ok(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resubstitution_error(f: Real, reynolds: Real, rel_roughness: Real) -> Real {
        let lhs = 1.0 / f.sqrt();
        let rhs = -2.0 * (rel_roughness / 3.71 + 2.51 / (reynolds * f.sqrt())).log10();
        (lhs - rhs).abs()
    }

    #[test]
    fn converges_and_satisfies_relation() {
        // 45 um roughness in a 50 mm pipe
        let rel_roughness = 4.5e-5 / 0.05;
        let config = ColebrookConfig::default();
        let f = solve_friction_factor(1.0e5, rel_roughness, &config).unwrap();

        assert!(f > 0.01 && f < 0.1, "implausible friction factor {f}");
        assert!(resubstitution_error(f, 1.0e5, rel_roughness) < 1e-9);
    }

    #[test]
    fn exhausted_budget_returns_last_iterate() {
        let config = ColebrookConfig {
            max_iterations: 3,
            ..ColebrookConfig::default()
        };
        let f = solve_friction_factor(1.0e5, 9.0e-4, &config).unwrap();
        assert!(f.is_finite() && f > 0.0);
    }

    #[test]
    fn zero_seed_trips_divergence_guard() {
        // sqrt(0) in the denominator sends the iterate to exactly zero
        let config = ColebrookConfig {
            seed: 0.0,
            ..ColebrookConfig::default()
        };
        let err = solve_friction_factor(1.0e5, 9.0e-4, &config).unwrap_err();
        assert!(matches!(
            err,
            HydraulicsError::NonPhysicalFrictionFactor { iteration: 0, .. }
        ));
    }

    #[test]
    fn vanishing_reynolds_trips_divergence_guard() {
        let config = ColebrookConfig::default();
        let err = solve_friction_factor(1.0e-306, 0.05, &config).unwrap_err();
        assert!(matches!(
            err,
            HydraulicsError::NonPhysicalFrictionFactor { .. }
        ));
    }

    #[test]
    fn rejects_non_positive_or_non_finite_reynolds() {
        let config = ColebrookConfig::default();
        for reynolds in [0.0, -5.0e4, Real::NAN, Real::INFINITY] {
            let err = solve_friction_factor(reynolds, 9.0e-4, &config).unwrap_err();
            assert!(matches!(err, HydraulicsError::InvalidInput { .. }));
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn friction_factor_non_increasing_in_reynolds(
            re_a in 2100.0_f64..1.0e8,
            re_b in 2100.0_f64..1.0e8,
            rel_roughness in 1.0e-6_f64..0.05,
        ) {
            let (re_lo, re_hi) = if re_a <= re_b { (re_a, re_b) } else { (re_b, re_a) };
            let config = ColebrookConfig::default();
            let f_lo = solve_friction_factor(re_lo, rel_roughness, &config).unwrap();
            let f_hi = solve_friction_factor(re_hi, rel_roughness, &config).unwrap();
            prop_assert!(f_hi <= f_lo + 1e-12);
        }
    }
}
