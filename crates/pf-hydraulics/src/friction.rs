//! Friction-factor correlations across flow regimes.

use crate::colebrook::{self, ColebrookConfig};
use crate::error::HydraulicsResult;
use pf_core::Real;

/// Laminar/turbulent transition Reynolds number.
pub const RE_TRANSITION: Real = 2100.0;

/// Hagen-Poiseuille friction factor for laminar flow.
#[inline]
pub fn laminar(reynolds: Real) -> Real {
    16.0 / reynolds
}

/// Blasius correlation for turbulent flow in hydraulically smooth pipes.
#[inline]
pub fn blasius(reynolds: Real) -> Real {
    0.079 * reynolds.powf(-0.25)
}

/// Select and evaluate the friction-factor correlation for the flow regime.
///
/// Roughness has no effect below the transition Reynolds number: the laminar
/// correlation applies to rough and smooth pipes alike.
pub fn friction_factor(
    reynolds: Real,
    rel_roughness: Real,
    config: &ColebrookConfig,
) -> HydraulicsResult<Real> {
    if reynolds < RE_TRANSITION {
        Ok(laminar(reynolds))
    } else if rel_roughness == 0.0 {
        Ok(blasius(reynolds))
    } else {
        colebrook::solve_friction_factor(reynolds, rel_roughness, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooth_laminar_is_hagen_poiseuille() {
        let config = ColebrookConfig::default();
        let f = friction_factor(1500.0, 0.0, &config).unwrap();
        assert_eq!(f, 16.0 / 1500.0);
    }

    #[test]
    fn smooth_turbulent_is_blasius() {
        let config = ColebrookConfig::default();
        let f = friction_factor(5.0e4, 0.0, &config).unwrap();
        assert_eq!(f, 0.079 * 5.0e4_f64.powf(-0.25));
    }

    #[test]
    fn rough_laminar_ignores_roughness() {
        let config = ColebrookConfig::default();
        let f = friction_factor(1500.0, 0.01, &config).unwrap();
        assert_eq!(f, 16.0 / 1500.0);
    }

    #[test]
    fn rough_turbulent_dispatches_to_colebrook() {
        let config = ColebrookConfig::default();
        let f = friction_factor(5.0e4, 9.0e-4, &config).unwrap();
        let direct = colebrook::solve_friction_factor(5.0e4, 9.0e-4, &config).unwrap();
        assert_eq!(f, direct);
    }

    #[test]
    fn transition_boundary_is_turbulent() {
        let config = ColebrookConfig::default();
        let f = friction_factor(RE_TRANSITION, 0.0, &config).unwrap();
        assert_eq!(f, blasius(RE_TRANSITION));
    }
}
