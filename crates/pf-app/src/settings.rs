//! Operator-tunable solver settings.
//!
//! A small YAML file can override the Colebrook solver defaults. Every field
//! is optional; missing fields keep their default value.

use std::path::Path;

use pf_hydraulics::ColebrookConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SolverSettings {
    pub seed: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        let config = ColebrookConfig::default();
        Self {
            seed: config.seed,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

impl From<SolverSettings> for ColebrookConfig {
    fn from(settings: SolverSettings) -> Self {
        Self {
            seed: settings.seed,
            max_iterations: settings.max_iterations,
            tolerance: settings.tolerance,
        }
    }
}

/// Load and validate settings from a YAML file.
pub fn load_settings(path: &Path) -> AppResult<SolverSettings> {
    let content = std::fs::read_to_string(path)?;
    let settings: SolverSettings =
        serde_yaml::from_str(&content).map_err(|err| AppError::Settings(err.to_string()))?;
    validate_settings(&settings)?;
    Ok(settings)
}

fn validate_settings(settings: &SolverSettings) -> AppResult<()> {
    if settings.max_iterations == 0 {
        return Err(AppError::Settings(
            "max_iterations must be at least 1".to_string(),
        ));
    }
    if !settings.seed.is_finite() {
        return Err(AppError::Settings("seed must be finite".to_string()));
    }
    if settings.tolerance.is_nan() || settings.tolerance < 0.0 {
        return Err(AppError::Settings(
            "tolerance must be non-negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_solver_config() {
        let config: ColebrookConfig = SolverSettings::default().into();
        assert_eq!(config, ColebrookConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let settings: SolverSettings = serde_yaml::from_str("max_iterations: 64\n").unwrap();
        assert_eq!(settings.max_iterations, 64);
        assert_eq!(settings.seed, ColebrookConfig::default().seed);
        assert_eq!(settings.tolerance, ColebrookConfig::default().tolerance);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_yaml::from_str::<SolverSettings>("max_iter: 64\n").is_err());
    }

    #[test]
    fn zero_iteration_budget_is_rejected() {
        let settings = SolverSettings {
            max_iterations: 0,
            ..SolverSettings::default()
        };
        assert!(validate_settings(&settings).is_err());
    }
}
