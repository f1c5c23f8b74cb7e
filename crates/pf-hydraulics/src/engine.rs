//! Per-case hydraulic evaluation: the seven inputs to the eight outputs.

use std::f64::consts::PI;

use crate::case::{FlowCase, FlowSolution};
use crate::colebrook::ColebrookConfig;
use crate::error::{HydraulicsError, HydraulicsResult};
use crate::friction;

/// Evaluate one flow case.
///
/// The diameter and viscosity are divisors for every downstream quantity and
/// must be strictly positive; everything else is left to IEEE arithmetic, so
/// a degenerate case (zero velocity and zero flow rate, or zero density)
/// yields non-finite output values rather than an error. The only other
/// failure mode is a diverging Colebrook iteration.
pub fn evaluate(case: &FlowCase, config: &ColebrookConfig) -> HydraulicsResult<FlowSolution> {
    let d = case.diameter.value;
    let mu = case.viscosity.value;
    if d <= 0.0 {
        return Err(HydraulicsError::InvalidInput {
            what: "pipe diameter must be positive",
        });
    }
    if mu <= 0.0 {
        return Err(HydraulicsError::InvalidInput {
            what: "dynamic viscosity must be positive",
        });
    }

    let rho = case.density.value;
    let length = case.length.value;
    let q_given = case.flow_rate.value;

    // Continuity for a circular section: a zero velocity is derived from the
    // flow rate, and vice versa below.
    let v = if case.velocity.value == 0.0 && q_given > 0.0 {
        4.0 * q_given / (PI * d * d)
    } else {
        case.velocity.value
    };

    let rel_roughness = case.roughness.value / d;
    let reynolds = rho * v * d / mu;
    let f = friction::friction_factor(reynolds, rel_roughness, config)?;

    let area = PI * d * d / 4.0;
    let flow_rate = if q_given != 0.0 { q_given } else { area * v };
    let pressure_drop = if length > 0.0 {
        f * (length / d) * (rho * v * v / 2.0)
    } else {
        0.0
    };

    Ok(FlowSolution {
        reynolds,
        friction_factor: f,
        pressure_drop_pa: pressure_drop,
        power_w: pressure_drop * area * v,
        driving_force_n: rho * v * area,
        specific_loss_m2_per_s2: f * (length / d) * (v * v / (2.0 * PI)),
        wall_shear_pa: f * rho * v * v / 8.0,
        flow_rate_m3_per_s: flow_rate,
    })
}
