//! Input and output records for a single pipe-flow case.

use pf_core::units::{Density, DynVisc, Length, Velocity, VolumeRate};

/// One pipe-flow case: geometry and fluid properties for a single table row.
///
/// A zero `velocity` together with a positive `flow_rate` means "derive the
/// velocity from the flow rate"; a zero `flow_rate` is derived from the
/// velocity in the solution. Both zero is accepted and yields a degenerate
/// (non-finite) solution rather than an error.
#[derive(Debug, Clone, Copy)]
pub struct FlowCase {
    /// Mean flow velocity
    pub velocity: Velocity,
    /// Pipe internal diameter
    pub diameter: Length,
    /// Absolute wall roughness
    pub roughness: Length,
    /// Fluid density
    pub density: Density,
    /// Dynamic viscosity
    pub viscosity: DynVisc,
    /// Pipe length; zero length defines a zero pressure drop
    pub length: Length,
    /// Volumetric flow rate
    pub flow_rate: VolumeRate,
}

/// Derived hydraulic quantities for one case, all in SI units.
#[derive(Debug, Clone, Copy)]
pub struct FlowSolution {
    /// Reynolds number
    pub reynolds: f64,
    /// Friction factor
    pub friction_factor: f64,
    /// Pressure drop over the pipe length [Pa]
    pub pressure_drop_pa: f64,
    /// Hydraulic power [W]
    pub power_w: f64,
    /// Driving force from momentum flux [N]
    pub driving_force_n: f64,
    /// Specific loss [m^2/s^2]
    pub specific_loss_m2_per_s2: f64,
    /// Wall shear stress [Pa]
    pub wall_shear_pa: f64,
    /// Volumetric flow rate [m^3/s]
    pub flow_rate_m3_per_s: f64,
}
