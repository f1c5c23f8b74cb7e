use thiserror::Error;

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;

#[derive(Error, Debug)]
pub enum HydraulicsError {
    /// The Colebrook iteration produced a zero or negative friction factor,
    /// which has no physical meaning and indicates divergence.
    #[error("Non-physical friction factor {value} at iteration {iteration}")]
    NonPhysicalFrictionFactor { value: f64, iteration: usize },

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },
}
