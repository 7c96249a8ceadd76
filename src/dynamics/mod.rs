//! Fixed-step integration.

pub mod integrator;
#[cfg(feature = "parallel")]
pub mod parallel;

pub use integrator::Integrator;
#[cfg(feature = "parallel")]
pub use parallel::ParallelIntegrator;
