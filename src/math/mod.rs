//! Numeric helpers: discrete calculus and vector algebra
pub mod calculus;
pub mod vector;

pub use self::calculus::{Derivator, Integrator};
