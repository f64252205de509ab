//! Common utilities shared across the crate
pub mod chain;
pub mod counter;
pub mod timing;

pub use self::chain::RefChain;
pub use self::counter::Counter;
pub use self::timing::{scale_seconds, ScopedTimer, TimeUnit, TimerMode};
