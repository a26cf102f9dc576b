//! A single-integer counter, usable natively and, with the `python` feature,
//! as the `waterio._core` extension module.

pub mod core;
#[cfg(feature = "python")]
pub mod python;


pub use crate::core::counter::{Counter, CounterError};
pub use crate::core::run::{run_counter, Report, RunError};
