//! Computation core of a four-function pocket calculator.
//!
//! [`CalculatorEngine`] owns the display text and the pending calculation and
//! reacts to digit, clear and operation keys.

pub mod calculator;
pub mod config;
pub mod error;

pub use calculator::{CalculatorEngine, CalculatorViewModel, Key, Operation};
pub use config::Config;
pub use error::{ConfigError, KeyError};
