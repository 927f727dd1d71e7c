//! Calculator module implementing a four-function pocket calculator.
//!
//! This module provides:
//! - The operand record and the pure result computation
//! - The engine state machine fed by key presses
//! - Conversion between numbers and locale display text

mod calculation;
mod engine;
mod evaluation;
mod format;
mod keys;

pub use calculation::{Calculation, Operation, Phase};
pub use engine::{CalculatorEngine, CalculatorViewModel, ClearLabel, DisplayState};
pub use evaluation::calculate_result;
pub use format::{DisplayFormat, INFINITY_TEXT, NAN_TEXT, NEG_INFINITY_TEXT};
pub use keys::{Key, parse_keys};
