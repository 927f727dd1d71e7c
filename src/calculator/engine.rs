//! The calculator state machine driven by key presses.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::calculation::{Calculation, Operation, Phase};
use super::evaluation::calculate_result;
use super::format::DisplayFormat;
use super::keys::Key;
use crate::config::Config;

/// What the clear key does on its next press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearLabel {
    /// Blank the current entry only ("C").
    SoftClear,
    /// Also drop the pending calculation ("AC").
    #[default]
    FullClear,
}

impl ClearLabel {
    /// Get the text shown on the clear button.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SoftClear => "C",
            Self::FullClear => "AC",
        }
    }
}

impl fmt::Display for ClearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of everything the presentation layer binds to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub display_text: String,
    pub clear_button_label: ClearLabel,
    pub result_just_computed: bool,
}

/// The operations a calculator keypad can trigger.
pub trait CalculatorViewModel {
    /// Enter a single digit character.
    fn add_digit(&mut self, digit: char);

    /// Press the clear key.
    fn reset_operands(&mut self);

    /// Press an operation key, including "=" and "+/-".
    fn apply_operation(&mut self, operation: Operation);
}

/// A four-function calculator.
pub struct CalculatorEngine {
    calculation: Calculation,
    display_text: String,
    clear_label: ClearLabel,
    result_just_computed: bool,
    format: DisplayFormat,
    max_display_len: usize,
    on_change: Option<Arc<dyn Fn(&DisplayState) + Send + Sync>>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("calculation", &self.calculation)
            .field("display_text", &self.display_text)
            .field("clear_label", &self.clear_label)
            .field("result_just_computed", &self.result_just_computed)
            .finish_non_exhaustive()
    }
}

impl CalculatorEngine {
    /// Create an engine with the default comma separator and a six character display.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            calculation: Calculation::new(),
            display_text: "0".to_string(),
            clear_label: ClearLabel::FullClear,
            result_just_computed: false,
            format: DisplayFormat::new(config.decimal_separator),
            max_display_len: config.max_display_len,
            on_change: None,
        }
    }

    /// Set the callback invoked whenever the observable state changes.
    pub fn set_on_change(&mut self, callback: impl Fn(&DisplayState) + Send + Sync + 'static) {
        self.on_change = Some(Arc::new(callback));
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn clear_label(&self) -> ClearLabel {
        self.clear_label
    }

    /// Get the clear button text, "AC" or "C".
    pub fn clear_button_label(&self) -> &'static str {
        self.clear_label.as_str()
    }

    pub fn result_just_computed(&self) -> bool {
        self.result_just_computed
    }

    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    pub fn phase(&self) -> Phase {
        self.calculation.phase()
    }

    pub fn display_format(&self) -> DisplayFormat {
        self.format
    }

    pub fn state(&self) -> DisplayState {
        DisplayState {
            display_text: self.display_text.clone(),
            clear_button_label: self.clear_label,
            result_just_computed: self.result_just_computed,
        }
    }

    /// Dispatch a keypad key to the matching operation.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.add_digit(digit),
            Key::Separator => self.add_digit(self.format.separator()),
            Key::Operation(operation) => self.apply_operation(operation),
            Key::Clear => self.reset_operands(),
        }
    }

    fn enter_digit(&mut self, digit: char) {
        self.clear_label = ClearLabel::SoftClear;

        if self.calculation.phase() == Phase::AwaitingSecondOperand {
            // First digit of the right operand replaces whatever is shown
            self.calculation.second_operand = Some(0.0);
            self.display_text = digit.to_string();
            return;
        }

        if self.display_text == "0" {
            self.display_text = digit.to_string();
            return;
        }

        if self.display_text.chars().count() >= self.max_display_len {
            trace!(display = %self.display_text, %digit, "display full, digit dropped");
            return;
        }

        self.display_text.push(digit);
    }

    fn clear(&mut self) {
        match self.clear_label {
            ClearLabel::FullClear => {
                debug!("full clear");
                self.calculation.reset();
            }
            ClearLabel::SoftClear => {
                debug!("soft clear");
                self.clear_label = ClearLabel::FullClear;
            }
        }
        self.display_text = "0".to_string();
    }

    fn operate(&mut self, operation: Operation) {
        let Some(value) = self.format.parse(&self.display_text) else {
            trace!(display = %self.display_text, "display is not a number, ignoring {:?}", operation);
            return;
        };

        match operation {
            Operation::Negate => {
                self.display_text = self.format.format_value(-value);
            }
            Operation::Equals => {
                self.calculation.second_operand = Some(value);
                let Some(result) = calculate_result(&self.calculation) else {
                    trace!("nothing to evaluate");
                    return;
                };
                debug!(
                    first = self.calculation.first_operand,
                    operation = self.calculation.pending_operation.symbol(),
                    second = value,
                    result,
                    "evaluated"
                );

                self.display_text = self.format.format_result(result);
                self.calculation.reset();
                self.calculation.first_operand = result;
                self.result_just_computed = true;
            }
            _ => {
                debug!(first = value, ?operation, "operation pending");
                self.calculation.first_operand = value;
                self.calculation.pending_operation = operation;
                self.display_text = "0".to_string();
            }
        }
    }

    /// Run a mutation and notify the observer if anything visible changed.
    fn observe(&mut self, mutate: impl FnOnce(&mut Self)) {
        let before = self.on_change.as_ref().map(|_| self.state());
        mutate(self);

        if let (Some(before), Some(callback)) = (before, self.on_change.clone()) {
            let after = self.state();
            if after != before {
                callback(&after);
            }
        }
    }
}

impl CalculatorViewModel for CalculatorEngine {
    fn add_digit(&mut self, digit: char) {
        self.observe(|engine| engine.enter_digit(digit));
    }

    fn reset_operands(&mut self) {
        self.observe(Self::clear);
    }

    fn apply_operation(&mut self, operation: Operation) {
        self.observe(|engine| engine.operate(operation));
    }
}
