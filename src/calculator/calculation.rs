//! The operand record shared between key presses.

/// An operation key on the calculator keypad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Nothing pending.
    #[default]
    None,
    /// The "+/-" key.
    Negate,
    Percentage,
    Divide,
    Multiply,
    Subtract,
    Add,
    /// The "=" key.
    Equals,
}

impl Operation {
    /// Check if this operation takes a left and a right operand.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Percentage | Self::Divide | Self::Multiply | Self::Subtract | Self::Add
        )
    }

    /// Get the keypad symbol for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Negate => "+/-",
            Self::Percentage => "%",
            Self::Divide => "/",
            Self::Multiply => "*",
            Self::Subtract => "-",
            Self::Add => "+",
            Self::Equals => "=",
        }
    }
}

/// Where a calculation currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No operation pending. Also covers the state right after "=", where the
    /// first operand holds the previous result.
    Idle,
    /// An operation was selected but no digit of the right operand was typed.
    AwaitingSecondOperand,
    /// The right operand is being typed.
    SecondOperandEntry,
}

/// Operands and pending operation of a calculation in progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Calculation {
    /// Left-hand value of the pending operation.
    pub first_operand: f64,
    /// Right-hand value, absent until entry of the second operand begins.
    pub second_operand: Option<f64>,
    /// The operation waiting for its right operand.
    pub pending_operation: Operation,
}

impl Calculation {
    /// Create an empty calculation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the zero state.
    pub fn reset(&mut self) {
        self.first_operand = 0.0;
        self.second_operand = None;
        self.pending_operation = Operation::None;
    }

    pub fn phase(&self) -> Phase {
        match (self.pending_operation, self.second_operand) {
            (Operation::None, _) => Phase::Idle,
            (_, None) => Phase::AwaitingSecondOperand,
            (_, Some(_)) => Phase::SecondOperandEntry,
        }
    }
}
