//! Result computation for a pending calculation.
//!
//! Pure arithmetic over a [`Calculation`]. Division by zero is left to IEEE
//! float semantics and produces an infinity or NaN.

use super::calculation::{Calculation, Operation};

/// Compute the result of the pending operation.
///
/// Returns `None` if the second operand has not been captured yet or if no
/// binary operation is pending.
pub fn calculate_result(calc: &Calculation) -> Option<f64> {
    let second = calc.second_operand?;
    let first = calc.first_operand;

    match calc.pending_operation {
        Operation::Add => Some(first + second),
        Operation::Divide => Some(first / second),
        Operation::Multiply => Some(first * second),
        Operation::Subtract => Some(first - second),
        // "first percent of second": the typed base value is the right operand
        Operation::Percentage => Some(second * (first / 100.0)),
        Operation::None | Operation::Negate | Operation::Equals => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(first: f64, op: Operation, second: Option<f64>) -> Calculation {
        Calculation {
            first_operand: first,
            second_operand: second,
            pending_operation: op,
        }
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(calculate_result(&calc(5.0, Operation::Add, Some(3.0))), Some(8.0));
        assert_eq!(calculate_result(&calc(5.0, Operation::Subtract, Some(3.0))), Some(2.0));
        assert_eq!(calculate_result(&calc(5.0, Operation::Multiply, Some(3.0))), Some(15.0));
        assert_eq!(calculate_result(&calc(6.0, Operation::Divide, Some(3.0))), Some(2.0));
    }

    #[test]
    fn test_percentage_operand_order() {
        // 7 percent of 3, computed as 3 * 0.07
        let result = calculate_result(&calc(7.0, Operation::Percentage, Some(3.0))).unwrap();
        assert_eq!(result, 3.0 * (7.0 / 100.0));
        // Swapped operands round differently
        assert_ne!(result, 7.0 * (3.0 / 100.0));

        assert_eq!(
            calculate_result(&calc(50.0, Operation::Percentage, Some(20.0))),
            Some(10.0)
        );
    }

    #[test]
    fn test_missing_second_operand() {
        assert_eq!(calculate_result(&calc(5.0, Operation::Add, None)), None);
    }

    #[test]
    fn test_no_pending_operation() {
        assert_eq!(calculate_result(&calc(5.0, Operation::None, Some(3.0))), None);
        assert_eq!(calculate_result(&calc(5.0, Operation::Equals, Some(3.0))), None);
        assert_eq!(calculate_result(&calc(5.0, Operation::Negate, Some(3.0))), None);
    }

    #[test]
    fn test_division_by_zero() {
        let result = calculate_result(&calc(1.0, Operation::Divide, Some(0.0))).unwrap();
        assert!(result.is_infinite() && result.is_sign_positive());

        let result = calculate_result(&calc(-1.0, Operation::Divide, Some(0.0))).unwrap();
        assert!(result.is_infinite() && result.is_sign_negative());

        let result = calculate_result(&calc(0.0, Operation::Divide, Some(0.0))).unwrap();
        assert!(result.is_nan());
    }
}
