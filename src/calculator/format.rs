//! Conversion between numbers and display text.
//!
//! Everything inside the engine works with the canonical `.` decimal point.
//! The configured separator only appears in display text, and this module is
//! the only place that translates between the two.

/// Display text for a positive infinite result.
pub const INFINITY_TEXT: &str = "Infinity";
/// Display text for a negative infinite result.
pub const NEG_INFINITY_TEXT: &str = "-Infinity";
/// Display text for a NaN result.
pub const NAN_TEXT: &str = "Not a Number";

/// Formatter for a single locale's decimal separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayFormat {
    separator: char,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::new(',')
    }
}

impl DisplayFormat {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse display text into a number.
    ///
    /// Returns `None` unless the text is a finite number once the separator
    /// is swapped for `.`.
    pub fn parse(&self, display: &str) -> Option<f64> {
        let canonical = display.replace(self.separator, ".");
        canonical
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
    }

    /// Format a value using its shortest exact representation.
    pub fn format_value(&self, value: f64) -> String {
        if let Some(text) = non_finite_text(value) {
            return text.to_string();
        }
        if value == 0.0 {
            // Covers -0.0
            return "0".to_string();
        }
        self.localize(format!("{}", value))
    }

    /// Format the result of an evaluation.
    ///
    /// Whole numbers are shown without a decimal point, everything else with
    /// exactly two decimals.
    pub fn format_result(&self, value: f64) -> String {
        if let Some(text) = non_finite_text(value) {
            return text.to_string();
        }
        if value.fract() != 0.0 {
            self.localize(format!("{:.2}", value))
        } else if value == 0.0 {
            "0".to_string()
        } else {
            format!("{:.0}", value)
        }
    }

    fn localize(&self, canonical: String) -> String {
        if self.separator == '.' {
            canonical
        } else {
            canonical.replace('.', &self.separator.to_string())
        }
    }
}

fn non_finite_text(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(NAN_TEXT)
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            Some(INFINITY_TEXT)
        } else {
            Some(NEG_INFINITY_TEXT)
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_comma() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.parse("0"), Some(0.0));
        assert_eq!(fmt.parse("42"), Some(42.0));
        assert_eq!(fmt.parse("3,5"), Some(3.5));
        assert_eq!(fmt.parse("-0,25"), Some(-0.25));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.parse(""), None);
        assert_eq!(fmt.parse("1,2,3"), None);
        assert_eq!(fmt.parse("abc"), None);
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.parse(INFINITY_TEXT), None);
        assert_eq!(fmt.parse(NEG_INFINITY_TEXT), None);
        assert_eq!(fmt.parse(NAN_TEXT), None);
        assert_eq!(fmt.parse("NaN"), None);
    }

    #[test]
    fn test_format_value() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.format_value(-5.0), "-5");
        assert_eq!(fmt.format_value(5.0), "5");
        assert_eq!(fmt.format_value(-2.5), "-2,5");
        assert_eq!(fmt.format_value(-0.0), "0");
    }

    #[test]
    fn test_format_result_integer() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.format_result(8.0), "8");
        assert_eq!(fmt.format_result(-12.0), "-12");
        assert_eq!(fmt.format_result(1_000_000.0), "1000000");
        assert_eq!(fmt.format_result(-0.0), "0");
    }

    #[test]
    fn test_format_result_two_decimals() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.format_result(1.0 / 3.0), "0,33");
        assert_eq!(fmt.format_result(2.5), "2,50");
        assert_eq!(fmt.format_result(-1.75), "-1,75");
    }

    #[test]
    fn test_format_result_non_finite() {
        let fmt = DisplayFormat::default();
        assert_eq!(fmt.format_result(f64::INFINITY), "Infinity");
        assert_eq!(fmt.format_result(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(fmt.format_result(f64::NAN), "Not a Number");
        assert_eq!(fmt.format_value(f64::NAN), "Not a Number");
    }

    #[test]
    fn test_period_separator() {
        let fmt = DisplayFormat::new('.');
        assert_eq!(fmt.format_result(2.5), "2.50");
        assert_eq!(fmt.parse("2.5"), Some(2.5));
    }
}
