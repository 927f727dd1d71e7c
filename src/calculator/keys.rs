//! Keypad tokens.
//!
//! Maps the textual names of calculator keys to [`Key`] values so that a
//! front end can drive the engine from typed input.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::calculation::Operation;
use crate::error::KeyError;

lazy_static! {
    /// Matches a single key token. Multi-character names come first so that
    /// `+/-` is not read as `+` followed by `/`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"(?i)\+/-|neg|ac|c|[0-9]|[,.+\-*x/%=]|\S"
    ).unwrap();
}

/// A key on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    /// The decimal separator key.
    Separator,
    Operation(Operation),
    /// The "AC"/"C" key.
    Clear,
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let key = match token.to_ascii_lowercase().as_str() {
            "," | "." => Self::Separator,
            "+" => Self::Operation(Operation::Add),
            "-" => Self::Operation(Operation::Subtract),
            "*" | "x" => Self::Operation(Operation::Multiply),
            "/" => Self::Operation(Operation::Divide),
            "%" => Self::Operation(Operation::Percentage),
            "=" => Self::Operation(Operation::Equals),
            "neg" | "+/-" => Self::Operation(Operation::Negate),
            "c" | "ac" => Self::Clear,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(digit), None) if digit.is_ascii_digit() => Self::Digit(digit),
                    _ => return Err(KeyError::Unknown(token.to_string())),
                }
            }
        };
        Ok(key)
    }
}

/// Split a line such as `12+3=` into keys.
///
/// Whitespace is skipped; the first unknown token aborts parsing.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyError> {
    KEY_TOKEN
        .find_iter(line)
        .map(|token| token.as_str().parse())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keys() {
        assert_eq!("7".parse::<Key>().unwrap(), Key::Digit('7'));
        assert_eq!(",".parse::<Key>().unwrap(), Key::Separator);
        assert_eq!(".".parse::<Key>().unwrap(), Key::Separator);
        assert_eq!(
            "x".parse::<Key>().unwrap(),
            Key::Operation(Operation::Multiply)
        );
        assert_eq!(
            "+/-".parse::<Key>().unwrap(),
            Key::Operation(Operation::Negate)
        );
        assert_eq!("AC".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("c".parse::<Key>().unwrap(), Key::Clear);
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!("sqrt".parse::<Key>(), Err(KeyError::Unknown(_))));
        assert!(matches!("12".parse::<Key>(), Err(KeyError::Unknown(_))));
        assert!(matches!("".parse::<Key>(), Err(KeyError::Unknown(_))));
    }

    #[test]
    fn test_parse_line() {
        let keys = parse_keys("12+3=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::Operation(Operation::Add),
                Key::Digit('3'),
                Key::Operation(Operation::Equals),
            ]
        );
    }

    #[test]
    fn test_parse_line_with_names() {
        let keys = parse_keys("5 +/- neg AC").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('5'),
                Key::Operation(Operation::Negate),
                Key::Operation(Operation::Negate),
                Key::Clear,
            ]
        );
    }

    #[test]
    fn test_parse_line_rejects_unknown() {
        assert!(matches!(parse_keys("2 ^ 3"), Err(KeyError::Unknown(t)) if t == "^"));
    }
}
