//! Cell data types
//!
//! Every cell value travels as a string; a data type is a content rule
//! deciding which strings are admissible, plus a default value that is
//! always admissible. A rule classifies the entire value: there are no
//! partial matches.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Whole-number rule: optional sign, one or more digits.
const INT_ELEMENT: &str = r"[+-]?\d+";

/// Decimal rule: digits with an optional fractional part.
const DOUBLE_ELEMENT: &str = r"\d+(?:\.\d+)?";

/// Relaxed decimal element used inside complex pairs; the digit sequence
/// may be empty.
const COMPLEX_DOUBLE_ELEMENT: &str = r"\d*(?:\.\d+)?";

static INT_RULE: LazyLock<Regex> = LazyLock::new(|| anchored(INT_ELEMENT));
static DOUBLE_RULE: LazyLock<Regex> = LazyLock::new(|| anchored(DOUBLE_ELEMENT));
static COMPLEX_INT_RULE: LazyLock<Regex> = LazyLock::new(|| anchored(&pair_of(INT_ELEMENT)));
static COMPLEX_DOUBLE_RULE: LazyLock<Regex> =
    LazyLock::new(|| anchored(&pair_of(COMPLEX_DOUBLE_ELEMENT)));

/// Compiles a rule anchored on both ends so a match must cover the whole
/// value.
fn anchored(rule: &str) -> Regex {
    Regex::new(&format!("^(?:{rule})$")).expect("data type rule must compile")
}

/// Builds the composite pair rule `(<elem>,<elem>)` from an element rule.
fn pair_of(element: &str) -> String {
    format!(r"\((?:{element}),(?:{element})\)")
}

/// A cell data type: a content rule plus a default value.
///
/// The set is closed; adding a type is a compile-time change, never a
/// runtime plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataType {
    /// Free-form text; accepts any value.
    Char,
    /// Whole number with an optional sign.
    Int,
    /// Decimal number with an optional fractional part.
    Double,
    /// Pair of whole numbers in the fixed form `(a,b)`.
    ComplexInt,
    /// Pair of decimals in the fixed form `(a,b)`; either digit sequence
    /// may be empty.
    ComplexDouble,
}

impl DataType {
    /// Every variant, in declaration order.
    pub const ALL: [DataType; 5] = [
        DataType::Char,
        DataType::Int,
        DataType::Double,
        DataType::ComplexInt,
        DataType::ComplexDouble,
    ];

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::Char => "char",
            DataType::Int => "int",
            DataType::Double => "double",
            DataType::ComplexInt => "complexInt",
            DataType::ComplexDouble => "complexDouble",
        }
    }

    /// Returns a value guaranteed to satisfy [`DataType::is_valid_value`].
    pub fn default_value(&self) -> &'static str {
        match self {
            DataType::Char => "-",
            DataType::Int => "0",
            DataType::Double => "0.0",
            DataType::ComplexInt => "(0,0)",
            DataType::ComplexDouble => "(0.0,0.0)",
        }
    }

    /// Returns true iff `value` fully matches this type's content rule.
    pub fn is_valid_value(&self, value: &str) -> bool {
        match self {
            DataType::Char => true,
            DataType::Int => INT_RULE.is_match(value),
            DataType::Double => DOUBLE_RULE.is_match(value),
            DataType::ComplexInt => COMPLEX_INT_RULE.is_match(value),
            DataType::ComplexDouble => COMPLEX_DOUBLE_RULE.is_match(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_accepts_anything() {
        for value in ["", " ", "text", "1234sometext", "(1,2)", "a\nb"] {
            assert!(DataType::Char.is_valid_value(value), "rejected {value:?}");
        }
    }

    #[test]
    fn test_int_accepts_whole_numbers() {
        for value in ["0", "7", "42", "+3", "-15", "007"] {
            assert!(DataType::Int.is_valid_value(value), "rejected {value:?}");
        }
    }

    #[test]
    fn test_int_rejects_non_integers() {
        for value in ["", " ", "4.2", "abc", "12a", "a12", "+", "-", "1 2", "1\n"] {
            assert!(!DataType::Int.is_valid_value(value), "accepted {value:?}");
        }
    }

    #[test]
    fn test_double_accepts_decimals() {
        for value in ["0", "3", "3.14", "0.5", "100.001"] {
            assert!(DataType::Double.is_valid_value(value), "rejected {value:?}");
        }
    }

    #[test]
    fn test_double_rejects_malformed_decimals() {
        // No sign, no bare fraction, no trailing dot.
        for value in ["", "-1", "+2.5", ".5", "1.", "1.2.3", "1e3"] {
            assert!(!DataType::Double.is_valid_value(value), "accepted {value:?}");
        }
    }

    #[test]
    fn test_complex_int_pairs() {
        for value in ["(0,0)", "(1,-2)", "(+3,4)", "(-10,+20)"] {
            assert!(DataType::ComplexInt.is_valid_value(value), "rejected {value:?}");
        }
        for value in ["", "1,2", "(1,2", "1,2)", "(1.5,2)", "(1, 2)", "(1;2)", "(1,2,3)"] {
            assert!(!DataType::ComplexInt.is_valid_value(value), "accepted {value:?}");
        }
    }

    #[test]
    fn test_complex_double_pairs() {
        // The element rule allows an empty digit sequence.
        for value in ["(0.0,0.0)", "(1,2)", "(0.5,)", "(,)", "(.5,1)"] {
            assert!(DataType::ComplexDouble.is_valid_value(value), "rejected {value:?}");
        }
        for value in ["", "0.5,0.5", "(-1,2)", "(1,2) ", "(1..2,3)"] {
            assert!(!DataType::ComplexDouble.is_valid_value(value), "accepted {value:?}");
        }
    }

    #[test]
    fn test_match_covers_entire_value() {
        // A valid prefix or suffix is not enough.
        assert!(!DataType::Int.is_valid_value("42x"));
        assert!(!DataType::Int.is_valid_value("x42"));
        assert!(!DataType::Double.is_valid_value("3.14!"));
        assert!(!DataType::ComplexInt.is_valid_value("(1,2)(3,4)"));
    }

    #[test]
    fn test_default_values_satisfy_own_rule() {
        for data_type in DataType::ALL {
            assert!(
                data_type.is_valid_value(data_type.default_value()),
                "default of {} is invalid",
                data_type.type_name()
            );
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&DataType::ComplexInt).unwrap();
        assert_eq!(json, "\"complexInt\"");
        let back: DataType = serde_json::from_str("\"double\"").unwrap();
        assert_eq!(back, DataType::Double);
    }
}
