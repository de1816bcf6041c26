use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Represents the number of units a course is worth
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Units {
    /// A fixed number of units
    Single(f32),
    /// A range of units
    Range(f32, f32),
}

impl Units {
    /// Builds a unit value from a min/max pair, collapsing an equal pair
    /// into a single value
    pub fn from_min_max(min: f32, max: f32) -> Self {
        if min == max {
            Self::Single(min)
        } else {
            Self::Range(min, max)
        }
    }

    /// Formats a unit value as a whole number when it has no fractional part
    fn format_value(value: f32) -> String {
        if value.fract() == 0.0 {
            format!("{}", value as i32)
        } else {
            format!("{value}")
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let number = match self {
            Self::Single(value) => Self::format_value(*value),
            Self::Range(min, max) => {
                format!("{}-{}", Self::format_value(*min), Self::format_value(*max))
            }
        };

        // Singular only when the rendered number is exactly "1"
        let word = if number == "1" { "unit" } else { "units" };
        write!(f, "{number} {word}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_display(min: f32, max: f32, expected: &str) {
        assert_eq!(Units::from_min_max(min, max).to_string(), expected);
    }

    #[test]
    fn test_single_value() {
        test_display(3.0, 3.0, "3 units");
        test_display(4.0, 4.0, "4 units");
    }

    #[test]
    fn test_range() {
        test_display(3.0, 5.0, "3-5 units");
        test_display(1.0, 18.0, "1-18 units");
    }

    #[test]
    fn test_singular() {
        test_display(1.0, 1.0, "1 unit");
        // A range starting at 1 is still plural
        test_display(1.0, 2.0, "1-2 units");
    }

    #[test]
    fn test_fractional_values() {
        test_display(1.5, 1.5, "1.5 units");
        test_display(0.5, 2.5, "0.5-2.5 units");
    }

    #[test]
    fn test_zero() {
        test_display(0.0, 0.0, "0 units");
    }

    #[test]
    fn test_collapses_equal_pair() {
        assert_eq!(Units::from_min_max(3.0, 3.0), Units::Single(3.0));
        assert_eq!(Units::from_min_max(3.0, 5.0), Units::Range(3.0, 5.0));
    }
}
