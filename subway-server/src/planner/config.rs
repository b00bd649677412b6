//! Direction compilation settings.

use std::fmt;
use std::str::FromStr;

/// How the direction compiler picks a line when several connect a hop.
///
/// The choice decides how many transfers a rider is told to make, so it is
/// an explicit setting rather than a side effect of traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineChoice {
    /// Stay on the line used for the previous hop when it also serves this
    /// one; otherwise take the first connecting line in registration order.
    #[default]
    PreferCurrent,

    /// Always take the first connecting line in registration order.
    RegistrationOrder,
}

/// Error returned when parsing an unknown line choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line choice {0:?}; expected prefer-current or registration-order")]
pub struct InvalidLineChoice(String);

impl FromStr for LineChoice {
    type Err = InvalidLineChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prefer-current" => Ok(LineChoice::PreferCurrent),
            "registration-order" => Ok(LineChoice::RegistrationOrder),
            _ => Err(InvalidLineChoice(s.to_string())),
        }
    }
}

impl fmt::Display for LineChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineChoice::PreferCurrent => "prefer-current",
            LineChoice::RegistrationOrder => "registration-order",
        })
    }
}

/// Configuration parameters for direction compilation.
#[derive(Debug, Clone, Default)]
pub struct DirectionsConfig {
    /// Line-selection policy for hops served by several lines.
    pub line_choice: LineChoice,
}

impl DirectionsConfig {
    /// Create a new configuration with the given policy.
    pub fn new(line_choice: LineChoice) -> Self {
        Self { line_choice }
    }
}
