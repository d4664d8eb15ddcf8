//! Theme preference types.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The visitor's theme preference.
///
/// `System` follows the OS preference; the toggle cycles
/// light -> dark -> system -> light.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Returns the next preference in the three-way cycle.
    pub fn cycle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_rotation() {
        assert_eq!(ThemePreference::Light.cycle(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.cycle(), ThemePreference::System);
        assert_eq!(ThemePreference::System.cycle(), ThemePreference::Light);
    }

    #[test]
    fn test_cycle_returns_after_three_steps() {
        let start = ThemePreference::default();
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn test_string_round_trip() {
        use std::str::FromStr;
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
        assert_eq!(
            ThemePreference::from_str("system").unwrap(),
            ThemePreference::System
        );
    }
}
