//! Game mode selection
//!
//! The two Mastermind variants differ in how secrets are generated and how
//! non-exact matches are scored.

use std::fmt;
use std::str::FromStr;

/// Mastermind game mode
///
/// Selects between the two scoring algorithms and secret alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Digits may repeat; partial feedback counts right-digit-wrong-position
    #[default]
    Standard,
    /// All secret digits are distinct; partial feedback counts adjacent-position matches
    Unique,
}

/// Error type for unrecognized mode names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeError(String);

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized game mode '{}', expected 'standard' or 'unique'",
            self.0
        )
    }
}

impl std::error::Error for ModeError {}

impl FromStr for Mode {
    type Err = ModeError;

    /// Parse a mode name
    ///
    /// Accepts "standard" and "unique", case-insensitive. Anything else is
    /// an error rather than a silent default: an unrecognized mode is a
    /// caller mistake.
    ///
    /// # Examples
    /// ```
    /// use mastermind_engine::core::Mode;
    ///
    /// assert_eq!("unique".parse::<Mode>().unwrap(), Mode::Unique);
    /// assert_eq!("STANDARD".parse::<Mode>().unwrap(), Mode::Standard);
    /// assert!("hard".parse::<Mode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "unique" => Ok(Self::Unique),
            _ => Err(ModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Unique => write!(f, "unique"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_valid() {
        assert_eq!("standard".parse::<Mode>().unwrap(), Mode::Standard);
        assert_eq!("unique".parse::<Mode>().unwrap(), Mode::Unique);
        assert_eq!("Unique".parse::<Mode>().unwrap(), Mode::Unique);
    }

    #[test]
    fn mode_parse_invalid() {
        assert!("".parse::<Mode>().is_err());
        assert!("classic".parse::<Mode>().is_err());
        assert!("unique ".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_display_roundtrip() {
        for mode in [Mode::Standard, Mode::Unique] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn mode_default_is_standard() {
        assert_eq!(Mode::default(), Mode::Standard);
    }
}
