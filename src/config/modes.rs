//! Early-exit test modes.

use std::fmt;
use std::str::FromStr;

/// Truncated iteration for fast validation runs, selected through `BLU_TEST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestMode {
    /// Archive everything (default).
    #[default]
    Off,
    /// Stop after the first pattern, the first class and its first episode (`BLU_TEST=1`).
    FirstEpisode,
    /// Stop after the first pattern and the first class (`BLU_TEST=2`).
    FirstClass,
}

impl TestMode {
    /// Whether pattern and class loops stop after their first item.
    pub fn stop_after_first_item(self) -> bool {
        matches!(self, TestMode::FirstEpisode | TestMode::FirstClass)
    }

    /// Whether the episode loop stops after its first episode.
    pub fn stop_after_first_episode(self) -> bool {
        self == TestMode::FirstEpisode
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestMode::Off => write!(f, "off"),
            TestMode::FirstEpisode => write!(f, "first episode"),
            TestMode::FirstClass => write!(f, "first class"),
        }
    }
}

impl FromStr for TestMode {
    type Err = std::convert::Infallible;

    /// Unknown values mean "off", matching how the environment switch has always behaved.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1" => TestMode::FirstEpisode,
            "2" => TestMode::FirstClass,
            _ => TestMode::Off,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_test_mode() {
        assert_eq!("1".parse::<TestMode>().unwrap(), TestMode::FirstEpisode);
        assert_eq!("2".parse::<TestMode>().unwrap(), TestMode::FirstClass);
        assert_eq!("".parse::<TestMode>().unwrap(), TestMode::Off);
        assert_eq!("yes".parse::<TestMode>().unwrap(), TestMode::Off);
    }

    #[test]
    fn test_stop_flags() {
        assert!(TestMode::FirstEpisode.stop_after_first_item());
        assert!(TestMode::FirstEpisode.stop_after_first_episode());
        assert!(TestMode::FirstClass.stop_after_first_item());
        assert!(!TestMode::FirstClass.stop_after_first_episode());
        assert!(!TestMode::Off.stop_after_first_item());
        assert!(!TestMode::Off.stop_after_first_episode());
    }
}
