use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ALMOST_FULL_THRESHOLD;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Free,
    AlmostFull,
    Full,
}

impl Tier {
    pub fn icon(self) -> &'static str {
        match self {
            Tier::Free => "✅",
            Tier::AlmostFull => "⚠️",
            Tier::Full => "❌",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::AlmostFull => "almost-full",
            Tier::Full => "full",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an occupancy reading to its tier.
///
/// `occupied > total` is not rejected: the remaining count saturates at zero
/// and the garage is reported as full.
pub fn classify(occupied: u32, total: u32) -> Tier {
    match total.saturating_sub(occupied) {
        0 => Tier::Full,
        remaining if remaining <= ALMOST_FULL_THRESHOLD => Tier::AlmostFull,
        _ => Tier::Free,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_full_when_nothing_remains() {
        assert_eq!(classify(100, 100), Tier::Full);
        assert_eq!(classify(0, 0), Tier::Full);
        assert_eq!(classify(120, 100), Tier::Full);
    }

    #[test]
    fn classify_almost_full_up_to_threshold() {
        assert_eq!(classify(99, 100), Tier::AlmostFull);
        assert_eq!(classify(80, 100), Tier::AlmostFull);
        assert_eq!(classify(0, 20), Tier::AlmostFull);
    }

    #[test]
    fn classify_free_above_threshold() {
        assert_eq!(classify(79, 100), Tier::Free);
        assert_eq!(classify(0, 21), Tier::Free);
        assert_eq!(classify(10, 500), Tier::Free);
    }

    #[test]
    fn tier_serializes_in_kebab_case() {
        let json = serde_json::to_string(&Tier::AlmostFull).unwrap();
        assert_eq!(json, "\"almost-full\"");
        let tier: Tier = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(tier, Tier::Full);
        assert_eq!(Tier::AlmostFull.to_string(), "almost-full");
    }
}
