//! Rink zones, relative to the attacking net.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zone identifier
///
/// Ordered from the attacking end of the rink to the own end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Zone {
    #[serde(rename = "OZ")]
    Offensive,
    #[serde(rename = "NZ")]
    Neutral,
    #[serde(rename = "DZ")]
    Defensive,
}

impl Zone {
    pub const ALL: [Zone; 3] = [Zone::Offensive, Zone::Neutral, Zone::Defensive];

    /// Get zone index (0-2)
    pub fn index(&self) -> usize {
        match self {
            Zone::Offensive => 0,
            Zone::Neutral => 1,
            Zone::Defensive => 2,
        }
    }

    /// Short code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Zone::Offensive => "OZ",
            Zone::Neutral => "NZ",
            Zone::Defensive => "DZ",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_codes() {
        assert_eq!(serde_json::to_string(&Zone::Offensive).unwrap(), "\"OZ\"");
        assert_eq!(serde_json::from_str::<Zone>("\"DZ\"").unwrap(), Zone::Defensive);
        for zone in Zone::ALL {
            assert_eq!(zone.to_string(), zone.code());
            assert_eq!(Zone::ALL[zone.index()], zone);
        }
    }
}
