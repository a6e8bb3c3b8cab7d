//! # Formation Types
//!
//! The closed taxonomy of hockey systems the engine can report, and the
//! per-team, per-frame [`Formation`] value produced by classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::PlayerId;
use crate::rink::Zone;

/// Tactical system tag.
///
/// Serializes as its display name (e.g. `"1-2-2 Forecheck"`), which is also the
/// key used in formation summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormationType {
    // Forecheck systems
    #[serde(rename = "1-2-2 Forecheck")]
    Forecheck122,
    #[serde(rename = "1-3-1 Forecheck")]
    Forecheck131,
    #[serde(rename = "2-1-2 Forecheck")]
    Forecheck212,
    #[serde(rename = "2-2-1 Forecheck")]
    Forecheck221,
    #[serde(rename = "3-2 Forecheck")]
    Forecheck32,

    // Neutral zone systems
    #[serde(rename = "1-3-1 Neutral Zone")]
    NeutralZone131,
    #[serde(rename = "1-2-2 Neutral Zone")]
    NeutralZone122,
    #[serde(rename = "2-1-2 Neutral Zone")]
    NeutralZone212,
    #[serde(rename = "2-2-1 Neutral Zone")]
    NeutralZone221,

    // Defensive systems
    #[serde(rename = "Box Defense")]
    DefenseBox,
    #[serde(rename = "Diamond Defense")]
    DefenseDiamond,
    #[serde(rename = "Triangle Defense")]
    DefenseTriangle,
    #[serde(rename = "1-3-1 Defense")]
    Defense131,

    // Power play
    #[serde(rename = "1-3-1 Power Play")]
    PowerPlay131,
    #[serde(rename = "2-1-2 Power Play")]
    PowerPlay212,
    #[serde(rename = "Umbrella Power Play")]
    PowerPlayUmbrella,

    // Penalty kill
    #[serde(rename = "Box Penalty Kill")]
    PenaltyKillBox,
    #[serde(rename = "Diamond Penalty Kill")]
    PenaltyKillDiamond,
    #[serde(rename = "Triangle Penalty Kill")]
    PenaltyKillTriangle,

    #[serde(rename = "Breakout Formation")]
    Breakout,
    #[serde(rename = "Rush Formation")]
    Rush,
    #[serde(rename = "Unknown Formation")]
    Unknown,
}

/// Broad family a [`FormationType`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormationFamily {
    Forecheck,
    NeutralZone,
    Defensive,
    PowerPlay,
    PenaltyKill,
    Breakout,
    Rush,
    Unknown,
}

impl FormationType {
    /// All formation types in declaration order
    pub const ALL: [FormationType; 22] = [
        FormationType::Forecheck122,
        FormationType::Forecheck131,
        FormationType::Forecheck212,
        FormationType::Forecheck221,
        FormationType::Forecheck32,
        FormationType::NeutralZone131,
        FormationType::NeutralZone122,
        FormationType::NeutralZone212,
        FormationType::NeutralZone221,
        FormationType::DefenseBox,
        FormationType::DefenseDiamond,
        FormationType::DefenseTriangle,
        FormationType::Defense131,
        FormationType::PowerPlay131,
        FormationType::PowerPlay212,
        FormationType::PowerPlayUmbrella,
        FormationType::PenaltyKillBox,
        FormationType::PenaltyKillDiamond,
        FormationType::PenaltyKillTriangle,
        FormationType::Breakout,
        FormationType::Rush,
        FormationType::Unknown,
    ];

    /// Display name, identical to the serialized form.
    pub fn display(&self) -> &'static str {
        match self {
            FormationType::Forecheck122 => "1-2-2 Forecheck",
            FormationType::Forecheck131 => "1-3-1 Forecheck",
            FormationType::Forecheck212 => "2-1-2 Forecheck",
            FormationType::Forecheck221 => "2-2-1 Forecheck",
            FormationType::Forecheck32 => "3-2 Forecheck",
            FormationType::NeutralZone131 => "1-3-1 Neutral Zone",
            FormationType::NeutralZone122 => "1-2-2 Neutral Zone",
            FormationType::NeutralZone212 => "2-1-2 Neutral Zone",
            FormationType::NeutralZone221 => "2-2-1 Neutral Zone",
            FormationType::DefenseBox => "Box Defense",
            FormationType::DefenseDiamond => "Diamond Defense",
            FormationType::DefenseTriangle => "Triangle Defense",
            FormationType::Defense131 => "1-3-1 Defense",
            FormationType::PowerPlay131 => "1-3-1 Power Play",
            FormationType::PowerPlay212 => "2-1-2 Power Play",
            FormationType::PowerPlayUmbrella => "Umbrella Power Play",
            FormationType::PenaltyKillBox => "Box Penalty Kill",
            FormationType::PenaltyKillDiamond => "Diamond Penalty Kill",
            FormationType::PenaltyKillTriangle => "Triangle Penalty Kill",
            FormationType::Breakout => "Breakout Formation",
            FormationType::Rush => "Rush Formation",
            FormationType::Unknown => "Unknown Formation",
        }
    }

    pub fn family(&self) -> FormationFamily {
        match self {
            FormationType::Forecheck122
            | FormationType::Forecheck131
            | FormationType::Forecheck212
            | FormationType::Forecheck221
            | FormationType::Forecheck32 => FormationFamily::Forecheck,
            FormationType::NeutralZone131
            | FormationType::NeutralZone122
            | FormationType::NeutralZone212
            | FormationType::NeutralZone221 => FormationFamily::NeutralZone,
            FormationType::DefenseBox
            | FormationType::DefenseDiamond
            | FormationType::DefenseTriangle
            | FormationType::Defense131 => FormationFamily::Defensive,
            FormationType::PowerPlay131
            | FormationType::PowerPlay212
            | FormationType::PowerPlayUmbrella => FormationFamily::PowerPlay,
            FormationType::PenaltyKillBox
            | FormationType::PenaltyKillDiamond
            | FormationType::PenaltyKillTriangle => FormationFamily::PenaltyKill,
            FormationType::Breakout => FormationFamily::Breakout,
            FormationType::Rush => FormationFamily::Rush,
            FormationType::Unknown => FormationFamily::Unknown,
        }
    }

    /// Look up a formation type by its display name.
    pub fn from_display(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.display() == name)
    }
}

impl fmt::Display for FormationType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// How a [`Formation`] was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationBasis {
    /// A catalogued signature matched the team's shape
    Signature,
    /// No signature matched; the zone's default formation was used
    Fallback,
    /// Too few positioned players to classify
    InsufficientData,
}

/// Classified team shape for one team in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    #[serde(rename = "type")]
    pub formation_type: FormationType,
    /// Confidence in [0.0, 1.0]
    pub confidence: f32,
    pub players_involved: Vec<PlayerId>,
    pub zone: Zone,
    pub description: String,
    pub basis: FormationBasis,
}

impl Formation {
    /// Degraded result for a team with too few positioned players.
    pub fn insufficient(zone: Zone) -> Self {
        Self {
            formation_type: FormationType::Unknown,
            confidence: 0.0,
            players_involved: Vec::new(),
            zone,
            description: "Insufficient positioned players for formation analysis".to_string(),
            basis: FormationBasis::InsufficientData,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.formation_type == FormationType::Unknown
    }
}
