//! # Classifier Configuration
//!
//! Every band width, count and confidence the formation classifier uses.
//! The defaults encode an analyst prior, not values fitted to labeled
//! formations; recalibrating is a matter of editing this data.
//!
//! ## Usage
//!
//! ```rust
//! use rink_tactics::config::ClassifierConfig;
//!
//! // Built-in analyst prior
//! let config = ClassifierConfig::default();
//! assert_eq!(config.min_players, 3);
//!
//! // Round-trip through YAML for hand tuning
//! let yaml = config.to_yaml().unwrap();
//! let reloaded = ClassifierConfig::from_yaml_str(&yaml).unwrap();
//! assert_eq!(reloaded, config);
//! ```
//!
//! ## Environment Variables
//!
//! - `RINK_TACTICS_CONFIG`: path to a YAML config read by
//!   [`ClassifierConfig::from_env_or_default`]

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{Result, TacticsError};
use crate::models::FormationType;
use crate::rink::Zone;
use crate::tactics::features::DepthBands;

/// Environment variable naming a YAML config file
pub const CONFIG_ENV_VAR: &str = "RINK_TACTICS_CONFIG";

/// Lowest accepted `min_players`. Teams with fewer positioned players are
/// always reported as `Unknown`.
pub const MIN_CLASSIFIABLE_PLAYERS: usize = 3;

/// Full classifier configuration: one signature catalog per zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Fewest positioned players a team needs before it is classified
    pub min_players: usize,
    pub offensive: ZoneCatalog,
    pub neutral: ZoneCatalog,
    pub defensive: ZoneCatalog,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_CLASSIFIABLE_PLAYERS,
            offensive: ZoneCatalog::forecheck(),
            neutral: ZoneCatalog::neutral_zone(),
            defensive: ZoneCatalog::defensive_zone(),
        }
    }
}

impl ClassifierConfig {
    pub fn catalog(&self, zone: Zone) -> &ZoneCatalog {
        match zone {
            Zone::Offensive => &self.offensive,
            Zone::Neutral => &self.neutral,
            Zone::Defensive => &self.defensive,
        }
    }

    pub fn catalog_mut(&mut self, zone: Zone) -> &mut ZoneCatalog {
        match zone {
            Zone::Offensive => &mut self.offensive,
            Zone::Neutral => &mut self.neutral,
            Zone::Defensive => &mut self.defensive,
        }
    }

    /// Check value ranges. Loading helpers call this before returning.
    pub fn validate(&self) -> Result<()> {
        if self.min_players < MIN_CLASSIFIABLE_PLAYERS {
            return Err(TacticsError::invalid_config(format!(
                "min_players must be at least {}, got {}",
                MIN_CLASSIFIABLE_PLAYERS, self.min_players
            )));
        }
        for zone in Zone::ALL {
            self.catalog(zone)
                .validate()
                .map_err(|reason| TacticsError::invalid_config(format!("{} catalog: {}", zone, reason)))?;
        }
        Ok(())
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load from the file named by `RINK_TACTICS_CONFIG`, or use the default.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::from_yaml_file(&path) {
            Ok(config) => {
                info!(path = %path, "loaded classifier config");
                config
            }
            Err(err) => {
                warn!(path = %path, error = %err, "falling back to default classifier config");
                Self::default()
            }
        }
    }
}

/// Signature catalog and band geometry for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCatalog {
    /// Half-width of the "within" depth band around the team's mean Y
    pub depth_band: f32,
    /// Half-width of the "center" lateral band around the team's mean X
    pub lateral_band: f32,
    /// Minimum offset on both axes for a player to count as a corner player
    pub corner_offset: f32,
    #[serde(default)]
    pub corner_quadrants: CornerQuadrants,
    /// Tried in order; the first match wins
    pub signatures: Vec<Signature>,
    pub fallback: FallbackRule,
}

impl ZoneCatalog {
    /// Offensive zone forecheck catalog
    pub fn forecheck() -> Self {
        Self {
            depth_band: 20.0,
            lateral_band: 15.0,
            corner_offset: 20.0,
            corner_quadrants: CornerQuadrants::NearNet,
            signatures: vec![
                Signature::bands(
                    FormationType::Forecheck122,
                    0.85,
                    "1-2-2 Forecheck: 1 deep, 2 mid-left, 2 mid-right, 1 high",
                    DepthBands::new(1, 3, 1),
                    LateralRule::Flanks { left: 2, right: 2 },
                ),
                Signature::bands(
                    FormationType::Forecheck131,
                    0.80,
                    "1-3-1 Forecheck: 1 deep, 3 mid-center, 1 high",
                    DepthBands::new(1, 3, 1),
                    LateralRule::MinCenter { count: 2 },
                ),
                Signature::bands(
                    FormationType::Forecheck212,
                    0.75,
                    "2-1-2 Forecheck: 2 deep, 1 mid, 2 high",
                    DepthBands::new(2, 1, 2),
                    LateralRule::Any,
                ),
            ],
            fallback: FallbackRule {
                formation: FormationType::Forecheck122,
                confidence: 0.60,
                description: "Standard forecheck formation".to_string(),
            },
        }
    }

    /// Neutral zone catalog
    pub fn neutral_zone() -> Self {
        Self {
            depth_band: 15.0,
            lateral_band: 15.0,
            corner_offset: 20.0,
            corner_quadrants: CornerQuadrants::NearNet,
            signatures: vec![
                Signature::bands(
                    FormationType::NeutralZone131,
                    0.85,
                    "1-3-1 Neutral Zone: 1 back, 3 center, 1 forward",
                    DepthBands::new(1, 3, 1),
                    LateralRule::MinCenter { count: 2 },
                ),
                Signature::bands(
                    FormationType::NeutralZone122,
                    0.80,
                    "1-2-2 Neutral Zone: 1 back, 2 mid, 2 forward",
                    DepthBands::new(2, 2, 1),
                    LateralRule::Flanks { left: 2, right: 2 },
                ),
            ],
            fallback: FallbackRule {
                formation: FormationType::NeutralZone122,
                confidence: 0.65,
                description: "Standard neutral zone formation".to_string(),
            },
        }
    }

    /// Defensive zone catalog
    pub fn defensive_zone() -> Self {
        Self {
            depth_band: 15.0,
            lateral_band: 15.0,
            corner_offset: 20.0,
            corner_quadrants: CornerQuadrants::NearNet,
            signatures: vec![
                Signature {
                    formation: FormationType::DefenseBox,
                    confidence: 0.85,
                    description: "Box Defense: players positioned in defensive corners".to_string(),
                    rule: ShapeRule::Corners {
                        min_players: 4,
                        min_corners: 3,
                    },
                },
                Signature::bands(
                    FormationType::DefenseDiamond,
                    0.80,
                    "Diamond Defense: 1 high, 2 mid, 1 low",
                    DepthBands::new(1, 2, 1),
                    LateralRule::Any,
                ),
            ],
            fallback: FallbackRule {
                formation: FormationType::DefenseBox,
                confidence: 0.60,
                description: "Standard defensive formation".to_string(),
            },
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        for (name, value) in [
            ("depth_band", self.depth_band),
            ("lateral_band", self.lateral_band),
            ("corner_offset", self.corner_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be finite and >= 0, got {}", name, value));
            }
        }
        for signature in &self.signatures {
            check_confidence(signature.confidence, signature.formation)?;
        }
        check_confidence(self.fallback.confidence, self.fallback.formation)
    }
}

fn check_confidence(confidence: f32, formation: FormationType) -> std::result::Result<(), String> {
    if (0.0..=1.0).contains(&confidence) {
        Ok(())
    } else {
        Err(format!("confidence for {} must be in [0, 1], got {}", formation, confidence))
    }
}

/// Which diagonal quadrants around the centroid count as corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerQuadrants {
    /// The two quadrants on the own-net side (larger Y)
    #[default]
    NearNet,
    /// All four diagonal quadrants
    All,
}

/// A catalogued team shape and what it implies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub formation: FormationType,
    pub confidence: f32,
    pub description: String,
    pub rule: ShapeRule,
}

impl Signature {
    pub fn bands(
        formation: FormationType,
        confidence: f32,
        description: &str,
        depth: DepthBands,
        lateral: LateralRule,
    ) -> Self {
        Self {
            formation,
            confidence,
            description: description.to_string(),
            rule: ShapeRule::Bands { depth, lateral },
        }
    }
}

/// Shape predicate evaluated against computed band features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeRule {
    /// Exact depth band populations plus a lateral condition
    Bands {
        depth: DepthBands,
        #[serde(default)]
        lateral: LateralRule,
    },
    /// Enough players sitting in corner quadrants
    Corners { min_players: usize, min_corners: usize },
}

/// Lateral condition of a band signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LateralRule {
    #[default]
    Any,
    /// Exact left / right populations
    Flanks { left: usize, right: usize },
    /// At least `count` players in the center band
    MinCenter { count: usize },
}

/// Formation reported when no signature matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackRule {
    pub formation: FormationType,
    pub confidence: f32,
    pub description: String,
}
