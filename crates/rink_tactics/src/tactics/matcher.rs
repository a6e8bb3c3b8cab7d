//! Signature matching for one zone.

use crate::config::{LateralRule, ShapeRule, Signature, ZoneCatalog};
use crate::models::{Formation, FormationBasis, PositionedPlayer};
use crate::rink::Zone;

use super::features::ShapeFeatures;

/// Classification strategy for a single zone.
///
/// Implementations receive at least the configured minimum number of
/// positioned players; the caller handles the insufficient-data case.
pub trait ZoneClassifier: Send + Sync {
    fn classify(&self, players: &[PositionedPlayer], zone: Zone) -> Formation;
}

impl ShapeRule {
    pub fn matches(&self, features: &ShapeFeatures) -> bool {
        match self {
            ShapeRule::Bands { depth, lateral } => {
                features.depth == *depth && lateral.matches(features)
            }
            ShapeRule::Corners {
                min_players,
                min_corners,
            } => features.players >= *min_players && features.corners >= *min_corners,
        }
    }
}

impl LateralRule {
    pub fn matches(&self, features: &ShapeFeatures) -> bool {
        match *self {
            LateralRule::Any => true,
            LateralRule::Flanks { left, right } => {
                features.lateral.left == left && features.lateral.right == right
            }
            LateralRule::MinCenter { count } => features.lateral.center >= count,
        }
    }
}

/// Data-driven classifier: first matching signature wins, otherwise the
/// catalog's fallback formation.
#[derive(Debug, Clone)]
pub struct SignatureMatcher {
    catalog: ZoneCatalog,
}

impl SignatureMatcher {
    pub fn new(catalog: ZoneCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ZoneCatalog {
        &self.catalog
    }

    /// First signature matching `features`, if any.
    pub fn find_signature(&self, features: &ShapeFeatures) -> Option<&Signature> {
        self.catalog
            .signatures
            .iter()
            .find(|signature| signature.rule.matches(features))
    }
}

impl ZoneClassifier for SignatureMatcher {
    fn classify(&self, players: &[PositionedPlayer], zone: Zone) -> Formation {
        let features = ShapeFeatures::compute(players, &self.catalog);
        let players_involved = players.iter().map(|p| p.id).collect();

        match self.find_signature(&features) {
            Some(signature) => Formation {
                formation_type: signature.formation,
                confidence: signature.confidence,
                players_involved,
                zone,
                description: signature.description.clone(),
                basis: FormationBasis::Signature,
            },
            None => Formation {
                formation_type: self.catalog.fallback.formation,
                confidence: self.catalog.fallback.confidence,
                players_involved,
                zone,
                description: self.catalog.fallback.description.clone(),
                basis: FormationBasis::Fallback,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormationType;
    use crate::tactics::features::DepthBands;

    fn team(coords: &[(f32, f32)]) -> Vec<PositionedPlayer> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| PositionedPlayer::new(10 + i as u32, x, y))
            .collect()
    }

    #[test]
    fn test_first_matching_signature_wins() {
        // 1-2-2 and 1-3-1 share the depth pattern; flanks are checked first
        let matcher = SignatureMatcher::new(ZoneCatalog::forecheck());
        let players = team(&[(-30.0, 40.0), (-30.0, 0.0), (0.0, 0.0), (30.0, 0.0), (30.0, -40.0)]);
        let formation = matcher.classify(&players, Zone::Offensive);
        assert_eq!(formation.formation_type, FormationType::Forecheck122);
        assert_eq!(formation.players_involved, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let matcher = SignatureMatcher::new(ZoneCatalog::neutral_zone());
        let players = team(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let formation = matcher.classify(&players, Zone::Neutral);
        assert_eq!(formation.formation_type, FormationType::NeutralZone122);
        assert_eq!(formation.confidence, 0.65);
        assert_eq!(formation.basis, FormationBasis::Fallback);
    }

    #[test]
    fn test_lateral_rules() {
        let features = ShapeFeatures {
            depth: DepthBands::new(1, 3, 1),
            lateral: crate::tactics::features::LateralBands {
                left: 1,
                center: 3,
                right: 1,
            },
            players: 5,
            ..Default::default()
        };
        assert!(LateralRule::Any.matches(&features));
        assert!(LateralRule::MinCenter { count: 2 }.matches(&features));
        assert!(!LateralRule::MinCenter { count: 4 }.matches(&features));
        assert!(!LateralRule::Flanks { left: 2, right: 2 }.matches(&features));
    }

    #[test]
    fn test_corner_rule_needs_enough_players() {
        let rule = ShapeRule::Corners {
            min_players: 4,
            min_corners: 3,
        };
        let three_players = ShapeFeatures {
            corners: 3,
            players: 3,
            ..Default::default()
        };
        assert!(!rule.matches(&three_players));
        let four_players = ShapeFeatures {
            corners: 3,
            players: 4,
            ..Default::default()
        };
        assert!(rule.matches(&four_players));
    }
}
