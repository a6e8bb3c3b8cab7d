//! # Team Formation Classifier
//!
//! Classifies one team's positioned players into a [`Formation`].
//!
//! Classification dispatches on [`Zone`] through a registry holding one
//! [`ZoneClassifier`] per zone. By default each zone gets a
//! [`SignatureMatcher`] built from its [`ZoneCatalog`](crate::config::ZoneCatalog);
//! dedicated geometry (power play, penalty kill) plugs in with
//! [`TeamFormationClassifier::register`].
//!
//! Classification never fails. Teams below the player minimum get an
//! `Unknown` formation at confidence 0.0, and shapes matching no signature
//! get the zone's fallback formation.

use std::fmt;

use crate::config::{ClassifierConfig, MIN_CLASSIFIABLE_PLAYERS};
use crate::models::{Formation, PlayerSample, PositionedPlayer};
use crate::rink::Zone;

use super::matcher::{SignatureMatcher, ZoneClassifier};

pub struct TeamFormationClassifier {
    min_players: usize,
    registry: [Box<dyn ZoneClassifier>; 3],
}

impl Default for TeamFormationClassifier {
    fn default() -> Self {
        Self::new(&ClassifierConfig::default())
    }
}

impl fmt::Debug for TeamFormationClassifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("TeamFormationClassifier")
            .field("min_players", &self.min_players)
            .finish_non_exhaustive()
    }
}

impl TeamFormationClassifier {
    /// Build from `config`. A `min_players` below
    /// [`MIN_CLASSIFIABLE_PLAYERS`] is raised to it.
    pub fn new(config: &ClassifierConfig) -> Self {
        let matcher = |zone: Zone| -> Box<dyn ZoneClassifier> {
            Box::new(SignatureMatcher::new(config.catalog(zone).clone()))
        };
        Self {
            min_players: config.min_players.max(MIN_CLASSIFIABLE_PLAYERS),
            registry: [
                matcher(Zone::Offensive),
                matcher(Zone::Neutral),
                matcher(Zone::Defensive),
            ],
        }
    }

    /// Replace the classifier used for `zone`.
    pub fn register(&mut self, zone: Zone, classifier: impl ZoneClassifier + 'static) {
        self.registry[zone.index()] = Box::new(classifier);
    }

    /// Builder form of [`TeamFormationClassifier::register`].
    pub fn with_zone_classifier(mut self, zone: Zone, classifier: impl ZoneClassifier + 'static) -> Self {
        self.register(zone, classifier);
        self
    }

    pub fn min_players(&self) -> usize {
        self.min_players
    }

    /// Classify a team's positioned players in `zone`.
    pub fn analyze_team_formation(&self, players: &[PositionedPlayer], zone: Zone) -> Formation {
        if players.len() < self.min_players {
            return Formation::insufficient(zone);
        }
        self.registry[zone.index()].classify(players, zone)
    }

    /// Classify raw samples; players without a position are ignored.
    pub fn analyze_samples(&self, samples: &[PlayerSample], zone: Zone) -> Formation {
        let players: Vec<PositionedPlayer> =
            samples.iter().filter_map(PlayerSample::to_positioned).collect();
        self.analyze_team_formation(&players, zone)
    }
}
