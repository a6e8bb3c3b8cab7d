//! # Frame Tactics
//!
//! Per-frame orchestration: split a [`Frame`] by team, place each team in a
//! zone from its mean Y, classify its formation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::models::{Formation, Frame, TeamSide};
use crate::rink::{RinkGeometry, Zone};

use super::classifier::TeamFormationClassifier;
use super::features::centroid;

/// One team's result within a frame.
///
/// `formation` and `zone` are `None` when the team had no positioned
/// players, which keeps "no data" distinct from a low-confidence result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamTactics {
    pub formation: Option<Formation>,
    pub zone: Option<Zone>,
    /// Positioned players of this team in the frame
    pub player_count: usize,
}

/// Tactical read of both teams for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTactics {
    pub frame_number: u64,
    pub team_a: TeamTactics,
    pub team_b: TeamTactics,
}

impl FrameTactics {
    pub fn team(&self, side: TeamSide) -> &TeamTactics {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }
}

#[derive(Debug, Default)]
pub struct FrameTacticsAnalyzer {
    geometry: RinkGeometry,
    classifier: TeamFormationClassifier,
}

impl FrameTacticsAnalyzer {
    pub fn new(geometry: RinkGeometry, classifier: TeamFormationClassifier) -> Self {
        Self {
            geometry,
            classifier,
        }
    }

    pub fn with_config(geometry: RinkGeometry, config: &ClassifierConfig) -> Self {
        Self::new(geometry, TeamFormationClassifier::new(config))
    }

    pub fn geometry(&self) -> &RinkGeometry {
        &self.geometry
    }

    pub fn classifier(&self) -> &TeamFormationClassifier {
        &self.classifier
    }

    pub fn analyze_frame_tactics(&self, frame: &Frame) -> FrameTactics {
        FrameTactics {
            frame_number: frame.frame_number,
            team_a: self.analyze_team(frame, TeamSide::A),
            team_b: self.analyze_team(frame, TeamSide::B),
        }
    }

    /// Analyze every frame, preserving order.
    pub fn analyze_game(&self, frames: &[Frame]) -> Vec<FrameTactics> {
        frames.iter().map(|f| self.analyze_frame_tactics(f)).collect()
    }

    /// Parallel [`FrameTacticsAnalyzer::analyze_game`]; same output, same order.
    pub fn analyze_game_parallel(&self, frames: &[Frame]) -> Vec<FrameTactics> {
        frames.par_iter().map(|f| self.analyze_frame_tactics(f)).collect()
    }

    fn analyze_team(&self, frame: &Frame, side: TeamSide) -> TeamTactics {
        let players = frame.positioned_players(side);
        let Some((_, mean_y)) = centroid(&players) else {
            return TeamTactics::default();
        };

        let zone = self.geometry.determine_zone(mean_y);
        let formation = self.classifier.analyze_team_formation(&players, zone);

        debug!(
            frame = frame.frame_number,
            team = %side,
            zone = %zone,
            formation = %formation.formation_type,
            basis = ?formation.basis,
            confidence = formation.confidence,
            "classified team formation"
        );

        TeamTactics {
            formation: Some(formation),
            zone: Some(zone),
            player_count: players.len(),
        }
    }
}
