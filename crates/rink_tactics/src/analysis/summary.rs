//! # Formation Summary
//!
//! Folds per-frame [`FrameTactics`] into per-team formation usage: how often
//! each formation was seen, in which zones, at what average confidence.
//!
//! The fold is commutative and associative, so frames can be summarized in
//! any order or in parallel chunks and merged afterwards. Confidence is
//! accumulated in integer micro-units rather than as a float sum; float
//! addition is not associative, integer addition is, so every merge order
//! yields a bit-identical summary.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use crate::models::{Formation, FormationType, TeamSide};
use crate::rink::Zone;
use crate::tactics::FrameTactics;

/// Micro-units per unit of confidence
pub const CONFIDENCE_SCALE: f64 = 1_000_000.0;

fn to_micros(confidence: f32) -> u64 {
    (f64::from(confidence.clamp(0.0, 1.0)) * CONFIDENCE_SCALE).round() as u64
}

/// Usage of one formation by one team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "FormationUsageReport", from = "FormationUsageReport")]
pub struct FormationUsage {
    pub count: u64,
    pub zones: BTreeSet<Zone>,
    confidence_micros: u64,
}

impl FormationUsage {
    pub fn record(&mut self, formation: &Formation) {
        self.count += 1;
        self.zones.insert(formation.zone);
        self.confidence_micros += to_micros(formation.confidence);
    }

    pub fn merge(&mut self, other: &FormationUsage) {
        self.count += other.count;
        self.zones.extend(other.zones.iter().copied());
        self.confidence_micros += other.confidence_micros;
    }

    /// Mean confidence over all recorded frames, 0.0 when empty.
    pub fn confidence_avg(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.confidence_micros as f64 / CONFIDENCE_SCALE / self.count as f64
    }
}

/// Wire form: `{count, zones, confidence_avg}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FormationUsageReport {
    count: u64,
    zones: Vec<Zone>,
    confidence_avg: f64,
}

impl From<FormationUsage> for FormationUsageReport {
    fn from(usage: FormationUsage) -> Self {
        Self {
            count: usage.count,
            confidence_avg: usage.confidence_avg(),
            zones: usage.zones.into_iter().collect(),
        }
    }
}

impl From<FormationUsageReport> for FormationUsage {
    fn from(report: FormationUsageReport) -> Self {
        let total = report.confidence_avg.clamp(0.0, 1.0) * report.count as f64;
        Self {
            count: report.count,
            zones: report.zones.into_iter().collect(),
            confidence_micros: (total * CONFIDENCE_SCALE).round() as u64,
        }
    }
}

/// Formation usage of one team, keyed by formation type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamFormationSummary {
    usage: BTreeMap<FormationType, FormationUsage>,
}

impl TeamFormationSummary {
    pub fn record(&mut self, formation: &Formation) {
        self.usage
            .entry(formation.formation_type)
            .or_default()
            .record(formation);
    }

    pub fn merge(&mut self, other: &TeamFormationSummary) {
        for (formation_type, usage) in &other.usage {
            self.usage.entry(*formation_type).or_default().merge(usage);
        }
    }

    pub fn get(&self, formation_type: FormationType) -> Option<&FormationUsage> {
        self.usage.get(&formation_type)
    }

    pub fn len(&self) -> usize {
        self.usage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// Frames in which this team had a formation.
    pub fn classified_frames(&self) -> u64 {
        self.usage.values().map(|u| u.count).sum()
    }

    /// Most frequent formation; ties go to the earlier [`FormationType`].
    pub fn most_used(&self) -> Option<(FormationType, &FormationUsage)> {
        self.usage
            .iter()
            .max_by(|a, b| a.1.count.cmp(&b.1.count).then_with(|| b.0.cmp(a.0)))
            .map(|(formation_type, usage)| (*formation_type, usage))
    }
}

/// Per-team formation usage over a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationSummary {
    pub team_a: TeamFormationSummary,
    pub team_b: TeamFormationSummary,
}

impl FormationSummary {
    pub fn team(&self, side: TeamSide) -> &TeamFormationSummary {
        match side {
            TeamSide::A => &self.team_a,
            TeamSide::B => &self.team_b,
        }
    }

    pub fn record(&mut self, tactics: &FrameTactics) {
        if let Some(formation) = &tactics.team_a.formation {
            self.team_a.record(formation);
        }
        if let Some(formation) = &tactics.team_b.formation {
            self.team_b.record(formation);
        }
    }

    pub fn merge(&mut self, other: &FormationSummary) {
        self.team_a.merge(&other.team_a);
        self.team_b.merge(&other.team_b);
    }

    pub fn is_empty(&self) -> bool {
        self.team_a.is_empty() && self.team_b.is_empty()
    }
}

impl<'a> FromIterator<&'a FrameTactics> for FormationSummary {
    fn from_iter<I: IntoIterator<Item = &'a FrameTactics>>(iter: I) -> Self {
        let mut summary = Self::default();
        for tactics in iter {
            summary.record(tactics);
        }
        summary
    }
}

/// Incremental summary builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameFormationAggregator {
    summary: FormationSummary,
    frames_seen: u64,
}

impl GameFormationAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tactics: &FrameTactics) {
        self.summary.record(tactics);
        self.frames_seen += 1;
    }

    /// Combine two partial aggregations.
    pub fn merge(mut self, other: GameFormationAggregator) -> Self {
        self.summary.merge(&other.summary);
        self.frames_seen += other.frames_seen;
        self
    }

    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    pub fn finish(self) -> FormationSummary {
        info!(
            frames = self.frames_seen,
            team_a_formations = self.summary.team_a.len(),
            team_b_formations = self.summary.team_b.len(),
            "formation summary complete"
        );
        self.summary
    }
}

/// Summarize a sequence of frame results in one pass.
pub fn get_formation_summary(frames: &[FrameTactics]) -> FormationSummary {
    let mut aggregator = GameFormationAggregator::new();
    for tactics in frames {
        aggregator.push(tactics);
    }
    aggregator.finish()
}

/// Parallel [`get_formation_summary`]; identical result.
pub fn summarize_parallel(frames: &[FrameTactics]) -> FormationSummary {
    frames
        .par_iter()
        .fold(GameFormationAggregator::new, |mut acc, tactics| {
            acc.push(tactics);
            acc
        })
        .reduce(GameFormationAggregator::new, GameFormationAggregator::merge)
        .finish()
}
