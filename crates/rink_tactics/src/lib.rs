//! # rink_tactics - Hockey Formation Detection Engine
//!
//! Classifies each team's on-ice shape in a tracked frame into a taxonomy of
//! hockey systems (forecheck, neutral zone, defensive, ...) with a confidence
//! score, and folds per-frame results into per-game usage summaries.
//!
//! ## Pipeline
//! - [`rink::RinkGeometry`] maps a Y coordinate to a [`rink::Zone`]
//! - [`tactics::TeamFormationClassifier`] matches one team's band features
//!   against the zone's signature catalog
//! - [`tactics::FrameTacticsAnalyzer`] runs both teams of a frame
//! - [`analysis::get_formation_summary`] aggregates a game
//!
//! The engine is a heuristic classifier: pure, synchronous, and free of I/O
//! apart from optional config-file loading. A low-confidence label is
//! preferred to a failure; filter on `confidence` if strict output is needed.
//!
//! ```rust
//! use rink_tactics::{analyze_frames, Frame, PlayerSample, TeamSide};
//!
//! let players = vec![
//!     PlayerSample::positioned(1, TeamSide::A, -30.0, 60.0),
//!     PlayerSample::positioned(2, TeamSide::A, -30.0, 20.0),
//!     PlayerSample::positioned(3, TeamSide::A, 0.0, 20.0),
//!     PlayerSample::positioned(4, TeamSide::A, 30.0, 20.0),
//!     PlayerSample::positioned(5, TeamSide::A, 30.0, -20.0),
//! ];
//! let (tactics, summary) = analyze_frames(&[Frame::new(0, players)]);
//! assert!(tactics[0].team_a.formation.is_some());
//! assert!(tactics[0].team_b.formation.is_none());
//! assert_eq!(summary.team_a.classified_frames(), 1);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod rink;
pub mod tactics;

pub use analysis::{get_formation_summary, summarize_parallel, FormationSummary, GameFormationAggregator};
pub use config::ClassifierConfig;
pub use error::{Result, TacticsError};
pub use models::{Formation, FormationBasis, FormationType, Frame, PlayerSample, TeamSide};
pub use rink::{RinkDimensions, RinkGeometry, Zone};
pub use tactics::{FrameTactics, FrameTacticsAnalyzer, TeamFormationClassifier, TeamTactics};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze frames on the default rink with the default classifier config.
pub fn analyze_frames(frames: &[Frame]) -> (Vec<FrameTactics>, FormationSummary) {
    let analyzer = FrameTacticsAnalyzer::default();
    let tactics = analyzer.analyze_game(frames);
    let summary = get_formation_summary(&tactics);
    (tactics, summary)
}
