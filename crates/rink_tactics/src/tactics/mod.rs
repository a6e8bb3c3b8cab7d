//! # Tactics Module
//!
//! Formation detection: band features, per-zone signature matching, team
//! classification and per-frame orchestration.

pub mod classifier;
pub mod features;
pub mod frame;
pub mod matcher;

pub use classifier::TeamFormationClassifier;
pub use features::{centroid, DepthBands, LateralBands, ShapeFeatures};
pub use frame::{FrameTactics, FrameTacticsAnalyzer, TeamTactics};
pub use matcher::{SignatureMatcher, ZoneClassifier};
