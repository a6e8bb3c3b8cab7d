//! # Analysis Module
//!
//! Game-level aggregation of per-frame formation results.

pub mod summary;

pub use summary::{
    get_formation_summary, summarize_parallel, FormationSummary, FormationUsage,
    GameFormationAggregator, TeamFormationSummary, CONFIDENCE_SCALE,
};
