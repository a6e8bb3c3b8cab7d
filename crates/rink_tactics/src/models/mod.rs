//! # Models
//!
//! Input samples from the tracking pipeline and the formation values the
//! engine produces from them.

pub mod formation;
pub mod player;

pub use formation::{Formation, FormationBasis, FormationFamily, FormationType};
pub use player::{Frame, PlayerId, PlayerSample, PositionedPlayer, RinkPoint, TeamSide};
