//! # Shape Features
//!
//! Band populations of one team's positioned players, measured relative to
//! the team's own centroid.
//!
//! Depth bands split on Y: `above` is `y > mean + band`, `below` is
//! `y < mean - band`, anything else is `within`. Lateral bands split on X
//! the same way (`right` / `left` / `center`). Band edges are exclusive, so
//! a player exactly `band` away from the mean stays in the middle band.

use serde::{Deserialize, Serialize};

use crate::config::{CornerQuadrants, ZoneCatalog};
use crate::models::PositionedPlayer;

/// Player counts per depth band.
///
/// In forecheck terms `above` is deep and `below` is high; in the neutral
/// zone `above` is forward and `below` is back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepthBands {
    pub above: usize,
    pub within: usize,
    pub below: usize,
}

impl DepthBands {
    pub const fn new(above: usize, within: usize, below: usize) -> Self {
        Self {
            above,
            within,
            below,
        }
    }
}

/// Player counts per lateral band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LateralBands {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

/// Spatial distribution of a team, the input to signature matching.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShapeFeatures {
    /// Team mean position (x, y)
    pub centroid: (f32, f32),
    pub depth: DepthBands,
    pub lateral: LateralBands,
    /// Players beyond the corner offset on both axes
    pub corners: usize,
    pub players: usize,
}

impl ShapeFeatures {
    /// Measure `players` with the band geometry of `catalog`.
    pub fn compute(players: &[PositionedPlayer], catalog: &ZoneCatalog) -> Self {
        let Some((cx, cy)) = centroid(players) else {
            return Self::default();
        };

        let mut depth = DepthBands::default();
        let mut lateral = LateralBands::default();
        let mut corners = 0;

        for p in players {
            let dx = p.x - cx;
            let dy = p.y - cy;

            if dy > catalog.depth_band {
                depth.above += 1;
            } else if dy < -catalog.depth_band {
                depth.below += 1;
            } else {
                depth.within += 1;
            }

            if dx < -catalog.lateral_band {
                lateral.left += 1;
            } else if dx > catalog.lateral_band {
                lateral.right += 1;
            } else {
                lateral.center += 1;
            }

            if is_corner(dx, dy, catalog.corner_offset, catalog.corner_quadrants) {
                corners += 1;
            }
        }

        Self {
            centroid: (cx, cy),
            depth,
            lateral,
            corners,
            players: players.len(),
        }
    }
}

/// Mean (x, y) of the players, `None` when empty.
pub fn centroid(players: &[PositionedPlayer]) -> Option<(f32, f32)> {
    if players.is_empty() {
        return None;
    }
    let n = players.len() as f32;
    let sx: f32 = players.iter().map(|p| p.x).sum();
    let sy: f32 = players.iter().map(|p| p.y).sum();
    Some((sx / n, sy / n))
}

fn is_corner(dx: f32, dy: f32, offset: f32, quadrants: CornerQuadrants) -> bool {
    let wide = dx.abs() > offset;
    match quadrants {
        CornerQuadrants::NearNet => wide && dy > offset,
        CornerQuadrants::All => wide && dy.abs() > offset,
    }
}
