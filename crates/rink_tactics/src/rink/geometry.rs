//! # Rink Geometry
//!
//! Maps a rink-relative Y coordinate to a [`Zone`].
//!
//! Zone lines default to 25% / 75% of the rink height. That is a rough
//! stand-in for blue-line placement, not official rink geometry; supply the
//! tracked blue lines whenever the pipeline has them.
//!
//! ```text
//!   y = 0 ........ lower line ........ upper line ........ y = height
//!   |  Offensive   |        Neutral        |     Defensive   |
//! ```
//!
//! Explicit lines may also be given in a center-origin frame (e.g. blue
//! lines at `-25` and `25`); any pair within `[-height, height]` is accepted.

use serde::{Deserialize, Serialize};

use super::zone::Zone;
use crate::error::{Result, TacticsError};

/// Default rink height (rink units)
pub const DEFAULT_RINK_HEIGHT: f32 = 200.0;
/// Default rink width (rink units)
pub const DEFAULT_RINK_WIDTH: f32 = 85.0;
/// Default zone lines as fractions of the rink height
pub const DEFAULT_ZONE_LINE_FRACTIONS: (f32, f32) = (0.25, 0.75);

/// Rink size plus optional explicit zone lines.
///
/// Invariant: when present, `zone_lines.0 <= zone_lines.1` and both lie in
/// `[-height, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RinkCoordinates", into = "RinkCoordinates")]
pub struct RinkDimensions {
    width: f32,
    height: f32,
    zone_lines: Option<(f32, f32)>,
}

impl Default for RinkDimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_RINK_WIDTH,
            height: DEFAULT_RINK_HEIGHT,
            zone_lines: None,
        }
    }
}

impl RinkDimensions {
    /// Rink with default (25% / 75%) zone lines.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(TacticsError::invalid_rink(format!("width must be positive, got {}", width)));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(TacticsError::invalid_rink(format!("height must be positive, got {}", height)));
        }
        Ok(Self {
            width,
            height,
            zone_lines: None,
        })
    }

    /// Rink with explicit zone lines. The two lines may be given in any order.
    pub fn with_zone_lines(width: f32, height: f32, a: f32, b: f32) -> Result<Self> {
        let mut dims = Self::new(width, height)?;
        if !a.is_finite() || !b.is_finite() {
            return Err(TacticsError::invalid_rink("zone lines must be finite"));
        }
        let (lower, upper) = (a.min(b), a.max(b));
        if lower < -height || upper > height {
            return Err(TacticsError::invalid_rink(format!(
                "zone lines ({}, {}) outside [-{}, {}]",
                lower, upper, height, height
            )));
        }
        dims.zone_lines = Some((lower, upper));
        Ok(dims)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Effective (lower, upper) zone lines, explicit or default.
    pub fn zone_lines(&self) -> (f32, f32) {
        self.zone_lines.unwrap_or((
            self.height * DEFAULT_ZONE_LINE_FRACTIONS.0,
            self.height * DEFAULT_ZONE_LINE_FRACTIONS.1,
        ))
    }
}

/// Wire form of the tracking pipeline's rink-coordinates object.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RinkCoordinates {
    #[serde(default = "default_width")]
    width: f32,
    #[serde(default = "default_height")]
    height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blue_lines: Option<Vec<f32>>,
}

fn default_width() -> f32 {
    DEFAULT_RINK_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_RINK_HEIGHT
}

impl TryFrom<RinkCoordinates> for RinkDimensions {
    type Error = TacticsError;

    fn try_from(raw: RinkCoordinates) -> Result<Self> {
        match raw.blue_lines.as_deref() {
            None => RinkDimensions::new(raw.width, raw.height),
            Some([a, b]) => RinkDimensions::with_zone_lines(raw.width, raw.height, *a, *b),
            Some(lines) => Err(TacticsError::invalid_rink(format!(
                "expected exactly 2 blue lines, got {}",
                lines.len()
            ))),
        }
    }
}

impl From<RinkDimensions> for RinkCoordinates {
    fn from(dims: RinkDimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            blue_lines: dims.zone_lines.map(|(lower, upper)| vec![lower, upper]),
        }
    }
}

/// Zone lookup for a fixed rink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RinkGeometry {
    dimensions: RinkDimensions,
    lower_line: f32,
    upper_line: f32,
    center_line: f32,
}

impl Default for RinkGeometry {
    fn default() -> Self {
        Self::new(RinkDimensions::default())
    }
}

impl RinkGeometry {
    pub fn new(dimensions: RinkDimensions) -> Self {
        let (lower_line, upper_line) = dimensions.zone_lines();
        Self {
            dimensions,
            lower_line,
            upper_line,
            center_line: (lower_line + upper_line) / 2.0,
        }
    }

    pub fn dimensions(&self) -> &RinkDimensions {
        &self.dimensions
    }

    /// (lower, upper) zone lines
    pub fn zone_lines(&self) -> (f32, f32) {
        (self.lower_line, self.upper_line)
    }

    /// Center line Y, midway between the zone lines. Not consulted by
    /// [`RinkGeometry::determine_zone`].
    pub fn center_line_y(&self) -> f32 {
        self.center_line
    }

    /// Zone containing `y`.
    ///
    /// Points exactly on a zone line belong to the neutral zone. A non-finite
    /// `y` compares false against both lines and also lands in the neutral
    /// zone.
    pub fn determine_zone(&self, y: f32) -> Zone {
        if y < self.lower_line {
            Zone::Offensive
        } else if y > self.upper_line {
            Zone::Defensive
        } else {
            Zone::Neutral
        }
    }
}
