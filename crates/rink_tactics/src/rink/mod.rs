//! # Rink Module
//!
//! Rink dimensions and the Y-coordinate → zone model.

pub mod geometry;
pub mod zone;

pub use geometry::{
    RinkDimensions, RinkGeometry, DEFAULT_RINK_HEIGHT, DEFAULT_RINK_WIDTH,
    DEFAULT_ZONE_LINE_FRACTIONS,
};
pub use zone::Zone;
