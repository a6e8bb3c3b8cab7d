//! # Configuration Module
//!
//! Tunable classifier data: band widths, signature catalogs, confidences.

mod classifier_config;

pub use classifier_config::{
    ClassifierConfig, CornerQuadrants, FallbackRule, LateralRule, ShapeRule, Signature,
    ZoneCatalog, CONFIG_ENV_VAR, MIN_CLASSIFIABLE_PLAYERS,
};
