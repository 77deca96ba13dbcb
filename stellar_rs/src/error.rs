//! Error type for the hero core.
//!
//! Rendering never fails: a frame that cannot be painted is skipped. Errors
//! only surface while loading configuration or wiring the host surface and
//! frame scheduler.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeroError {
    /// Configuration parsed but holds unusable values.
    #[error("invalid hero config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse hero config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The drawing surface (or its 2D context) could not be obtained.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,

    /// The host refused to schedule an animation frame.
    #[error("frame scheduler failed: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, HeroError>;
