//! Hero banner configuration.
//!
//! Values are compile-time: the landing binary embeds a `hero.toml` with
//! `include_str!` and parses it once at startup. Every field is optional and
//! falls back to the defaults below.

use serde::Deserialize;

use crate::error::{HeroError, Result};

/// Stars generated for every surface sizing.
pub const STAR_COUNT: usize = 300;

/// Parallax depth multipliers, cycled across the star index.
pub const STAR_LAYERS: [f64; 3] = [0.2, 0.5, 0.9];

/// Chance per frame that a shooting star is painted.
pub const SHOOTING_STAR_CHANCE: f64 = 0.005;

pub const SHOOTING_STAR_SEGMENTS: usize = 12;

/// Ambient noise circles painted behind the stars.
pub const NOISE_COUNT: usize = 60;

pub const NOISE_RADIUS: f64 = 200.0;

/// Twinkle angular speed, radians per millisecond.
pub const TWINKLE_SPEED: f64 = 0.002;

/// Star offset per pixel of pointer position, before the `(1 - layer)` factor.
pub const STAR_PARALLAX: f64 = 0.02;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub star_count: usize,
    pub layers: Vec<f64>,
    pub shooting_star_chance: f64,
    pub shooting_star_segments: usize,
    pub noise_count: usize,
    pub noise_radius: f64,
    pub twinkle_speed: f64,
    pub star_parallax: f64,
    /// Backdrop gradient, painted top to bottom.
    pub gradient: Vec<GradientStop>,
    pub parallax: ParallaxScales,
}

/// One color stop of the backdrop gradient.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f64,
    /// Any CSS color string.
    pub color: String,
}

/// Pointer parallax scales for decorative elements.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxScales {
    /// Horizontal translation in px per unit of normalized offset and depth.
    pub translate_x: f64,
    pub translate_y: f64,
    /// Rotation in degrees per unit of normalized offset and depth.
    pub rotate: f64,
}

impl Default for ParallaxScales {
    fn default() -> Self {
        Self {
            translate_x: 30.0,
            translate_y: 20.0,
            rotate: 30.0,
        }
    }
}

impl GradientStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
        }
    }
}

/// Night sky: deep navy into violet, settling back to near-black.
pub fn default_gradient() -> Vec<GradientStop> {
    vec![
        GradientStop::new(0.0, "#020314"),
        GradientStop::new(0.35, "#0b0f2e"),
        GradientStop::new(0.7, "#1b1147"),
        GradientStop::new(1.0, "#05020f"),
    ]
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            layers: STAR_LAYERS.to_vec(),
            shooting_star_chance: SHOOTING_STAR_CHANCE,
            shooting_star_segments: SHOOTING_STAR_SEGMENTS,
            noise_count: NOISE_COUNT,
            noise_radius: NOISE_RADIUS,
            twinkle_speed: TWINKLE_SPEED,
            star_parallax: STAR_PARALLAX,
            gradient: default_gradient(),
            parallax: ParallaxScales::default(),
        }
    }
}

impl HeroConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: HeroConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document, falling back to defaults when it is unusable.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default hero config: {}", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(HeroError::InvalidConfig(
                "at least one parallax layer is required".to_string(),
            ));
        }
        if let Some(layer) = self.layers.iter().find(|l| !(0.0..=1.0).contains(*l)) {
            return Err(HeroError::InvalidConfig(format!(
                "parallax layer {layer} outside 0.0..=1.0"
            )));
        }
        if !(0.0..=1.0).contains(&self.shooting_star_chance) {
            return Err(HeroError::InvalidConfig(format!(
                "shooting_star_chance {} outside 0.0..=1.0",
                self.shooting_star_chance
            )));
        }
        if self.shooting_star_segments == 0 {
            return Err(HeroError::InvalidConfig(
                "shooting_star_segments must be positive".to_string(),
            ));
        }
        if self.gradient.len() < 2 {
            return Err(HeroError::InvalidConfig(format!(
                "gradient needs at least 2 stops, got {}",
                self.gradient.len()
            )));
        }
        if let Some(stop) = self
            .gradient
            .iter()
            .find(|s| !(0.0..=1.0).contains(&s.offset))
        {
            return Err(HeroError::InvalidConfig(format!(
                "gradient stop {} has offset {} outside 0.0..=1.0",
                stop.color, stop.offset
            )));
        }
        if self.noise_radius < 0.0 {
            return Err(HeroError::InvalidConfig(
                "noise_radius must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}
