//! # stellar
//!
//! Animation core for the stellar landing-page hero: a canvas starfield with
//! twinkle and pointer parallax, occasional shooting stars, and planets that
//! lean toward the pointer.
//!
//! The crate is platform-independent. The browser binding (in the
//! `stellar-landing` crate) supplies three collaborators:
//!
//! - a [`Painter`](paint::Painter) over a 2D canvas context,
//! - a [`FrameScheduler`](frame_loop::FrameScheduler) over `requestAnimationFrame`,
//! - a [`TransformSink`](parallax::TransformSink) over the planet elements.
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stellar::{HeroConfig, HeroScene, ManualScheduler, RecordingPainter, SurfaceSize};
//!
//! let mut scene = HeroScene::new(
//!     HeroConfig::default(),
//!     ManualScheduler::new(),
//!     StdRng::seed_from_u64(1),
//! )
//! .unwrap();
//! scene.mount(SurfaceSize::new(800.0, 520.0)).unwrap();
//!
//! let mut painter = RecordingPainter::new();
//! scene.frame(16.7, Some(&mut painter as &mut dyn stellar::Painter));
//! assert!(!painter.ops().is_empty());
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Compile-time tunables (star count, layers, gradient, parallax scales).
pub mod config;

/// Surface size and pointer position shared by renderer and parallax.
pub mod context;

pub mod error;

/// Cooperative frame loop with an explicit cancel handle.
///
/// States: Idle -> Running -> Stopped. See [`AnimationLoop`](frame_loop::AnimationLoop).
pub mod frame_loop;

/// Painter abstraction and a recording implementation.
pub mod paint;

/// Depth-scaled pointer transforms for decorative elements.
pub mod parallax;

/// The owner tying everything together for one mounted hero.
pub mod scene;

/// Star generation and per-frame painting.
///
/// # Example
///
/// ```rust
/// use rand::SeedableRng;
/// use stellar::config::HeroConfig;
/// use stellar::context::SurfaceSize;
/// use stellar::starfield::Starfield;
///
/// let mut field = Starfield::new(HeroConfig::default());
/// field.initialize(SurfaceSize::new(1200.0, 800.0), &mut rand::rngs::StdRng::seed_from_u64(9));
/// assert_eq!(field.stars().len(), 300);
/// ```
pub mod starfield;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{GradientStop, HeroConfig, ParallaxScales};
pub use context::{HeroContext, PointerPosition, SurfaceSize};
pub use error::{HeroError, Result};
pub use frame_loop::{
    AnimationLoop, FrameHandle, FrameOutcome, FrameScheduler, LoopState, ManualScheduler,
};
pub use paint::{PaintOp, Painter, RecordingPainter, Rgba};
pub use parallax::{ContainerRect, ParallaxController, ParallaxElement, Transform, TransformSink};
pub use scene::HeroScene;
pub use starfield::{Star, Starfield};
