//! Starfield renderer.
//!
//! Stars are generated in bulk for a surface size and never mutate afterwards;
//! every animated quantity (twinkle alpha, parallax offset, noise drift) is a
//! pure function of the frame timestamp and the pointer position.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::HeroConfig;
use crate::context::{PointerPosition, SurfaceSize};
use crate::frame_loop::FrameOutcome;
use crate::paint::{Painter, Rgba};

const STAR_CORE: Rgba = Rgba::new(255, 255, 255, 1.0);
const STAR_GLOW: Rgba = Rgba::new(170, 190, 255, 1.0);
/// Glow radius relative to the core.
const GLOW_SCALE: f64 = 4.0;
/// Glow alpha relative to the core alpha.
const GLOW_ALPHA: f64 = 0.08;

const NOISE_COLORS: [Rgba; 2] = [
    Rgba::new(124, 92, 255, 0.025),
    Rgba::new(56, 189, 248, 0.02),
];
const NOISE_DRIFT_X: f64 = 0.00005;
const NOISE_DRIFT_Y: f64 = 0.00007;

const STREAK_COLOR: Rgba = Rgba::new(255, 244, 214, 1.0);
const STREAK_HEAD_RADIUS: f64 = 2.2;
const STREAK_HEAD_ALPHA: f64 = 0.85;
/// Distance between streak segments in px.
const STREAK_STEP: f64 = 14.0;

/// Twinkle intensity is `TWINKLE_MID + TWINKLE_AMPLITUDE * sin(..)`, i.e. it
/// swings between 0.6 and 1.2 of the base alpha.
pub const TWINKLE_MID: f64 = 0.9;
pub const TWINKLE_AMPLITUDE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Depth in `0.0..1.0`. Informational, not used when drawing.
    pub z: f64,
    /// Core radius in px.
    pub size: f64,
    pub base_alpha: f64,
    /// Twinkle phase offset in radians.
    pub phase: f64,
    /// Parallax depth multiplier this star belongs to.
    pub layer: f64,
}

impl Star {
    fn random<R: Rng>(rng: &mut R, bounds: SurfaceSize, layer: f64) -> Self {
        Self {
            x: sample_axis(rng, bounds.width),
            y: sample_axis(rng, bounds.height),
            z: rng.r#gen::<f64>(),
            size: rng.gen_range(0.3..1.5) * (0.6 + layer),
            base_alpha: rng.gen_range(0.25..1.0),
            phase: rng.gen_range(0.0..TAU),
            layer,
        }
    }

    /// Twinkle intensity at `time_ms`, in `[0.6, 1.2]`.
    pub fn twinkle(&self, time_ms: f64, speed: f64) -> f64 {
        TWINKLE_MID + TWINKLE_AMPLITUDE * (time_ms * speed + self.phase).sin()
    }

    /// Display alpha at `time_ms`, clamped to `[0, 1]`.
    pub fn alpha_at(&self, time_ms: f64, speed: f64) -> f64 {
        (self.base_alpha * self.twinkle(time_ms, speed)).clamp(0.0, 1.0)
    }

    /// Offset applied to this star for the given pointer position.
    ///
    /// Scales with `1 - layer`: stars on shallow layers travel further than
    /// stars on deep ones.
    pub fn parallax_offset(&self, pointer: PointerPosition, strength: f64) -> (f64, f64) {
        let k = (1.0 - self.layer) * strength;
        (pointer.x * k, pointer.y * k)
    }
}

fn sample_axis<R: Rng>(rng: &mut R, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct Starfield {
    config: HeroConfig,
    size: SurfaceSize,
    stars: Vec<Star>,
    /// Mixed with the frame timestamp to decide shooting stars, so a frame is
    /// reproducible from its inputs.
    streak_seed: u64,
}

impl Starfield {
    pub fn new(config: HeroConfig) -> Self {
        Self {
            config,
            size: SurfaceSize::default(),
            stars: Vec::new(),
            streak_seed: 0,
        }
    }

    /// Replace the whole star set with `star_count` stars spread uniformly
    /// over `size`. Layers are assigned round-robin by index.
    pub fn initialize<R: Rng>(&mut self, size: SurfaceSize, rng: &mut R) {
        // An empty layer list yields no stars
        let stars: Vec<Star> = self
            .config
            .layers
            .iter()
            .cycle()
            .take(self.config.star_count)
            .map(|&layer| Star::random(rng, size, layer))
            .collect();

        self.size = size;
        self.stars = stars;
        self.streak_seed = rng.r#gen();

        tracing::debug!(
            stars = self.stars.len(),
            width = size.width,
            height = size.height,
            "starfield regenerated"
        );
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    /// Paint one frame.
    ///
    /// Order: clear, gradient backdrop, ambient noise, stars (core + glow),
    /// then at most one shooting star. Identical inputs paint identical calls.
    pub fn render_frame(
        &self,
        time_ms: f64,
        pointer: PointerPosition,
        painter: &mut dyn Painter,
    ) -> FrameOutcome {
        if self.size.is_empty() {
            tracing::trace!("surface has no area, skipping frame");
            return FrameOutcome::Skipped;
        }

        let SurfaceSize { width, height } = self.size;
        painter.clear(width, height);
        painter.fill_linear_gradient(
            (0.0, 0.0),
            (0.0, height),
            &self.config.gradient,
            width,
            height,
        );
        self.paint_noise(time_ms, painter);
        self.paint_stars(time_ms, pointer, painter);
        self.maybe_paint_shooting_star(time_ms, painter);

        FrameOutcome::Painted
    }

    fn paint_noise(&self, time_ms: f64, painter: &mut dyn Painter) {
        let SurfaceSize { width, height } = self.size;
        for i in 0..self.config.noise_count {
            let seed = i as f64 * 1.618;
            let x = (0.5 + 0.5 * (time_ms * NOISE_DRIFT_X + seed).sin()) * width;
            let y = (0.5 + 0.5 * (time_ms * NOISE_DRIFT_Y + seed * 2.3).cos()) * height;
            painter.fill_circle(
                x,
                y,
                self.config.noise_radius,
                NOISE_COLORS[i % NOISE_COLORS.len()],
            );
        }
    }

    fn paint_stars(&self, time_ms: f64, pointer: PointerPosition, painter: &mut dyn Painter) {
        for star in &self.stars {
            let alpha = star.alpha_at(time_ms, self.config.twinkle_speed);
            let (dx, dy) = star.parallax_offset(pointer, self.config.star_parallax);
            let (x, y) = (star.x + dx, star.y + dy);

            painter.fill_circle(x, y, star.size, STAR_CORE.with_alpha(alpha));
            painter.fill_circle(
                x,
                y,
                star.size * GLOW_SCALE,
                STAR_GLOW.with_alpha(alpha * GLOW_ALPHA),
            );
        }
    }

    fn maybe_paint_shooting_star(&self, time_ms: f64, painter: &mut dyn Painter) {
        let mut rng = StdRng::seed_from_u64(self.streak_seed ^ time_ms.to_bits());
        if rng.r#gen::<f64>() >= self.config.shooting_star_chance {
            return;
        }

        let SurfaceSize { width, height } = self.size;
        let x = rng.gen_range(0.0..width);
        let y = rng.gen_range(0.0..height * 0.5);
        // Heading down and to the left.
        let angle: f64 = rng.gen_range(0.35..0.75);
        let (sin, cos) = angle.sin_cos();

        let segments = self.config.shooting_star_segments;
        tracing::trace!(x, y, segments, "shooting star");
        for k in 0..segments {
            let fade = 1.0 - k as f64 / segments as f64;
            let along = k as f64 * STREAK_STEP;
            painter.fill_circle(
                x - along * cos,
                y + along * sin,
                STREAK_HEAD_RADIUS * fade,
                STREAK_COLOR.with_alpha(STREAK_HEAD_ALPHA * fade),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SHOOTING_STAR_SEGMENTS, TWINKLE_SPEED};
    use crate::paint::{PaintOp, RecordingPainter};
    use pretty_assertions::assert_eq;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn field(config: HeroConfig, width: f64, height: f64) -> Starfield {
        let mut field = Starfield::new(config);
        field.initialize(SurfaceSize::new(width, height), &mut seeded(7));
        field
    }

    fn quiet_config() -> HeroConfig {
        HeroConfig {
            shooting_star_chance: 0.0,
            ..HeroConfig::default()
        }
    }

    #[test]
    fn test_initialize_fills_bounds() {
        let field = field(HeroConfig::default(), 800.0, 520.0);
        assert_eq!(field.stars().len(), 300);
        for star in field.stars() {
            assert!(field.size().contains(star.x, star.y), "{star:?}");
            assert!((0.0..1.0).contains(&star.z));
            assert!((0.25..1.0).contains(&star.base_alpha));
            assert!(star.size > 0.0);
        }
    }

    #[test]
    fn test_layers_cycle_by_index() {
        let field = field(HeroConfig::default(), 800.0, 520.0);
        let layers: Vec<f64> = field.stars().iter().take(6).map(|s| s.layer).collect();
        assert_eq!(layers, vec![0.2, 0.5, 0.9, 0.2, 0.5, 0.9]);
    }

    #[test]
    fn test_size_grows_with_layer() {
        let field = field(HeroConfig::default(), 800.0, 520.0);
        for star in field.stars() {
            let max = 1.5 * (0.6 + star.layer);
            let min = 0.3 * (0.6 + star.layer);
            assert!(star.size >= min && star.size < max, "{star:?}");
        }
    }

    #[test]
    fn test_zero_sized_surface_keeps_count() {
        let field = field(HeroConfig::default(), 0.0, 0.0);
        assert_eq!(field.stars().len(), 300);
        let mut painter = RecordingPainter::new();
        let outcome = field.render_frame(16.0, PointerPosition::default(), &mut painter);
        assert_eq!(outcome, FrameOutcome::Skipped);
        assert!(painter.ops().is_empty());
    }

    #[test]
    fn test_twinkle_alpha_bounds() {
        let star = Star {
            x: 0.0,
            y: 0.0,
            z: 0.5,
            size: 1.0,
            base_alpha: 0.7,
            phase: 1.3,
            layer: 0.5,
        };
        for step in 0..2000 {
            let t = step as f64 * 7.3;
            let alpha = star.alpha_at(t, TWINKLE_SPEED);
            assert!(alpha >= 0.7 * 0.6 - 1e-12, "t={t} alpha={alpha}");
            assert!(alpha <= 0.7 * 1.2 + 1e-12, "t={t} alpha={alpha}");
        }

        let bright = Star {
            base_alpha: 0.95,
            ..star
        };
        for step in 0..2000 {
            let alpha = bright.alpha_at(step as f64 * 3.1, TWINKLE_SPEED);
            assert!((0.0..=1.0).contains(&alpha));
        }
    }

    #[test]
    fn test_render_order() {
        let field = field(quiet_config(), 800.0, 520.0);
        let mut painter = RecordingPainter::new();
        let outcome = field.render_frame(1000.0, PointerPosition::default(), &mut painter);
        assert_eq!(outcome, FrameOutcome::Painted);

        let ops = painter.ops();
        assert_eq!(
            ops[0],
            PaintOp::Clear {
                width: 800.0,
                height: 520.0
            }
        );
        match &ops[1] {
            PaintOp::LinearGradient { from, to, stops } => {
                assert_eq!(*from, (0.0, 0.0));
                assert_eq!(*to, (0.0, 520.0));
                assert_eq!(stops.len(), 4);
            }
            other => panic!("expected gradient, got {other:?}"),
        }
        // 60 noise blobs, then core + glow for each of 300 stars.
        assert_eq!(ops.len(), 2 + 60 + 600);
        for op in &ops[2..62] {
            match op {
                PaintOp::Circle { radius, color, .. } => {
                    assert_eq!(*radius, 200.0);
                    assert!(color.a < 0.05);
                }
                other => panic!("expected noise circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_glow_is_larger_and_fainter() {
        let field = field(quiet_config(), 800.0, 520.0);
        let mut painter = RecordingPainter::new();
        field.render_frame(500.0, PointerPosition::default(), &mut painter);

        let circles: Vec<_> = painter.circles().skip(60).collect();
        for pair in circles.chunks(2) {
            let (cx, cy, core_r, core) = pair[0];
            let (gx, gy, glow_r, glow) = pair[1];
            assert_eq!((cx, cy), (gx, gy));
            assert!(glow_r > core_r);
            assert!(glow.a < core.a || core.a == 0.0);
        }
    }

    #[test]
    fn test_render_is_reproducible() {
        let field = field(HeroConfig::default(), 800.0, 520.0);
        let pointer = PointerPosition::new(320.0, 140.0);
        for t in [0.0, 16.7, 12345.6, 99_999.0] {
            let mut a = RecordingPainter::new();
            let mut b = RecordingPainter::new();
            field.render_frame(t, pointer, &mut a);
            field.render_frame(t, pointer, &mut b);
            assert_eq!(a.ops(), b.ops());
        }
    }

    #[test]
    fn test_pointer_offsets_shallow_layers_more() {
        let field = field(quiet_config(), 800.0, 520.0);
        let origin = PointerPosition::default();
        let pointer = PointerPosition::new(400.0, 200.0);

        let mut still = RecordingPainter::new();
        let mut moved = RecordingPainter::new();
        field.render_frame(10.0, origin, &mut still);
        field.render_frame(10.0, pointer, &mut moved);

        // Core circles only (every other circle after the noise).
        let cores = |p: &RecordingPainter| -> Vec<(f64, f64)> {
            p.circles()
                .skip(60)
                .step_by(2)
                .map(|(x, y, _, _)| (x, y))
                .collect()
        };
        for ((star, a), b) in field.stars().iter().zip(cores(&still)).zip(cores(&moved)) {
            let expected = (1.0 - star.layer) * 0.02;
            assert!((b.0 - a.0 - 400.0 * expected).abs() < 1e-9);
            assert!((b.1 - a.1 - 200.0 * expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_render_does_not_mutate_stars() {
        let field = field(HeroConfig::default(), 640.0, 480.0);
        let before = field.stars().to_vec();
        let mut painter = RecordingPainter::new();
        for frame in 0..50 {
            field.render_frame(frame as f64 * 16.0, PointerPosition::new(5.0, 5.0), &mut painter);
        }
        assert_eq!(field.stars(), before.as_slice());
    }

    #[test]
    fn test_shooting_star_segments_fade() {
        let config = HeroConfig {
            shooting_star_chance: 1.0,
            ..HeroConfig::default()
        };
        let field = field(config, 800.0, 520.0);
        let mut painter = RecordingPainter::new();
        field.render_frame(42.0, PointerPosition::default(), &mut painter);

        let streak: Vec<_> = painter.circles().skip(60 + 600).collect();
        assert_eq!(streak.len(), SHOOTING_STAR_SEGMENTS);
        for pair in streak.windows(2) {
            assert!(pair[1].2 < pair[0].2, "segments must shrink");
            assert!(pair[1].3.a < pair[0].3.a, "segments must fade");
        }
        let (hx, hy, _, _) = streak[0];
        assert!((0.0..800.0).contains(&hx));
        assert!((0.0..260.0).contains(&hy));
    }

    #[test]
    fn test_shooting_star_rare_at_default_chance() {
        let field = field(HeroConfig::default(), 800.0, 520.0);
        let plain = 2 + 60 + 600;
        let streaks = (0..4000)
            .filter(|frame| {
                let mut painter = RecordingPainter::new();
                field.render_frame(*frame as f64 * 16.0, PointerPosition::default(), &mut painter);
                painter.ops().len() > plain
            })
            .count();
        // 0.5% of 4000 frames is 20; allow generous slack.
        assert!(streaks > 0 && streaks < 80, "streaks = {streaks}");
    }

    #[test]
    fn test_reinitialize_replaces_set() {
        let mut field = field(HeroConfig::default(), 800.0, 520.0);
        field.initialize(SurfaceSize::new(1200.0, 800.0), &mut seeded(99));
        assert_eq!(field.stars().len(), 300);
        assert_eq!(field.size(), SurfaceSize::new(1200.0, 800.0));
        assert!(field.stars().iter().all(|s| s.x < 1200.0 && s.y < 800.0));
    }

    #[test]
    fn test_empty_layers_generate_nothing() {
        let config = HeroConfig {
            layers: vec![],
            ..HeroConfig::default()
        };
        let field = field(config, 800.0, 520.0);
        assert!(field.stars().is_empty());
    }
}
