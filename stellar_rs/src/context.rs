//! Shared per-component state read by the renderer and the parallax controller.

/// Width/height of the drawing area in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when nothing can be painted (zero, negative or NaN dimensions).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether `(x, y)` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..self.width).contains(&x) && (0.0..self.height).contains(&y)
    }
}

/// Last known pointer coordinates in viewport space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mutable state owned by one mounted hero.
///
/// Written by resize and pointer events, read by every frame. Single current
/// value, last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeroContext {
    pub surface: SurfaceSize,
    pub pointer: PointerPosition,
}

impl HeroContext {
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            pointer: PointerPosition::default(),
        }
    }

    pub fn record_pointer(&mut self, pointer: PointerPosition) {
        self.pointer = pointer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_surface() {
        assert!(SurfaceSize::default().is_empty());
        assert!(SurfaceSize::new(0.0, 520.0).is_empty());
        assert!(SurfaceSize::new(f64::NAN, 520.0).is_empty());
        assert!(!SurfaceSize::new(800.0, 520.0).is_empty());
    }

    #[test]
    fn test_contains_is_half_open() {
        let size = SurfaceSize::new(800.0, 520.0);
        assert!(size.contains(0.0, 0.0));
        assert!(size.contains(799.9, 519.9));
        assert!(!size.contains(800.0, 10.0));
        assert!(!size.contains(10.0, 520.0));
        assert!(!size.contains(-0.1, 10.0));
    }

    #[test]
    fn test_pointer_last_write_wins() {
        let mut ctx = HeroContext::new(SurfaceSize::new(800.0, 520.0));
        ctx.record_pointer(PointerPosition::new(10.0, 20.0));
        ctx.record_pointer(PointerPosition::new(30.0, 40.0));
        assert_eq!(ctx.pointer, PointerPosition::new(30.0, 40.0));
    }
}
