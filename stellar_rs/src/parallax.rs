//! Pointer parallax for decorative elements (planets).
//!
//! Each registered element carries a depth coefficient. Its transform is a
//! pure function of the pointer position, the reference container and that
//! coefficient: no easing, no history.

use crate::config::ParallaxScales;
use crate::context::{HeroContext, PointerPosition};

/// Viewport-space bounding box of the reference container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the container center, in units of the
    /// container size (`-0.5` at the top-left corner, `0.5` at bottom-right).
    /// A collapsed container yields `(0, 0)`.
    pub fn normalize(&self, pointer: PointerPosition) -> (f64, f64) {
        if !(self.width > 0.0 && self.height > 0.0) {
            return (0.0, 0.0);
        }
        (
            (pointer.x - self.left) / self.width - 0.5,
            (pointer.y - self.top) / self.height - 0.5,
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
    };

    pub fn is_identity(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0 && self.rotate_deg == 0.0
    }

    /// CSS `transform` value, e.g. `translate(-9px, -6px) rotate(-18deg)`.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            css_number(self.translate_x),
            css_number(self.translate_y),
            css_number(self.rotate_deg)
        )
    }
}

/// Three decimals, no negative zero.
fn css_number(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0 + 0.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxElement {
    pub name: String,
    pub depth: f64,
}

/// Receives element transforms. The DOM binding lives outside the core.
pub trait TransformSink {
    fn apply(&mut self, name: &str, transform: &Transform);
}

impl TransformSink for Vec<(String, Transform)> {
    fn apply(&mut self, name: &str, transform: &Transform) {
        self.push((name.to_string(), *transform));
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParallaxController {
    elements: Vec<ParallaxElement>,
    scales: ParallaxScales,
}

impl ParallaxController {
    pub fn new(scales: ParallaxScales) -> Self {
        Self {
            elements: Vec::new(),
            scales,
        }
    }

    /// Register an element. Re-registering a name replaces its depth.
    pub fn register(&mut self, name: impl Into<String>, depth: f64) {
        let name = name.into();
        match self.elements.iter_mut().find(|e| e.name == name) {
            Some(existing) => existing.depth = depth,
            None => self.elements.push(ParallaxElement { name, depth }),
        }
    }

    pub fn elements(&self) -> &[ParallaxElement] {
        &self.elements
    }

    /// Transform for an element of `depth` at normalized offset `(nx, ny)`.
    ///
    /// Translation is `(nx, ny) * depth * (translate_x, translate_y)`;
    /// rotation is `(nx + ny) * depth * rotate`.
    pub fn transform_for(&self, depth: f64, (nx, ny): (f64, f64)) -> Transform {
        Transform {
            translate_x: nx * depth * self.scales.translate_x,
            translate_y: ny * depth * self.scales.translate_y,
            rotate_deg: (nx + ny) * depth * self.scales.rotate,
        }
    }

    /// Record the raw pointer for the star layer and push a fresh transform
    /// to every registered element.
    pub fn on_pointer_move(
        &self,
        ctx: &mut HeroContext,
        pointer: PointerPosition,
        container: ContainerRect,
        sink: &mut dyn TransformSink,
    ) {
        ctx.record_pointer(pointer);
        let offset = container.normalize(pointer);
        for element in &self.elements {
            sink.apply(&element.name, &self.transform_for(element.depth, offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::SurfaceSize;
    use pretty_assertions::assert_eq;

    fn hero_rect() -> ContainerRect {
        ContainerRect::new(0.0, 0.0, 800.0, 520.0)
    }

    fn controller() -> ParallaxController {
        let mut c = ParallaxController::new(ParallaxScales::default());
        c.register("planet-large", 0.6);
        c.register("planet-small", 1.2);
        c.register("planet-still", 0.0);
        c
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_center_pointer_is_identity() {
        let c = controller();
        let mut ctx = HeroContext::new(SurfaceSize::new(800.0, 520.0));
        let mut sink: Vec<(String, Transform)> = Vec::new();
        c.on_pointer_move(&mut ctx, PointerPosition::new(400.0, 260.0), hero_rect(), &mut sink);

        assert_eq!(sink.len(), 3);
        for (_, t) in &sink {
            assert!(t.is_identity(), "{t:?}");
        }
    }

    #[test]
    fn test_top_left_corner() {
        let c = controller();
        let mut ctx = HeroContext::default();
        let mut sink: Vec<(String, Transform)> = Vec::new();
        c.on_pointer_move(&mut ctx, PointerPosition::new(0.0, 0.0), hero_rect(), &mut sink);

        let (name, t) = &sink[0];
        assert_eq!(name, "planet-large");
        assert!(approx(t.translate_x, -9.0));
        assert!(approx(t.translate_y, -6.0));
        assert!(approx(t.rotate_deg, -18.0));
        assert_eq!(t.to_css(), "translate(-9px, -6px) rotate(-18deg)");
    }

    #[test]
    fn test_zero_depth_never_moves() {
        let c = controller();
        for (x, y) in [(0.0, 0.0), (800.0, 520.0), (-300.0, 9000.0), (123.4, 56.7)] {
            let t = c.transform_for(0.0, hero_rect().normalize(PointerPosition::new(x, y)));
            assert!(t.is_identity());
            assert_eq!(t.to_css(), "translate(0px, 0px) rotate(0deg)");
        }
    }

    #[test]
    fn test_linear_in_depth() {
        let c = controller();
        let offset = hero_rect().normalize(PointerPosition::new(610.0, 90.0));
        let single = c.transform_for(0.4, offset);
        let double = c.transform_for(0.8, offset);
        assert!(approx(double.translate_x, 2.0 * single.translate_x));
        assert!(approx(double.translate_y, 2.0 * single.translate_y));
        assert!(approx(double.rotate_deg, 2.0 * single.rotate_deg));
    }

    #[test]
    fn test_pointer_recorded_raw() {
        let c = controller();
        let mut ctx = HeroContext::default();
        let mut sink: Vec<(String, Transform)> = Vec::new();
        let rect = ContainerRect::new(100.0, 50.0, 800.0, 520.0);
        c.on_pointer_move(&mut ctx, PointerPosition::new(150.0, 75.0), rect, &mut sink);
        assert_eq!(ctx.pointer, PointerPosition::new(150.0, 75.0));
    }

    #[test]
    fn test_repeat_event_is_idempotent() {
        let c = controller();
        let mut ctx = HeroContext::default();
        let mut first: Vec<(String, Transform)> = Vec::new();
        let mut second: Vec<(String, Transform)> = Vec::new();
        let p = PointerPosition::new(512.0, 33.0);
        c.on_pointer_move(&mut ctx, p, hero_rect(), &mut first);
        c.on_pointer_move(&mut ctx, p, hero_rect(), &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_collapsed_container_is_neutral() {
        let rect = ContainerRect::new(10.0, 10.0, 0.0, 300.0);
        assert_eq!(rect.normalize(PointerPosition::new(50.0, 50.0)), (0.0, 0.0));
    }

    #[test]
    fn test_register_replaces_depth() {
        let mut c = controller();
        c.register("planet-large", 0.3);
        assert_eq!(c.elements().len(), 3);
        assert_eq!(c.elements()[0].depth, 0.3);
    }
}
