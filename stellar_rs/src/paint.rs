//! Drawing-surface abstraction.
//!
//! The renderer only speaks [`Painter`]. The browser binding implements it on
//! top of a `CanvasRenderingContext2d`; [`RecordingPainter`] captures calls for
//! tests and headless inspection.

use crate::config::GradientStop;

/// Straight-alpha color, channels `0..=255`, alpha `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha, clamped to `0.0..=1.0`.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.4})", self.r, self.g, self.b, self.a)
    }
}

pub trait Painter {
    /// Wipe the whole surface.
    fn clear(&mut self, width: f64, height: f64);

    /// Fill `[0, width) x [0, height)` with a linear gradient running from
    /// `from` to `to`.
    fn fill_linear_gradient(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stops: &[GradientStop],
        width: f64,
        height: f64,
    );

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}

/// One recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Clear {
        width: f64,
        height: f64,
    },
    LinearGradient {
        from: (f64, f64),
        to: (f64, f64),
        stops: Vec<GradientStop>,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgba,
    },
}

#[derive(Debug, Default, Clone)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<PaintOp> {
        self.ops
    }

    pub fn circles(&self) -> impl Iterator<Item = (f64, f64, f64, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Circle {
                x,
                y,
                radius,
                color,
            } => Some((*x, *y, *radius, *color)),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(PaintOp::Clear { width, height });
    }

    fn fill_linear_gradient(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stops: &[GradientStop],
        _width: f64,
        _height: f64,
    ) {
        self.ops.push(PaintOp::LinearGradient {
            from,
            to,
            stops: stops.to_vec(),
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ops.push(PaintOp::Circle {
            x,
            y,
            radius,
            color,
        });
    }
}
