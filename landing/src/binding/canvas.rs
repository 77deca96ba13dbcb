//! `Painter` over a 2D canvas context.

use std::f64::consts::TAU;

use stellar::{GradientStop, Painter, Rgba};
use web_sys::CanvasRenderingContext2d;

pub struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_linear_gradient(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stops: &[GradientStop],
        width: f64,
        height: f64,
    ) {
        let gradient = self.ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
        for stop in stops {
            // A malformed color only drops that stop.
            if gradient.add_color_stop(stop.offset as f32, &stop.color).is_err() {
                tracing::warn!(color = %stop.color, "rejected gradient stop");
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU).is_err() {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }
}
