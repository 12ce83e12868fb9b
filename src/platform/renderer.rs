/// Abstract rendering interface.

use crate::core::types::Color;

pub trait Renderer {
    fn begin_frame(&mut self, width: i32, height: i32);
    fn end_frame(&mut self);

    // Primitives
    fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64, color: Color);
    fn fill_rounded_rect(&self, x: f64, y: f64, w: f64, h: f64, radius: f64, color: Color);
    fn stroke_rounded_rect(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        line_width: f64,
    );
    fn draw_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color, line_width: f64);
    fn draw_text(&self, x: f64, y: f64, text: &str, size: f64, color: Color);

    // Circles
    fn fill_circle(&self, cx: f64, cy: f64, radius: f64, color: Color);
    /// Circle with a soft halo, the canvas shadow-blur look.
    fn fill_glow_circle(&self, cx: f64, cy: f64, radius: f64, color: Color, glow: f64);

    // Clipping
    fn push_clip(&self, x: f64, y: f64, w: f64, h: f64);
    fn pop_clip(&self);

    // Shadow (soft elevation)
    fn draw_shadow(
        &self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radius: f64,
        color: Color,
        blur: f64,
    );
}
