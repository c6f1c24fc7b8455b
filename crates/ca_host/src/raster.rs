use std::convert::Infallible;

use ca_rendering::{Color, DrawStyle, Rectangle, RenderBackend};
use image::{Rgb, RgbImage};

/// Software backend that paints render items into an RGB canvas.
#[derive(Debug, Clone)]
pub struct RasterBackend {
    canvas: RgbImage,
}

impl RasterBackend {
    pub fn new(canvas: RgbImage) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbImage {
        self.canvas
    }

    /// Fill `[left, right) x [top, bottom)`, clipped to the canvas.
    fn fill_bounds(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Color) {
        let clip = |v: f32, max: u32| (v.max(0.0) as u32).min(max);
        let x0 = clip(left.floor(), self.canvas.width());
        let x1 = clip(right.ceil(), self.canvas.width());
        let y0 = clip(top.floor(), self.canvas.height());
        let y1 = clip(bottom.ceil(), self.canvas.height());

        let pixel = Rgb(color.to_rgb8());
        for y in y0..y1 {
            for x in x0..x1 {
                self.canvas.put_pixel(x, y, pixel);
            }
        }
    }

    /// Stroke centred on the rectangle edges.
    fn stroke(&mut self, rect: Rectangle, color: Color, width: f32) {
        if width <= 0.0 {
            return;
        }
        let half = width / 2.0;
        let (ol, ot, or, ob) = (
            rect.x - half,
            rect.y - half,
            rect.right() + half,
            rect.bottom() + half,
        );
        let (il, it, ir, ib) = (
            rect.x + half,
            rect.y + half,
            rect.right() - half,
            rect.bottom() - half,
        );

        if ir <= il || ib <= it {
            self.fill_bounds(ol, ot, or, ob, color);
            return;
        }
        self.fill_bounds(ol, ot, or, it, color);
        self.fill_bounds(ol, ib, or, ob, color);
        self.fill_bounds(ol, it, il, ib, color);
        self.fill_bounds(ir, it, or, ib, color);
    }
}

impl RenderBackend for RasterBackend {
    type Error = Infallible;

    fn draw_rectangle(&mut self, rect: Rectangle, style: &DrawStyle) -> Result<(), Self::Error> {
        if let Some(fill) = style.fill_color {
            self.fill_bounds(rect.x, rect.y, rect.right(), rect.bottom(), fill);
        }
        self.stroke(rect, style.stroke_color, style.stroke_width);
        Ok(())
    }

    fn draw_selection_border(
        &mut self,
        rect: Rectangle,
        color: Color,
        width: f32,
    ) -> Result<(), Self::Error> {
        self.stroke(rect, color, width);
        Ok(())
    }
}
