/// RGBA color, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// 8-bit channels, alpha dropped.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Float rectangle (origin + size) in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from left/top/right/bottom bounds.
    pub fn from_bounds(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            x: left,
            y: top,
            width: right - left,
            height: bottom - top,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub const ZERO: Rectangle = Rectangle::new(0.0, 0.0, 0.0, 0.0);
}

/// Stroke/fill style.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub stroke_color: Color,
    pub fill_color: Option<Color>,
    pub stroke_width: f32,
}

impl DrawStyle {
    /// Fill-only style.
    pub fn fill(color: Color) -> Self {
        Self {
            stroke_color: color,
            fill_color: Some(color),
            stroke_width: 0.0,
        }
    }

    /// Outline-only style.
    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            stroke_color: color,
            fill_color: None,
            stroke_width: width,
        }
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            fill_color: None,
            stroke_width: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_color_from_rgb8() {
        let c = super::Color::from_rgb8(255, 0, 51);
        assert_eq!(c, super::Color::rgb(1.0, 0.0, 0.2));
        assert_eq!(c.a, 1.0);
        assert_eq!(c.to_rgb8(), [255, 0, 51]);
    }

    #[test]
    fn test_rectangle_bounds() {
        let r = super::Rectangle::from_bounds(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.width, 100.0);
        assert_eq!(r.height, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert!(!r.is_empty());
        assert!(super::Rectangle::ZERO.is_empty());
    }

    #[test]
    fn test_stroke_style_has_no_fill() {
        let s = super::DrawStyle::stroke(super::Color::RED, 5.0);
        assert!(s.fill_color.is_none());
        assert_eq!(s.stroke_width, 5.0);
    }
}
