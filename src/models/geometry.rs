//! Screen geometry in CSS pixels.

/// Pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding box in viewport coordinates (as returned by
/// `getBoundingClientRect`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Fraction of the width at which `x` falls, clamped to `[0, 1]`.
    ///
    /// Returns `None` for a degenerate (zero-width) box.
    pub fn horizontal_fraction(&self, x: f64) -> Option<f64> {
        if !(self.width > 0.0) {
            return None;
        }
        let offset = (x - self.left).clamp(0.0, self.width);
        Some(offset / self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_fraction_clamps() {
        let strip = Rect::new(100.0, 0.0, 200.0, 10.0);
        assert_eq!(strip.horizontal_fraction(200.0), Some(0.5));
        assert_eq!(strip.horizontal_fraction(50.0), Some(0.0));
        assert_eq!(strip.horizontal_fraction(900.0), Some(1.0));
        assert_eq!(Rect::default().horizontal_fraction(10.0), None);
    }
}
