//! Viewport geometry: drag bounds and the window-to-device transform.

use glam::Vec2;
use kurbo::{Affine, Point, Rect, Size};

/// Axis-aligned rectangle control points are clamped to while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Create bounds from two corners in any order.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Clamp a point into the bounds.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Check if the bounds contain a point (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self::new(
            Vec2::new(rect.x0 as f32, rect.y0 as f32),
            Vec2::new(rect.x1 as f32, rect.y1 as f32),
        )
    }
}

/// The drawable area of the window, in pixels with y pointing down.
///
/// Control points live in window pixel space; the renderer needs them in
/// normalized device coordinates (`[-1, 1]` on both axes, y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Window size in pixels.
    pub size: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl Viewport {
    /// Create a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Resize the viewport. Zero-sized (minimized) windows are ignored.
    /// Returns true if the size changed.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        let size = Size::new(width, height);
        if size == self.size {
            return false;
        }
        self.size = size;
        true
    }

    /// Rectangle covering the whole window.
    pub fn rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// Drag bounds covering the whole window.
    pub fn bounds(&self) -> Bounds {
        Bounds::from(self.rect())
    }

    /// Transform from window pixels to normalized device coordinates.
    pub fn ndc_transform(&self) -> Affine {
        Affine::translate((-1.0, 1.0))
            * Affine::scale_non_uniform(2.0 / self.size.width, -2.0 / self.size.height)
    }

    /// Convert a window-space point to normalized device coordinates.
    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        let p = self.ndc_transform() * Point::new(point.x as f64, point.y as f64);
        Vec2::new(p.x as f32, p.y as f32)
    }

    /// Convert normalized device coordinates back to window space.
    pub fn from_ndc(&self, point: Vec2) -> Vec2 {
        let p = self.ndc_transform().inverse() * Point::new(point.x as f64, point.y as f64);
        Vec2::new(p.x as f32, p.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    #[test]
    fn test_default_viewport() {
        let viewport = Viewport::default();
        assert_eq!(viewport.size, Size::new(800.0, 600.0));
        let bounds = viewport.bounds();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_ndc_corners() {
        let viewport = Viewport::new(800.0, 600.0);
        assert!(close(viewport.to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0)));
        assert!(close(viewport.to_ndc(Vec2::new(800.0, 600.0)), Vec2::new(1.0, -1.0)));
        assert!(close(viewport.to_ndc(Vec2::new(400.0, 300.0)), Vec2::ZERO));
    }

    #[test]
    fn test_ndc_roundtrip() {
        let viewport = Viewport::new(1280.0, 720.0);
        let p = Vec2::new(123.0, 456.0);
        assert!((viewport.from_ndc(viewport.to_ndc(p)) - p).abs().max_element() < 1e-3);
    }

    #[test]
    fn test_resize_ignores_zero() {
        let mut viewport = Viewport::default();
        assert!(!viewport.resize(0.0, 600.0));
        assert!(!viewport.resize(800.0, 600.0));
        assert!(viewport.resize(1024.0, 768.0));
        assert_eq!(viewport.bounds().max, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::new(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.clamp(Vec2::new(-5.0, 20.0)), Vec2::new(0.0, 10.0));
        assert_eq!(bounds.clamp(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        assert!(bounds.contains(Vec2::new(10.0, 0.0)));
        assert!(!bounds.contains(Vec2::new(10.5, 0.0)));
    }
}
