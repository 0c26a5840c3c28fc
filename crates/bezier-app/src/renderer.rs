//! Renderer trait abstraction.

use bezier_core::Frame;
use glam::Vec2;
use kurbo::Point;

/// Trait for rendering backends.
///
/// Called once per redraw with a consistent snapshot of the curve. GPU
/// backends upload [`vertices`] for the polyline and control points and
/// draw them as line strips.
pub trait Renderer {
    /// Draw one frame.
    fn render(&mut self, frame: &Frame<'_>);
}

/// Convert window-space points to normalized device coordinate vertices.
pub fn vertices(frame: &Frame<'_>, points: &[Vec2]) -> Vec<[f32; 2]> {
    points
        .iter()
        .map(|p| {
            let ndc = frame.ndc_transform * Point::new(p.x as f64, p.y as f64);
            [ndc.x as f32, ndc.y as f32]
        })
        .collect()
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Renderer that only reports frame statistics through the log.
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        let line = vertices(frame, frame.samples);
        log::debug!(
            "Frame {}: {} vertices, {} control points, length {:.1}, captured {:?}",
            self.frames,
            line.len(),
            frame.control_points.len(),
            polyline_length(frame.samples),
            frame.captured,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bezier_core::Viewport;

    #[test]
    fn test_polyline_length() {
        let points = [Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), Vec2::new(3.0, 10.0)];
        assert!((polyline_length(&points) - 11.0).abs() < 1e-5);
        assert_eq!(polyline_length(&points[..1]), 0.0);
    }

    #[test]
    fn test_vertices_in_ndc() {
        let viewport = Viewport::new(800.0, 600.0);
        let samples = [Vec2::new(0.0, 0.0), Vec2::new(800.0, 600.0)];
        let frame = Frame {
            samples: &samples,
            control_points: &[],
            captured: None,
            ndc_transform: viewport.ndc_transform(),
        };
        let v = vertices(&frame, frame.samples);
        assert!((v[0][0] + 1.0).abs() < 1e-6 && (v[0][1] - 1.0).abs() < 1e-6);
        assert!((v[1][0] - 1.0).abs() < 1e-6 && (v[1][1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let mut renderer = LogRenderer::default();
        let samples = [Vec2::ZERO, Vec2::ONE];
        let frame = Frame {
            samples: &samples,
            control_points: &samples,
            captured: Some(1),
            ndc_transform: Viewport::default().ndc_transform(),
        };
        renderer.render(&frame);
        renderer.render(&frame);
        assert_eq!(renderer.frames(), 2);
    }
}
