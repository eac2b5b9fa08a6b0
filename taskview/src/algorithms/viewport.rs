use serde::{Deserialize, Serialize};

use crate::geometry::tolerance::{safe_div, FALLBACK_SCALE};
use crate::model::{Point, Segment, Task};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub const UNIT: Bounds = Bounds { min_x: 0.0, min_y: 0.0, max_x: 1.0, max_y: 1.0 };

    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Bounds> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = Bounds { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        for p in it {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    pub fn width(&self) -> f64 { self.max_x - self.min_x }
    pub fn height(&self) -> f64 { self.max_y - self.min_y }

    /// Larger of the two extents, shown as the task's size.
    pub fn size(&self) -> f64 { self.width().max(self.height()) }
}

/// Bounding box over every endpoint of every segment.
pub fn compute_bounds(segments: &[Segment]) -> Option<Bounds> {
    Bounds::from_points(segments.iter().flat_map(|s| [&s.0, &s.1]))
}

/// Geometry the viewport is fitted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsSource {
    #[default]
    Skeleton,
    Outer,
}

/// Bounds of a task from the configured source, falling back to the other
/// source and finally to the unit box when the task has no geometry.
pub fn task_bounds(task: &Task, source: BoundsSource, prefer_subdivided: bool) -> Bounds {
    let skeleton = || compute_bounds(task.display_skeleton(prefer_subdivided));
    let outer = || Bounds::from_points(&task.outer);
    let found = match source {
        BoundsSource::Skeleton => skeleton().or_else(outer),
        BoundsSource::Outer => outer().or_else(skeleton),
    };
    found.unwrap_or_else(|| {
        log::warn!("task has neither skeleton nor outline; using unit bounds");
        Bounds::UNIT
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Margin kept free on every side of the canvas, in pixels.
    pub border: f64,
    /// Render increasing task-space y upward.
    pub flip_y: bool,
    pub bounds_source: BoundsSource,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        ViewportConfig { border: 100.5, flip_y: true, bounds_source: BoundsSource::Skeleton }
    }
}

/// Uniform-scale mapping from task space to canvas space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub bounds: Bounds,
    pub scale: f64,
    pub border: f64,
    pub flip_y: bool,
}

impl Viewport {
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        let x = self.border + (p.x - self.bounds.min_x) * self.scale;
        let y = if self.flip_y {
            self.border + (self.bounds.max_y - p.y) * self.scale
        } else {
            self.border + (p.y - self.bounds.min_y) * self.scale
        };
        Point::new(x, y)
    }

    pub fn apply_all(&self, pts: &[Point]) -> Vec<Point> {
        pts.iter().map(|&p| self.apply(p)).collect()
    }
}

/// Fits `bounds` into a `width` x `height` canvas minus `border` on each side.
/// A zero-extent axis does not constrain the scale; with no usable axis the scale is 1.
pub fn build_transform(bounds: Bounds, width: f64, height: f64, border: f64, flip_y: bool) -> Viewport {
    let sx = safe_div(width - 2.0 * border, bounds.width(), f64::INFINITY);
    let sy = safe_div(height - 2.0 * border, bounds.height(), f64::INFINITY);
    let mut scale = sx.min(sy);
    if !scale.is_finite() || scale <= 0.0 {
        log::warn!(
            "degenerate viewport (extent {}x{}, canvas {}x{}); clamping scale to {}",
            bounds.width(),
            bounds.height(),
            width,
            height,
            FALLBACK_SCALE
        );
        scale = FALLBACK_SCALE;
    }
    Viewport { bounds, scale, border, flip_y }
}
