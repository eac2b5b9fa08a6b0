use serde::{Deserialize, Serialize};

use crate::algorithms::halfedge::{real_face_loops, real_half_edges};
use crate::algorithms::viewport::{build_transform, task_bounds, Viewport};
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::geometry::math::adjacency_stub;
use crate::model::{NamedTask, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub alpha: f64,
}

pub const FACE_FILL: FillStyle = FillStyle { color: Color::rgb(0x80, 0x80, 0x80), alpha: 0.3 };
pub const SKELETON_STROKE: StrokeStyle = StrokeStyle { color: Color::rgb(0, 0, 0), width: 1.0 };
pub const OUTER_STROKE: StrokeStyle = StrokeStyle { color: Color::rgb(0, 0xaa, 0), width: 2.0 };
pub const HOLE_STROKE: StrokeStyle = StrokeStyle { color: Color::rgb(0xaa, 0, 0), width: 2.0 };
pub const ADJACENCY_STROKE: StrokeStyle = StrokeStyle { color: Color::rgb(0, 0, 0xaa), width: 0.5 };

pub const VERTEX_MARKER_RADIUS: f64 = 2.0;
/// Offset of adjacency stubs, as a fraction of the edge length.
pub const STUB_OFFSET: f64 = 0.1;

/// A drawing target. Coordinates are canvas pixels.
pub trait Surface {
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn fill_polygon(&mut self, pts: &[Point], style: &FillStyle);
    fn stroke_polyline(&mut self, pts: &[Point], closed: bool, style: &StrokeStyle);
    fn stroke_circles(&mut self, centers: &[Point], radius: f64, style: &StrokeStyle);
    fn set_caption(&mut self, text: &str);
}

pub fn caption(name: &str, index: usize, total: usize, size: Option<f64>) -> String {
    match size {
        Some(sz) => format!("{} ({}/{}), size={}", name, index + 1, total, sz),
        None => format!("{} ({}/{})", name, index + 1, total),
    }
}

/// Every layer of one task, already mapped to canvas space.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub faces: Vec<Vec<Point>>,
    pub skeleton: Vec<[Point; 2]>,
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
    pub stubs: Vec<[Point; 2]>,
    pub caption: String,
}

impl Frame {
    /// Lays out task `index` of `total` for a `width` x `height` canvas.
    /// `random` yields values in `[0, 1)` and is only consulted for stub jitter.
    pub fn build(
        named: &NamedTask,
        index: usize,
        total: usize,
        (width, height): (f64, f64),
        config: &ViewerConfig,
        random: &mut dyn FnMut() -> f64,
    ) -> Result<Frame> {
        let task = named.display_task(config.prefer_subdivided);
        let bounds = task_bounds(task, config.viewport.bounds_source, config.prefer_subdivided);
        let vp = build_transform(bounds, width, height, config.viewport.border, config.viewport.flip_y);

        let mut faces = Vec::new();
        let mut stubs = Vec::new();
        if let Some(mesh) = &named.mesh {
            mesh.validate().map_err(|e| Error::mesh(&named.name, e))?;
            faces = real_face_loops(mesh)
                .map_err(|e| Error::mesh(&named.name, e))?
                .iter()
                .map(|face| vp.apply_all(face))
                .collect();
            if config.show_adjacency {
                let mut jitter = |p: Point| {
                    if config.jitter > 0.0 {
                        Point::new(p.x + config.jitter * (random() - 0.5), p.y + config.jitter * (random() - 0.5))
                    } else {
                        p
                    }
                };
                for h in real_half_edges(mesh) {
                    let (a, b) = mesh.half_edges[h as usize];
                    let (pa, pb) = (mesh.pts[a as usize], mesh.pts[b as usize]);
                    let (s, e) = adjacency_stub(pa, pb, STUB_OFFSET);
                    stubs.push([jitter(vp.apply(s)), jitter(vp.apply(e))]);
                }
            }
        }

        let skeleton = task
            .display_skeleton(config.prefer_subdivided)
            .iter()
            .map(|s| s.endpoints().map(|p| vp.apply(p)))
            .collect();
        let outer = vp.apply_all(&task.outer);
        let holes = task.holes.iter().map(|h| vp.apply_all(h)).collect();
        let size = config.show_size.then(|| bounds.size());

        Ok(Frame {
            viewport: vp,
            faces,
            skeleton,
            outer,
            holes,
            stubs,
            caption: caption(&named.name, index, total, size),
        })
    }

    /// Clears `surface` and paints the layers back to front.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for face in &self.faces {
            surface.fill_polygon(face, &FACE_FILL);
        }
        for seg in &self.skeleton {
            surface.stroke_polyline(seg, false, &SKELETON_STROKE);
        }
        if !self.outer.is_empty() {
            surface.stroke_polyline(&self.outer, true, &OUTER_STROKE);
            surface.stroke_circles(&self.outer, VERTEX_MARKER_RADIUS, &OUTER_STROKE);
        }
        for hole in &self.holes {
            surface.stroke_polyline(hole, true, &HOLE_STROKE);
        }
        for stub in &self.stubs {
            surface.stroke_polyline(stub, false, &ADJACENCY_STROKE);
        }
        surface.set_caption(&self.caption);
    }
}
