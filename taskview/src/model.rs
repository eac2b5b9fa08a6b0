use serde::{Deserialize, Serialize};

pub type VertexId = u32;
pub type HalfEdgeId = u32;
pub type FaceId = u32;

/// A 2D point, serialized as `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Point {
        Point { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> [f64; 2] {
        [p.x, p.y]
    }
}

/// Ordered ring of points; the last point connects back to the first.
pub type Polygon = Vec<Point>;

/// Undirected segment, serialized as `[[x, y], [x, y]]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment(pub Point, pub Point);

impl Segment {
    pub fn endpoints(&self) -> [Point; 2] {
        [self.0, self.1]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub outer: Polygon,
    pub holes: Vec<Polygon>,
    pub skeleton: Vec<Segment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivided_skeleton: Option<Vec<Segment>>,
}

impl Task {
    /// Skeleton used for drawing and bounds.
    pub fn display_skeleton(&self, prefer_subdivided: bool) -> &[Segment] {
        match &self.subdivided_skeleton {
            Some(s) if prefer_subdivided => s,
            _ => &self.skeleton,
        }
    }
}

/// Planar half-edge mesh stored as parallel index arrays.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub pts: Vec<Point>,
    pub half_edges: Vec<(VertexId, VertexId)>,
    pub next: Vec<HalfEdgeId>,
    pub he_poly: Vec<FaceId>,
    pub poly_he: Vec<HalfEdgeId>,
    pub poly_real: Vec<bool>,
}

impl Mesh {
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.poly_he.len()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedTask {
    pub name: String,
    pub task: Task,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivided_task: Option<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<Mesh>,
}

/// Optional payload parts present on a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub mesh: bool,
    pub subdivided_task: bool,
    pub subdivided_skeleton: bool,
}

impl NamedTask {
    pub fn capabilities(&self) -> Capabilities {
        let has_sub_skel = |t: &Task| t.subdivided_skeleton.is_some();
        Capabilities {
            mesh: self.mesh.is_some(),
            subdivided_task: self.subdivided_task.is_some(),
            subdivided_skeleton: has_sub_skel(&self.task)
                || self.subdivided_task.as_ref().map_or(false, has_sub_skel),
        }
    }

    /// The task that gets drawn: the subdivided one when preferred and present.
    pub fn display_task(&self, prefer_subdivided: bool) -> &Task {
        match &self.subdivided_task {
            Some(t) if prefer_subdivided => t,
            _ => &self.task,
        }
    }
}
