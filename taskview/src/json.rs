use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::geometry::limits::{self, check_len};
use crate::geometry::math::signed_area;
use crate::model::{Mesh, NamedTask, Point, Polygon, Segment, Task};

// Superset of every task schema the producer has emitted: current payloads carry
// `outer`/`holes`, older ones a single `silhouette` list.
#[derive(Deserialize)]
struct TaskDe {
    #[serde(default)]
    outer: Option<Polygon>,
    #[serde(default)]
    holes: Vec<Polygon>,
    #[serde(default)]
    silhouette: Option<Vec<Polygon>>,
    #[serde(default)]
    skeleton: Vec<Segment>,
    #[serde(default)]
    subdivided_skeleton: Option<Vec<Segment>>,
}

#[derive(Deserialize)]
struct NamedTaskDe {
    name: String,
    task: TaskDe,
    #[serde(default)]
    subdivided_task: Option<TaskDe>,
    #[serde(default)]
    mesh: Option<Mesh>,
}

/// Splits a legacy silhouette by orientation: the one counter-clockwise ring is
/// the outline, clockwise rings are holes.
fn split_silhouette(name: &str, silhouette: Vec<Polygon>) -> Result<(Polygon, Vec<Polygon>)> {
    let mut outer = Vec::new();
    let mut holes = Vec::new();
    for poly in silhouette {
        let area = signed_area(&poly);
        if area > 0.0 {
            outer.push(poly);
        } else if area < 0.0 {
            holes.push(poly);
        } else {
            return Err(Error::Payload(format!("task '{}': zero-area polygon in silhouette", name)));
        }
    }
    match outer.len() {
        1 => Ok((outer.remove(0), holes)),
        n => Err(Error::Payload(format!(
            "task '{}': silhouette has {} counter-clockwise polygons, expected 1",
            name, n
        ))),
    }
}

fn check_points<'a>(what: &'static str, pts: impl IntoIterator<Item = &'a Point>) -> Result<()> {
    for p in pts {
        if !limits::in_coord_bounds(p.x) || !limits::in_coord_bounds(p.y) {
            return Err(Error::NonFinite { what });
        }
    }
    Ok(())
}

fn check_polygon(name: &str, what: &'static str, poly: &Polygon) -> Result<()> {
    check_len(what, poly.len(), limits::MAX_POLYGON_POINTS)?;
    if !poly.is_empty() && poly.len() < 3 {
        log::warn!("task '{}': {} has only {} points", name, what, poly.len());
    }
    check_points(what, poly)
}

fn check_segments(what: &'static str, segs: &[Segment]) -> Result<()> {
    check_len(what, segs.len(), limits::MAX_SEGMENTS)?;
    check_points(what, segs.iter().flat_map(|s| [&s.0, &s.1]))
}

fn build_task(name: &str, raw: TaskDe) -> Result<Task> {
    let (outer, holes) = match (raw.outer, raw.silhouette) {
        (Some(outer), _) => (outer, raw.holes),
        (None, Some(sil)) => {
            check_len("silhouette", sil.len(), limits::MAX_HOLES + 1)?;
            split_silhouette(name, sil)?
        }
        (None, None) => {
            return Err(Error::Payload(format!("task '{}' has neither outer nor silhouette", name)))
        }
    };
    check_polygon(name, "outer", &outer)?;
    check_len("holes", holes.len(), limits::MAX_HOLES)?;
    for hole in &holes {
        check_polygon(name, "hole", hole)?;
    }
    check_segments("skeleton", &raw.skeleton)?;
    if let Some(sub) = &raw.subdivided_skeleton {
        check_segments("subdivided_skeleton", sub)?;
    }
    Ok(Task { outer, holes, skeleton: raw.skeleton, subdivided_skeleton: raw.subdivided_skeleton })
}

fn check_mesh(name: &str, mesh: &Mesh) -> Result<()> {
    check_len("mesh points", mesh.pts.len(), limits::MAX_MESH_POINTS)?;
    check_len("mesh half-edges", mesh.half_edges.len(), limits::MAX_HALF_EDGES)?;
    check_points("mesh points", &mesh.pts)?;
    mesh.validate().map_err(|e| Error::mesh(name, e))
}

fn build_named(raw: NamedTaskDe) -> Result<NamedTask> {
    check_len("task name", raw.name.len(), limits::MAX_NAME_LEN)?;
    let task = build_task(&raw.name, raw.task)?;
    let subdivided_task = raw.subdivided_task.map(|t| build_task(&raw.name, t)).transpose()?;
    if let Some(mesh) = &raw.mesh {
        check_mesh(&raw.name, mesh)?;
    }
    Ok(NamedTask { name: raw.name, task, subdivided_task, mesh: raw.mesh })
}

pub fn tasks_from_value(v: Value) -> Result<Vec<NamedTask>> {
    if let Some(arr) = v.as_array() {
        check_len("tasks", arr.len(), limits::MAX_TASKS)?;
    }
    let raw: Vec<NamedTaskDe> = serde_json::from_value(v)?;
    let tasks = raw.into_iter().map(build_named).collect::<Result<Vec<_>>>()?;
    let with_mesh = tasks.iter().filter(|t| t.capabilities().mesh).count();
    let subdivided = tasks.iter().filter(|t| t.capabilities().subdivided_task).count();
    log::info!(
        "loaded {} tasks ({} with mesh, {} with subdivided task)",
        tasks.len(),
        with_mesh,
        subdivided
    );
    Ok(tasks)
}

pub fn tasks_from_str(s: &str) -> Result<Vec<NamedTask>> {
    let v: Value = serde_json::from_str(s)?;
    tasks_from_value(v)
}

pub fn tasks_to_string(tasks: &[NamedTask]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}
