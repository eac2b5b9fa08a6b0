use serde_json::json;
use taskview::algorithms::halfedge::MeshError;
use taskview::json::{tasks_from_str, tasks_from_value, tasks_to_string};
use taskview::{Error, Viewer, ViewerConfig};

fn triangle_task(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "task": {
            "outer": [[0, 0], [4, 0], [0, 3]],
            "holes": [],
            "skeleton": [[[0, 0], [4, 0]], [[4, 0], [0, 3]]]
        }
    })
}

#[test]
fn json_caps_exceeded_tasks() {
    let too_many = 100_001usize;
    let v = serde_json::Value::Array((0..too_many).map(|_| json!({})).collect());
    assert!(matches!(
        tasks_from_value(v),
        Err(Error::LimitExceeded { what: "tasks", got: 100_001, .. })
    ));
}

#[test]
fn json_out_of_range_coordinates() {
    let v = json!([{
        "name": "huge",
        "task": { "outer": [[1.0e300, 0.0], [0, 1], [1, 1]], "holes": [], "skeleton": [] }
    }]);
    assert_eq!(tasks_from_value(v), Err(Error::NonFinite { what: "outer" }));
}

#[test]
fn not_json_is_payload_error() {
    let err = tasks_from_str("{ nope").unwrap_err();
    assert_eq!(err.code(), "payload");
}

#[test]
fn optional_parts_are_detected() {
    let mut with_mesh = triangle_task("m");
    with_mesh["subdivided_task"] = with_mesh["task"].clone();
    with_mesh["mesh"] = json!({
        "pts": [[0, 0], [4, 0], [0, 3]],
        "half_edges": [[0, 1], [1, 2], [2, 0], [1, 0], [2, 1], [0, 2]],
        "next": [1, 2, 0, 5, 3, 4],
        "he_poly": [0, 0, 0, 1, 1, 1],
        "poly_he": [0, 3],
        "poly_real": [true, false]
    });
    let tasks = tasks_from_value(json!([triangle_task("plain"), with_mesh])).unwrap();
    let plain = tasks[0].capabilities();
    assert!(!plain.mesh && !plain.subdivided_task && !plain.subdivided_skeleton);
    let full = tasks[1].capabilities();
    assert!(full.mesh && full.subdivided_task);
    assert_eq!(tasks[1].mesh.as_ref().unwrap().half_edges[3], (1, 0));
}

#[test]
fn dangling_mesh_index_rejected_at_load() {
    let mut t = triangle_task("bad");
    t["mesh"] = json!({
        "pts": [[0, 0], [4, 0], [0, 3]],
        "half_edges": [[0, 1], [1, 2], [2, 0]],
        "next": [1, 2, 7],
        "he_poly": [0, 0, 0],
        "poly_he": [0],
        "poly_real": [true]
    });
    let err = tasks_from_value(json!([t])).unwrap_err();
    assert_eq!(err.code(), "invalid_mesh");
    assert!(matches!(
        err,
        Error::Mesh { source: MeshError::OutOfRange { array: "half_edges", index: 7, len: 3 }, .. }
    ));
}

#[test]
fn subdivided_skeleton_is_optional_field() {
    let mut t = triangle_task("s");
    t["task"]["subdivided_skeleton"] = json!([[[0, 0], [2, 0]], [[2, 0], [4, 0]]]);
    let tasks = tasks_from_value(json!([t])).unwrap();
    assert_eq!(tasks[0].task.subdivided_skeleton.as_ref().map(|s| s.len()), Some(2));
    assert!(tasks[0].capabilities().subdivided_skeleton);
}

#[test]
fn serialized_tasks_load_again() {
    let tasks = tasks_from_value(json!([triangle_task("a"), triangle_task("b")])).unwrap();
    let text = tasks_to_string(&tasks).unwrap();
    assert!(text.contains(r#""outer":[[0.0,0.0],[4.0,0.0],[0.0,3.0]]"#));
    let viewer = Viewer::from_json_str(&text, ViewerConfig::default()).unwrap();
    assert_eq!(viewer.len(), 2);
    assert_eq!(viewer.tasks(), &tasks[..]);
}

#[test]
fn empty_array_cannot_be_viewed() {
    assert_eq!(
        Viewer::from_json_str("[]", ViewerConfig::default()).err(),
        Some(Error::EmptyTaskList)
    );
}
