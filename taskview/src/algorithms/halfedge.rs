use std::fmt;

use crate::model::{FaceId, HalfEdgeId, Mesh, Point};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The `next` cycle starting at `start` did not come back within `steps`.
    Malformed { start: HalfEdgeId, steps: usize },
    OutOfRange { array: &'static str, index: usize, len: usize },
    LengthMismatch { array: &'static str, expected: usize, got: usize },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::Malformed { start, steps } => write!(
                f,
                "half-edge {} does not close its face cycle within {} steps",
                start, steps
            ),
            MeshError::OutOfRange { array, index, len } => {
                write!(f, "{} index {} out of range (len {})", array, index, len)
            }
            MeshError::LengthMismatch { array, expected, got } => {
                write!(f, "{} has {} entries, expected {}", array, got, expected)
            }
        }
    }
}

impl std::error::Error for MeshError {}

#[inline]
fn get<T: Copy>(array: &'static str, v: &[T], index: usize) -> Result<T, MeshError> {
    v.get(index).copied().ok_or(MeshError::OutOfRange { array, index, len: v.len() })
}

impl Mesh {
    /// Checks array lengths and that every stored index points inside its target array.
    /// Cycle structure is left to the bounded walk in [`face_half_edges`].
    pub fn validate(&self) -> Result<(), MeshError> {
        let n_he = self.half_edge_count();
        let n_faces = self.face_count();
        if self.next.len() != n_he {
            return Err(MeshError::LengthMismatch { array: "next", expected: n_he, got: self.next.len() });
        }
        if self.he_poly.len() != n_he {
            return Err(MeshError::LengthMismatch { array: "he_poly", expected: n_he, got: self.he_poly.len() });
        }
        if self.poly_real.len() != n_faces {
            return Err(MeshError::LengthMismatch {
                array: "poly_real",
                expected: n_faces,
                got: self.poly_real.len(),
            });
        }
        for &(a, b) in &self.half_edges {
            get("pts", &self.pts, a as usize)?;
            get("pts", &self.pts, b as usize)?;
        }
        for &h in self.next.iter().chain(self.poly_he.iter()) {
            get("half_edges", &self.half_edges, h as usize)?;
        }
        for &f in &self.he_poly {
            get("poly_real", &self.poly_real, f as usize)?;
        }
        Ok(())
    }
}

/// Half-edges of the face containing `start`, in `next` order, beginning with `start`.
pub fn face_half_edges(mesh: &Mesh, start: HalfEdgeId) -> Result<Vec<HalfEdgeId>, MeshError> {
    let limit = mesh.half_edge_count();
    get("half_edges", &mesh.half_edges, start as usize)?;
    let mut out = Vec::new();
    let mut h = start;
    loop {
        if out.len() >= limit {
            return Err(MeshError::Malformed { start, steps: out.len() });
        }
        out.push(h);
        h = get("next", &mesh.next, h as usize)?;
        if h == start {
            return Ok(out);
        }
    }
}

/// Ordered vertex loop of the face containing `start`: the origin of each half-edge.
pub fn face_loop(mesh: &Mesh, start: HalfEdgeId) -> Result<Vec<Point>, MeshError> {
    face_half_edges(mesh, start)?
        .into_iter()
        .map(|h| {
            let (origin, _) = get("half_edges", &mesh.half_edges, h as usize)?;
            get("pts", &mesh.pts, origin as usize)
        })
        .collect()
}

/// Faces flagged real, in face-index order. Faces without a flag count as sentinels.
pub fn real_faces(mesh: &Mesh) -> impl Iterator<Item = FaceId> + '_ {
    (0..mesh.face_count())
        .filter(move |&i| mesh.poly_real.get(i).copied().unwrap_or(false))
        .map(|i| i as FaceId)
}

/// Half-edges whose face is real.
pub fn real_half_edges(mesh: &Mesh) -> impl Iterator<Item = HalfEdgeId> + '_ {
    mesh.he_poly
        .iter()
        .enumerate()
        .filter(move |&(_, &f)| mesh.poly_real.get(f as usize).copied().unwrap_or(false))
        .map(|(h, _)| h as HalfEdgeId)
}

/// Vertex loops of every real face, in paint order.
pub fn real_face_loops(mesh: &Mesh) -> Result<Vec<Vec<Point>>, MeshError> {
    real_faces(mesh)
        .map(|f| face_loop(mesh, get("poly_he", &mesh.poly_he, f as usize)?))
        .collect()
}
