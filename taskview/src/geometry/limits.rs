// Centralized ingestion limits for task payloads

// Payload size caps
pub const MAX_TASKS: usize = 100_000;
pub const MAX_NAME_LEN: usize = 4_096;

// Per-task geometry
pub const MAX_POLYGON_POINTS: usize = 1_000_000;
pub const MAX_HOLES: usize = 100_000;
pub const MAX_SEGMENTS: usize = 2_000_000;

// Mesh caps
pub const MAX_MESH_POINTS: usize = 2_000_000;
pub const MAX_HALF_EDGES: usize = 8_000_000;

// Numeric bounds
pub const COORD_MIN: f64 = -1.0e12;
pub const COORD_MAX: f64 = 1.0e12;

#[inline]
pub fn in_coord_bounds(x: f64) -> bool { x.is_finite() && x >= COORD_MIN && x <= COORD_MAX }

#[inline]
pub fn check_len(what: &'static str, len: usize, max: usize) -> Result<(), crate::Error> {
    if len > max {
        Err(crate::Error::LimitExceeded { what, max, got: len })
    } else {
        Ok(())
    }
}
