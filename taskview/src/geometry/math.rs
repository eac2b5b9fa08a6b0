use crate::model::Point;

/// Shoelace area; positive for counter-clockwise rings in y-up space.
pub fn signed_area(poly: &[Point]) -> f64 {
    let mut a = 0.0f64;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        a += poly[i].x * poly[j].y - poly[j].x * poly[i].y;
    }
    0.5 * a
}

/// Stub drawn alongside the half-edge `a -> b`: starts at the midpoint and
/// ends short of `b`, both ends pushed by `q` along the left normal.
pub fn adjacency_stub(a: Point, b: Point, q: f64) -> (Point, Point) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let start = Point::new(a.x + 0.5 * dx - q * dy, a.y + 0.5 * dy + q * dx);
    let end = Point::new(b.x - q * dx - q * dy, b.y - q * dy + q * dx);
    (start, end)
}
