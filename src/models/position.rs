/// A point on the galaxy map or inside a galaxy, as `(x, y)`.
pub type Point = (f64, f64);

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.0 - b.0).abs();
    let dy = (a.1 - b.1).abs();
    (dx * dx + dy * dy).sqrt()
}

/// True when `b` lies within `radius` of `a` (boundary inclusive).
pub fn within_radius(a: Point, b: Point, radius: f64) -> bool {
    distance(a, b) <= radius
}
