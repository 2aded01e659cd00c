//! Integer grid sizing and triangle coverage tests for tessellations

/// Altitude of an equilateral triangle with the given edge length, rounded
///
/// Rounds half away from zero, so an edge of 1 yields an altitude of 1.
pub fn equilateral_altitude(edge: u32) -> u32 {
    (0.5 * 3.0_f64.sqrt() * f64::from(edge)).round() as u32
}

/// Side of the largest square grid that `count` cells can fill
pub const fn floor_sqrt(count: usize) -> usize {
    count.isqrt()
}

/// Signed area test of point `p` against the directed edge `a -> b`
fn edge_function(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> f64 {
    (b[0] - a[0]).mul_add(p[1] - a[1], -((b[1] - a[1]) * (p[0] - a[0])))
}

/// Whether `p` lies inside or on the boundary of the triangle `abc`
///
/// Winding order does not matter.
pub fn triangle_contains(triangle: &[[f64; 2]; 3], p: [f64; 2]) -> bool {
    let [a, b, c] = *triangle;
    let d1 = edge_function(a, b, p);
    let d2 = edge_function(b, c, p);
    let d3 = edge_function(c, a, p);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}

/// Whether `p` lies inside the ellipse inscribed in a `width` x `height` box at the origin
pub fn ellipse_contains(width: f64, height: f64, p: [f64; 2]) -> bool {
    let rx = width / 2.0;
    let ry = height / 2.0;
    let dx = (p[0] - rx) / rx;
    let dy = (p[1] - ry) / ry;
    dx.mul_add(dx, dy * dy) <= 1.0
}
