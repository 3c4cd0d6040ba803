//! Geometry primitives shared by the obstacle query and the planners.
//!
//! Everything here is pure and allocation free. Degenerate configurations
//! (parallel lines, zero-length vectors, points on a circle boundary) are
//! reported as `None` instead of producing NaN or infinities.

use super::math::{approx_eq, rad_to_deg, sq};
use super::{Circle, Vector2D, Vector3D};

/// Rotate `point` around `origin` by `degrees` (counter-clockwise on screen).
#[inline]
pub fn rotate_point(origin: Vector2D, point: Vector2D, degrees: f64) -> Vector2D {
    origin + (point - origin).rotate(degrees)
}

/// Translate `point` by `offset`.
#[inline]
pub fn translate_point(point: Vector2D, offset: Vector2D) -> Vector2D {
    point + offset
}

/// Magnitude of the 2D cross product.
#[inline]
pub fn cross_product(a: Vector2D, b: Vector2D) -> f64 {
    a.cross(&b)
}

/// 2D dot product.
#[inline]
pub fn dot_product(a: Vector2D, b: Vector2D) -> f64 {
    a.dot(&b)
}

/// 3D cross product.
#[inline]
pub fn cross_product_3d(a: Vector3D, b: Vector3D) -> Vector3D {
    Vector3D::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// 3D dot product.
#[inline]
pub fn dot_product_3d(a: Vector3D, b: Vector3D) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Intersection of the infinite lines through `(l1p1, l1p2)` and `(l2p1, l2p2)`.
///
/// Returns `None` for parallel or collinear lines.
///
/// # Example
/// ```
/// use marga_plan::core::{Vector2D, geometry::line_line_intersection};
///
/// let p = line_line_intersection(
///     Vector2D::new(2.0, 2.0),
///     Vector2D::new(-1.0, -1.0),
///     Vector2D::new(0.0, 3.0),
///     Vector2D::new(7.0, 3.0),
/// )
/// .unwrap();
/// assert!((p.x - 3.0).abs() < 1e-9 && (p.y - 3.0).abs() < 1e-9);
/// ```
pub fn line_line_intersection(
    l1p1: Vector2D,
    l1p2: Vector2D,
    l2p1: Vector2D,
    l2p2: Vector2D,
) -> Option<Vector2D> {
    let l1dir = l1p1 - l1p2;
    let l2dir = l2p1 - l2p2;
    let denom = cross_product(l1dir, l2dir);
    if approx_eq(denom, 0.0) {
        return None;
    }

    let l1cp = cross_product(l1p1, l1p2);
    let l2cp = cross_product(l2p1, l2p2);
    Some(Vector2D::new(
        (l2dir.x * l1cp - l1dir.x * l2cp) / denom,
        (l2dir.y * l1cp - l1dir.y * l2cp) / denom,
    ))
}

/// Signed side products of both segment endpoints against a line.
#[inline]
fn side_product(seg_a: Vector2D, seg_b: Vector2D, line_a: Vector2D, line_b: Vector2D) -> f64 {
    let line_dir = line_b - line_a;
    cross_product(line_dir, seg_a - line_a) * cross_product(line_dir, seg_b - line_a)
}

/// Whether the segment `(seg_a, seg_b)` touches or crosses the infinite
/// line through `(line_a, line_b)`.
#[inline]
pub fn segment_intersects_line(
    seg_a: Vector2D,
    seg_b: Vector2D,
    line_a: Vector2D,
    line_b: Vector2D,
) -> bool {
    side_product(seg_a, seg_b, line_a, line_b) <= 0.0
}

/// Whether `p` lies inside triangle `abc` (boundary inclusive).
pub fn is_point_in_triangle(p: Vector2D, a: Vector2D, b: Vector2D, c: Vector2D) -> bool {
    side_product(p, a, b, c) >= 0.0
        && side_product(p, b, a, c) >= 0.0
        && side_product(p, c, a, b) >= 0.0
}

/// Whether `p` lies inside a convex quadrilateral with vertices given in
/// clockwise order.
pub fn is_point_in_quadrilateral(
    p: Vector2D,
    q1: Vector2D,
    q2: Vector2D,
    q3: Vector2D,
    q4: Vector2D,
) -> bool {
    is_point_in_triangle(p, q1, q2, q3) || is_point_in_triangle(p, q3, q4, q1)
}

/// The two points where lines from `point` touch `circle`.
///
/// Returns `None` when the point lies inside or on the circle.
///
/// # Example
/// ```
/// use marga_plan::core::{Circle, Vector2D, geometry::circle_tangent_points};
///
/// let circle = Circle::new(Vector2D::new(5.0, 0.0), 3.0);
/// let (a, b) = circle_tangent_points(&circle, Vector2D::ZERO).unwrap();
/// // 3-4-5 triangle: tangent leg is 4
/// assert!((a.length() - 4.0).abs() < 1e-9);
/// assert!((b.distance(&circle.centre) - 3.0).abs() < 1e-9);
/// ```
pub fn circle_tangent_points(circle: &Circle, point: Vector2D) -> Option<(Vector2D, Vector2D)> {
    let to_centre = circle.centre - point;
    let hypotenuse = to_centre.length();
    let radius = circle.radius();
    if hypotenuse <= radius {
        return None;
    }

    let half_angle = rad_to_deg((radius / hypotenuse).asin());
    let leg = to_centre.with_length((sq(hypotenuse) - sq(radius)).sqrt());

    Some((point + leg.rotate(half_angle), point + leg.rotate(-half_angle)))
}

/// Move `point` along the centre→point ray so that it sits `new_distance`
/// away from the circle centre.
///
/// A point exactly at the centre has no ray; it is moved along +X.
pub fn change_point_distance_to_circle(circle: &Circle, point: Vector2D, new_distance: f64) -> Vector2D {
    let offset = point - circle.centre;
    let offset = if offset.approx_eq(&Vector2D::ZERO) {
        Vector2D::new(1.0, 0.0)
    } else {
        offset
    };
    circle.centre + offset.with_length(new_distance)
}

/// Orthogonal projection of `p` onto the infinite line through `a` and `b`.
///
/// Falls back to `a` when the line is degenerate.
pub fn closest_point_on_line(p: Vector2D, a: Vector2D, b: Vector2D) -> Vector2D {
    let dir = b - a;
    let len_sq = dir.dot(&dir);
    if approx_eq(len_sq, 0.0) {
        return a;
    }
    a + dir * ((p - a).dot(&dir) / len_sq)
}

/// Shortest distance from `p` to the segment `(a, b)`.
pub fn point_segment_distance(p: Vector2D, a: Vector2D, b: Vector2D) -> f64 {
    let dir = b - a;
    let len_sq = dir.dot(&dir);
    if approx_eq(len_sq, 0.0) {
        return p.distance(&a);
    }
    let t = ((p - a).dot(&dir) / len_sq).clamp(0.0, 1.0);
    p.distance(&(a + dir * t))
}

/// Whether the segment `(a, b)` passes through the interior of `circle`.
///
/// Touching the boundary does not count, so a sight line ending at a
/// tangent point of the same circle is not reported.
#[inline]
pub fn segment_intersects_circle(a: Vector2D, b: Vector2D, circle: &Circle) -> bool {
    point_segment_distance(circle.centre, a, b) < circle.radius() - 1e-6
}

/// Cast a ray from `origin` along `direction` against the segment `(s1, s2)`.
///
/// Returns the vector from the origin to the hit point (so its length is
/// the hit distance), or `None` when the segment is parallel to or behind
/// the ray, or missed entirely.
pub fn ray_segment_intersection(
    origin: Vector2D,
    direction: Vector2D,
    s1: Vector2D,
    s2: Vector2D,
) -> Option<Vector2D> {
    let edge = s2 - s1;
    let denom = direction.cross(&edge);
    if approx_eq(denom, 0.0) {
        return None;
    }

    let w = s1 - origin;
    let t = w.cross(&edge) / denom;
    let u = w.cross(&direction) / denom;
    if t < 0.0 || !(0.0..=1.0).contains(&u) {
        return None;
    }
    Some(direction * t)
}

/// Corners of a `length` x `width` rectangle centred on `centre` and facing
/// `angle` degrees, in clockwise order: front-left, front-right, back-right,
/// back-left.
pub fn position_rectangle(length: f64, width: f64, centre: Vector2D, angle: f64) -> [Vector2D; 4] {
    let hl = length / 2.0;
    let hw = width / 2.0;
    [
        Vector2D::new(hl, -hw),
        Vector2D::new(hl, hw),
        Vector2D::new(-hl, hw),
        Vector2D::new(-hl, -hw),
    ]
    .map(|corner| centre + corner.rotate(angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vector2D {
        Vector2D::new(x, y)
    }

    #[test]
    fn test_rotate_point_around_origin() {
        let p = rotate_point(v(10.0, 10.0), v(20.0, 10.0), 90.0);
        assert_relative_eq!(p.x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);

        let t = translate_point(p, v(1.0, 2.0));
        assert_relative_eq!(t.x, 11.0, epsilon = 1e-9);
        assert_relative_eq!(t.y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_products_3d() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(cross_product_3d(x, y), Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(cross_product_3d(y, x), Vector3D::new(0.0, 0.0, -1.0));
        assert_eq!(dot_product_3d(x, y), 0.0);

        let planar = cross_product_3d(Vector3D::from_planar(v(1.0, 2.0)), Vector3D::from_planar(v(3.0, 4.0)));
        assert_relative_eq!(planar.z, cross_product(v(1.0, 2.0), v(3.0, 4.0)));
        assert_relative_eq!(dot_product(v(1.0, 2.0), v(3.0, 4.0)), 11.0);
    }

    #[test]
    fn test_line_line_intersection() {
        let p = line_line_intersection(v(2.0, 2.0), v(-1.0, -1.0), v(0.0, 3.0), v(7.0, 3.0)).unwrap();
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 3.0, epsilon = 1e-9);

        // Parallel lines
        assert!(line_line_intersection(v(2.0, 2.0), v(-1.0, -1.0), v(-1.0, -2.0), v(2.0, 1.0)).is_none());
        // Collinear lines
        assert!(line_line_intersection(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0), v(3.0, 3.0)).is_none());
    }

    #[test]
    fn test_segment_intersects_line() {
        assert!(segment_intersects_line(v(0.0, -1.0), v(0.0, 1.0), v(-5.0, 0.0), v(5.0, 0.0)));
        assert!(!segment_intersects_line(v(0.0, 1.0), v(0.0, 2.0), v(-5.0, 0.0), v(5.0, 0.0)));
        // Touching counts
        assert!(segment_intersects_line(v(0.0, 0.0), v(0.0, 2.0), v(-5.0, 0.0), v(5.0, 0.0)));
    }

    #[test]
    fn test_point_in_triangle() {
        assert!(is_point_in_triangle(v(1.0, 2.0), v(0.0, 0.0), v(4.0, 0.0), v(0.0, 3.0)));
        assert!(is_point_in_triangle(v(0.0, 0.0), v(-3.0, -2.0), v(4.0, 0.0), v(0.0, 3.0)));
        assert!(!is_point_in_triangle(v(3.0, 3.0), v(0.0, 0.0), v(4.0, 0.0), v(0.0, 3.0)));
        // Vertex is on the boundary
        assert!(is_point_in_triangle(v(4.0, 0.0), v(0.0, 0.0), v(4.0, 0.0), v(0.0, 3.0)));
    }

    #[test]
    fn test_point_in_quadrilateral() {
        let [fl, fr, br, bl] = position_rectangle(20.0, 18.0, Vector2D::ZERO, 0.0);
        assert!(is_point_in_quadrilateral(v(0.0, 1.0), fl, fr, br, bl));
        assert!(is_point_in_quadrilateral(v(9.0, 8.0), fl, fr, br, bl));
        assert!(!is_point_in_quadrilateral(v(11.0, 0.0), fl, fr, br, bl));
        assert!(!is_point_in_quadrilateral(v(0.0, -9.5), fl, fr, br, bl));
    }

    #[test]
    fn test_tangent_points_distances() {
        let circle = Circle::new(v(120.0, 56.85), 30.0);
        let point = v(20.0, 56.85);
        let h = circle.centre.distance(&point);
        let leg = (h * h - 30.0 * 30.0).sqrt();

        let (a, b) = circle_tangent_points(&circle, point).unwrap();
        for tp in [a, b] {
            assert_relative_eq!(tp.distance(&circle.centre), 30.0, epsilon = 1e-9);
            assert_relative_eq!(tp.distance(&point), leg, epsilon = 1e-9);
            // Radius is perpendicular to the tangent line
            assert_relative_eq!((tp - circle.centre).dot(&(tp - point)), 0.0, epsilon = 1e-6);
        }
        // One on each side of the centre line
        assert!((a.y - 56.85) * (b.y - 56.85) < 0.0);
    }

    #[test]
    fn test_tangent_points_inside_or_on_circle() {
        let circle = Circle::new(v(0.0, 0.0), 10.0);
        assert!(circle_tangent_points(&circle, v(3.0, 4.0)).is_none());
        assert!(circle_tangent_points(&circle, v(10.0, 0.0)).is_none());
        assert!(circle_tangent_points(&circle, v(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_change_point_distance_to_circle() {
        let circle = Circle::new(v(10.0, 10.0), 5.0);
        let moved = change_point_distance_to_circle(&circle, v(12.0, 10.0), 8.0);
        assert_relative_eq!(moved.x, 18.0, epsilon = 1e-9);
        assert_relative_eq!(moved.y, 10.0, epsilon = 1e-9);

        let inward = change_point_distance_to_circle(&circle, v(10.0, 30.0), 2.0);
        assert_relative_eq!(inward.y, 12.0, epsilon = 1e-9);

        let from_centre = change_point_distance_to_circle(&circle, circle.centre, 6.0);
        assert_relative_eq!(from_centre.distance(&circle.centre), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_closest_point_on_line() {
        let p = closest_point_on_line(v(6.0, 3.0), v(7.0, 1.0), v(8.0, 2.0));
        assert_relative_eq!(p.x, 7.5, epsilon = 1e-9);
        assert_relative_eq!(p.y, 1.5, epsilon = 1e-9);

        let p = closest_point_on_line(v(6.0, 2.0), v(7.0, 1.0), v(8.0, 2.0));
        assert_relative_eq!(p.x, 7.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-9);

        assert_eq!(closest_point_on_line(v(1.0, 1.0), v(2.0, 2.0), v(2.0, 2.0)), v(2.0, 2.0));
    }

    #[test]
    fn test_segment_intersects_circle() {
        let circle = Circle::new(v(0.0, 0.0), 5.0);
        assert!(segment_intersects_circle(v(-10.0, 0.0), v(10.0, 0.0), &circle));
        assert!(!segment_intersects_circle(v(-10.0, 6.0), v(10.0, 6.0), &circle));
        // Segment stops short of the circle
        assert!(!segment_intersects_circle(v(-20.0, 0.0), v(-10.0, 0.0), &circle));
        // Grazing the boundary is allowed
        assert!(!segment_intersects_circle(v(-10.0, 5.0), v(10.0, 5.0), &circle));
    }

    #[test]
    fn test_ray_segment_intersection() {
        let hit = ray_segment_intersection(v(0.0, 0.0), v(1.0, 0.0), v(5.0, -1.0), v(5.0, 1.0)).unwrap();
        assert_relative_eq!(hit.length(), 5.0, epsilon = 1e-9);

        // Behind the origin
        assert!(ray_segment_intersection(v(0.0, 0.0), v(-1.0, 0.0), v(5.0, -1.0), v(5.0, 1.0)).is_none());
        // Parallel
        assert!(ray_segment_intersection(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0), v(5.0, 1.0)).is_none());
        // Misses the segment
        assert!(ray_segment_intersection(v(1.0, 2.0), v(10.0, 2.0), v(9.0, 3.0), v(7.0, 1.0)).is_none());
    }

    #[test]
    fn test_position_rectangle_rotated() {
        let corners = position_rectangle(20.0, 18.0, v(50.0, 50.0), 90.0);
        // Facing screen-up: the front edge is at y = 40
        assert_relative_eq!(corners[0].y, 40.0, epsilon = 1e-9);
        assert_relative_eq!(corners[1].y, 40.0, epsilon = 1e-9);
        assert_relative_eq!(corners[2].y, 60.0, epsilon = 1e-9);
        for c in corners {
            assert_relative_eq!(c.distance(&v(50.0, 50.0)), (10.0f64.powi(2) + 9.0f64.powi(2)).sqrt(), epsilon = 1e-9);
        }
    }
}
