use macroquad::prelude::*;

const EPSILON: f32 = 0.0001;

/// Normalize a vector, returning zero instead of NaN for degenerate input.
pub fn normalize_safe(v: Vec2) -> Vec2 {
    let len = v.length();
    if len < EPSILON {
        Vec2::ZERO
    } else {
        v / len
    }
}

/// Rescale `v` so its magnitude does not exceed `max`. A zero `max` always
/// yields the zero vector.
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    if max <= 0.0 {
        return Vec2::ZERO;
    }
    let len_sq = v.length_squared();
    if len_sq > max * max {
        v / len_sq.sqrt() * max
    } else {
        v
    }
}

/// Signed angle in degrees from `from` to `to`, in (-180, 180].
/// Positive means `to` lies counterclockwise of `from` in screen space.
pub fn signed_angle_deg(from: Vec2, to: Vec2) -> f32 {
    if from.length_squared() < EPSILON * EPSILON || to.length_squared() < EPSILON * EPSILON {
        return 0.0;
    }
    let cross = from.x * to.y - from.y * to.x;
    let dot = from.dot(to);
    cross.atan2(dot).to_degrees()
}

/// Linear interpolation with a deliberately unclamped factor; `t` outside
/// [0, 1] overshoots past `b` or behind `a`.
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Unit direction for a heading in degrees (0 = +x, counterclockwise in
/// screen space).
pub fn heading_dir(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    vec2(rad.cos(), rad.sin())
}

/// Axis-aligned box stored as its top-left corner plus extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub extent: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, extent: Vec2) -> Self {
        Self { min, extent }
    }

    pub fn from_center(center: Vec2, extent: Vec2) -> Self {
        Self {
            min: center - extent * 0.5,
            extent,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.extent
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Circle-vs-box overlap via the clamped closest point. Exact boundary
/// contact counts as overlap.
pub fn circle_aabb_overlap(center: Vec2, radius: f32, b: &Aabb) -> bool {
    let max = b.max();
    let closest = vec2(
        center.x.clamp(b.min.x, max.x),
        center.y.clamp(b.min.y, max.y),
    );
    (center - closest).length_squared() <= radius * radius
}

/// Separating-axis overlap test for two axis-aligned boxes. Touching edges
/// count as overlap.
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    let a_max = a.max();
    let b_max = b.max();
    a.min.x <= b_max.x && a_max.x >= b.min.x && a.min.y <= b_max.y && a_max.y >= b.min.y
}

/// Segment-vs-box intersection. Covers a segment fully inside the box, a
/// segment crossing one or more edges, and exact edge contact (all true),
/// as well as a segment fully outside (false).
pub fn segment_aabb_intersects(p0: Vec2, p1: Vec2, b: &Aabb) -> bool {
    if b.contains(p0) || b.contains(p1) {
        return true;
    }
    let max = b.max();
    let top_left = b.min;
    let top_right = vec2(max.x, b.min.y);
    let bottom_left = vec2(b.min.x, max.y);
    let bottom_right = max;

    segments_intersect(p0, p1, top_left, top_right)
        || segments_intersect(p0, p1, top_right, bottom_right)
        || segments_intersect(p0, p1, bottom_right, bottom_left)
        || segments_intersect(p0, p1, bottom_left, top_left)
}

/// Segment-segment intersection with inclusive endpoints.
fn segments_intersect(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> bool {
    let r = a1 - a0;
    let s = b1 - b0;
    let denom = r.x * s.y - r.y * s.x;
    let q = b0 - a0;

    if denom.abs() < EPSILON {
        // Parallel. Collinear overlap still counts as contact.
        if (q.x * r.y - q.y * r.x).abs() > EPSILON {
            return false;
        }
        let r_len_sq = r.length_squared();
        if r_len_sq < EPSILON * EPSILON {
            return b0.distance_squared(a0) < EPSILON * EPSILON;
        }
        let t0 = q.dot(r) / r_len_sq;
        let t1 = (b1 - a0).dot(r) / r_len_sq;
        let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
        return hi >= 0.0 && lo <= 1.0;
    }

    let t = (q.x * s.y - q.y * s.x) / denom;
    let u = (q.x * r.y - q.y * r.x) / denom;
    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_yields_unit_length() {
        for v in [vec2(3.0, 4.0), vec2(-0.2, 0.1), vec2(0.0, 500.0)] {
            assert!((normalize_safe(v).length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn normalize_of_zero_is_zero_not_nan() {
        let n = normalize_safe(Vec2::ZERO);
        assert_eq!(n, Vec2::ZERO);
        assert!(n.x.is_finite() && n.y.is_finite());
    }

    #[test]
    fn clamp_magnitude_caps_long_vectors() {
        let v = clamp_magnitude(vec2(30.0, 40.0), 10.0);
        assert!((v.length() - 10.0).abs() < 1e-4);
        // Direction is preserved
        assert!((v.y / v.x - 40.0 / 30.0).abs() < 1e-4);
    }

    #[test]
    fn clamp_magnitude_zero_max_gives_zero() {
        assert_eq!(clamp_magnitude(vec2(5.0, -2.0), 0.0), Vec2::ZERO);
    }

    #[test]
    fn clamp_magnitude_leaves_short_vectors_alone() {
        let v = vec2(1.0, 1.0);
        assert_eq!(clamp_magnitude(v, 10.0), v);
    }

    #[test]
    fn signed_angle_sign_follows_cross_product() {
        let right = vec2(1.0, 0.0);
        let down = vec2(0.0, 1.0);
        assert!((signed_angle_deg(right, down) - 90.0).abs() < 1e-4);
        assert!((signed_angle_deg(down, right) + 90.0).abs() < 1e-4);
        assert!(signed_angle_deg(right, right).abs() < 1e-4);
    }

    #[test]
    fn signed_angle_of_zero_vector_is_zero() {
        assert_eq!(signed_angle_deg(Vec2::ZERO, vec2(1.0, 0.0)), 0.0);
    }

    #[test]
    fn lerp_overshoots_when_factor_exceeds_one() {
        assert_eq!(lerp_unclamped(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp_unclamped(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp_unclamped(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn heading_dir_matches_cardinal_angles() {
        assert!(heading_dir(0.0).distance(vec2(1.0, 0.0)) < 1e-5);
        assert!(heading_dir(90.0).distance(vec2(0.0, 1.0)) < 1e-5);
        assert!(heading_dir(180.0).distance(vec2(-1.0, 0.0)) < 1e-5);
    }

    fn unit_box() -> Aabb {
        Aabb::new(vec2(0.0, 0.0), vec2(10.0, 10.0))
    }

    #[test]
    fn circle_overlap_boundary_contact_is_positive() {
        let b = unit_box();
        // Center 5 units to the right of the box edge, radius exactly 5.
        assert!(circle_aabb_overlap(vec2(15.0, 5.0), 5.0, &b));
        assert!(!circle_aabb_overlap(vec2(15.0, 5.0), 4.99, &b));
        // Center inside the box.
        assert!(circle_aabb_overlap(vec2(5.0, 5.0), 1.0, &b));
    }

    #[test]
    fn aabb_overlap_touching_edges_count() {
        let a = unit_box();
        let touching = Aabb::new(vec2(10.0, 0.0), vec2(10.0, 10.0));
        let separated = Aabb::new(vec2(10.1, 0.0), vec2(10.0, 10.0));
        assert!(aabb_overlap(&a, &touching));
        assert!(!aabb_overlap(&a, &separated));
    }

    #[test]
    fn segment_fully_outside_misses() {
        let b = unit_box();
        assert!(!segment_aabb_intersects(vec2(20.0, 20.0), vec2(30.0, 25.0), &b));
        // Pointing at the box but stopping short.
        assert!(!segment_aabb_intersects(vec2(15.0, 5.0), vec2(11.0, 5.0), &b));
    }

    #[test]
    fn segment_with_endpoint_inside_hits() {
        let b = unit_box();
        assert!(segment_aabb_intersects(vec2(5.0, 5.0), vec2(30.0, 5.0), &b));
        assert!(segment_aabb_intersects(vec2(30.0, 5.0), vec2(5.0, 5.0), &b));
    }

    #[test]
    fn segment_fully_inside_hits() {
        let b = unit_box();
        assert!(segment_aabb_intersects(vec2(2.0, 2.0), vec2(8.0, 8.0), &b));
    }

    #[test]
    fn segment_crossing_one_edge_hits() {
        let b = unit_box();
        assert!(segment_aabb_intersects(vec2(-5.0, 5.0), vec2(5.0, 5.0), &b));
    }

    #[test]
    fn segment_spanning_whole_box_hits() {
        let b = unit_box();
        assert!(segment_aabb_intersects(vec2(-5.0, 5.0), vec2(15.0, 5.0), &b));
    }

    #[test]
    fn segment_touching_edge_exactly_hits() {
        let b = unit_box();
        // Runs along x = 10, the right edge.
        assert!(segment_aabb_intersects(vec2(10.0, -5.0), vec2(10.0, 15.0), &b));
        // Tip exactly on the left edge.
        assert!(segment_aabb_intersects(vec2(-5.0, 5.0), vec2(0.0, 5.0), &b));
    }
}
