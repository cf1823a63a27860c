use eframe::egui::{Color32, Painter, Pos2, Stroke, pos2};

/// Identity of a logical dependency edge: `to` consumes the output of `from`.
///
/// Equality is structural over the two step ids. The same logical edge is
/// instantiated once per view region that draws it (main canvas, minimap),
/// and highlight membership compares keys, never instances.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(in crate::app) struct EdgeKey {
    pub from: String,
    pub to: String,
}

impl EdgeKey {
    pub(in crate::app) fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

pub(in crate::app) const EDGE_STROKE: f32 = 2.5;
/// The minified view draws thicker so edges stay legible at small scale.
pub(in crate::app) const EDGE_STROKE_COMPACT: f32 = 4.0;
/// Inner cutout stroke, always thinner than both outer tiers.
pub(in crate::app) const EDGE_HALO_STROKE: f32 = 1.2;
pub(in crate::app) const EDGE_HOVER_TOLERANCE: f32 = 6.0;

pub(in crate::app) const CANVAS_BACKGROUND: Color32 = Color32::from_rgb(19, 23, 29);
const EDGE_COLOR_HIGHLIGHTED: Color32 = Color32::from_gray(226);
const EDGE_COLOR_MUTED: Color32 = Color32::from_rgb(86, 96, 110);

/// Orthogonal route from `source` to `target` through the shared trunk line:
/// horizontal to the trunk at the source's y, vertical along the trunk,
/// horizontal to the target. Always exactly these four points; when
/// `source.y == target.y` the vertical segment has zero length and the path
/// degenerates to a straight horizontal line.
pub(in crate::app) fn route_waypoints(source: Pos2, target: Pos2, trunk_x: f32) -> [Pos2; 4] {
    [
        source,
        pos2(trunk_x, source.y),
        pos2(trunk_x, target.y),
        target,
    ]
}

pub(in crate::app) fn hit_test(waypoints: &[Pos2; 4], pointer: Pos2, tolerance: f32) -> bool {
    waypoints
        .windows(2)
        .any(|pair| segment_distance(pointer, pair[0], pair[1]) <= tolerance)
}

fn segment_distance(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq <= f32::EPSILON {
        return a.distance(point);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(point)
}

/// Two-pass rendering: the outer colored stroke first, then a narrower
/// background-colored stroke on top, so crossing edges read as separate
/// lines instead of merging into a blob.
pub(in crate::app) fn draw_dependency_edge(
    painter: &Painter,
    source: Pos2,
    target: Pos2,
    trunk_x: f32,
    compact: bool,
    highlighted: bool,
) {
    let waypoints = route_waypoints(source, target, trunk_x);
    let outer_width = if compact { EDGE_STROKE_COMPACT } else { EDGE_STROKE };
    let outer_color = if highlighted {
        EDGE_COLOR_HIGHLIGHTED
    } else {
        EDGE_COLOR_MUTED
    };

    for pair in waypoints.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(outer_width, outer_color));
    }
    for pair in waypoints.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(EDGE_HALO_STROKE, CANVAS_BACKGROUND));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_bends_through_the_trunk() {
        let source = pos2(40.0, 120.0);
        let target = pos2(300.0, 30.0);
        let waypoints = route_waypoints(source, target, 220.0);

        assert_eq!(
            waypoints,
            [
                pos2(40.0, 120.0),
                pos2(220.0, 120.0),
                pos2(220.0, 30.0),
                pos2(300.0, 30.0),
            ]
        );
    }

    #[test]
    fn route_shape_holds_for_reversed_endpoints() {
        // Target left of and below the source; still the same four points.
        let waypoints = route_waypoints(pos2(300.0, 10.0), pos2(20.0, 200.0), 150.0);
        assert_eq!(waypoints[1], pos2(150.0, 10.0));
        assert_eq!(waypoints[2], pos2(150.0, 200.0));
        assert_eq!(waypoints[3], pos2(20.0, 200.0));
    }

    #[test]
    fn degenerate_route_is_a_finite_horizontal_line() {
        let waypoints = route_waypoints(pos2(10.0, 50.0), pos2(400.0, 50.0), 90.0);

        for point in &waypoints {
            assert!(point.x.is_finite() && point.y.is_finite());
            assert_eq!(point.y, 50.0);
        }
        // The trunk segment collapses to zero length without erroring.
        assert_eq!(waypoints[1], waypoints[2]);
    }

    #[test]
    fn hit_test_matches_points_near_any_segment() {
        let waypoints = route_waypoints(pos2(0.0, 0.0), pos2(200.0, 100.0), 120.0);

        // Near the first horizontal segment.
        assert!(hit_test(&waypoints, pos2(60.0, 4.0), 6.0));
        // Near the vertical trunk segment.
        assert!(hit_test(&waypoints, pos2(124.0, 50.0), 6.0));
        // Near the final horizontal segment.
        assert!(hit_test(&waypoints, pos2(170.0, 96.0), 6.0));
        // Far from every segment.
        assert!(!hit_test(&waypoints, pos2(60.0, 60.0), 6.0));
    }

    #[test]
    fn hit_test_handles_zero_length_segments() {
        let waypoints = route_waypoints(pos2(0.0, 20.0), pos2(100.0, 20.0), 50.0);
        assert!(hit_test(&waypoints, pos2(50.0, 22.0), 6.0));
        assert!(!hit_test(&waypoints, pos2(50.0, 40.0), 6.0));
    }

    #[test]
    fn stroke_tiers_are_ordered() {
        assert!(EDGE_STROKE_COMPACT > EDGE_STROKE);
        assert!(EDGE_HALO_STROKE < EDGE_STROKE);
        assert!(EDGE_HALO_STROKE < EDGE_STROKE_COMPACT);
    }
}
