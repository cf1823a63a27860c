use std::collections::{HashMap, HashSet};

use eframe::egui::{Pos2, Rect, pos2};

use crate::plan::PlanGraph;

pub(super) const NODE_WIDTH: f32 = 150.0;
pub(super) const NODE_HEIGHT: f32 = 34.0;
const COLUMN_GAP: f32 = 90.0;
const ROW_GAP: f32 = 26.0;
const TRUNK_GAP: f32 = 44.0;

/// World-space layout for one plan: a top-left anchor per step, the single
/// shared trunk x every edge bends through, and the node-field bounds.
pub(super) struct GraphLayout {
    pub points: HashMap<String, Pos2>,
    pub trunk_x: f32,
    pub world_bounds: Rect,
}

/// Column = dependency depth (longest upstream chain), rows stacked in stable
/// id order within a column. Cycles are cut, not reported: a step reached
/// again while its own depth is being computed counts as depth zero.
pub(super) fn layered_layout(graph: &PlanGraph) -> GraphLayout {
    let mut ids = graph.nodes.keys().map(String::as_str).collect::<Vec<_>>();
    ids.sort_unstable();

    let mut depths: HashMap<&str, usize> = HashMap::with_capacity(ids.len());
    let mut visiting = HashSet::new();
    for id in &ids {
        chain_depth(id, graph, &mut depths, &mut visiting);
    }

    let mut rows_in_column: HashMap<usize, usize> = HashMap::new();
    let mut points = HashMap::with_capacity(ids.len());
    let mut max_x = 0.0_f32;
    let mut max_y = 0.0_f32;

    for id in &ids {
        let depth = depths.get(id).copied().unwrap_or(0);
        let row = rows_in_column.entry(depth).or_insert(0);
        let anchor = pos2(
            depth as f32 * (NODE_WIDTH + COLUMN_GAP),
            *row as f32 * (NODE_HEIGHT + ROW_GAP),
        );
        *row += 1;

        max_x = max_x.max(anchor.x + NODE_WIDTH);
        max_y = max_y.max(anchor.y + NODE_HEIGHT);
        points.insert((*id).to_owned(), anchor);
    }

    let trunk_x = max_x + TRUNK_GAP;

    GraphLayout {
        points,
        trunk_x,
        world_bounds: Rect::from_min_max(pos2(0.0, 0.0), pos2(trunk_x, max_y)),
    }
}

fn chain_depth<'a>(
    id: &'a str,
    graph: &'a PlanGraph,
    depths: &mut HashMap<&'a str, usize>,
    visiting: &mut HashSet<&'a str>,
) -> usize {
    if let Some(&depth) = depths.get(id) {
        return depth;
    }
    if !visiting.insert(id) {
        return 0;
    }

    let depth = graph
        .nodes
        .get(id)
        .map(|step| {
            step.depends_on
                .iter()
                .map(|upstream| chain_depth(upstream, graph, depths, visiting) + 1)
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0);

    visiting.remove(id);
    depths.insert(id, depth);
    depth
}

/// Map the zoom slider's [0, 100] value onto the world-to-screen scale factor.
pub(super) fn zoom_scale(value: f32) -> f32 {
    0.35 + (value.clamp(0.0, 100.0) / 100.0) * 1.85
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::test_support::graph_from_json;

    #[test]
    fn dependencies_sit_in_earlier_columns() {
        let graph = graph_from_json(
            r#"{"steps": [
                {"id": "a"},
                {"id": "b", "depends_on": ["a"]},
                {"id": "c", "depends_on": ["a", "b"]}
            ]}"#,
        );
        let layout = layered_layout(&graph);

        assert!(layout.points["a"].x < layout.points["b"].x);
        assert!(layout.points["b"].x < layout.points["c"].x);
    }

    #[test]
    fn every_step_gets_a_point_and_the_trunk_clears_the_node_field() {
        let graph = graph_from_json(
            r#"{"steps": [
                {"id": "a"},
                {"id": "b", "depends_on": ["a"]},
                {"id": "c", "depends_on": ["a"]},
                {"id": "d", "depends_on": ["b", "c"]}
            ]}"#,
        );
        let layout = layered_layout(&graph);

        assert_eq!(layout.points.len(), graph.node_count());
        for anchor in layout.points.values() {
            assert!(anchor.x + NODE_WIDTH < layout.trunk_x);
        }
        assert!(layout.world_bounds.width() > 0.0);
    }

    #[test]
    fn siblings_share_a_column_without_overlapping() {
        let graph = graph_from_json(
            r#"{"steps": [
                {"id": "a"},
                {"id": "b", "depends_on": ["a"]},
                {"id": "c", "depends_on": ["a"]}
            ]}"#,
        );
        let layout = layered_layout(&graph);

        assert_eq!(layout.points["b"].x, layout.points["c"].x);
        assert!((layout.points["b"].y - layout.points["c"].y).abs() >= NODE_HEIGHT);
    }

    #[test]
    fn cyclic_dependencies_do_not_hang_the_layout() {
        let graph = graph_from_json(
            r#"{"steps": [
                {"id": "a", "depends_on": ["b"]},
                {"id": "b", "depends_on": ["a"]}
            ]}"#,
        );
        let layout = layered_layout(&graph);
        assert_eq!(layout.points.len(), 2);
        for anchor in layout.points.values() {
            assert!(anchor.x.is_finite() && anchor.y.is_finite());
        }
    }

    #[test]
    fn zoom_scale_is_monotone_and_clamped() {
        assert!(zoom_scale(0.0) < zoom_scale(50.0));
        assert!(zoom_scale(50.0) < zoom_scale(100.0));
        assert_eq!(zoom_scale(-20.0), zoom_scale(0.0));
        assert_eq!(zoom_scale(400.0), zoom_scale(100.0));
    }
}
