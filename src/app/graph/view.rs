use std::collections::HashSet;

use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, Vec2, pos2, vec2,
};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::util::short_name;

use super::super::ViewModel;
use super::super::layout::{NODE_HEIGHT, NODE_WIDTH, zoom_scale};
use super::edge::{self, CANVAS_BACKGROUND, EDGE_HOVER_TOLERANCE, EdgeKey};

const MINIMAP_HEIGHT: f32 = 110.0;
const MINIMAP_MARGIN: f32 = 10.0;
const MINIMAP_MAX_FIT: f32 = 0.6;

const NODE_FILL: Color32 = Color32::from_rgb(52, 96, 142);
const NODE_FILL_SELECTED: Color32 = Color32::from_rgb(245, 206, 93);
const NODE_FILL_MATCH: Color32 = Color32::from_rgb(96, 170, 224);
const NODE_TEXT: Color32 = Color32::from_gray(235);
const MINIMAP_BACKGROUND: Color32 = Color32::from_rgb(26, 31, 38);
const MINIMAP_NODE_FILL: Color32 = Color32::from_rgb(96, 128, 158);

/// One concrete rendering of a logical edge. The same `EdgeKey` appears in
/// several instances when the minimap duplicates the main view.
struct EdgeInstance {
    key: EdgeKey,
    source: Pos2,
    target: Pos2,
    trunk_x: f32,
    compact: bool,
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

fn world_to_screen(rect: Rect, pan: Vec2, scale: f32, world: Pos2) -> Pos2 {
    rect.left_top() + pan + world.to_vec2() * scale
}

fn draw_background(painter: &Painter, rect: Rect, pan: Vec2, scale: f32) {
    painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);

    let step = (56.0 * scale.clamp(0.6, 1.8)).max(20.0);
    let grid = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70));

    let mut x = rect.left() + pan.x.rem_euclid(step);
    while x < rect.right() {
        painter.line_segment([pos2(x, rect.top()), pos2(x, rect.bottom())], grid);
        x += step;
    }

    let mut y = rect.top() + pan.y.rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment([pos2(rect.left(), y), pos2(rect.right(), y)], grid);
        y += step;
    }
}

fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgb(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
    )
}

fn rect_of(nodes: &[(&str, Rect)], id: &str) -> Option<Rect> {
    nodes
        .binary_search_by(|probe| probe.0.cmp(id))
        .ok()
        .map(|index| nodes[index].1)
}

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        self.handle_graph_zoom(ui, &response);
        self.handle_graph_pan(&response);

        let scale = zoom_scale(self.zoom);
        draw_background(&painter, rect, self.pan, scale);

        let mut node_rects = self
            .layout
            .points
            .iter()
            .map(|(id, anchor)| {
                let min = world_to_screen(rect, self.pan, scale, *anchor);
                (
                    id.as_str(),
                    Rect::from_min_size(min, vec2(NODE_WIDTH, NODE_HEIGHT) * scale),
                )
            })
            .collect::<Vec<_>>();
        node_rects.sort_by(|a, b| a.0.cmp(b.0));

        let trunk_x = rect.left() + self.pan.x + self.layout.trunk_x * scale;

        let mut instances = Vec::with_capacity(self.graph.edges.len() * 2);
        for (from, to) in &self.graph.edges {
            let (Some(from_rect), Some(to_rect)) =
                (rect_of(&node_rects, from), rect_of(&node_rects, to))
            else {
                continue;
            };

            instances.push(EdgeInstance {
                key: EdgeKey::new(from.clone(), to.clone()),
                source: pos2(from_rect.right(), from_rect.center().y),
                target: pos2(to_rect.left(), to_rect.center().y),
                trunk_x,
                compact: false,
            });
        }

        let minimap = (self.show_minimap && rect.height() > MINIMAP_HEIGHT * 2.0).then(|| {
            Rect::from_min_max(
                pos2(
                    rect.left() + MINIMAP_MARGIN,
                    rect.bottom() - MINIMAP_HEIGHT - MINIMAP_MARGIN,
                ),
                pos2(rect.right() - MINIMAP_MARGIN, rect.bottom() - MINIMAP_MARGIN),
            )
        });

        let mut minimap_nodes: Vec<(&str, Rect)> = Vec::new();
        if let Some(strip) = minimap {
            let world = self.layout.world_bounds;
            let fit = (strip.width() / world.width().max(1.0))
                .min(strip.height() / world.height().max(1.0))
                .min(MINIMAP_MAX_FIT);
            let inset = strip.left_top() + vec2(6.0, 6.0);

            for (id, anchor) in &self.layout.points {
                let min = inset + (*anchor - world.left_top()) * fit;
                minimap_nodes.push((
                    id.as_str(),
                    Rect::from_min_size(min, vec2(NODE_WIDTH, NODE_HEIGHT) * fit),
                ));
            }
            minimap_nodes.sort_by(|a, b| a.0.cmp(b.0));

            let mini_trunk_x = inset.x + (self.layout.trunk_x - world.left()) * fit;
            for (from, to) in &self.graph.edges {
                let (Some(from_rect), Some(to_rect)) =
                    (rect_of(&minimap_nodes, from), rect_of(&minimap_nodes, to))
                else {
                    continue;
                };

                instances.push(EdgeInstance {
                    key: EdgeKey::new(from.clone(), to.clone()),
                    source: pos2(from_rect.right(), from_rect.center().y),
                    target: pos2(to_rect.left(), to_rect.center().y),
                    trunk_x: mini_trunk_x,
                    compact: true,
                });
            }
        }

        // Hover pass before the draw pass so this frame already renders the
        // new highlight state. Every instance is tested; with overlapping
        // hit areas the last one wins, and any rendering of the same logical
        // edge lights up because membership is by key, not by instance.
        let pointer = ui.input(|input| input.pointer.hover_pos());
        let hovered_edge = pointer
            .filter(|pointer| rect.contains(*pointer))
            .and_then(|pointer| {
                instances
                    .iter()
                    .filter(|instance| {
                        let waypoints = edge::route_waypoints(
                            instance.source,
                            instance.target,
                            instance.trunk_x,
                        );
                        edge::hit_test(&waypoints, pointer, EDGE_HOVER_TOLERANCE)
                    })
                    .next_back()
                    .map(|instance| instance.key.clone())
            });

        let edge_hovered = hovered_edge.is_some();
        match hovered_edge {
            Some(key) => self.highlight.set_highlighted(vec![key]),
            None => self.highlight.clear(),
        }

        if edge_hovered {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            Some(pointer.and_then(|pointer| {
                node_rects
                    .iter()
                    .rev()
                    .find(|(_, node_rect)| node_rect.contains(pointer))
                    .map(|(id, _)| (*id).to_owned())
            }))
        } else {
            None
        };

        let matches = self.search_matches();
        let search_active = matches.as_ref().is_some_and(|matches| !matches.is_empty());

        for instance in instances.iter().filter(|instance| !instance.compact) {
            edge::draw_dependency_edge(
                &painter,
                instance.source,
                instance.target,
                instance.trunk_x,
                false,
                self.highlight.is_highlighted(&instance.key),
            );
        }

        for (id, node_rect) in &node_rects {
            let is_selected = self.selected.as_deref() == Some(*id);
            let is_match = matches.as_ref().is_some_and(|matches| matches.contains(*id));

            let fill = if is_selected {
                NODE_FILL_SELECTED
            } else if is_match {
                NODE_FILL_MATCH
            } else if search_active {
                dim_color(NODE_FILL, 0.45)
            } else {
                NODE_FILL
            };
            painter.rect_filled(*node_rect, 4.0, fill);

            if node_rect.width() > 52.0
                && let Some(step) = self.graph.nodes.get(*id)
            {
                let text_color = if is_selected {
                    Color32::from_gray(24)
                } else if search_active && !is_match {
                    dim_color(NODE_TEXT, 0.55)
                } else {
                    NODE_TEXT
                };
                painter.text(
                    node_rect.center(),
                    Align2::CENTER_CENTER,
                    short_name(&step.label),
                    FontId::proportional((12.0 * scale).clamp(9.0, 16.0)),
                    text_color,
                );
            }
        }

        if let Some(strip) = minimap {
            painter.rect_filled(strip, 4.0, MINIMAP_BACKGROUND);

            for instance in instances.iter().filter(|instance| instance.compact) {
                edge::draw_dependency_edge(
                    &painter,
                    instance.source,
                    instance.target,
                    instance.trunk_x,
                    true,
                    self.highlight.is_highlighted(&instance.key),
                );
            }

            for (id, node_rect) in &minimap_nodes {
                let fill = if self.selected.as_deref() == Some(*id) {
                    NODE_FILL_SELECTED
                } else {
                    MINIMAP_NODE_FILL
                };
                painter.rect_filled(*node_rect, 1.0, fill);
            }
        }

        if let Some(focused) = self.highlight.highlighted().first() {
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                format!("{} → {}", short_name(&focused.from), short_name(&focused.to)),
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }

        if let Some(selected) = pending_selection {
            self.selected = selected;
        }
    }

    fn search_matches(&self) -> Option<HashSet<&str>> {
        let query = self.search.trim();
        if query.is_empty() {
            return None;
        }

        let matcher = SkimMatcherV2::default();
        Some(
            self.graph
                .nodes
                .values()
                .filter(|step| {
                    fuzzy_match_score(&matcher, &step.label, query).is_some()
                        || fuzzy_match_score(&matcher, &step.id, query).is_some()
                })
                .map(|step| step.id.as_str())
                .collect(),
        )
    }
}
