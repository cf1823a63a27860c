use eframe::egui::{self, TextEdit, Ui};

use super::super::ViewModel;
use super::zoom::{ZOOM_MAX, ZOOM_MIN, zoom_slider};

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.heading("View");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Zoom");
            let response = zoom_slider(ui, &mut self.zoom)
                .on_hover_text("Drag the handle, or press anywhere on the track and drag");
            if response.double_clicked() {
                self.zoom = 50.0;
            }
            ui.label(format!("{:.0}", self.zoom));
        });
        debug_assert!((ZOOM_MIN..=ZOOM_MAX).contains(&self.zoom));

        ui.add_space(6.0);
        ui.checkbox(&mut self.show_minimap, "Minimap")
            .on_hover_text("Compact duplicate of the graph in the lower strip");

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.heading("Search");
        ui.add_space(4.0);
        let search = ui.add(
            TextEdit::singleline(&mut self.search)
                .hint_text("step id or label")
                .desired_width(f32::INFINITY),
        );
        if search.changed() && self.search.trim().is_empty() {
            self.search.clear();
        }
        ui.horizontal(|ui| {
            if ui.small_button("Clear").clicked() {
                self.search.clear();
            }
            ui.small(egui::RichText::new("fuzzy match").weak());
        });

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(8.0);

        ui.heading("Plan");
        ui.add_space(4.0);
        let roots = self.graph.roots();
        ui.label(format!("{} entry steps", roots.len()));
        let mut next_selection = None;
        for root in roots {
            if ui.selectable_label(self.selected.as_deref() == Some(root), root).clicked() {
                next_selection = Some(root.to_owned());
            }
        }
        if let Some(id) = next_selection {
            self.selected = Some(id);
        }
    }
}
