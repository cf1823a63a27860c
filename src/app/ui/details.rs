use eframe::egui::{self, RichText, Ui};

use crate::util::{format_millis, short_name};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.heading("Details");
        ui.add_space(4.0);

        match self.highlight.highlighted().first() {
            Some(edge) => {
                ui.label(RichText::new("Dependency under cursor").strong());
                ui.label(format!("{} → {}", short_name(&edge.from), short_name(&edge.to)));
            }
            None => {
                ui.small(RichText::new("Hover an edge to inspect it").weak());
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(8.0);

        let Some(step) = self
            .selected
            .as_deref()
            .and_then(|id| self.graph.nodes.get(id))
            .cloned()
        else {
            ui.small(RichText::new("Click a step in the graph to select it").weak());
            return;
        };

        ui.label(RichText::new(&step.label).strong());
        if step.label != step.id {
            ui.small(RichText::new(&step.id).weak());
        }
        if let Some(duration) = step.duration_ms {
            ui.label(format!("last run {}", format_millis(duration)));
        }

        ui.add_space(10.0);
        let mut next_selection = None;

        ui.label(format!("Depends on ({})", step.depends_on.len()));
        egui::ScrollArea::vertical()
            .id_salt("depends_on")
            .max_height(180.0)
            .show(ui, |ui| {
                for upstream in &step.depends_on {
                    if ui.link(short_name(upstream)).clicked() {
                        next_selection = Some(upstream.clone());
                    }
                }
            });

        ui.add_space(8.0);
        ui.label(format!("Dependents ({})", step.dependents.len()));
        egui::ScrollArea::vertical()
            .id_salt("dependents")
            .max_height(180.0)
            .show(ui, |ui| {
                for downstream in &step.dependents {
                    if ui.link(short_name(downstream)).clicked() {
                        next_selection = Some(downstream.clone());
                    }
                }
            });

        if let Some(id) = next_selection {
            self.selected = Some(id);
        }
    }
}
