use eframe::egui::{self, Context, Layout, RichText};

use crate::plan::PlanGraph;

use super::super::ViewModel;
use super::super::highlight::HighlightCoordinator;
use super::super::layout::layered_layout;

impl ViewModel {
    pub(in crate::app) fn new(graph: PlanGraph) -> Self {
        let layout = layered_layout(&graph);
        Self {
            graph,
            layout,
            highlight: HighlightCoordinator::default(),
            selected: None,
            search: String::new(),
            zoom: 50.0,
            pan: egui::vec2(30.0, 30.0),
            show_minimap: true,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        plan_path: &str,
        reload_requested: &mut bool,
        is_reloading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("dagscope");
                ui.separator();
                ui.label(RichText::new(&self.graph.name).strong());
                ui.label(format!(
                    "{} steps, {} dependencies",
                    self.graph.node_count(),
                    self.graph.edge_count
                ));
                ui.separator();
                ui.label(plan_path).on_hover_text("Plan file");

                if is_reloading {
                    ui.spinner();
                } else if ui.button("Reload").clicked() {
                    *reload_requested = true;
                }

                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("zoom {:.0}", self.zoom));
                });
            });
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .exact_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }
}
