use eframe::egui::{self, Response, Ui};

use super::super::ViewModel;
use super::super::ui::zoom::{ZOOM_MAX, ZOOM_MIN};

impl ViewModel {
    /// Scroll wheel nudges the same zoom value the slider owns, clamped to
    /// the slider's domain.
    pub(in crate::app) fn handle_graph_zoom(&mut self, ui: &Ui, response: &Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        self.zoom = (self.zoom + scroll * 0.05).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }
}
