use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::plan::{PlanGraph, load_plan_graph};

mod graph;
mod highlight;
mod layout;
mod ui;

use self::highlight::HighlightCoordinator;
use self::layout::GraphLayout;

pub struct DagScopeApp {
    plan_path: String,
    state: AppState,
    reload_rx: Option<Receiver<Result<PlanGraph, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<PlanGraph, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    graph: PlanGraph,
    layout: GraphLayout,
    highlight: HighlightCoordinator,
    selected: Option<String>,
    search: String,
    /// Slider-owned zoom domain is [0, 100]; the layout maps it to a scale.
    zoom: f32,
    pan: Vec2,
    show_minimap: bool,
}

impl DagScopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, plan_path: String) -> Self {
        let state = Self::start_load(plan_path.clone());
        Self {
            plan_path,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(plan_path: String) -> Receiver<Result<PlanGraph, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_plan_graph(&plan_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(plan_path: String) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(plan_path),
        }
    }
}

impl eframe::App for DagScopeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(plan) => AppState::Ready(Box::new(ViewModel::new(plan))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading plan graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load plan");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.plan_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &self.plan_path, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.plan_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            transition = Some(match result {
                                Ok(plan) => AppState::Ready(Box::new(ViewModel::new(plan))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition =
                                Some(AppState::Error("Background load worker disconnected".to_owned()));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}
