mod app;
mod plan;
mod util;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the plan JSON file describing steps and their dependencies.
    #[arg(long, default_value = "plan.json")]
    plan: String,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "dagscope",
        options,
        Box::new(move |cc| Ok(Box::new(app::DagScopeApp::new(cc, args.plan.clone())))),
    )
}
