mod graph;
mod load;
mod parse;

pub use graph::{PlanGraph, StepRecord};
pub use load::load_plan_graph;

#[cfg(test)]
pub(crate) mod test_support {
    use super::graph::PlanGraph;

    pub(crate) fn graph_from_json(raw: &str) -> PlanGraph {
        let parsed = super::parse::parse_plan_json(raw).expect("plan should parse");
        super::load::build_plan_graph(parsed).expect("graph should build")
    }
}
