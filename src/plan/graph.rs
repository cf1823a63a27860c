use std::collections::HashMap;

/// One computational step in a plan.
///
/// `depends_on` lists the upstream steps whose outputs this step consumes;
/// `dependents` is the reverse index, filled in while the plan is built.
#[derive(Clone, Debug)]
pub struct StepRecord {
    pub id: String,
    pub label: String,
    pub depends_on: Vec<String>,
    pub dependents: Vec<String>,
    pub duration_ms: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct PlanGraph {
    pub name: String,
    pub nodes: HashMap<String, StepRecord>,
    /// One `(from, to)` pair per logical dependency: data flows from -> to.
    pub edges: Vec<(String, String)>,
    pub edge_count: usize,
}

impl PlanGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Steps with no upstream dependencies, in stable id order.
    pub fn roots(&self) -> Vec<&str> {
        let mut ids = self
            .nodes
            .values()
            .filter(|step| step.depends_on.is_empty())
            .map(|step| step.id.as_str())
            .collect::<Vec<_>>();
        ids.sort_unstable();
        ids
    }
}
