use std::collections::{HashMap, HashSet};
use std::fs;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};

use super::graph::{PlanGraph, StepRecord};
use super::parse::{RawPlan, parse_plan_json};

pub fn load_plan_graph(path: &str) -> Result<PlanGraph> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read plan file {path}"))?;
    let parsed = parse_plan_json(&raw).with_context(|| format!("failed to parse plan file {path}"))?;
    let graph = build_plan_graph(parsed)?;
    info!(
        "loaded plan '{}': {} steps, {} dependencies",
        graph.name,
        graph.node_count(),
        graph.edge_count
    );
    Ok(graph)
}

pub(super) fn build_plan_graph(parsed: RawPlan) -> Result<PlanGraph> {
    let mut nodes: HashMap<String, StepRecord> = HashMap::with_capacity(parsed.steps.len());

    for raw in parsed.steps {
        if raw.id.is_empty() {
            warn!("skipping step with empty id");
            continue;
        }
        if nodes.contains_key(&raw.id) {
            warn!("duplicate step id '{}'; keeping the first occurrence", raw.id);
            continue;
        }

        let label = raw
            .label
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| raw.id.clone());

        nodes.insert(
            raw.id.clone(),
            StepRecord {
                id: raw.id,
                label,
                depends_on: raw.depends_on,
                dependents: Vec::new(),
                duration_ms: raw.duration_ms,
            },
        );
    }

    if nodes.is_empty() {
        return Err(anyhow!("plan contains no usable steps"));
    }

    let known_ids = nodes.keys().cloned().collect::<HashSet<_>>();
    let mut reverse_deps: HashMap<String, Vec<String>> = HashMap::new();
    let mut edges = Vec::new();

    for (id, step) in &mut nodes {
        step.depends_on
            .retain(|upstream| known_ids.contains(upstream) && upstream != id);
        step.depends_on.sort();
        step.depends_on.dedup();

        for upstream in &step.depends_on {
            reverse_deps
                .entry(upstream.clone())
                .or_default()
                .push(id.clone());
            edges.push((upstream.clone(), id.clone()));
        }
    }

    for (id, step) in &mut nodes {
        if let Some(mut dependents) = reverse_deps.remove(id) {
            dependents.sort();
            step.dependents = dependents;
        }
    }

    edges.sort_unstable();
    let edge_count = edges.len();

    Ok(PlanGraph {
        name: parsed.name.unwrap_or_else(|| "unnamed plan".to_owned()),
        nodes,
        edges,
        edge_count,
    })
}
