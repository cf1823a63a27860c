use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawStep {
    pub(super) id: String,
    #[serde(default)]
    pub(super) label: Option<String>,
    #[serde(default, alias = "dependsOn")]
    pub(super) depends_on: Vec<String>,
    #[serde(default, alias = "durationMs")]
    pub(super) duration_ms: Option<u64>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawPlan {
    #[serde(default)]
    pub(super) name: Option<String>,
    pub(super) steps: Vec<RawStep>,
}

pub(super) fn parse_plan_json(raw: &str) -> Result<RawPlan> {
    let plan: RawPlan = serde_json::from_str(raw).context("invalid plan JSON")?;
    if plan.steps.is_empty() {
        return Err(anyhow!("plan contains no steps"));
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_plan() {
        let plan = parse_plan_json(r#"{"steps": [{"id": "a"}]}"#).expect("plan should parse");
        assert!(plan.name.is_none());
        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].id, "a");
        assert!(plan.steps[0].depends_on.is_empty());
        assert!(plan.steps[0].duration_ms.is_none());
    }

    #[test]
    fn accepts_camel_case_aliases() {
        let raw = r#"{
            "name": "nightly",
            "steps": [
                {"id": "a"},
                {"id": "b", "dependsOn": ["a"], "durationMs": 1200}
            ]
        }"#;
        let plan = parse_plan_json(raw).expect("plan should parse");
        assert_eq!(plan.name.as_deref(), Some("nightly"));
        assert_eq!(plan.steps[1].depends_on, vec!["a".to_string()]);
        assert_eq!(plan.steps[1].duration_ms, Some(1200));
    }

    #[test]
    fn rejects_empty_and_malformed_plans() {
        assert!(parse_plan_json(r#"{"steps": []}"#).is_err());
        assert!(parse_plan_json("not json").is_err());
    }
}
