//! Metadata selection tests
//!
//! Queries against service-instance candidates with heterogeneous metadata.

use metaprop_eval::{Candidate, MetaEngine, MetaQuery, MetaSelector, OperatorExpr, OperatorRegistry, RegistryError};
use metaprop_types::Value;
use pretty_assertions::assert_eq;
use serde_json::json;

fn candidates() -> Vec<Candidate> {
    vec![
        Candidate::new("svc-a")
            .with("priority", 7)
            .with("zone", "eu-west")
            .with("tags", vec!["gpu", "ssd"]),
        Candidate::new("svc-b").with("priority", "high").with("zone", "us"),
        Candidate::new("svc-c").with("priority", 12.5).with("tags", Vec::<&str>::new()),
        Candidate::new("svc-d"),
    ]
}

fn ids<'a>(selected: impl IntoIterator<Item = &'a Candidate>) -> Vec<&'a str> {
    selected.into_iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn test_priority_less_than_ten() {
    let engine = MetaEngine::new();
    let candidates = candidates();
    let query = MetaQuery::new("priority", "lt", 10);

    assert_eq!(query.matches(engine.registry(), &candidates[0]), Ok(true));
    // Text priority does not match, and is not an error
    assert_eq!(query.matches(engine.registry(), &candidates[1]), Ok(false));
    assert_eq!(query.matches(engine.registry(), &candidates[3]), Ok(false));
}

#[test]
fn test_select_with_multiple_clauses() {
    let engine = MetaEngine::new();
    let candidates = candidates();
    let selected = engine
        .select(
            vec![
                MetaQuery::new("priority", "ge", 5),
                MetaQuery::new("tags", "size_gt", 0),
            ],
            &candidates,
        )
        .unwrap();
    assert_eq!(ids(selected), vec!["svc-a"]);
}

#[test]
fn test_negated_query_includes_missing_attributes() {
    let engine = MetaEngine::new();
    let candidates = candidates();
    let selected = engine
        .select(
            vec![MetaQuery::new("priority", OperatorExpr::not("lt".into()), 10)],
            &candidates,
        )
        .unwrap();
    // not:lt holds wherever lt does not: larger numbers, text and absent values
    assert_eq!(ids(selected), vec!["svc-b", "svc-c", "svc-d"]);
}

#[test]
fn test_empty_selector_matches_everything() {
    let selector = MetaSelector::compile(OperatorRegistry::standard(), Vec::new()).unwrap();
    let candidates = candidates();
    assert!(selector.is_empty());
    assert_eq!(ids(selector.filter(&candidates)).len(), candidates.len());
}

#[test]
fn test_unknown_operator_fails_before_filtering() {
    let engine = MetaEngine::new();
    let candidates = candidates();
    let result = engine.select(
        vec![
            MetaQuery::new("priority", "lt", 10),
            MetaQuery::new("zone", "matches", "eu-*"),
        ],
        &candidates,
    );
    assert_eq!(result.unwrap_err(), RegistryError::unknown_operator("matches"));
}

#[test]
fn test_mismatches_report_failing_clauses() {
    let selector = MetaSelector::compile(
        OperatorRegistry::standard(),
        vec![
            MetaQuery::new("priority", "lt", 10),
            MetaQuery::new("zone", "size_le", 2),
        ],
    )
    .unwrap();
    let candidates = candidates();

    let failing: Vec<String> = selector
        .mismatches(&candidates[0])
        .into_iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(failing, vec!["zone size_le 2".to_string()]);
    assert!(selector.mismatches(&candidates[1]).len() == 1);
}

#[test]
fn test_queries_and_candidates_from_json() {
    let queries: Vec<MetaQuery> = serde_json::from_value(json!([
        {"attribute": "priority", "operator": "lt", "value": 10},
        {"attribute": "tags", "operator": {"not": "size_eq"}, "value": 0}
    ]))
    .unwrap();
    let candidates: Vec<Candidate> = serde_json::from_value(json!([
        {"id": "one", "metadata": {"priority": 3, "tags": ["x"]}},
        {"id": "two", "metadata": {"priority": 3, "tags": []}},
        {"id": "three", "metadata": {"priority": 30.0}}
    ]))
    .unwrap();

    let selector = MetaEngine::new().selector(queries).unwrap();
    assert_eq!(selector.len(), 2);
    assert_eq!(ids(selector.filter(&candidates)), vec!["one"]);
    assert_eq!(candidates[2].attribute("priority"), &Value::Real(30.0));
}

#[test]
fn test_prefix_operator_in_json_and_constructor() {
    let from_json: MetaQuery = serde_json::from_value(json!(
        {"attribute": "tags", "operator": "not:size_lt", "value": 1}
    ))
    .unwrap();
    let constructed = MetaQuery::new("tags", "not:size_lt", 1);
    assert_eq!(from_json, constructed);
    assert_eq!(constructed.operator, OperatorExpr::not(OperatorExpr::named("size_lt")));

    let engine = MetaEngine::new();
    let candidates = candidates();
    let selected = engine.select(vec![from_json, constructed], &candidates).unwrap();
    // svc-c has an empty tag list; missing tags make size_lt inapplicable, so its negation holds
    assert_eq!(ids(selected), vec!["svc-a", "svc-b", "svc-d"]);
}
