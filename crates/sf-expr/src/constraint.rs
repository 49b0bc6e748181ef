//! Constraint parsing and evaluation.
//!
//! A constraint binds exactly one as-yet-undefined flow to the value of an
//! arithmetic expression: `flows.<id> == <expression>`.

use sf_core::Parameters;
use sf_graph::{FlowValues, Topology};

use crate::error::{ExprError, ExprResult};
use crate::eval::evaluate_expression;

/// Split a constraint on `==`, requiring exactly one occurrence.
///
/// Both sides are returned trimmed. Zero or two-plus occurrences are both
/// `MalformedConstraint`.
pub fn parse_constraint(text: &str) -> ExprResult<(&str, &str)> {
    let mut parts = text.split("==");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left.trim(), right.trim())),
        _ => Err(ExprError::MalformedConstraint {
            text: text.to_string(),
        }),
    }
}

/// Extract the flow id from a left side that must be exactly `flows.<id>`.
fn parse_flow_reference(left: &str) -> ExprResult<&str> {
    let not_flow_ref = || ExprError::LeftSideNotFlowReference {
        left: left.to_string(),
    };

    let name = left.strip_prefix("flows.").ok_or_else(not_flow_ref)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        // e.g. `flows.x + 1` or `flows.`
        return Err(not_flow_ref());
    }
    Ok(name)
}

/// Evaluate one constraint, returning a fresh value map with the new
/// binding. The input map is not mutated; callers fold constraint by
/// constraint.
pub fn evaluate_constraint(
    text: &str,
    params: &Parameters,
    topo: &Topology,
    values: &FlowValues,
) -> ExprResult<FlowValues> {
    let (left, right) = parse_constraint(text)?;
    let name = parse_flow_reference(left)?;

    let id = topo.flow_by_name(name).ok_or_else(|| ExprError::UnknownFlow {
        name: name.to_string(),
    })?;
    if values.is_defined(id) {
        return Err(ExprError::FlowAlreadyDefined {
            name: name.to_string(),
        });
    }

    let value = evaluate_expression(right, params, topo, values)?;

    let mut updated = values.clone();
    updated.define(id, value).map_err(|_| ExprError::FlowAlreadyDefined {
        name: name.to_string(),
    })?;
    Ok(updated)
}

/// Fold all constraints, in order, starting from an empty value map.
///
/// On any failure the underlying error is wrapped with the offending
/// constraint's literal text and evaluation stops; no partial result is
/// returned.
pub fn evaluate_all_constraints(
    constraints: &[String],
    params: &Parameters,
    topo: &Topology,
) -> ExprResult<FlowValues> {
    let mut values = FlowValues::for_topology(topo);
    for text in constraints {
        values = evaluate_constraint(text, params, topo, &values)
            .map_err(|e| e.in_constraint(text))?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_graph::TopologyBuilder;

    fn fixture() -> (Parameters, Topology) {
        let mut params = Parameters::new();
        params.set("total", 1000.0);

        let mut builder = TopologyBuilder::new();
        let source = builder.add_node("source");
        let split = builder.add_node("split");
        let d1 = builder.add_node("dest1");
        let d2 = builder.add_node("dest2");
        builder.add_flow("src_split", source, split);
        builder.add_flow("split_d1", split, d1);
        builder.add_flow("split_d2", split, d2);
        let topo = builder.build().unwrap();

        (params, topo)
    }

    #[test]
    fn parse_constraint_splits_and_trims() {
        let (left, right) = parse_constraint("  flows.ab ==  100 + 1 ").unwrap();
        assert_eq!(left, "flows.ab");
        assert_eq!(right, "100 + 1");
    }

    #[test]
    fn parse_constraint_requires_exactly_one_eq() {
        assert!(matches!(
            parse_constraint("flows.ab = 100"),
            Err(ExprError::MalformedConstraint { .. })
        ));
        assert!(matches!(
            parse_constraint("flows.ab == 100 == 200"),
            Err(ExprError::MalformedConstraint { .. })
        ));
    }

    #[test]
    fn left_side_must_be_bare_flow_reference() {
        let (params, topo) = fixture();
        let values = FlowValues::for_topology(&topo);

        for text in [
            "flows.src_split + 1 == 100",
            "parameters.total == 100",
            "100 == flows.src_split",
            "flows. == 100",
        ] {
            let err = evaluate_constraint(text, &params, &topo, &values).unwrap_err();
            assert!(
                matches!(err, ExprError::LeftSideNotFlowReference { .. }),
                "expected LeftSideNotFlowReference for '{text}', got {err:?}"
            );
        }
    }

    #[test]
    fn constraint_defines_flow_without_mutating_input() {
        let (params, topo) = fixture();
        let values = FlowValues::for_topology(&topo);

        let updated =
            evaluate_constraint("flows.src_split == parameters.total", &params, &topo, &values)
                .unwrap();

        let id = topo.flow_by_name("src_split").unwrap();
        assert_eq!(updated.get(id), Some(1000.0));
        assert!(!values.is_defined(id));
    }

    #[test]
    fn constraint_may_reference_earlier_flows() {
        let (params, topo) = fixture();
        let constraints = vec![
            "flows.src_split == parameters.total".to_string(),
            "flows.split_d1 == flows.src_split * 2 / 5".to_string(),
        ];

        let values = evaluate_all_constraints(&constraints, &params, &topo).unwrap();
        let d1 = topo.flow_by_name("split_d1").unwrap();
        assert_eq!(values.get(d1), Some(400.0));
    }

    #[test]
    fn failure_is_wrapped_with_constraint_text() {
        let (params, topo) = fixture();
        let constraints = vec!["flows.src_split == parameters.missing".to_string()];

        let err = evaluate_all_constraints(&constraints, &params, &topo).unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("flows.src_split == parameters.missing"));
        assert!(msg.contains("Unknown parameter"));
    }

    #[test]
    fn unknown_lhs_flow_rejected() {
        let (params, topo) = fixture();
        let values = FlowValues::for_topology(&topo);
        let err = evaluate_constraint("flows.ghost == 1", &params, &topo, &values).unwrap_err();
        assert!(matches!(err, ExprError::UnknownFlow { .. }));
    }

    #[test]
    fn redefined_lhs_flow_rejected() {
        let (params, topo) = fixture();
        let constraints = vec![
            "flows.src_split == 1".to_string(),
            "flows.src_split == 2".to_string(),
        ];
        let err = evaluate_all_constraints(&constraints, &params, &topo).unwrap_err();
        assert!(format!("{err}").contains("already defined"));
    }
}
