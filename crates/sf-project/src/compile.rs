//! Compile a configuration into the solver's in-memory model.

use sf_core::{Parameters, SfError, SfResult, ensure_finite};
use sf_graph::{Topology, TopologyBuilder};

use crate::schema::ConfigDef;

/// A configuration compiled and validated into solver inputs.
#[derive(Debug, Clone)]
pub struct CompiledConfig {
    pub topology: Topology,
    pub parameters: Parameters,
    pub constraints: Vec<String>,
}

/// Validate the topology and produce solver inputs.
///
/// Duplicate node/flow ids and flow endpoints naming unknown nodes are
/// load-time errors. Unknown parameter or flow references *inside
/// constraint strings* are solver-time errors, not load-time errors.
pub fn compile(config: &ConfigDef) -> SfResult<CompiledConfig> {
    let mut builder = TopologyBuilder::new();
    for node in &config.nodes {
        match &node.label {
            Some(label) => builder.add_labeled_node(&node.id, label),
            None => builder.add_node(&node.id),
        };
    }

    for flow in &config.flows {
        let from = builder.find_node(&flow.from).ok_or_else(|| SfError::Invariant {
            what: format!("flow '{}' refers to unknown node '{}'", flow.id, flow.from),
        })?;
        let to = builder.find_node(&flow.to).ok_or_else(|| SfError::Invariant {
            what: format!("flow '{}' refers to unknown node '{}'", flow.id, flow.to),
        })?;
        builder.add_flow(&flow.id, from, to);
    }

    let topology = builder.build()?;

    // YAML can encode `.nan` / `.inf`; reject them before they poison a solve.
    for value in config.parameters.values() {
        ensure_finite(*value, "parameter value")?;
    }
    let parameters: Parameters = config
        .parameters
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();

    Ok(CompiledConfig {
        topology,
        parameters,
        constraints: config.constraints.clone(),
    })
}
