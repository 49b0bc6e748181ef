//! Configuration schema definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-disk configuration. All four fields default to empty, so `{}` is a
/// valid (trivially solved) configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConfigDef {
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
    #[serde(default)]
    pub nodes: Vec<NodeDef>,
    #[serde(default)]
    pub flows: Vec<FlowDef>,
    #[serde(default)]
    pub constraints: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeDef {
    pub id: String,
    /// Cosmetic display label; irrelevant to solving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowDef {
    pub id: String,
    pub from: String,
    pub to: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserializes() {
        let config: ConfigDef = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ConfigDef::default());
    }

    #[test]
    fn full_document_round_trips() {
        let yaml = r#"
parameters:
  total: 1000
nodes:
  - id: a
    label: Source
  - id: b
flows:
  - id: ab
    from: a
    to: b
constraints:
  - flows.ab == parameters.total
"#;
        let config: ConfigDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.parameters["total"], 1000.0);
        assert_eq!(config.nodes.len(), 2);
        assert_eq!(config.nodes[0].label.as_deref(), Some("Source"));
        assert_eq!(config.flows[0].from, "a");
        assert_eq!(config.constraints.len(), 1);

        let back = serde_yaml::to_string(&config).unwrap();
        let reparsed: ConfigDef = serde_yaml::from_str(&back).unwrap();
        assert_eq!(reparsed, config);
    }
}
