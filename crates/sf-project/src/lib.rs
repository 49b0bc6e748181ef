//! sf-project: canonical configuration file format and compilation.
//!
//! A configuration has four fields, all optional: `parameters` (name ->
//! number), `nodes`, `flows`, and `constraints`. Loading deserializes the
//! YAML and compiles it into the solver's in-memory model, validating the
//! topology on the way.

pub mod compile;
pub mod schema;

pub use compile::{CompiledConfig, compile};
pub use schema::{ConfigDef, FlowDef, NodeDef};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Topology error: {0}")]
    Topology(#[from] sf_core::SfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a configuration from a YAML file and compile it.
pub fn load_yaml(path: &std::path::Path) -> ProjectResult<CompiledConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ConfigDef = serde_yaml::from_str(&content)?;
    Ok(compile(&config)?)
}

/// Write a configuration back out as YAML.
pub fn save_yaml(path: &std::path::Path, config: &ConfigDef) -> ProjectResult<()> {
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a configuration from a JSON file and compile it.
pub fn load_json(path: &std::path::Path) -> ProjectResult<CompiledConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ConfigDef = serde_json::from_str(&content)?;
    Ok(compile(&config)?)
}
