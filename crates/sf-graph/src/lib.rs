//! sf-graph: topology layer for sankeyflow.
//!
//! Provides:
//! - Core topology data structures (Node, Flow, Topology)
//! - Incremental topology builder with validation
//! - Name indexing for constraint resolution
//! - Write-once flow value storage for propagation
//!
//! # Example
//!
//! ```
//! use sf_graph::TopologyBuilder;
//!
//! let mut builder = TopologyBuilder::new();
//! let a = builder.add_node("a");
//! let b = builder.add_node("b");
//! builder.add_flow("ab", a, b);
//! let topo = builder.build().unwrap();
//!
//! assert_eq!(topo.nodes().len(), 2);
//! assert_eq!(topo.flows().len(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod indexing;
pub mod topology;
pub(crate) mod validate;
pub mod values;

// Re-exports for ergonomics
pub use builder::TopologyBuilder;
pub use error::TopologyError;
pub use indexing::NameIndex;
pub use topology::{Flow, Node, Topology};
pub use values::FlowValues;
