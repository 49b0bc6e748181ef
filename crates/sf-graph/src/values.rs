//! Write-once flow value storage.

use sf_core::{FlowId, Real, SfError, SfResult};

use crate::topology::Topology;

/// Resolved flow values, keyed by compact flow id.
///
/// Grows monotonically during propagation: once a flow has a value it is
/// never overwritten or removed. `define` enforces this: redefinition is
/// an invariant violation, not a silent overwrite.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowValues {
    slots: Vec<Option<Real>>,
}

impl FlowValues {
    /// An all-undefined map sized for the given topology.
    pub fn for_topology(topo: &Topology) -> Self {
        Self {
            slots: vec![None; topo.flows().len()],
        }
    }

    /// Number of flow slots (defined or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of flows that currently have a value.
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn get(&self, id: FlowId) -> Option<Real> {
        self.slots.get(id.index() as usize).copied().flatten()
    }

    pub fn is_defined(&self, id: FlowId) -> bool {
        self.get(id).is_some()
    }

    /// Bind a flow to a value. Fails if the id is out of range or the flow
    /// already has a value.
    pub fn define(&mut self, id: FlowId, value: Real) -> SfResult<()> {
        let idx = id.index() as usize;
        let len = self.slots.len();
        let slot = self.slots.get_mut(idx).ok_or(SfError::IndexOob {
            what: "flow id",
            index: idx,
            len,
        })?;
        if slot.is_some() {
            return Err(SfError::Invariant {
                what: format!("flow {id} already defined"),
            });
        }
        *slot = Some(value);
        Ok(())
    }
}
