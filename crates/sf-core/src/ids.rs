use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier for nodes and flows in a diagram.
///
/// Ids are dense 0-based indices into the topology's node and flow
/// vectors. The `NonZeroU32` representation means `Option<Id>` costs no
/// extra space, which matters for the per-flow `Option` slots in the
/// value map.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // index+1 must be nonzero
        Self(NonZeroU32::new(index + 1).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// A node in the diagram topology.
pub type NodeId = Id;
/// A directed flow between two nodes.
pub type FlowId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_survives_round_trip() {
        for i in [0_u32, 1, 2, 42, 10_000] {
            assert_eq!(Id::from_index(i).index(), i);
        }
    }

    #[test]
    fn display_uses_zero_based_index() {
        assert_eq!(format!("{}", Id::from_index(3)), "3");
        assert_eq!(format!("{:?}", Id::from_index(3)), "Id(3)");
    }

    #[test]
    fn option_id_has_no_niche_cost() {
        // An undefined flow slot is Option<Real>, but anywhere ids are
        // optional they should stay 4 bytes.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}
