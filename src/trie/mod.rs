pub mod iter;
mod keys;
mod node;

use crate::ledger::Positions;
pub use keys::Base;

/// Anything that can be read as a string of base symbols.
pub trait Key {
    fn as_symbols(&self) -> &[u8];
}

const CHILDREN: usize = 4;

/// Complete 4-ary trie over every gene of a fixed length.
///
/// All `4^length` leaves are allocated up front, so walking to any gene
/// never allocates and never finds a missing branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    /// Empty on leaves, otherwise exactly `CHILDREN` nodes indexed by [`Base`].
    children: Box<[Node]>,
    /// Only leaves own a ledger.
    positions: Option<Positions>,
}

/// Which end of the positive frequencies to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extremum {
    Max,
    Min,
}

impl Extremum {
    fn initial(self) -> usize {
        match self {
            Extremum::Max => 0,
            Extremum::Min => usize::MAX,
        }
    }
}
