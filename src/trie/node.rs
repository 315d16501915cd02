use std::collections::TryReserveError;

use super::{
    CHILDREN, Extremum, Key, Node, Trie,
    iter::{Frequency, Genes},
    keys::KeyBases,
};
use crate::{Error, Result, ledger::Positions};

impl Node {
    fn leaf() -> Self {
        Node {
            children: Box::default(),
            positions: Some(Positions::new()),
        }
    }

    /// Builds the complete subtree below `depth`.
    ///
    /// On failure the siblings built so far are dropped with `children`, so
    /// nothing from a failed build outlives the call.
    fn build(depth: usize, length: usize) -> std::result::Result<Self, TryReserveError> {
        if depth >= length {
            return Ok(Node::leaf());
        }
        let mut children = Vec::new();
        children.try_reserve_exact(CHILDREN)?;
        for _ in 0..CHILDREN {
            children.push(Node::build(depth + 1, length)?);
        }
        Ok(Node {
            children: children.into_boxed_slice(),
            positions: None,
        })
    }

    pub(super) fn children(&self) -> &[Node] {
        &self.children
    }

    pub(super) fn positions(&self) -> Option<&Positions> {
        self.positions.as_ref()
    }

    fn scan(&self, mode: Extremum, best: &mut usize) {
        if let Some(positions) = &self.positions {
            let frequency = positions.len();
            match mode {
                Extremum::Max if frequency > *best => *best = frequency,
                Extremum::Min if frequency > 0 && frequency < *best => *best = frequency,
                _ => {}
            }
        }
        for child in self.children.iter() {
            child.scan(mode, best);
        }
    }
}

impl Trie {
    /// Allocates every node for genes of `length` bases.
    ///
    /// A `length` of 0 gives a trie that is a single leaf.
    pub fn new(length: usize) -> Result<Self> {
        let root = Node::build(0, length).map_err(|_| Error::AllocationFailure { length })?;
        Ok(Trie { root, length })
    }

    /// The gene length, which is also the depth of every leaf.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of leaves, one per possible gene.
    #[must_use]
    pub fn leaves(&self) -> usize {
        u32::try_from(self.length)
            .ok()
            .and_then(|length| CHILDREN.checked_pow(length))
            .unwrap_or(usize::MAX)
    }

    /// Records that `key` starts at `offset`.
    ///
    /// The key is validated in full before the trie is touched.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K, offset: usize) -> Result<()> {
        let bases = key.as_bases(self.length)?;
        let mut node = &mut self.root;
        for base in bases {
            node = &mut node.children[base.index()];
        }
        node.positions
            .as_mut()
            .expect("Every node at the gene length is a leaf")
            .push(offset);
        Ok(())
    }

    /// Returns the ledger of `key`, which is empty if it was never inserted.
    pub fn get<K: Key + ?Sized>(&self, key: &K) -> Result<&Positions> {
        let mut node = &self.root;
        for base in key.as_bases(self.length)? {
            node = &node.children[base.index()];
        }
        Ok(node
            .positions
            .as_ref()
            .expect("Every node at the gene length is a leaf"))
    }

    /// Largest or smallest positive frequency over every leaf.
    ///
    /// Returns `None` when no gene has been inserted.
    #[must_use]
    pub fn extremal(&self, mode: Extremum) -> Option<usize> {
        let mut best = mode.initial();
        self.root.scan(mode, &mut best);
        (best != mode.initial()).then_some(best)
    }

    /// Lazily visits the genes whose frequency matches, in lexicographic order.
    pub fn genes(&self, frequency: Frequency) -> Genes<'_> {
        Genes::new(self, frequency)
    }

    /// Total number of recorded offsets.
    #[must_use]
    pub fn occurrences(&self) -> usize {
        self.genes(Frequency::Any)
            .map(|occurrence| occurrence.frequency())
            .sum()
    }
}
