use super::{Base, Node, Trie};
use crate::gene::Occurrence;

/// Which leaves a [`Genes`] traversal reports.
///
/// Genes that never occur are never reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    /// Every gene that occurs at least once.
    #[default]
    Any,
    /// Genes that occur exactly this many times.
    Exactly(usize),
}

impl Frequency {
    #[must_use]
    pub fn matches(self, frequency: usize) -> bool {
        frequency > 0
            && match self {
                Frequency::Any => true,
                Frequency::Exactly(target) => frequency == target,
            }
    }
}

/// Depth-first walk over the leaves of a [`Trie`], A before C before G before T.
///
/// The gene of the current leaf is rebuilt in `path`; a node only writes the
/// slot of its own depth, and every deeper slot is rewritten before the next
/// leaf is reached.
#[must_use]
#[derive(Debug, Clone)]
pub struct Genes<'a> {
    stack: Vec<(usize, Option<Base>, &'a Node)>,
    path: Vec<u8>,
    frequency: Frequency,
}

impl<'a> Genes<'a> {
    pub(super) fn new(trie: &'a Trie, frequency: Frequency) -> Self {
        let mut stack = Vec::with_capacity(trie.length * (super::CHILDREN - 1) + 1);
        stack.push((0, None, &trie.root));
        Self {
            stack,
            path: vec![Base::A.symbol(); trie.length],
            frequency,
        }
    }
}

impl<'a> Iterator for Genes<'a> {
    type Item = Occurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, base, node)) = self.stack.pop() {
            if let Some(base) = base {
                self.path[depth - 1] = base.symbol();
            }
            if let Some(positions) = node.positions() {
                if self.frequency.matches(positions.len()) {
                    return Some(Occurrence::new(&self.path, positions));
                }
                continue;
            }
            self.stack.extend(
                Base::ALL
                    .into_iter()
                    .zip(node.children())
                    .rev()
                    .map(|(base, child)| (depth + 1, Some(base), child)),
            );
        }
        None
    }
}
