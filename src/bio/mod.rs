//! The gene index as seen by a command layer: one owned handle that is either
//! empty or holds a single active [`Trie`].

mod stats;
#[cfg(test)]
mod test;

pub use stats::Stats;
use tracing::{debug, info, warn};

use crate::{
    Error, Result,
    ledger::Positions,
    trie::{
        Extremum, Key, Trie,
        iter::{Frequency, Genes},
    },
};

/// Bounds on what [`Bio::start`] will allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Largest accepted gene length. The trie holds `4^m` leaves.
    pub max_gene_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_gene_length: 10,
        }
    }
}

/// Outcome of a lookup for a well-formed gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a Positions),
    /// The gene is valid but does not occur in the loaded sequence.
    NotFound,
}

impl<'a> Lookup<'a> {
    #[must_use]
    pub fn frequency(&self) -> usize {
        match self {
            Lookup::Found(positions) => positions.len(),
            Lookup::NotFound => 0,
        }
    }

    #[must_use]
    pub fn positions(&self) -> &'a [usize] {
        match *self {
            Lookup::Found(positions) => positions.as_slice(),
            Lookup::NotFound => &[],
        }
    }
}

/// Windows counted by [`Bio::bulk_load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    /// Windows containing a symbol other than A, C, G or T.
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct Bio {
    trie: Option<Trie>,
    limits: Limits,
}

impl Bio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self { trie: None, limits }
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.trie.is_some()
    }

    /// Gene length of the active trie.
    #[must_use]
    pub fn gene_length(&self) -> Option<usize> {
        self.trie.as_ref().map(Trie::length)
    }

    /// The active trie.
    pub fn trie(&self) -> Result<&Trie> {
        self.trie.as_ref().ok_or(Error::NotInitialized)
    }

    fn trie_mut(&mut self) -> Result<&mut Trie> {
        self.trie.as_mut().ok_or(Error::NotInitialized)
    }

    /// Builds a new trie for genes of length `m`, replacing any active one.
    ///
    /// An invalid `m` is rejected before the active trie is touched. Once the
    /// old trie is torn down a failed build leaves the handle empty.
    pub fn start(&mut self, m: i64) -> Result<&Trie> {
        let length = usize::try_from(m)
            .ok()
            .filter(|&length| length > 0)
            .ok_or(Error::NonPositiveSize(m))?;
        if length > self.limits.max_gene_length {
            return Err(Error::GeneLengthLimit {
                length,
                limit: self.limits.max_gene_length,
            });
        }

        self.teardown();
        let trie = Trie::new(length)?;
        info!(length, leaves = trie.leaves(), "started gene trie");
        Ok(self.trie.insert(trie))
    }

    /// Records that `gene` starts at `offset` of the loaded sequence.
    pub fn insert<K: Key + ?Sized>(&mut self, gene: &K, offset: usize) -> Result<()> {
        self.trie_mut()?.insert(gene, offset)
    }

    /// Inserts every window of the trie's gene length, keyed by its offset.
    ///
    /// Windows holding anything other than A, C, G or T are skipped and
    /// counted in the report.
    pub fn bulk_load(&mut self, sequence: &[u8]) -> Result<LoadReport> {
        let trie = self.trie_mut()?;
        let gene_length = trie.length();
        if sequence.len() < gene_length {
            return Err(Error::TooShort {
                length: sequence.len(),
                gene_length,
            });
        }

        let mut report = LoadReport::default();
        for (offset, window) in sequence.windows(gene_length).enumerate() {
            match trie.insert(window, offset) {
                Ok(()) => report.inserted += 1,
                Err(Error::InvalidSymbol { .. }) => report.skipped += 1,
                Err(err) => return Err(err),
            }
        }

        if report.skipped > 0 {
            warn!(
                skipped = report.skipped,
                "skipped windows containing symbols other than A, C, G, T"
            );
        }
        debug!(
            length = sequence.len(),
            inserted = report.inserted,
            "loaded sequence"
        );
        Ok(report)
    }

    /// Finds where `gene` occurs.
    pub fn lookup<K: Key + ?Sized>(&self, gene: &K) -> Result<Lookup<'_>> {
        let positions = self.trie()?.get(gene)?;
        Ok(if positions.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::Found(positions)
        })
    }

    /// Largest or smallest positive frequency, `None` if nothing is loaded.
    pub fn extremal(&self, mode: Extremum) -> Result<Option<usize>> {
        Ok(self.trie()?.extremal(mode))
    }

    /// Genes sharing the extremal frequency, or `None` if nothing is loaded.
    pub fn extremes(&self, mode: Extremum) -> Result<Option<Genes<'_>>> {
        let trie = self.trie()?;
        Ok(trie
            .extremal(mode)
            .map(|frequency| trie.genes(Frequency::Exactly(frequency))))
    }

    /// Genes with the highest frequency.
    pub fn max(&self) -> Result<Option<Genes<'_>>> {
        self.extremes(Extremum::Max)
    }

    /// Genes with the lowest positive frequency.
    pub fn min(&self) -> Result<Option<Genes<'_>>> {
        self.extremes(Extremum::Min)
    }

    /// Every gene that occurs, in lexicographic order.
    pub fn all(&self) -> Result<Genes<'_>> {
        Ok(self.trie()?.genes(Frequency::Any))
    }

    pub fn stats(&self) -> Result<Stats> {
        self.trie().map(Stats::from)
    }

    /// Frees the active trie, if any.
    pub fn teardown(&mut self) {
        if let Some(trie) = self.trie.take() {
            let length = trie.length();
            drop(trie);
            info!(length, "tore down gene trie");
        }
    }
}
