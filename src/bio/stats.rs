#[cfg(feature = "serde")]
use serde::Serialize;

use crate::trie::{Extremum, Trie, iter::Frequency};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// Length of every gene in the trie
    pub gene_length: usize,
    /// Number of possible genes, `4^gene_length`
    pub leaves: usize,
    /// Number of genes that occur at least once
    pub genes: usize,
    /// Total number of recorded offsets over all genes
    pub occurrences: usize,
    /// Highest frequency of any gene
    pub max_frequency: Option<usize>,
    /// Lowest positive frequency of any gene
    pub min_frequency: Option<usize>,
}

impl Stats {
    fn new(trie: &Trie) -> Self {
        let mut stats = Self {
            gene_length: trie.length(),
            leaves: trie.leaves(),
            max_frequency: trie.extremal(Extremum::Max),
            min_frequency: trie.extremal(Extremum::Min),
            ..Default::default()
        };

        for occurrence in trie.genes(Frequency::Any) {
            stats.genes += 1;
            stats.occurrences += occurrence.frequency();
        }

        stats
    }
}

impl<'a> From<&'a Trie> for Stats {
    fn from(trie: &'a Trie) -> Self {
        Self::new(trie)
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let optional = |value: Option<usize>| value.map_or_else(|| "-".to_owned(), |v| v.to_string());
        writeln!(f, "gene length:    {}", self.gene_length)?;
        writeln!(f, "possible genes: {}", self.leaves)?;
        writeln!(f, "present genes:  {}", self.genes)?;
        writeln!(f, "occurrences:    {}", self.occurrences)?;
        writeln!(f, "max frequency:  {}", optional(self.max_frequency))?;
        write!(f, "min frequency:  {}", optional(self.min_frequency))
    }
}
