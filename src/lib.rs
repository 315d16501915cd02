//! Indexes every fixed-length gene of a DNA sequence for exact-match
//! frequency queries.

pub mod bio;
mod error;
pub mod gene;
pub mod ledger;
pub mod sequence;
pub mod trie;

pub use bio::{Bio, Limits, LoadReport, Lookup, Stats};
pub use error::{Error, Result};
pub use gene::Occurrence;
pub use ledger::Positions;
pub use trie::{
    Base, Extremum, Key, Trie,
    iter::{Frequency, Genes},
};
