use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The trie has not been started. Use 'start <m>' first")]
    NotInitialized,
    #[error("The gene length must be greater than 0, got {0}")]
    NonPositiveSize(i64),
    #[error("The gene length {length} is larger than the limit of {limit}")]
    GeneLengthLimit { length: usize, limit: usize },
    #[error("The gene must have length {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Invalid base '{}' at index {index}, expected one of A, C, G, T", .symbol.escape_ascii())]
    InvalidSymbol { symbol: u8, index: usize },
    #[error("The sequence of length {length} is shorter than the gene length {gene_length}")]
    TooShort { length: usize, gene_length: usize },
    #[error("Unable to allocate a trie for genes of length {length}")]
    AllocationFailure { length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
