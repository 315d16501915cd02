use super::{CHILDREN, Key};
use crate::{Error, Result};

/// A nucleotide, ordered A < C < G < T.
///
/// The discriminant is the branch index taken at each level of the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

const _: () = assert!(
    Base::ALL.len() == CHILDREN,
    "Every base must have exactly one child slot"
);

impl Base {
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn symbol(self) -> u8 {
        match self {
            Base::A => b'A',
            Base::C => b'C',
            Base::G => b'G',
            Base::T => b'T',
        }
    }
}

/// Only uppercase A, C, G and T are bases.
impl TryFrom<u8> for Base {
    type Error = u8;

    fn try_from(symbol: u8) -> std::result::Result<Self, Self::Error> {
        match symbol {
            b'A' => Ok(Base::A),
            b'C' => Ok(Base::C),
            b'G' => Ok(Base::G),
            b'T' => Ok(Base::T),
            other => Err(other),
        }
    }
}

pub(super) trait KeyBases: Key {
    /// Checks the key against a gene length and yields its bases.
    ///
    /// Nothing is yielded unless the whole key is valid, so callers can walk
    /// the trie without having to undo anything.
    fn as_bases(&self, length: usize) -> Result<impl Iterator<Item = Base> + '_> {
        let symbols = self.as_symbols();
        if symbols.len() != length {
            return Err(Error::LengthMismatch {
                expected: length,
                found: symbols.len(),
            });
        }
        if let Some((index, &symbol)) = symbols
            .iter()
            .enumerate()
            .find(|(_, symbol)| Base::try_from(**symbol).is_err())
        {
            return Err(Error::InvalidSymbol { symbol, index });
        }
        Ok(symbols
            .iter()
            .filter_map(|&symbol| Base::try_from(symbol).ok()))
    }
}

impl<S> KeyBases for S where S: Key + ?Sized {}

impl Key for str {
    fn as_symbols(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Key for String {
    fn as_symbols(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Key for [u8] {
    fn as_symbols(&self) -> &[u8] {
        self
    }
}

impl Key for Vec<u8> {
    fn as_symbols(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> Key for [u8; N] {
    fn as_symbols(&self) -> &[u8] {
        self
    }
}
