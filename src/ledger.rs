use itertools::Itertools;
use smallvec::SmallVec;

/// Offsets are kept inline until a gene occurs more often than this.
const INLINE: usize = 4;

/// Ordered, append-only record of the offsets at which a gene starts.
///
/// Insertion order is preserved and duplicates are allowed; offsets are
/// trusted as given by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions(SmallVec<[usize; INLINE]>);

impl Positions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, offset: usize) {
        self.0.push(offset);
    }

    /// Number of recorded offsets, i.e. the frequency of the gene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl<'a> IntoIterator for &'a Positions {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for Positions {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<usize> for Positions {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

/// Space separated, in insertion order.
impl std::fmt::Display for Positions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.iter().join(" "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut positions = Positions::new();
        for offset in [9, 2, 7, 2] {
            positions.push(offset);
        }
        assert_eq!(positions.len(), 4);
        assert_eq!(positions.as_slice(), &[9, 2, 7, 2]);
        assert_eq!(positions.iter().collect::<Vec<_>>(), vec![9, 2, 7, 2]);
    }

    #[test]
    fn spills_past_inline_capacity() {
        let positions: Positions = (0..INLINE * 3).collect();
        assert_eq!(positions.len(), INLINE * 3);
        assert!(positions.iter().eq(0..INLINE * 3));
    }

    #[test]
    fn display() {
        let positions: Positions = [0, 5, 10].into_iter().collect();
        assert_eq!(positions.to_string(), "0 5 10");
        assert_eq!(Positions::new().to_string(), "");
        assert!(Positions::new().is_empty());
    }
}
