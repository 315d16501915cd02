use crate::ledger::Positions;

/// A gene reported by a trie traversal, with the ledger of where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub gene: String,
    pub positions: &'a Positions,
}

impl<'a> Occurrence<'a> {
    pub(crate) fn new(path: &[u8], positions: &'a Positions) -> Self {
        Self {
            gene: path.iter().copied().map(char::from).collect(),
            positions,
        }
    }

    #[must_use]
    pub fn frequency(&self) -> usize {
        self.positions.len()
    }

    pub fn display(&'a self, flags: Display) -> OccurrenceDisplay<'a> {
        OccurrenceDisplay(self, flags)
    }
}

/// Columns to include when displaying an [`Occurrence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Display {
    pub gene: bool,
    pub frequency: bool,
    pub positions: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            gene: true,
            frequency: true,
            positions: true,
        }
    }
}

pub struct OccurrenceDisplay<'a>(&'a Occurrence<'a>, Display);

impl<'a> std::fmt::Display for OccurrenceDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut output: Vec<String> = Vec::with_capacity(3);
        if self.1.gene {
            output.push(self.0.gene.clone());
        }
        if self.1.frequency {
            output.push(self.0.frequency().to_string());
        }
        if self.1.positions && !self.0.positions.is_empty() {
            output.push(self.0.positions.to_string());
        }
        f.write_str(&output.join(" "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_columns() {
        let positions: Positions = [0, 5].into_iter().collect();
        let occurrence = Occurrence::new(b"AC", &positions);
        assert_eq!(occurrence.frequency(), 2);
        assert_eq!(occurrence.display(Display::default()).to_string(), "AC 2 0 5");
        assert_eq!(
            occurrence
                .display(Display {
                    positions: false,
                    ..Default::default()
                })
                .to_string(),
            "AC 2"
        );
        assert_eq!(
            occurrence
                .display(Display {
                    gene: false,
                    frequency: false,
                    positions: true,
                })
                .to_string(),
            "0 5"
        );
    }
}
