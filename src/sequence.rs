//! Reading the DNA sequence that a trie is loaded from.

use std::io::Read;

/// Whitespace that may trail a sequence file.
fn is_trailing(byte: &u8) -> bool {
    matches!(byte, b'\n' | b'\r' | b' ' | b'\t')
}

/// Strips trailing newlines, carriage returns, spaces and tabs in place.
pub fn trim_trailing(sequence: &mut Vec<u8>) {
    let length = sequence
        .iter()
        .rposition(|byte| !is_trailing(byte))
        .map_or(0, |last| last + 1);
    sequence.truncate(length);
}

/// Reads a whole sequence, without its trailing whitespace.
pub fn read(mut rdr: impl Read) -> Result<Vec<u8>, std::io::Error> {
    let mut sequence = Vec::new();
    rdr.read_to_end(&mut sequence)?;
    trim_trailing(&mut sequence);
    Ok(sequence)
}

pub mod file {
    use std::{fs::File, io::BufReader, path::Path};

    pub fn read(path: impl AsRef<Path>) -> Result<Vec<u8>, std::io::Error> {
        File::open(path).map(BufReader::new).and_then(super::read)
    }
}
