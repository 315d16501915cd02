use itertools::Itertools;

use super::*;

fn report(genes: Option<Genes<'_>>) -> Option<Vec<(String, usize, Vec<usize>)>> {
    genes.map(|genes| {
        genes
            .map(|occurrence| {
                (
                    occurrence.gene.clone(),
                    occurrence.frequency(),
                    occurrence.positions.as_slice().to_vec(),
                )
            })
            .collect_vec()
    })
}

fn scenario() -> Bio {
    let mut bio = Bio::new();
    bio.start(2).unwrap();
    bio.insert("AC", 0).unwrap();
    bio.insert("AC", 5).unwrap();
    bio.insert("GT", 10).unwrap();
    bio
}

#[test]
fn concrete_scenario() {
    let bio = scenario();

    let lookup = bio.lookup("AC").unwrap();
    assert_eq!(lookup.frequency(), 2);
    assert_eq!(lookup.positions(), &[0, 5]);

    assert_eq!(bio.extremal(Extremum::Max), Ok(Some(2)));
    assert_eq!(
        report(bio.max().unwrap()),
        Some(vec![("AC".to_owned(), 2, vec![0, 5])])
    );

    assert_eq!(bio.extremal(Extremum::Min), Ok(Some(1)));
    assert_eq!(
        report(bio.min().unwrap()),
        Some(vec![("GT".to_owned(), 1, vec![10])])
    );

    assert_eq!(
        report(Some(bio.all().unwrap())),
        Some(vec![
            ("AC".to_owned(), 2, vec![0, 5]),
            ("GT".to_owned(), 1, vec![10]),
        ])
    );
}

#[test]
fn empty_trie_has_no_extremes() {
    for m in 1..=4 {
        let mut bio = Bio::new();
        bio.start(m).unwrap();
        assert_eq!(bio.extremal(Extremum::Max), Ok(None));
        assert_eq!(bio.extremal(Extremum::Min), Ok(None));
        assert!(bio.max().unwrap().is_none());
        assert!(bio.min().unwrap().is_none());
        assert_eq!(bio.all().unwrap().count(), 0);
    }
}

#[test]
fn not_found_is_not_an_error() {
    let bio = scenario();
    let lookup = bio.lookup("TT").unwrap();
    assert_eq!(lookup, Lookup::NotFound);
    assert_eq!(lookup.frequency(), 0);
    assert!(lookup.positions().is_empty());
}

#[test]
fn start_rejects_non_positive() {
    let mut bio = Bio::new();
    assert_eq!(bio.start(0).unwrap_err(), Error::NonPositiveSize(0));
    assert_eq!(bio.start(-3).unwrap_err(), Error::NonPositiveSize(-3));
    assert!(!bio.is_active());
}

#[test]
fn start_respects_limits() {
    let mut bio = Bio::with_limits(Limits { max_gene_length: 3 });
    bio.start(2).unwrap();
    assert_eq!(
        bio.start(4).unwrap_err(),
        Error::GeneLengthLimit {
            length: 4,
            limit: 3
        }
    );
    // a rejected length leaves the active trie alone
    assert_eq!(bio.gene_length(), Some(2));
}

#[test]
fn restart_replaces_trie() {
    let mut bio = scenario();
    bio.start(3).unwrap();
    assert_eq!(bio.gene_length(), Some(3));
    assert_eq!(bio.trie().unwrap().occurrences(), 0);
    assert!(matches!(
        bio.lookup("AC"),
        Err(Error::LengthMismatch {
            expected: 3,
            found: 2
        })
    ));
}

#[test]
fn requires_active_trie() {
    let mut bio = Bio::new();
    assert_eq!(bio.insert("AC", 0), Err(Error::NotInitialized));
    // checked before the gene itself
    assert_eq!(bio.insert("a", 0), Err(Error::NotInitialized));
    assert_eq!(bio.lookup("AC").unwrap_err(), Error::NotInitialized);
    assert_eq!(bio.bulk_load(b"ACGT").unwrap_err(), Error::NotInitialized);
    assert!(bio.max().is_err());
    assert!(bio.min().is_err());
    assert!(bio.all().is_err());
    assert_eq!(bio.stats().unwrap_err(), Error::NotInitialized);
}

#[test]
fn teardown() {
    let mut bio = scenario();
    bio.teardown();
    assert!(!bio.is_active());
    assert_eq!(bio.gene_length(), None);
    assert_eq!(bio.insert("AC", 1), Err(Error::NotInitialized));
    assert_eq!(bio.lookup("AC").unwrap_err(), Error::NotInitialized);
    assert!(bio.max().is_err());
    assert!(bio.min().is_err());
    assert!(bio.all().is_err());

    // idempotent
    bio.teardown();
    assert!(!bio.is_active());
}

#[test]
fn invalid_symbols() {
    let mut bio = scenario();
    for gene in ["aC", "A1", "N-", "A "] {
        assert!(matches!(
            bio.insert(gene, 0),
            Err(Error::InvalidSymbol { .. })
        ));
        assert!(matches!(
            bio.lookup(gene),
            Err(Error::InvalidSymbol { .. })
        ));
    }
    assert_eq!(bio.trie().unwrap().occurrences(), 3);
}

#[test]
fn bulk_load_windows() {
    let mut bio = Bio::new();
    bio.start(3).unwrap();

    assert_eq!(
        bio.bulk_load(b"AC").unwrap_err(),
        Error::TooShort {
            length: 2,
            gene_length: 3
        }
    );
    assert_eq!(bio.trie().unwrap().occurrences(), 0);

    let report = bio.bulk_load(b"GAT").unwrap();
    assert_eq!(
        report,
        LoadReport {
            inserted: 1,
            skipped: 0
        }
    );
    assert_eq!(bio.lookup("GAT").unwrap().positions(), &[0]);
}

#[test]
fn bulk_load_counts_every_window() {
    let sequence = b"ACGTTGCAACGTACGGATTACA";
    for m in 1..=5 {
        let mut bio = Bio::new();
        bio.start(m).unwrap();
        let report = bio.bulk_load(sequence).unwrap();
        let windows = sequence.len() - m as usize + 1;
        assert_eq!(report.inserted, windows);
        assert_eq!(bio.trie().unwrap().occurrences(), windows);
        assert_eq!(
            bio.all()
                .unwrap()
                .map(|occurrence| occurrence.frequency())
                .sum::<usize>(),
            windows
        );
    }

    let mut bio = Bio::new();
    bio.start(4).unwrap();
    let acgt = bio.bulk_load(sequence).unwrap();
    assert_eq!(acgt.inserted, 19);
    assert_eq!(bio.lookup("ACGT").unwrap().positions(), &[0, 8]);
}

#[test]
fn bulk_load_skips_unknown_bases() {
    let mut bio = Bio::new();
    bio.start(2).unwrap();
    let report = bio.bulk_load(b"ACNGT").unwrap();
    assert_eq!(
        report,
        LoadReport {
            inserted: 2,
            skipped: 2
        }
    );
    assert_eq!(bio.lookup("AC").unwrap().positions(), &[0]);
    assert_eq!(bio.lookup("GT").unwrap().positions(), &[3]);
}

#[test]
fn stats() {
    let bio = scenario();
    let stats = bio.stats().unwrap();
    assert_eq!(
        stats,
        Stats {
            gene_length: 2,
            leaves: 16,
            genes: 2,
            occurrences: 3,
            max_frequency: Some(2),
            min_frequency: Some(1),
        }
    );
    assert!(stats.to_string().contains("present genes:  2"));
}
