use std::{io::Write, path::Path};

use colored::Colorize;
use genetrie::{Genes, LoadReport, Lookup, Occurrence, gene::Display};

use super::OptsShow;

pub fn welcome() {
    println!("{}", "Welcome to genetrie! Type 'help' for the commands.".green().bold());
}

pub fn prompt() -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "{}", ">bio ".magenta().bold())?;
    out.flush()
}

pub fn error(err: &impl std::fmt::Display) {
    eprintln!("{} {err}", "error:".red().bold());
}

pub fn warning(err: &impl std::fmt::Display) {
    eprintln!("{} {err}", "warning:".yellow().bold());
}

pub fn started(length: usize) {
    println!("{}", format!("Created a trie for genes of length {length}").yellow());
}

pub fn loaded(path: &Path, report: LoadReport) {
    println!(
        "{}",
        format!("Loaded {} genes from {}", report.inserted, path.display()).yellow()
    );
    if report.skipped > 0 {
        warning(&format!(
            "skipped {} genes holding symbols other than A, C, G, T",
            report.skipped
        ));
    }
}

pub fn lookup(gene: &str, lookup: Lookup<'_>) {
    match lookup {
        Lookup::Found(positions) => println!(
            "{} {positions}",
            format!(
                "The gene {gene} occurs {} times at positions:",
                positions.len()
            )
            .yellow()
        ),
        Lookup::NotFound => println!(
            "The gene {gene} was not found in the sequence. Frequency: {}",
            "-1".red().bold()
        ),
    }
}

/// Prints one line per gene, or a notice when there are none.
pub fn genes(genes: Option<Genes<'_>>, opts: &OptsShow) -> std::io::Result<()> {
    let flags = Display {
        positions: !opts.no_positions,
        ..Default::default()
    };
    let limit = opts.limit.unwrap_or(usize::MAX);

    let mut out = std::io::stdout().lock();
    let mut shown = 0;
    for occurrence in genes.into_iter().flatten().take(limit) {
        writeln!(out, "{}", occurrence.display(flags))?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "{}", "No genes present.".yellow())?;
    }
    Ok(())
}

/// Writes `gene`, `frequency` and `positions` columns, returning the row count.
pub fn write<'a>(
    genes: impl IntoIterator<Item = Occurrence<'a>>,
    writer: impl Write,
) -> Result<usize, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(writer);
    wtr.write_record(["gene", "frequency", "positions"])?;

    let mut rows = 0;
    for occurrence in genes {
        let frequency = occurrence.frequency().to_string();
        let positions = occurrence.positions.to_string();
        wtr.write_record([occurrence.gene.as_str(), frequency.as_str(), positions.as_str()])?;
        rows += 1;
    }
    wtr.flush()?;
    Ok(rows)
}

#[cfg(test)]
mod test {
    use genetrie::Bio;

    use super::*;

    #[test]
    fn write_tsv() {
        let mut bio = Bio::new();
        bio.start(2).unwrap();
        bio.bulk_load(b"ACACGT").unwrap();

        let mut buffer = Vec::new();
        let rows = write(bio.all().unwrap(), &mut buffer).unwrap();
        assert_eq!(rows, 4);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "gene\tfrequency\tpositions\nAC\t2\t0 2\nCA\t1\t1\nCG\t1\t3\nGT\t1\t4\n"
        );
    }
}
