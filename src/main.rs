mod cli;

use std::{
    io::{BufRead, IsTerminal},
    path::PathBuf,
};

use clap::Parser;
use cli::{Cli, Cmd, Line, OptsRead, OptsStart, StatFormat, output};
use colored::Colorize;
use genetrie::{Bio, Frequency, Limits, sequence};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Bio(#[from] genetrie::Error),
    #[error("Unable to read the sequence '{}': {source}", .path.display())]
    Sequence {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Unable to write the genes: {0}")]
    Write(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

enum Flow {
    Continue,
    Exit,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
    init_tracing(&cli);

    if let Err(err) = entry(cli) {
        output::error(&err);
        std::process::exit(1)
    }
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::EnvFilter;

    let filter = if cli.quiet {
        EnvFilter::new("off")
    } else if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        EnvFilter::new("warn")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn entry(mut cli: Cli) -> Result<(), Error> {
    let mut bio = Bio::with_limits(Limits {
        max_gene_length: cli.max_length,
    });

    let preamble = cli
        .start
        .map(|m| Cmd::Start(OptsStart { m }))
        .into_iter()
        .chain(cli.read.take().map(|file| Cmd::Read(OptsRead { file })));
    for cmd in preamble {
        if let Err(err) = execute(&mut bio, cmd) {
            output::error(&err);
        }
    }

    let interactive = cli.input.is_std() && std::io::stdin().is_terminal();
    if interactive {
        output::welcome();
    }

    let mut input = cli.input.lock();
    let mut line = String::new();
    loop {
        if interactive {
            output::prompt()?;
        }
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match Line::from_line(&line) {
            None => continue,
            Some(Err(err)) => {
                let _ = err.print();
            }
            Some(Ok(Line { cmd })) => match execute(&mut bio, cmd) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => output::error(&err),
            },
        }
    }

    bio.teardown();
    Ok(())
}

fn execute(bio: &mut Bio, cmd: Cmd) -> Result<Flow, Error> {
    match cmd {
        Cmd::Start(opts) => {
            let trie = bio.start(opts.m)?;
            output::started(trie.length());
        }
        Cmd::Read(opts) => {
            bio.trie()?;
            let sequence = sequence::file::read(&opts.file)
                .map_err(|source| Error::Sequence {
                    path: opts.file.clone(),
                    source,
                })?;
            match bio.bulk_load(&sequence) {
                Ok(report) => output::loaded(&opts.file, report),
                Err(err @ genetrie::Error::TooShort { .. }) => output::warning(&err),
                Err(err) => return Err(err.into()),
            }
        }
        Cmd::Search(opts) => output::lookup(&opts.gene, bio.lookup(opts.gene.as_str())?),
        Cmd::Max(opts) => output::genes(bio.max()?, &opts)?,
        Cmd::Min(opts) => output::genes(bio.min()?, &opts)?,
        Cmd::All(opts) => output::genes(Some(bio.all()?), &opts)?,
        Cmd::Stats(opts) => {
            let stats = bio.stats()?;
            match opts.format {
                StatFormat::Human => println!("{stats}"),
                StatFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
            }
        }
        Cmd::Write(mut opts) => {
            let trie = bio.trie()?;
            let genes = trie.genes(opts.frequency.map_or(Frequency::Any, Frequency::Exactly));
            let rows = output::write(genes, &mut opts.output)?;
            info!(rows, "wrote genes");
        }
        Cmd::Exit => {
            println!("{}", "Freeing the trie and exiting...".yellow());
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}
