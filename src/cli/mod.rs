pub mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use genetrie::Limits;

/// Index every gene of a DNA sequence and query it with `bio` commands.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File of `bio` commands, one per line. Defaults to stdin.
    #[arg(value_parser, default_value = "-")]
    pub input: clio::Input,

    /// Start a trie for genes of length M before reading any commands.
    #[arg(short = 'm', long = "start", value_name = "M", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Load a DNA sequence file once the trie is started.
    #[arg(short, long, value_name = "FILE", requires = "start")]
    pub read: Option<PathBuf>,

    /// Largest gene length that `start` accepts.
    /// The trie holds 4^M leaves.
    #[arg(long, value_name = "M", default_value_t = Limits::default().max_gene_length)]
    pub max_length: usize,

    /// Log what the index is doing. Honours RUST_LOG.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable all logging.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable coloured output. Also disabled by NO_COLOR.
    #[arg(long)]
    pub no_color: bool,
}

/// One line of the command loop, without the leading `bio`.
#[derive(Debug, Parser)]
#[command(name = "bio", no_binary_name = true, disable_version_flag = true)]
pub struct Line {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Create a 4-ary trie for genes of length M.
    /// Any existing trie is freed first.
    Start(OptsStart),
    /// Load every gene of a DNA sequence file into the trie.
    Read(OptsRead),
    /// Find how often and where a gene occurs.
    Search(OptsSearch),
    /// Show the genes with the highest frequency.
    Max(OptsShow),
    /// Show the genes with the lowest frequency.
    Min(OptsShow),
    /// Show every gene that occurs at least once.
    All(OptsShow),
    /// Display statistics about the trie.
    Stats(OptsStats),
    /// Write the genes to a tab separated file.
    Write(OptsWrite),
    /// Free the trie and leave.
    Exit,
}

#[derive(Debug, Args)]
pub struct OptsStart {
    /// Length of every gene.
    #[arg(allow_negative_numbers = true)]
    pub m: i64,
}

#[derive(Debug, Args)]
pub struct OptsRead {
    /// File holding the DNA sequence.
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct OptsSearch {
    /// Gene to look for, made of A, C, G and T.
    pub gene: String,
}

#[derive(Debug, Default, Args)]
pub struct OptsShow {
    /// Hide the positions of each gene.
    #[arg(short = 'p', long)]
    pub no_positions: bool,
    /// Show at most N genes.
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

#[derive(Debug, Args)]
pub struct OptsWrite {
    /// File to write to. Defaults to stdout.
    #[arg(value_parser, default_value = "-")]
    pub output: clio::Output,
    /// Only write genes occurring exactly N times.
    #[arg(short, long, value_name = "N")]
    pub frequency: Option<usize>,
}

impl Line {
    /// Parses a line such as `bio search ACG`; the `bio` prefix is optional.
    ///
    /// Returns `None` for a blank line.
    pub fn from_line(line: &str) -> Option<Result<Self, clap::Error>> {
        let mut words = line.split_whitespace().peekable();
        if words.peek() == Some(&"bio") {
            words.next();
        }
        words.peek()?;
        Some(Self::try_parse_from(words))
    }
}
