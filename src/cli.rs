use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline on a single document
    Process {
        /// Source document (pdf, txt, csv, tsv)
        #[arg(short, long)]
        input: PathBuf,

        /// Known-word list (txt, csv, tsv)
        #[arg(short, long)]
        wordlist: PathBuf,

        /// Output spreadsheet path
        #[arg(short, long, default_value = "result.csv")]
        output: PathBuf,

        /// Keep personal names in the output
        #[arg(long)]
        keep_names: bool,

        /// Keep place names in the output
        #[arg(long)]
        keep_places: bool,

        /// Keep filler and discourse words in the output
        #[arg(long)]
        keep_fillers: bool,

        /// Keep words whose translation failed
        #[arg(long)]
        keep_failed: bool,

        /// Keep two-letter and other low-information words
        #[arg(long)]
        keep_useless: bool,

        /// Also write the full pre-exclusion word list next to the output
        #[arg(long)]
        export_unfiltered: bool,
    },

    /// Run the full pipeline on every supported document in a directory
    Batch {
        /// Input directory containing source documents
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Known-word list (txt, csv, tsv)
        #[arg(short, long)]
        wordlist: PathBuf,

        /// Output directory for result spreadsheets
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Keep personal names in the output
        #[arg(long)]
        keep_names: bool,

        /// Keep place names in the output
        #[arg(long)]
        keep_places: bool,

        /// Keep filler and discourse words in the output
        #[arg(long)]
        keep_fillers: bool,

        /// Keep words whose translation failed
        #[arg(long)]
        keep_failed: bool,

        /// Keep two-letter and other low-information words
        #[arg(long)]
        keep_useless: bool,

        /// Also write the full pre-exclusion word list next to each output
        #[arg(long)]
        export_unfiltered: bool,
    },

    /// Extract the unique word list from a document without translating
    Extract {
        /// Source document (pdf, txt, csv, tsv)
        #[arg(short, long)]
        input: PathBuf,

        /// Output word list file (one word per line)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Translate a word list file to a spreadsheet of word/translation pairs
    Translate {
        /// Input word list file (one word per line, annotations allowed)
        #[arg(short, long)]
        input: PathBuf,

        /// Output spreadsheet path
        #[arg(short, long)]
        output: PathBuf,
    },
}
