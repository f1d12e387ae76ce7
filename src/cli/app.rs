use clap::{Parser, Subcommand, ValueEnum};

use crate::dump::database::ReferenceDb;
use crate::dump::record::DEFAULT_RECORD_CAP;

#[derive(Parser)]
#[command(name = "refx")]
#[command(about = "Automotive reference database extraction toolkit")]
#[command(version)]
pub struct Cli {
    /// Control colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the extraction pipeline and print records
    Extract {
        /// Reference drop root directory
        #[arg(short, long)]
        root: String,

        /// Database to extract
        #[arg(short, long, value_enum)]
        database: ReferenceDb,

        /// Only print records from this table
        #[arg(short, long)]
        table: Option<String>,

        /// Cap on the number of records extracted
        #[arg(long, default_value_t = DEFAULT_RECORD_CAP)]
        cap: usize,

        /// Output records as JSON, one object per line
        #[arg(long)]
        json: bool,
    },

    /// Per-table record counts for one database
    Tables {
        /// Reference drop root directory
        #[arg(short, long)]
        root: String,

        /// Database to inspect
        #[arg(short, long, value_enum)]
        database: ReferenceDb,

        /// Cap on the number of records extracted
        #[arg(long, default_value_t = DEFAULT_RECORD_CAP)]
        cap: usize,

        /// Output counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show which archive member would be parsed, without parsing it
    Archives {
        /// Reference drop root directory
        #[arg(short, long)]
        root: String,

        /// Limit to one database (default: all)
        #[arg(short, long, value_enum)]
        database: Option<ReferenceDb>,

        /// Output resolution results as JSON
        #[arg(long)]
        json: bool,
    },
}
