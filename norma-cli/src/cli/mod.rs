//! Command-line surface

mod handler;

use std::path::PathBuf;

use clap::Parser;

use crate::staffing::Faculty;

pub use handler::handle;

/// Derive vacant teaching posts per discipline from a course-assignment spreadsheet
#[derive(Debug, Parser)]
#[command(name = "norma-cli", version, about)]
pub struct Cli {
    /// Faculty code matched against the domain column
    #[arg(short = 'd', long = "domeniu", value_enum, default_value_t = Faculty::Cti)]
    pub faculty: Faculty,

    /// Input spreadsheet (.xlsx, .xls, .ods or .csv)
    #[arg(short, long, default_value = "input.xlsx")]
    pub input: PathBuf,

    /// Posts output file [default: <faculty>_output.xlsx]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Vacant-rows output file [default: <faculty>_vacant.xlsx]
    #[arg(long)]
    pub vacant_output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_output.xlsx", self.faculty)))
    }

    pub fn vacant_path(&self) -> PathBuf {
        self.vacant_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_vacant.xlsx", self.faculty)))
    }
}
