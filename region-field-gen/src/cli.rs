//! Command-line interface definitions for `region-field-gen`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `region-field-gen`.
#[derive(Debug, Parser)]
#[command(name = "region-field-gen")]
#[command(about = "Generate DateInRegion accessors from a field schema")]
#[command(version)]
pub struct Args {
    /// TOML schema listing types and their date fields.
    #[arg(long, value_name = "path")]
    pub schema: Utf8PathBuf,
    /// File to write; the source goes to stdout when omitted.
    #[arg(long, value_name = "path")]
    pub out: Option<Utf8PathBuf>,
    /// Fail instead of writing when the output file is out of date.
    #[arg(long = "check", requires = "out")]
    pub should_check: bool,
}
