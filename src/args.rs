mod proc_errors;

use clap::{
    Args,
    Parser,
    Subcommand,
};

use crate::output::{AngleUnit, Format};

pub use proc_errors::{
    ArgError,
    ProcResult,
};

/// Angle normalization and geometry utilities for the ASV simulator.
#[derive(Debug, Parser)]
#[command(name = "asv_geometry")]
pub struct AsvGeometryCli {
    #[clap(subcommand)]
    pub sub_command: Command,
}

/// Parser for the subcommands of the asv_geometry binary using clap.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(name = "normalize")]
    /// Normalize angles into a canonical range.
    Normalize(NormalizeCli),

    #[command(name = "ranges")]
    /// List the available canonical ranges.
    Ranges(SharedArgs),

    #[command(name = "spectrum")]
    /// Print the heading limits of a wave spectrum around a predominant heading.
    Spectrum(SpectrumCli),
}

/// Shared arguments, used in all commands. Compiled with clap.
#[derive(Debug, Args)]
pub struct SharedArgs {
    #[arg(short, long, value_enum, default_value_t = Format::Plain)]
    /// Output format.
    pub format: Format,
}

/// Compiled arguments for the normalize command. Compiled with clap.
#[derive(Debug, Args)]
pub struct NormalizeCli {
    /// Canonical range to normalize into (symmetric or unsigned).
    pub range: String,

    #[arg(required = true, allow_negative_numbers = true)]
    /// Angles to normalize.
    pub angles: Vec<f64>,

    #[arg(short, long)]
    /// Read and print angles in degrees instead of radians.
    pub degrees: bool,

    #[arg(long)]
    /// Reject NaN and infinite angles instead of passing NaN through.
    pub strict: bool,

    #[command(flatten)]
    pub shared_args: SharedArgs,
}

/// Compiled arguments for the spectrum command. Compiled with clap.
#[derive(Debug, Args)]
pub struct SpectrumCli {
    #[arg(allow_negative_numbers = true)]
    /// Predominant wave heading.
    pub heading: f64,

    #[arg(short, long)]
    /// Read and print headings in degrees instead of radians.
    pub degrees: bool,

    #[command(flatten)]
    pub shared_args: SharedArgs,
}

/// Unit selected by a `--degrees` flag.
pub fn unit_from_flag(degrees: bool) -> AngleUnit {
    if degrees {
        AngleUnit::Degrees
    } else {
        AngleUnit::Radians
    }
}

/// Parse the command line arguments of the current process.
pub fn parse_cli_args() -> ProcResult<AsvGeometryCli> {
    parse_cli_args_from(std::env::args_os())
}

/// Parse command line arguments from any iterator (first item is the binary name).
pub fn parse_cli_args_from<I, T>(args: I) -> ProcResult<AsvGeometryCli>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(AsvGeometryCli::try_parse_from(args)?)
}
