use clap::{Args, Parser, Subcommand};

/// xrfdepth - how deep into a matrix element an XRF signal stays detectable
#[derive(Parser)]
#[command(name = "xrfdepth")]
#[command(version)]
#[command(about = "Maximum detectable depth of X-ray fluorescence through a matrix element")]
pub struct Cli {
    /// Runs the interactive selection flow when no subcommand is given.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the detectable depth for a given line energy and matrix
    Depth(DepthArgs),

    /// List the emission lines tabulated for an element
    Lines(LinesArgs),

    /// List every element in the reference table
    Elements,

    /// Walk through the selections step by step (the default)
    Interactive,
}

#[derive(Args)]
pub struct DepthArgs {
    /// Matrix element: symbol, name, or atomic number
    #[arg(short, long)]
    pub matrix: String,

    /// Fluorescence line energy in keV
    #[arg(short, long)]
    pub energy_kev: f64,

    /// Detectable photon fraction, in (0, 1]
    #[arg(short, long, default_value_t = xrfdepth::DEFAULT_DETECTABLE_FRACTION)]
    pub fraction: f64,
}

#[derive(Args)]
pub struct LinesArgs {
    /// Element: symbol, name, or atomic number
    pub element: String,
}
