use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use xrfdepth::{AtomicDb, EmissionLine, SelectionFlow};

use crate::cli::{Commands, DepthArgs, LinesArgs};

pub fn run(command: Option<Commands>) -> Result<()> {
    match command.unwrap_or(Commands::Interactive) {
        Commands::Depth(args) => depth(&args),
        Commands::Lines(args) => lines(&args),
        Commands::Elements => elements(),
        Commands::Interactive => interactive(),
    }
}

fn depth(args: &DepthArgs) -> Result<()> {
    let db = AtomicDb::new();
    let matrix = db.symbol(&args.matrix)?;
    let depth_mm = db
        .fluorescence_depth_mm(matrix, args.energy_kev * 1000.0, args.fraction)
        .with_context(|| format!("computing depth through '{matrix}'"))?;

    println!(
        "Max depth that fluorescence at {} keV will be detectable through solid {} \
         (with {:.2}% returned photons): {}",
        args.energy_kev,
        matrix,
        args.fraction * 100.0,
        format!("{depth_mm:.3} mm").bold(),
    );
    Ok(())
}

fn lines(args: &LinesArgs) -> Result<()> {
    let db = AtomicDb::new();
    let symbol = db.symbol(&args.element)?;
    let available = db.available_lines(symbol)?;
    if available.is_empty() {
        println!("no emission lines tabulated for {symbol}");
        return Ok(());
    }
    for (line, kev) in available {
        println!("{symbol} {line}\t{kev} keV");
    }
    Ok(())
}

fn elements() -> Result<()> {
    let db = AtomicDb::new();
    for (z, symbol, name) in db.elements() {
        println!("{z}\t{symbol}\t{name}");
    }
    Ok(())
}

fn interactive() -> Result<()> {
    let mut flow = SelectionFlow::new();

    let element = prompt("Element of Interest (symbol): ")?;
    let candidates = flow.choose_element_of_interest(element.trim())?.to_vec();
    if candidates.is_empty() {
        bail!("no emission lines tabulated for '{}'", element.trim());
    }
    for (line, kev) in &candidates {
        println!("  {line}\t({kev} keV)");
    }

    let label = prompt("Spectral line: ")?;
    let line = EmissionLine::parse(label.trim())
        .with_context(|| format!("'{}' is not a line label", label.trim()))?;
    flow.choose_line(line)?;

    let matrix = prompt("Matrix Element (symbol): ")?;
    flow.choose_matrix(matrix.trim())?;

    let fraction = prompt(
        "Proportion of returning fluorescence counts required for detectability \
         (0 < x <= 1, suggested: 0.01): ",
    )?;
    let fraction = fraction.trim();
    if !fraction.is_empty() {
        flow.set_detectable_fraction(
            fraction
                .parse()
                .with_context(|| format!("'{fraction}' is not a number"))?,
        )?;
    }

    println!("{}", flow.compute()?);
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flushing prompt")?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    Ok(input)
}
