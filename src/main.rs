use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rgb2ansi::cli::Cli;
use rgb2ansi::{logging, palette, Pipeline};

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: &Cli) -> Result<()> {
    let (palette, diagnostics) = palette::load(cli.palette.as_deref());
    for diagnostic in &diagnostics {
        tracing::warn!("{diagnostic}");
        if diagnostic.is_file_error() {
            tracing::debug!("palette file rejected, using default palette");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.print_palette {
        let json = serde_json::to_string_pretty(&palette).context("Failed to encode palette")?;
        writeln!(out, "{json}").context("Failed to write to stdout")?;
        return Ok(());
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let output = Pipeline::new(&palette, cli.pipeline_config()).run(&input);

    writeln!(out, "{output}").context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")?;
    Ok(())
}
