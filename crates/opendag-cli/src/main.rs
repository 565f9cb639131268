use anyhow::Result;
use clap::Parser;
use opendag_core::{DEMO_ARRAY, DEMO_WORD, WELCOME_LINE, bubble_sort, count_vowels};
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opendag")]
#[command(version, about = "Open day array and text demo")]
struct Args {}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the demo output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("opendag_core=warn".parse()?))
        .with_writer(io::stderr)
        .init();

    let _args = Args::parse();

    run(&mut io::stdout().lock())
}

/// Print the welcome line, the letter count and the sort's unit result.
fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", WELCOME_LINE)?;
    writeln!(out, "{}", count_vowels(DEMO_WORD))?;

    let mut values = DEMO_ARRAY;
    writeln!(out, "{:?}", bubble_sort(&mut values)?)?;
    debug!("Array after sort: {:?}", values);

    Ok(())
}
